//! Gravatar avatar URLs
//!
//! Gravatar identifies an avatar by the MD5 digest of the email address. MD5
//! is used only because the service requires it.

use md5::{Digest, Md5};

/// Avatar endpoint used when no other base is configured
pub const DEFAULT_GRAVATAR_URL: &str = "http://www.gravatar.com/avatar";

/// Avatar edge length in pixels used when no size is given
pub const DEFAULT_GRAVATAR_SIZE: u32 = 50;

/// 32-character lowercase hex digest of `email`
///
/// The address is hashed exactly as given.
///
/// # Examples
///
/// ```
/// use reinhardt_helpers::gravatar::gravatar_hash;
///
/// assert_eq!(
///     gravatar_hash("georgedrummond@gmail.com"),
///     "d278a12b969a495ab16fdd942e748fe5"
/// );
/// ```
pub fn gravatar_hash(email: &str) -> String {
	hex::encode(Md5::digest(email.as_bytes()))
}

/// Build `{base}/{hash}?s={size}`
///
/// # Examples
///
/// ```
/// use reinhardt_helpers::gravatar::{DEFAULT_GRAVATAR_URL, gravatar_url};
///
/// assert_eq!(
///     gravatar_url(DEFAULT_GRAVATAR_URL, "georgedrummond@gmail.com", 150),
///     "http://www.gravatar.com/avatar/d278a12b969a495ab16fdd942e748fe5?s=150"
/// );
/// ```
pub fn gravatar_url(base: &str, email: &str, size: u32) -> String {
	format!(
		"{}/{}?s={}",
		base.trim_end_matches('/'),
		gravatar_hash(email),
		size
	)
}
