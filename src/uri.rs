//! Classification of resource references into local paths and external URIs
//!
//! A reference is external only when it parses as an absolute URI with an
//! `http` or `https` scheme. Anything else, including strings that fail to
//! parse at all, is treated as a local path and will be passed through the
//! base-URL resolver.

/// Returns `true` if `path` is an absolute HTTP(S) URL
///
/// Parse failures are not reported; the reference is treated as local. So is
/// any string containing whitespace or control characters, which the URL
/// parser would otherwise strip or percent-encode.
///
/// # Examples
///
/// ```
/// use reinhardt_helpers::uri::is_external;
///
/// assert!(is_external("http://accountsapp.com/logo.png"));
/// assert!(is_external("https://example.com"));
/// assert!(!is_external("/home"));
/// assert!(!is_external("app"));
/// assert!(!is_external("mailto:someone@example.com"));
/// ```
pub fn is_external(path: &str) -> bool {
	if path
		.bytes()
		.any(|b| b.is_ascii_whitespace() || b.is_ascii_control())
	{
		tracing::trace!(path, "reference contains whitespace or control characters, treating as local");
		return false;
	}

	match url::Url::parse(path) {
		Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
		Err(err) => {
			tracing::trace!(path, error = %err, "reference is not an absolute URI, treating as local");
			false
		}
	}
}

/// A resource reference after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRef<'a> {
	/// An asset name or path relative to the application root
	Local(&'a str),
	/// An absolute HTTP(S) URL used verbatim
	External(&'a str),
}

impl<'a> ResourceRef<'a> {
	/// Classify `path` with [`is_external`]
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_helpers::uri::ResourceRef;
	///
	/// assert_eq!(ResourceRef::classify("app"), ResourceRef::Local("app"));
	/// assert_eq!(
	///     ResourceRef::classify("http://cdn.example.com/app.js"),
	///     ResourceRef::External("http://cdn.example.com/app.js")
	/// );
	/// ```
	pub fn classify(path: &'a str) -> Self {
		if is_external(path) {
			Self::External(path)
		} else {
			Self::Local(path)
		}
	}

	/// The original reference string
	pub fn as_str(&self) -> &'a str {
		match self {
			Self::Local(path) | Self::External(path) => path,
		}
	}

	/// Whether the reference is emitted without base-URL resolution
	pub fn is_external(&self) -> bool {
		matches!(self, Self::External(_))
	}
}
