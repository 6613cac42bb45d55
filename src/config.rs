//! Helper configuration
//!
//! Controls the asset directories local references are resolved under and
//! the gravatar endpoint. Every field has a default, so an empty TOML
//! document yields [`HelpersConfig::default`].
//!
//! ```toml
//! css_prefix = "/assets/css"
//! js_prefix = "/assets/js"
//! gravatar_size = 80
//! ```

use crate::error::{HelperError, Result};
use crate::gravatar::{DEFAULT_GRAVATAR_SIZE, DEFAULT_GRAVATAR_URL};
use crate::uri::is_external;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
	/// Directory stylesheets are resolved under
	pub css_prefix: String,
	/// Directory scripts are resolved under
	pub js_prefix: String,
	/// Directory images are resolved under
	pub images_prefix: String,
	/// Avatar endpoint; the email hash is appended as a path segment
	pub gravatar_url: String,
	/// Avatar size used when the caller does not pass one
	pub gravatar_size: u32,
}

impl Default for HelpersConfig {
	fn default() -> Self {
		Self {
			css_prefix: "/css".to_string(),
			js_prefix: "/js".to_string(),
			images_prefix: "/images".to_string(),
			gravatar_url: DEFAULT_GRAVATAR_URL.to_string(),
			gravatar_size: DEFAULT_GRAVATAR_SIZE,
		}
	}
}

impl HelpersConfig {
	/// Parse and validate a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_helpers::config::HelpersConfig;
	///
	/// let config = HelpersConfig::from_toml_str(r#"css_prefix = "/assets/css""#).unwrap();
	/// assert_eq!(config.css_prefix, "/assets/css");
	/// assert_eq!(config.js_prefix, "/js");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let config: Self = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	/// Check that prefixes are root-relative and the gravatar endpoint is absolute
	pub fn validate(&self) -> Result<()> {
		for (field, prefix) in [
			("css_prefix", &self.css_prefix),
			("js_prefix", &self.js_prefix),
			("images_prefix", &self.images_prefix),
		] {
			if !prefix.starts_with('/') {
				return Err(HelperError::Config(format!(
					"{} must start with '/', got '{}'",
					field, prefix
				)));
			}
		}

		if !is_external(&self.gravatar_url) {
			return Err(HelperError::Config(format!(
				"gravatar_url must be an absolute http(s) URL, got '{}'",
				self.gravatar_url
			)));
		}

		Ok(())
	}
}
