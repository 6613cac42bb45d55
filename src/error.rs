//! Error types for the view helpers

/// Errors surfaced by the tag generators and configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HelperError {
	/// The base-URL resolver supplied by the request context failed.
	#[error("URL resolver error: {0}")]
	Resolver(String),

	/// Helper configuration could not be parsed or is invalid.
	#[error("Configuration error: {0}")]
	Config(String),
}

impl From<toml::de::Error> for HelperError {
	fn from(err: toml::de::Error) -> Self {
		Self::Config(err.to_string())
	}
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HelperError>;
