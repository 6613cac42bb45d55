//! Base-URL resolution for local resource references
//!
//! The hosting request context owns the knowledge of where the application is
//! mounted. It is handed to the helpers as a [`UrlResolver`], either a plain
//! closure or a [`BasePathResolver`] built from a fixed mount point.

use crate::error::Result;
use crate::uri::ResourceRef;

/// Prefixes a root-relative path with the application's current base path
pub trait UrlResolver {
	/// Resolve `path` (e.g. `/css/app.css`) into the URL to emit in markup
	fn url(&self, path: &str) -> Result<String>;
}

impl<F> UrlResolver for F
where
	F: Fn(&str) -> String,
{
	fn url(&self, path: &str) -> Result<String> {
		Ok(self(path))
	}
}

/// Resolver for an application mounted under a fixed base path
///
/// Joins the base and the path with exactly one separating slash.
///
/// # Examples
///
/// ```
/// use reinhardt_helpers::resolver::{BasePathResolver, UrlResolver};
///
/// let resolver = BasePathResolver::new("/path");
/// assert_eq!(resolver.url("/home").unwrap(), "/path/home");
///
/// let root = BasePathResolver::new("/");
/// assert_eq!(root.url("/css/app.css").unwrap(), "/css/app.css");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePathResolver {
	base: String,
}

impl BasePathResolver {
	pub fn new(base: impl Into<String>) -> Self {
		Self { base: base.into() }
	}

	pub fn base(&self) -> &str {
		&self.base
	}
}

impl Default for BasePathResolver {
	fn default() -> Self {
		Self::new("/")
	}
}

impl UrlResolver for BasePathResolver {
	fn url(&self, path: &str) -> Result<String> {
		let base = self.base.trim_end_matches('/');
		let path = path.trim_start_matches('/');
		Ok(format!("{}/{}", base, path))
	}
}

/// Resolve `name` under `prefix` unless it is already an external URL
///
/// Local names become `{prefix}/{name}{extension}` and are passed to the
/// resolver. An empty prefix leaves the name untouched, which is how plain
/// link paths are resolved.
///
/// # Examples
///
/// ```
/// use reinhardt_helpers::resolver::{BasePathResolver, resolve};
///
/// let resolver = BasePathResolver::new("/path");
///
/// assert_eq!(
///     resolve(&resolver, "/css", "app", Some(".css")).unwrap(),
///     "/path/css/app.css"
/// );
/// assert_eq!(
///     resolve(&resolver, "/css", "http://cdn.example.com/app.css", Some(".css")).unwrap(),
///     "http://cdn.example.com/app.css"
/// );
/// ```
pub fn resolve<R>(resolver: &R, prefix: &str, name: &str, extension: Option<&str>) -> Result<String>
where
	R: UrlResolver + ?Sized,
{
	match ResourceRef::classify(name) {
		ResourceRef::External(url) => Ok(url.to_string()),
		ResourceRef::Local(name) => {
			let extension = extension.unwrap_or_default();
			let path = if prefix.is_empty() {
				format!("{}{}", name, extension)
			} else {
				format!("{}/{}{}", prefix, name, extension)
			};

			let resolved = resolver.url(&path)?;
			tracing::debug!(prefix, name, path = %path, resolved = %resolved, "resolved local resource");
			Ok(resolved)
		}
	}
}
