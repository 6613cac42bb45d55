//! HTML tag generators
//!
//! A [`TagBuilder`] is created per request around that request's
//! [`UrlResolver`]. Local references are resolved through it; absolute
//! http(s) URLs and `mailto:` links are emitted verbatim.

use crate::attrs::{Attrs, serialize_attrs};
use crate::config::HelpersConfig;
use crate::error::Result;
use crate::gravatar::gravatar_url;
use crate::resolver::{UrlResolver, resolve};

/// Per-request tag generator
///
/// # Examples
///
/// ```
/// use reinhardt_helpers::attrs::Attrs;
/// use reinhardt_helpers::resolver::BasePathResolver;
/// use reinhardt_helpers::tags::TagBuilder;
///
/// let tags = TagBuilder::new(BasePathResolver::new("/path"));
///
/// assert_eq!(
///     tags.stylesheet_link_tag(["app"]).unwrap(),
///     r#"<link href="/path/css/app.css" type="text/css" rel="stylesheet" />"#
/// );
/// assert_eq!(
///     tags.link_to("Home", "/home", &Attrs::new().with("title", "Home Page"), true).unwrap(),
///     r#"<a href="/path/home" title="Home Page">Home</a>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TagBuilder<R> {
	resolver: R,
	config: HelpersConfig,
}

impl<R: UrlResolver> TagBuilder<R> {
	/// Builder with the default asset directories and gravatar settings
	pub fn new(resolver: R) -> Self {
		Self {
			resolver,
			config: HelpersConfig::default(),
		}
	}

	/// Builder with a custom configuration
	///
	/// The configuration is validated first, so a relative gravatar endpoint or
	/// a prefix not starting with `/` is rejected here rather than producing
	/// misresolved markup later.
	pub fn with_config(resolver: R, config: HelpersConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self { resolver, config })
	}

	pub fn config(&self) -> &HelpersConfig {
		&self.config
	}

	pub fn resolver(&self) -> &R {
		&self.resolver
	}

	/// `<link>` tags for each stylesheet, joined by newlines
	///
	/// Local names resolve to `{css_prefix}/{name}.css`.
	pub fn stylesheet_link_tag<I, S>(&self, sources: I) -> Result<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let tags = sources
			.into_iter()
			.map(|source| {
				let href = resolve(
					&self.resolver,
					&self.config.css_prefix,
					source.as_ref(),
					Some(".css"),
				)?;
				Ok(format!(
					"<link href=\"{}\" type=\"text/css\" rel=\"stylesheet\" />",
					href
				))
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(tags.join("\n"))
	}

	/// `<script>` tags for each script, joined by newlines
	///
	/// Local names resolve to `{js_prefix}/{name}.js`.
	pub fn javascript_include_tag<I, S>(&self, sources: I) -> Result<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let tags = sources
			.into_iter()
			.map(|source| {
				let src = resolve(
					&self.resolver,
					&self.config.js_prefix,
					source.as_ref(),
					Some(".js"),
				)?;
				Ok(format!(
					"<script type=\"text/javascript\" src=\"{}\"></script>",
					src
				))
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(tags.join("\n"))
	}

	/// `<img>` tag; local sources resolve to `{images_prefix}/{source}`
	pub fn image_tag(&self, source: &str, attrs: &Attrs) -> Result<String> {
		let src = resolve(&self.resolver, &self.config.images_prefix, source, None)?;
		Ok(format!("<img src=\"{}\"{} />", src, serialize_attrs(attrs)))
	}

	/// [`TagBuilder::image_tag`] without attributes
	pub fn image(&self, source: &str) -> Result<String> {
		self.image_tag(source, &Attrs::new())
	}

	/// `<a>` tag
	///
	/// `path` is resolved through the base-URL resolver unless it is external
	/// or `resolve_base` is `false`.
	pub fn link_to(
		&self,
		title: &str,
		path: &str,
		attrs: &Attrs,
		resolve_base: bool,
	) -> Result<String> {
		let href = if resolve_base {
			resolve(&self.resolver, "", path, None)?
		} else {
			path.to_string()
		};

		Ok(format!(
			"<a href=\"{}\"{}>{}</a>",
			href,
			serialize_attrs(attrs),
			title
		))
	}

	/// [`TagBuilder::link_to`] without attributes, resolving local paths
	pub fn link_to_path(&self, title: &str, path: &str) -> Result<String> {
		self.link_to(title, path, &Attrs::new(), true)
	}

	/// `mailto:` link with a default `class="mailto"`
	///
	/// `text` defaults to the address. The link is never passed through the
	/// base-URL resolver.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_helpers::attrs::Attrs;
	/// use reinhardt_helpers::tags::TagBuilder;
	///
	/// let tags = TagBuilder::new(|path: &str| format!("/path{}", path));
	/// let attrs = Attrs::new().with("class", "email").with("title", "How do you do");
	///
	/// assert_eq!(
	///     tags.mail_to("george@example.com", Some("George"), &attrs).unwrap(),
	///     r#"<a href="mailto:george@example.com" class="email" title="How do you do">George</a>"#
	/// );
	/// ```
	pub fn mail_to(&self, email: &str, text: Option<&str>, attrs: &Attrs) -> Result<String> {
		let attrs = Attrs::with_defaults(Attrs::new().with("class", "mailto"), attrs);
		self.link_to(
			text.unwrap_or(email),
			&format!("mailto:{}", email),
			&attrs,
			false,
		)
	}

	/// [`TagBuilder::mail_to`] using the address as link text
	pub fn mail_to_address(&self, email: &str) -> Result<String> {
		self.mail_to(email, None, &Attrs::new())
	}

	/// Gravatar `<img>` with a default `class="gravatar"`
	///
	/// `size` defaults to the configured gravatar size.
	pub fn gravatar_image(&self, email: &str, size: Option<u32>, attrs: &Attrs) -> Result<String> {
		let size = size.unwrap_or(self.config.gravatar_size);
		let url = gravatar_url(&self.config.gravatar_url, email, size);
		let attrs = Attrs::with_defaults(Attrs::new().with("class", "gravatar"), attrs);
		self.image_tag(&url, &attrs)
	}

	/// [`TagBuilder::gravatar_image`] with the default size and no attributes
	pub fn gravatar(&self, email: &str) -> Result<String> {
		self.gravatar_image(email, None, &Attrs::new())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::HelperError;
	use crate::resolver::BasePathResolver;
	use rstest::{fixture, rstest};
	use std::cell::RefCell;

	struct RecordingResolver {
		calls: RefCell<Vec<String>>,
	}

	impl UrlResolver for RecordingResolver {
		fn url(&self, path: &str) -> Result<String> {
			self.calls.borrow_mut().push(path.to_string());
			Ok(format!("/app{}", path))
		}
	}

	struct FailingResolver;

	impl UrlResolver for FailingResolver {
		fn url(&self, path: &str) -> Result<String> {
			Err(HelperError::Resolver(format!("cannot resolve {}", path)))
		}
	}

	#[fixture]
	fn tags() -> TagBuilder<BasePathResolver> {
		TagBuilder::new(BasePathResolver::new("/path"))
	}

	#[fixture]
	fn recording() -> TagBuilder<RecordingResolver> {
		TagBuilder::new(RecordingResolver {
			calls: RefCell::new(Vec::new()),
		})
	}

	#[rstest]
	fn test_stylesheet_order_preserved(tags: TagBuilder<BasePathResolver>) {
		let html = tags.stylesheet_link_tag(["reset", "app", "print"]).unwrap();
		let hrefs: Vec<&str> = html
			.lines()
			.map(|line| line.split('"').nth(1).unwrap())
			.collect();
		assert_eq!(
			hrefs,
			vec!["/path/css/reset.css", "/path/css/app.css", "/path/css/print.css"]
		);
	}

	#[rstest]
	fn test_no_sources_yields_empty_string(tags: TagBuilder<BasePathResolver>) {
		assert_eq!(tags.stylesheet_link_tag(Vec::<String>::new()).unwrap(), "");
		assert_eq!(tags.javascript_include_tag(Vec::<&str>::new()).unwrap(), "");
	}

	#[rstest]
	fn test_owned_sources_accepted(tags: TagBuilder<BasePathResolver>) {
		let sources = vec!["jquery".to_string()];
		assert_eq!(
			tags.javascript_include_tag(&sources).unwrap(),
			r#"<script type="text/javascript" src="/path/js/jquery.js"></script>"#
		);
	}

	#[rstest]
	fn test_mail_to_never_resolves(recording: TagBuilder<RecordingResolver>) {
		recording.mail_to_address("someone@example.com").unwrap();
		assert!(recording.resolver().calls.borrow().is_empty());
	}

	#[rstest]
	fn test_gravatar_never_resolves(recording: TagBuilder<RecordingResolver>) {
		recording.gravatar("someone@example.com").unwrap();
		assert!(recording.resolver().calls.borrow().is_empty());
	}

	#[rstest]
	fn test_local_paths_passed_to_resolver(recording: TagBuilder<RecordingResolver>) {
		recording.stylesheet_link_tag(["app"]).unwrap();
		recording.javascript_include_tag(["app"]).unwrap();
		recording.image("logo.png").unwrap();
		recording.link_to_path("Home", "/home").unwrap();

		assert_eq!(
			*recording.resolver().calls.borrow(),
			vec!["/css/app.css", "/js/app.js", "/images/logo.png", "/home"]
		);
	}

	#[rstest]
	fn test_link_without_base_resolution(recording: TagBuilder<RecordingResolver>) {
		let html = recording.link_to("Top", "#top", &Attrs::new(), false).unwrap();
		assert_eq!(html, r##"<a href="#top">Top</a>"##);
		assert!(recording.resolver().calls.borrow().is_empty());
	}

	#[rstest]
	fn test_list_attribute_values(tags: TagBuilder<BasePathResolver>) {
		let attrs = Attrs::new().with("class", vec!["avatar", "rounded"]);
		assert_eq!(
			tags.image_tag("me.jpg", &attrs).unwrap(),
			r#"<img src="/path/images/me.jpg" class="avatar rounded" />"#
		);
	}

	#[rstest]
	fn test_resolver_failure_propagates() {
		let tags = TagBuilder::new(FailingResolver);
		let expected = HelperError::Resolver("cannot resolve /css/app.css".to_string());

		assert_eq!(tags.stylesheet_link_tag(["app"]).unwrap_err(), expected);
		assert!(tags.javascript_include_tag(["app"]).is_err());
		assert!(tags.image("logo.png").is_err());
		assert!(tags.link_to_path("Home", "/home").is_err());
	}

	#[rstest]
	fn test_failing_resolver_unused_for_external_and_mailto() {
		let tags = TagBuilder::new(FailingResolver);

		assert!(tags.stylesheet_link_tag(["https://cdn.example.com/a.css"]).is_ok());
		assert!(tags.mail_to_address("someone@example.com").is_ok());
		assert!(tags.gravatar("someone@example.com").is_ok());
	}

	#[rstest]
	#[case(HelpersConfig { gravatar_url: "avatar".to_string(), ..HelpersConfig::default() }, "gravatar_url")]
	#[case(HelpersConfig { css_prefix: String::new(), ..HelpersConfig::default() }, "css_prefix")]
	#[case(HelpersConfig { js_prefix: "js".to_string(), ..HelpersConfig::default() }, "js_prefix")]
	fn test_with_config_rejects_invalid(#[case] config: HelpersConfig, #[case] field: &str) {
		let err = TagBuilder::with_config(BasePathResolver::new("/path"), config).unwrap_err();
		match err {
			HelperError::Config(message) => assert!(message.contains(field), "{}", message),
			other => panic!("unexpected error: {:?}", other),
		}
	}

	#[rstest]
	fn test_whitespace_wrapped_url_is_resolved_locally(tags: TagBuilder<BasePathResolver>) {
		assert_eq!(
			tags.javascript_include_tag([" http://x.com/a"]).unwrap(),
			r#"<script type="text/javascript" src="/path/js/ http://x.com/a.js"></script>"#
		);
	}

	#[rstest]
	fn test_configured_prefixes() {
		let config = HelpersConfig {
			css_prefix: "/assets/css".to_string(),
			js_prefix: "/assets/js".to_string(),
			images_prefix: "/assets/img".to_string(),
			gravatar_url: "https://secure.gravatar.com/avatar".to_string(),
			gravatar_size: 80,
		};
		let tags = TagBuilder::with_config(BasePathResolver::new("/"), config).unwrap();

		assert_eq!(
			tags.stylesheet_link_tag(["app"]).unwrap(),
			r#"<link href="/assets/css/app.css" type="text/css" rel="stylesheet" />"#
		);
		assert_eq!(
			tags.javascript_include_tag(["app"]).unwrap(),
			r#"<script type="text/javascript" src="/assets/js/app.js"></script>"#
		);
		assert_eq!(
			tags.image("logo.png").unwrap(),
			r#"<img src="/assets/img/logo.png" />"#
		);
		assert_eq!(
			tags.gravatar("user@example.com").unwrap(),
			r#"<img src="https://secure.gravatar.com/avatar/b58996c504c5638798eb6b511e6f49af?s=80" class="gravatar" />"#
		);
	}
}
