//! # Reinhardt Helpers
//!
//! View helpers for emitting small HTML fragments from templates and
//! handlers: stylesheet links, script includes, images, anchors, `mailto:`
//! links and gravatar images.
//!
//! Equivalent to the asset tag helpers found in Rails-style frameworks.
//!
//! Local asset names are resolved against the current request's base path
//! through a [`UrlResolver`]; absolute `http`/`https` URLs are emitted as-is.
//! Attribute values are NOT HTML-escaped.
//!
//! ## Examples
//!
//! ```rust
//! use reinhardt_helpers::{Attrs, BasePathResolver, TagBuilder};
//!
//! let tags = TagBuilder::new(BasePathResolver::new("/path"));
//!
//! assert_eq!(
//!     tags.javascript_include_tag(["jquery", "http://accountsapp.com/js/app.js"]).unwrap(),
//!     "<script type=\"text/javascript\" src=\"/path/js/jquery.js\"></script>\n\
//!      <script type=\"text/javascript\" src=\"http://accountsapp.com/js/app.js\"></script>"
//! );
//!
//! assert_eq!(
//!     tags.image_tag("home.png", &Attrs::new().with("class", "icon")).unwrap(),
//!     r#"<img src="/path/images/home.png" class="icon" />"#
//! );
//! ```

pub mod attrs;
pub mod config;
pub mod error;
pub mod gravatar;
pub mod resolver;
pub mod tags;
pub mod uri;

pub use attrs::{AttrValue, Attrs, serialize_attrs};
pub use config::HelpersConfig;
pub use error::{HelperError, Result};
pub use gravatar::{gravatar_hash, gravatar_url};
pub use resolver::{BasePathResolver, UrlResolver, resolve};
pub use tags::TagBuilder;
pub use uri::{ResourceRef, is_external};
