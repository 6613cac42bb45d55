//! Ordered HTML attribute maps and their serialization
//!
//! Attributes render in insertion order. Values are written verbatim: quotes
//! and ampersands inside a value are NOT escaped, so callers must not pass
//! untrusted content through these helpers.

use std::borrow::Cow;
use std::fmt;

/// A single attribute value
///
/// A list renders as its items joined by single spaces, which is the usual
/// shape of a `class` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	Scalar(String),
	List(Vec<String>),
}

impl AttrValue {
	/// Render the value as it appears between the attribute quotes
	pub fn render(&self) -> Cow<'_, str> {
		match self {
			Self::Scalar(value) => Cow::Borrowed(value),
			Self::List(items) => Cow::Owned(items.join(" ")),
		}
	}
}

impl fmt::Display for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Scalar(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Scalar(value)
	}
}

impl From<Vec<String>> for AttrValue {
	fn from(items: Vec<String>) -> Self {
		Self::List(items)
	}
}

impl From<Vec<&str>> for AttrValue {
	fn from(items: Vec<&str>) -> Self {
		Self::List(items.into_iter().map(str::to_string).collect())
	}
}

impl<const N: usize> From<[&str; N]> for AttrValue {
	fn from(items: [&str; N]) -> Self {
		Self::List(items.iter().map(|item| item.to_string()).collect())
	}
}

/// Insertion-ordered attribute map
///
/// Re-inserting an existing key replaces the value but keeps the key at its
/// original position.
///
/// # Examples
///
/// ```
/// use reinhardt_helpers::attrs::Attrs;
///
/// let attrs = Attrs::new()
///     .with("title", "Home Page")
///     .with("class", vec!["nav", "active"]);
///
/// assert_eq!(attrs.to_string(), r#" title="Home Page" class="nav active""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
	entries: Vec<(String, AttrValue)>,
}

impl Attrs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`Attrs::insert`]
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Insert or replace an attribute
	///
	/// Returns the previous value when the key was already present.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttrValue>,
	) -> Option<AttrValue> {
		let name = name.into();
		let value = value.into();

		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some((_, existing)) => Some(std::mem::replace(existing, value)),
			None => {
				self.entries.push((name, value));
				None
			}
		}
	}

	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate over `(name, value)` pairs in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value))
	}

	/// Overlay `other` onto `self`
	///
	/// Keys from `other` win; keys new to `self` are appended in `other`'s order.
	pub fn merge(&mut self, other: &Attrs) {
		for (name, value) in &other.entries {
			self.insert(name.clone(), value.clone());
		}
	}

	/// Apply `defaults` first, then let `overrides` replace matching keys
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_helpers::attrs::Attrs;
	///
	/// let defaults = Attrs::new().with("class", "mailto");
	/// let explicit = Attrs::new().with("title", "Write to me").with("class", "email");
	///
	/// let merged = Attrs::with_defaults(defaults, &explicit);
	/// assert_eq!(merged.to_string(), r#" class="email" title="Write to me""#);
	/// ```
	pub fn with_defaults(defaults: Attrs, overrides: &Attrs) -> Attrs {
		let mut merged = defaults;
		merged.merge(overrides);
		merged
	}
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attrs::new();
		for (name, value) in iter {
			attrs.insert(name, value);
		}
		attrs
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl fmt::Display for Attrs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&serialize_attrs(self))
	}
}

/// Serialize attributes as ` name="value"` pairs
///
/// Returns an empty string for an empty map; otherwise every pair is preceded
/// by a single space so the result can follow a tag's mandatory attributes
/// directly.
///
/// # Examples
///
/// ```
/// use reinhardt_helpers::attrs::{Attrs, serialize_attrs};
///
/// assert_eq!(serialize_attrs(&Attrs::new()), "");
/// assert_eq!(
///     serialize_attrs(&Attrs::from([("title", "home"), ("class", "icon")])),
///     r#" title="home" class="icon""#
/// );
/// ```
pub fn serialize_attrs(attrs: &Attrs) -> String {
	let mut output = String::new();

	for (name, value) in attrs.iter() {
		output.push_str(&format!(" {}=\"{}\"", name, value.render()));
	}

	output
}
