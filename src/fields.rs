//! Serializer field descriptors
//!
//! A [`Field`] tells the host render/parse pipeline how one named attribute
//! of a model is serialized: its kind, the attribute it reads from, whether
//! it is a to-many relationship, and the URI base for link-typed fields.

use serde::{Deserialize, Serialize};

/// The serializer-side category of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	Char,
	Integer,
	Float,
	Boolean,
	DateTime,
	Hyperlink,
	Related,
}

impl FieldKind {
	/// Whether this kind carries plain column data rather than a link.
	pub fn is_data(&self) -> bool {
		!matches!(self, FieldKind::Hyperlink | FieldKind::Related)
	}
}

impl std::fmt::Display for FieldKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			FieldKind::Char => "char",
			FieldKind::Integer => "integer",
			FieldKind::Float => "float",
			FieldKind::Boolean => "boolean",
			FieldKind::DateTime => "datetime",
			FieldKind::Hyperlink => "hyperlink",
			FieldKind::Related => "related",
		};
		write!(f, "{}", name)
	}
}

/// Descriptor for a single serializer field.
///
/// # Examples
///
/// ```
/// use orm_serializers::{Field, FieldKind};
///
/// let field = Field::data("name", FieldKind::Char);
/// assert_eq!(field.source, "name");
/// assert!(!field.many);
///
/// let href = Field::hyperlink("id", "http://api/cars/");
/// assert_eq!(href.kind, FieldKind::Hyperlink);
/// assert_eq!(href.path.as_deref(), Some("http://api/cars/"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
	/// Model attribute this field reads from
	pub source: String,
	#[serde(rename = "type")]
	pub kind: FieldKind,
	/// To-many cardinality, relationship fields only
	pub many: bool,
	/// Absolute URI base, link-typed fields only
	#[serde(skip_serializing_if = "Option::is_none")]
	pub path: Option<String>,
}

impl Field {
	/// Create a plain data field for a column attribute.
	pub fn data(source: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			source: source.into(),
			kind,
			many: false,
			path: None,
		}
	}

	/// Create the hyperlink field pointing at the resource instance.
	///
	/// `source` is the primary-key attribute the link is built from.
	pub fn hyperlink(source: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			kind: FieldKind::Hyperlink,
			many: false,
			path: Some(path.into()),
		}
	}

	/// Create a relationship field.
	pub fn related(source: impl Into<String>, many: bool, path: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			kind: FieldKind::Related,
			many,
			path: Some(path.into()),
		}
	}

	/// Whether this field represents a relationship or hyperlink.
	pub fn is_link(&self) -> bool {
		!self.kind.is_data()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_data_field() {
		let field = Field::data("price", FieldKind::Integer);
		assert_eq!(field.source, "price");
		assert_eq!(field.kind, FieldKind::Integer);
		assert!(!field.many);
		assert!(field.path.is_none());
		assert!(!field.is_link());
	}

	#[test]
	fn test_hyperlink_field() {
		let field = Field::hyperlink("id", "http://testserver/api/cars/");
		assert_eq!(field.kind, FieldKind::Hyperlink);
		assert!(field.is_link());
	}

	#[test]
	fn test_related_field_many_flag() {
		let single = Field::related("owner", false, "http://testserver/api/cars/");
		let many = Field::related("doors", true, "http://testserver/api/cars/");
		assert!(!single.many);
		assert!(many.many);
	}

	#[test]
	fn test_field_serialization_shape() {
		let field = Field::data("name", FieldKind::Char);
		let json = serde_json::to_value(&field).unwrap();
		assert_eq!(json["type"], "char");
		assert_eq!(json["source"], "name");
		// path is omitted for data fields
		assert!(json.get("path").is_none());
	}
}
