//! Foreign-model metadata
//!
//! The deriver never touches the foreign ORM's own class hierarchy. Instead a
//! model is described by a [`ModelDescriptor`]: an ordered list of declared
//! properties, each either a column or a relationship. Descriptors are built
//! once (usually in a `Lazy` static) and bound to a Rust type through the
//! [`ModelMeta`] trait.
//!
//! # Examples
//!
//! ```
//! use orm_serializers::{ColumnType, ModelDescriptor};
//!
//! let meta = ModelDescriptor::builder("car")
//! 	.primary_key_column("id", ColumnType::Integer)
//! 	.column("name", ColumnType::VarChar(255))
//! 	.has_many("doors", "door")
//! 	.build();
//!
//! assert_eq!(meta.primary_key(), Some("id"));
//! assert_eq!(meta.properties().len(), 3);
//! ```

use crate::columns::ColumnType;
use serde::Serialize;

/// One declared property of a foreign model, in declaration order.
///
/// Modeled as a tagged variant so classification is a match on the tag, not a
/// type-hierarchy membership test.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "property", rename_all = "snake_case")]
pub enum Property {
	/// An attribute backed directly by a database column.
	Column {
		name: String,
		ty: ColumnType,
		primary_key: bool,
	},
	/// An association to another model.
	Relationship {
		name: String,
		/// Resource name of the related model
		related: String,
		/// One-to-many cardinality; `false` for one-to-one / many-to-one
		many: bool,
	},
}

impl Property {
	/// The attribute name this property is declared under.
	pub fn name(&self) -> &str {
		match self {
			Property::Column { name, .. } => name,
			Property::Relationship { name, .. } => name,
		}
	}

	pub fn is_column(&self) -> bool {
		matches!(self, Property::Column { .. })
	}

	pub fn is_relationship(&self) -> bool {
		matches!(self, Property::Relationship { .. })
	}
}

/// Declared metadata of one foreign model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
	name: String,
	properties: Vec<Property>,
}

impl ModelDescriptor {
	/// Start building a descriptor for the named model.
	pub fn builder(name: impl Into<String>) -> ModelDescriptorBuilder {
		ModelDescriptorBuilder {
			name: name.into(),
			properties: Vec::new(),
		}
	}

	/// The model's name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// All declared properties, in declaration order.
	pub fn properties(&self) -> &[Property] {
		&self.properties
	}

	/// Declared column properties, in declaration order.
	pub fn columns(&self) -> impl Iterator<Item = &Property> {
		self.properties.iter().filter(|p| p.is_column())
	}

	/// Declared relationship properties, in declaration order.
	pub fn relationships(&self) -> impl Iterator<Item = &Property> {
		self.properties.iter().filter(|p| p.is_relationship())
	}

	/// Resolve the single-column primary-key attribute name.
	///
	/// Returns `None` when the model declares no primary key or a composite
	/// one; composite keys are unsupported and derivation degrades to an
	/// empty field set rather than erroring.
	pub fn primary_key(&self) -> Option<&str> {
		let mut keys = self.properties.iter().filter_map(|p| match p {
			Property::Column {
				name,
				primary_key: true,
				..
			} => Some(name.as_str()),
			_ => None,
		});
		let first = keys.next()?;
		if keys.next().is_some() {
			return None;
		}
		Some(first)
	}
}

/// Builder for [`ModelDescriptor`].
#[derive(Debug)]
pub struct ModelDescriptorBuilder {
	name: String,
	properties: Vec<Property>,
}

impl ModelDescriptorBuilder {
	/// Declare a plain column.
	pub fn column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
		self.properties.push(Property::Column {
			name: name.into(),
			ty,
			primary_key: false,
		});
		self
	}

	/// Declare a primary-key column.
	pub fn primary_key_column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
		self.properties.push(Property::Column {
			name: name.into(),
			ty,
			primary_key: true,
		});
		self
	}

	/// Declare a relationship with explicit cardinality.
	pub fn relationship(
		mut self,
		name: impl Into<String>,
		related: impl Into<String>,
		many: bool,
	) -> Self {
		self.properties.push(Property::Relationship {
			name: name.into(),
			related: related.into(),
			many,
		});
		self
	}

	/// Declare a one-to-many relationship.
	pub fn has_many(self, name: impl Into<String>, related: impl Into<String>) -> Self {
		self.relationship(name, related, true)
	}

	/// Declare a to-one relationship.
	pub fn belongs_to(self, name: impl Into<String>, related: impl Into<String>) -> Self {
		self.relationship(name, related, false)
	}

	pub fn build(self) -> ModelDescriptor {
		ModelDescriptor {
			name: self.name,
			properties: self.properties,
		}
	}
}

/// Binds a Rust type to its foreign-model descriptor.
///
/// Typed serializers hang off this seam; the descriptor itself is usually a
/// `Lazy` static so `meta()` can hand out a `'static` reference.
pub trait ModelMeta {
	fn meta() -> &'static ModelDescriptor;
}
