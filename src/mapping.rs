//! Column-type to serializer-field mapping
//!
//! The bridge between the two frameworks: a fixed table translating source
//! column-type categories into serializer field kinds. The default table is
//! a process-wide static, read-only after initialization.

use crate::columns::{ColumnCategory, ColumnType};
use crate::error::DeriveError;
use crate::fields::FieldKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The default table used by [`default_fields`](crate::derive::default_fields).
pub static DEFAULT_MAPPING: Lazy<FieldMapping> = Lazy::new(FieldMapping::with_defaults);

/// Immutable lookup from [`ColumnCategory`] to [`FieldKind`].
///
/// A lookup miss is a configuration error, not a silent default: every
/// category the deriver can encounter must have an entry, and unmapped
/// categories must be added explicitly via [`FieldMapping::insert`].
///
/// # Examples
///
/// ```
/// use orm_serializers::{ColumnType, FieldKind, FieldMapping};
///
/// let mapping = FieldMapping::with_defaults();
/// let kind = mapping.lookup(&ColumnType::VarChar(255)).unwrap();
/// assert_eq!(kind, FieldKind::Char);
///
/// // JSON columns are not covered by the defaults
/// assert!(mapping.lookup(&ColumnType::Json).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
	entries: HashMap<ColumnCategory, FieldKind>,
}

impl FieldMapping {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}

	/// Create the default mapping.
	///
	/// Fixed-point `Decimal` maps to `Integer`, an intentional lossy
	/// simplification. `Date` shares the `DateTime` field kind.
	pub fn with_defaults() -> Self {
		let mut mapping = Self::new();

		// String types
		mapping.insert(ColumnCategory::Char, FieldKind::Char);
		mapping.insert(ColumnCategory::VarChar, FieldKind::Char);
		mapping.insert(ColumnCategory::Text, FieldKind::Char);
		mapping.insert(ColumnCategory::LongText, FieldKind::Char);

		// Integer types
		mapping.insert(ColumnCategory::SmallInteger, FieldKind::Integer);
		mapping.insert(ColumnCategory::Integer, FieldKind::Integer);
		mapping.insert(ColumnCategory::BigInteger, FieldKind::Integer);
		mapping.insert(ColumnCategory::Decimal, FieldKind::Integer);

		// Floating point types
		mapping.insert(ColumnCategory::Float, FieldKind::Float);
		mapping.insert(ColumnCategory::Double, FieldKind::Float);

		// Date/time types
		mapping.insert(ColumnCategory::Date, FieldKind::DateTime);
		mapping.insert(ColumnCategory::DateTime, FieldKind::DateTime);
		mapping.insert(ColumnCategory::TimestampTz, FieldKind::DateTime);

		// Boolean
		mapping.insert(ColumnCategory::Boolean, FieldKind::Boolean);

		mapping
	}

	/// Register or replace a mapping entry.
	pub fn insert(&mut self, category: ColumnCategory, kind: FieldKind) {
		self.entries.insert(category, kind);
	}

	/// Whether a category has an entry.
	pub fn contains(&self, category: ColumnCategory) -> bool {
		self.entries.contains_key(&category)
	}

	/// Resolve the serializer field kind for a column type.
	///
	/// # Errors
	///
	/// Returns [`DeriveError::UnmappedColumnType`] naming the category when
	/// no entry exists.
	pub fn lookup(&self, column: &ColumnType) -> Result<FieldKind, DeriveError> {
		let category = column.category();
		self.entries
			.get(&category)
			.copied()
			.ok_or(DeriveError::UnmappedColumnType { category })
	}

	/// Number of registered entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
