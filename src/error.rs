//! Error types for field derivation and serialization

use crate::columns::ColumnCategory;
use thiserror::Error;

/// Configuration errors raised while deriving a field schema.
///
/// A missing single-column primary key is deliberately NOT an error: both
/// derivation variants degrade to an empty field set in that case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
	/// A declared column's type category has no entry in the field mapping.
	///
	/// The mapping never falls back to a default kind; extend the table with
	/// [`FieldMapping::insert`](crate::mapping::FieldMapping::insert) to cover
	/// the category.
	#[error("column type {category} is not mapped to a serializer field")]
	UnmappedColumnType { category: ColumnCategory },
}

/// Errors raised while rendering an instance through a derived schema.
#[derive(Debug, Error)]
pub enum SerializerError {
	#[error(transparent)]
	Derive(#[from] DeriveError),

	/// The instance could not be converted into a JSON value tree.
	#[error("instance serialization failed: {0}")]
	Value(#[from] serde_json::Error),

	/// The instance serialized to something other than a JSON object.
	#[error("expected model instance to serialize to a JSON object")]
	NotAnObject,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unmapped_column_message_names_category() {
		let err = DeriveError::UnmappedColumnType {
			category: ColumnCategory::Json,
		};
		assert!(err.to_string().contains("JSON"));
	}

	#[test]
	fn test_derive_error_converts_to_serializer_error() {
		let err: SerializerError = DeriveError::UnmappedColumnType {
			category: ColumnCategory::Binary,
		}
		.into();
		assert!(matches!(err, SerializerError::Derive(_)));
	}
}
