//! Field derivation
//!
//! Builds the ordered field set for a model from its declared properties and
//! the current request. Two variants exist: the full set (href, then every
//! column, then every relationship) and the list set (href only), used for
//! collection payloads.
//!
//! Derivation is pure and stateless; the field set is rebuilt from live
//! metadata on every call and never cached.

use crate::error::DeriveError;
use crate::fields::Field;
use crate::mapping::{DEFAULT_MAPPING, FieldMapping};
use crate::meta::{ModelDescriptor, Property};
use crate::request::RequestContext;
use indexmap::IndexMap;
use tracing::debug;

/// Insertion-ordered mapping from field name to descriptor.
///
/// Iteration order is the rendering order of the host pipeline, so an
/// unordered container would not do here.
pub type FieldMap = IndexMap<String, Field>;

/// Name of the synthetic hyperlink field every schema starts with.
pub const HREF_FIELD: &str = "href";

/// Derive the full field set using the default mapping table.
///
/// # Examples
///
/// ```
/// use orm_serializers::{ColumnType, ModelDescriptor, SimpleRequest, default_fields};
///
/// let meta = ModelDescriptor::builder("car")
/// 	.primary_key_column("id", ColumnType::Integer)
/// 	.column("name", ColumnType::VarChar(255))
/// 	.has_many("doors", "door")
/// 	.build();
/// let request = SimpleRequest::new("http://testserver", "/api/cars/").unwrap();
///
/// let fields = default_fields(&meta, &request).unwrap();
/// let names: Vec<_> = fields.keys().map(String::as_str).collect();
/// assert_eq!(names, vec!["href", "id", "name", "doors"]);
/// ```
pub fn default_fields(
	meta: &ModelDescriptor,
	request: &dyn RequestContext,
) -> Result<FieldMap, DeriveError> {
	derive_fields(meta, request, &DEFAULT_MAPPING)
}

/// Derive the full field set against an explicit mapping table.
///
/// The returned map starts with the synthetic `href` hyperlink, followed by
/// one data field per declared column, followed by one relationship field per
/// declared relationship. Columns always precede relationships, regardless of
/// declaration interleaving; callers depend on this order for rendering.
///
/// A model without a single-column primary key yields an empty map.
///
/// # Errors
///
/// [`DeriveError::UnmappedColumnType`] when a declared column's category has
/// no mapping entry.
pub fn derive_fields(
	meta: &ModelDescriptor,
	request: &dyn RequestContext,
	mapping: &FieldMapping,
) -> Result<FieldMap, DeriveError> {
	let mut fields = FieldMap::new();

	let Some(pk_field) = meta.primary_key() else {
		debug!(model = meta.name(), "no single-column primary key, deriving empty field set");
		return Ok(fields);
	};

	let uri = request.build_absolute_uri(request.path());
	fields.insert(HREF_FIELD.to_string(), Field::hyperlink(pk_field, uri.clone()));

	// Column fields first
	for prop in meta.properties() {
		if let Property::Column { name, ty, .. } = prop {
			let kind = mapping.lookup(ty)?;
			fields.insert(name.clone(), Field::data(name.clone(), kind));
		}
	}

	// Relationship fields after every column
	for prop in meta.properties() {
		if let Property::Relationship { name, many, .. } = prop {
			fields.insert(name.clone(), Field::related(name.clone(), *many, uri.clone()));
		}
	}

	debug!(
		model = meta.name(),
		fields = fields.len(),
		"derived full field set"
	);
	Ok(fields)
}

/// Derive the restricted field set for collection payloads: the `href`
/// hyperlink and nothing else.
///
/// Shares the primary-key degradation of [`derive_fields`] and performs no
/// table lookups, so it cannot fail.
pub fn list_fields(meta: &ModelDescriptor, request: &dyn RequestContext) -> FieldMap {
	let mut fields = FieldMap::new();

	let Some(pk_field) = meta.primary_key() else {
		debug!(model = meta.name(), "no single-column primary key, deriving empty field set");
		return fields;
	};

	let uri = request.build_absolute_uri(request.path());
	fields.insert(HREF_FIELD.to_string(), Field::hyperlink(pk_field, uri));
	fields
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::columns::{ColumnCategory, ColumnType};
	use crate::fields::FieldKind;
	use crate::request::SimpleRequest;

	fn request() -> SimpleRequest {
		SimpleRequest::new("http://testserver", "/api/cars/").unwrap()
	}

	fn car() -> ModelDescriptor {
		ModelDescriptor::builder("car")
			.primary_key_column("id", ColumnType::Integer)
			.column("name", ColumnType::VarChar(255))
			.has_many("doors", "door")
			.build()
	}

	#[test]
	fn test_full_derivation_shape() {
		let fields = default_fields(&car(), &request()).unwrap();
		let names: Vec<_> = fields.keys().map(String::as_str).collect();
		assert_eq!(names, vec!["href", "id", "name", "doors"]);
		assert_eq!(fields["id"].kind, FieldKind::Integer);
		assert_eq!(fields["name"].kind, FieldKind::Char);
		assert!(fields["doors"].many);
	}

	#[test]
	fn test_href_is_built_from_request_uri_and_pk() {
		let fields = default_fields(&car(), &request()).unwrap();
		let href = &fields[HREF_FIELD];
		assert_eq!(href.source, "id");
		assert_eq!(href.path.as_deref(), Some("http://testserver/api/cars/"));
	}

	#[test]
	fn test_columns_precede_relationships_despite_declaration_order() {
		let meta = ModelDescriptor::builder("car")
			.primary_key_column("id", ColumnType::Integer)
			.has_many("doors", "door")
			.column("name", ColumnType::VarChar(255))
			.belongs_to("owner", "person")
			.column("mpg", ColumnType::Float)
			.build();
		let fields = default_fields(&meta, &request()).unwrap();
		let names: Vec<_> = fields.keys().map(String::as_str).collect();
		assert_eq!(names, vec!["href", "id", "name", "mpg", "doors", "owner"]);
	}

	#[test]
	fn test_missing_primary_key_degrades_to_empty() {
		let meta = ModelDescriptor::builder("log_line")
			.column("message", ColumnType::Text)
			.build();
		assert!(default_fields(&meta, &request()).unwrap().is_empty());
		assert!(list_fields(&meta, &request()).is_empty());
	}

	#[test]
	fn test_unmapped_column_type_is_fatal() {
		let meta = ModelDescriptor::builder("document")
			.primary_key_column("id", ColumnType::Integer)
			.column("payload", ColumnType::Json)
			.build();
		let err = default_fields(&meta, &request()).unwrap_err();
		assert_eq!(
			err,
			DeriveError::UnmappedColumnType {
				category: ColumnCategory::Json
			}
		);
	}

	#[test]
	fn test_custom_mapping_extends_coverage() {
		let meta = ModelDescriptor::builder("document")
			.primary_key_column("id", ColumnType::Integer)
			.column("payload", ColumnType::Json)
			.build();
		let mut mapping = FieldMapping::with_defaults();
		mapping.insert(ColumnCategory::Json, FieldKind::Char);
		let fields = derive_fields(&meta, &request(), &mapping).unwrap();
		assert_eq!(fields["payload"].kind, FieldKind::Char);
	}

	#[test]
	fn test_list_fields_is_href_only() {
		let fields = list_fields(&car(), &request());
		assert_eq!(fields.len(), 1);
		assert!(fields.contains_key(HREF_FIELD));
	}

	#[test]
	fn test_list_fields_is_subset_of_full() {
		let full = default_fields(&car(), &request()).unwrap();
		let list = list_fields(&car(), &request());
		for (name, field) in &list {
			assert_eq!(full.get(name), Some(field));
		}
	}
}
