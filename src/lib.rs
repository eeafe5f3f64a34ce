//! Serializer field derivation for foreign ORM models
//!
//! A compatibility shim between a REST serialization layer and a foreign
//! ORM's model metadata: given a model's declared columns and relationships,
//! derive the ordered serializer field set the host render/parse pipeline
//! consumes, including a hyperlink `href` field and relationship fields.
//!
//! The two entry points mirror the host serializer lifecycle:
//! [`default_fields`] derives the full schema of a resource,
//! [`list_fields`] the href-only schema used in collection responses.
//! [`ModelSerializer`] and [`ListSerializer`] bind them to a Rust type and
//! render instances through the derived schema.

pub mod columns;
pub mod derive;
pub mod error;
pub mod fields;
pub mod mapping;
pub mod meta;
pub mod request;
pub mod serializer;

pub use columns::{ColumnCategory, ColumnType};
pub use derive::{FieldMap, HREF_FIELD, default_fields, derive_fields, list_fields};
pub use error::{DeriveError, SerializerError};
pub use fields::{Field, FieldKind};
pub use mapping::{DEFAULT_MAPPING, FieldMapping};
pub use meta::{ModelDescriptor, ModelDescriptorBuilder, ModelMeta, Property};
pub use request::{RequestContext, SimpleRequest};
pub use serializer::{ListSerializer, ModelSerializer};
