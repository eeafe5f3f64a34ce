//! Typed serializer entry points
//!
//! [`ModelSerializer`] and [`ListSerializer`] bind a field derivation to a
//! Rust type and render instances through the derived schema. Rendering
//! follows the field order exactly: `href` first, then data fields, then
//! relationship fields.

use crate::derive::{FieldMap, HREF_FIELD, default_fields, list_fields};
use crate::error::{DeriveError, SerializerError};
use crate::fields::{Field, FieldKind};
use crate::meta::ModelMeta;
use crate::request::RequestContext;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::debug;

/// Serializes instances of `M` through the full derived field set.
///
/// The model is bound at construction time; the field set is derived fresh
/// from `M`'s descriptor on every call.
///
/// # Examples
///
/// ```
/// use once_cell::sync::Lazy;
/// use orm_serializers::{
/// 	ColumnType, ModelDescriptor, ModelMeta, ModelSerializer, SimpleRequest,
/// };
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Car {
/// 	id: i64,
/// 	name: String,
/// }
///
/// static CAR_META: Lazy<ModelDescriptor> = Lazy::new(|| {
/// 	ModelDescriptor::builder("car")
/// 		.primary_key_column("id", ColumnType::Integer)
/// 		.column("name", ColumnType::VarChar(255))
/// 		.build()
/// });
///
/// impl ModelMeta for Car {
/// 	fn meta() -> &'static ModelDescriptor {
/// 		&CAR_META
/// 	}
/// }
///
/// let request = SimpleRequest::new("http://testserver", "/api/cars/").unwrap();
/// let car = Car { id: 3, name: "herbie".to_string() };
/// let value = ModelSerializer::<Car>::new().serialize(&car, &request).unwrap();
/// assert_eq!(value["href"], "http://testserver/api/cars/3/");
/// assert_eq!(value["name"], "herbie");
/// ```
pub struct ModelSerializer<M: ModelMeta> {
	_phantom: PhantomData<M>,
}

impl<M: ModelMeta> ModelSerializer<M> {
	pub fn new() -> Self {
		Self {
			_phantom: PhantomData,
		}
	}

	/// Derive the full field set for `M`.
	pub fn fields(&self, request: &dyn RequestContext) -> Result<FieldMap, DeriveError> {
		default_fields(M::meta(), request)
	}
}

impl<M: ModelMeta> Default for ModelSerializer<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M: ModelMeta + Serialize> ModelSerializer<M> {
	/// Render an instance as an ordered JSON object following the derived
	/// field set.
	///
	/// A model without a single-column primary key renders as an empty
	/// object, mirroring derivation.
	pub fn serialize(
		&self,
		instance: &M,
		request: &dyn RequestContext,
	) -> Result<Value, SerializerError> {
		let fields = self.fields(request)?;
		render(instance, &fields)
	}
}

/// Serializes instances of `M` through the restricted href-only field set,
/// for collection payloads.
pub struct ListSerializer<M: ModelMeta> {
	_phantom: PhantomData<M>,
}

impl<M: ModelMeta> ListSerializer<M> {
	pub fn new() -> Self {
		Self {
			_phantom: PhantomData,
		}
	}

	/// Derive the href-only field set for `M`.
	pub fn fields(&self, request: &dyn RequestContext) -> FieldMap {
		list_fields(M::meta(), request)
	}
}

impl<M: ModelMeta> Default for ListSerializer<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M: ModelMeta + Serialize> ListSerializer<M> {
	/// Render a single instance as an href-only object.
	pub fn serialize(
		&self,
		instance: &M,
		request: &dyn RequestContext,
	) -> Result<Value, SerializerError> {
		render(instance, &self.fields(request))
	}

	/// Render a slice of instances as a JSON array of href-only objects.
	pub fn serialize_many(
		&self,
		instances: &[M],
		request: &dyn RequestContext,
	) -> Result<Value, SerializerError> {
		let fields = self.fields(request);
		let mut out = Vec::with_capacity(instances.len());
		for instance in instances {
			out.push(render(instance, &fields)?);
		}
		Ok(Value::Array(out))
	}
}

/// Render one instance through an already-derived field set.
fn render<M: Serialize>(instance: &M, fields: &FieldMap) -> Result<Value, SerializerError> {
	if fields.is_empty() {
		return Ok(Value::Object(Map::new()));
	}

	let raw = serde_json::to_value(instance)?;
	let Value::Object(raw) = raw else {
		return Err(SerializerError::NotAnObject);
	};

	// The href field carries the primary-key attribute as its source; its
	// rendered value is also the base of relationship links.
	let instance_uri = fields
		.get(HREF_FIELD)
		.and_then(|href| render_hyperlink(href, &raw));

	let mut out = Map::new();
	for (name, field) in fields {
		let value = match field.kind {
			FieldKind::Hyperlink => Value::from(instance_uri.clone()),
			FieldKind::Related => render_related(field, instance_uri.as_deref()),
			FieldKind::Integer => coerce_integer(raw.get(name.as_str())),
			FieldKind::DateTime => coerce_datetime(raw.get(name.as_str())),
			_ => raw.get(name.as_str()).cloned().unwrap_or(Value::Null),
		};
		out.insert(name.clone(), value);
	}

	debug!(fields = out.len(), "rendered instance");
	Ok(Value::Object(out))
}

/// `{path}{pk}/`, or `None` when the instance has no primary-key value yet.
fn render_hyperlink(field: &Field, raw: &Map<String, Value>) -> Option<String> {
	let path = field.path.as_deref()?;
	let pk = raw.get(field.source.as_str())?;
	if pk.is_null() {
		return None;
	}
	let pk = scalar_to_string(pk);
	Some(format!("{}{}/", with_trailing_slash(path), pk))
}

/// Relationship links are nested under the instance URI: `{uri}{name}/`.
fn render_related(field: &Field, instance_uri: Option<&str>) -> Value {
	match instance_uri {
		Some(uri) => Value::from(format!("{}{}/", with_trailing_slash(uri), field.source)),
		None if field.many => Value::Array(Vec::new()),
		None => Value::Null,
	}
}

/// Integer fields absorb fixed-point columns; fractional values truncate.
fn coerce_integer(value: Option<&Value>) -> Value {
	match value {
		Some(Value::Number(n)) => {
			if let Some(f) = n.as_f64() {
				if n.as_i64().is_none() && n.as_u64().is_none() {
					return Value::from(f.trunc() as i64);
				}
			}
			Value::Number(n.clone())
		}
		// rust_decimal serializes as a string; parse and truncate
		Some(Value::String(s)) => match Decimal::from_str(s) {
			Ok(d) => d
				.trunc()
				.to_i64()
				.map(Value::from)
				.unwrap_or_else(|| Value::String(s.clone())),
			Err(_) => Value::String(s.clone()),
		},
		Some(v) => v.clone(),
		None => Value::Null,
	}
}

/// DateTime fields normalize integer unix timestamps to RFC 3339 strings.
fn coerce_datetime(value: Option<&Value>) -> Value {
	match value {
		Some(Value::Number(n)) => match n.as_i64().and_then(|secs| {
			chrono::DateTime::from_timestamp(secs, 0)
		}) {
			Some(ts) => Value::from(ts.to_rfc3339()),
			None => Value::Number(n.clone()),
		},
		Some(v) => v.clone(),
		None => Value::Null,
	}
}

fn scalar_to_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn with_trailing_slash(path: &str) -> String {
	if path.ends_with('/') {
		path.to_string()
	} else {
		format!("{}/", path)
	}
}
