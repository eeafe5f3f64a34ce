//! Column-type vocabulary of the source ORM
//!
//! `ColumnType` names the storage-level types a foreign model can declare.
//! The serializer mapping operates on parameter-free [`ColumnCategory`] tags,
//! so `VarChar(80)` and `VarChar(255)` resolve to the same serializer field.

use serde::{Deserialize, Serialize};

/// Represents the storage type behind a declared column property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
	// Integer types
	SmallInteger,
	Integer,
	BigInteger,

	// String types (with parameters)
	Char(u32),
	VarChar(u32),
	Text,
	LongText,

	// Date/time types
	Date,
	DateTime,
	TimestampTz,

	// Numeric types
	Decimal {
		precision: u32,
		scale: u32,
	},
	Float,
	Double,

	// Boolean type
	Boolean,

	// Types without a serializer field mapping
	Binary,
	Json,
	Uuid,

	// Escape hatch for backend-specific types
	Custom(String),
}

/// Parameter-free tag for a [`ColumnType`], used as the mapping-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnCategory {
	SmallInteger,
	Integer,
	BigInteger,
	Char,
	VarChar,
	Text,
	LongText,
	Date,
	DateTime,
	TimestampTz,
	Decimal,
	Float,
	Double,
	Boolean,
	Binary,
	Json,
	Uuid,
	Custom,
}

impl ColumnType {
	/// Return the parameter-free category tag for this column type.
	///
	/// # Examples
	///
	/// ```
	/// use orm_serializers::{ColumnCategory, ColumnType};
	///
	/// assert_eq!(ColumnType::VarChar(255).category(), ColumnCategory::VarChar);
	/// assert_eq!(
	/// 	ColumnType::Decimal { precision: 10, scale: 2 }.category(),
	/// 	ColumnCategory::Decimal,
	/// );
	/// ```
	pub fn category(&self) -> ColumnCategory {
		match self {
			ColumnType::SmallInteger => ColumnCategory::SmallInteger,
			ColumnType::Integer => ColumnCategory::Integer,
			ColumnType::BigInteger => ColumnCategory::BigInteger,
			ColumnType::Char(_) => ColumnCategory::Char,
			ColumnType::VarChar(_) => ColumnCategory::VarChar,
			ColumnType::Text => ColumnCategory::Text,
			ColumnType::LongText => ColumnCategory::LongText,
			ColumnType::Date => ColumnCategory::Date,
			ColumnType::DateTime => ColumnCategory::DateTime,
			ColumnType::TimestampTz => ColumnCategory::TimestampTz,
			ColumnType::Decimal { .. } => ColumnCategory::Decimal,
			ColumnType::Float => ColumnCategory::Float,
			ColumnType::Double => ColumnCategory::Double,
			ColumnType::Boolean => ColumnCategory::Boolean,
			ColumnType::Binary => ColumnCategory::Binary,
			ColumnType::Json => ColumnCategory::Json,
			ColumnType::Uuid => ColumnCategory::Uuid,
			ColumnType::Custom(_) => ColumnCategory::Custom,
		}
	}

	/// Convert ColumnType to a generic SQL type string
	pub fn to_sql_string(&self) -> String {
		match self {
			ColumnType::SmallInteger => "SMALLINT".to_string(),
			ColumnType::Integer => "INTEGER".to_string(),
			ColumnType::BigInteger => "BIGINT".to_string(),
			ColumnType::Char(max_length) => format!("CHAR({})", max_length),
			ColumnType::VarChar(max_length) => format!("VARCHAR({})", max_length),
			ColumnType::Text => "TEXT".to_string(),
			ColumnType::LongText => "LONGTEXT".to_string(),
			ColumnType::Date => "DATE".to_string(),
			ColumnType::DateTime => "DATETIME".to_string(),
			ColumnType::TimestampTz => "TIMESTAMPTZ".to_string(),
			ColumnType::Decimal { precision, scale } => format!("DECIMAL({}, {})", precision, scale),
			ColumnType::Float => "FLOAT".to_string(),
			ColumnType::Double => "DOUBLE".to_string(),
			ColumnType::Boolean => "BOOLEAN".to_string(),
			ColumnType::Binary => "BINARY".to_string(),
			ColumnType::Json => "JSON".to_string(),
			ColumnType::Uuid => "UUID".to_string(),
			ColumnType::Custom(custom_type) => custom_type.clone(),
		}
	}

	/// Get max_length if this type has one
	pub fn max_length(&self) -> Option<u32> {
		match self {
			ColumnType::Char(max_length) | ColumnType::VarChar(max_length) => Some(*max_length),
			_ => None,
		}
	}
}

impl std::fmt::Display for ColumnType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.to_sql_string())
	}
}

impl std::fmt::Display for ColumnCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			ColumnCategory::SmallInteger => "SMALLINT",
			ColumnCategory::Integer => "INTEGER",
			ColumnCategory::BigInteger => "BIGINT",
			ColumnCategory::Char => "CHAR",
			ColumnCategory::VarChar => "VARCHAR",
			ColumnCategory::Text => "TEXT",
			ColumnCategory::LongText => "LONGTEXT",
			ColumnCategory::Date => "DATE",
			ColumnCategory::DateTime => "DATETIME",
			ColumnCategory::TimestampTz => "TIMESTAMPTZ",
			ColumnCategory::Decimal => "DECIMAL",
			ColumnCategory::Float => "FLOAT",
			ColumnCategory::Double => "DOUBLE",
			ColumnCategory::Boolean => "BOOLEAN",
			ColumnCategory::Binary => "BINARY",
			ColumnCategory::Json => "JSON",
			ColumnCategory::Uuid => "UUID",
			ColumnCategory::Custom => "CUSTOM",
		};
		write!(f, "{}", name)
	}
}
