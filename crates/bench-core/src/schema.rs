//! Row shapes and destination table variants.

use crate::params::ParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column names of the simple schema, in destination order.
pub const SIMPLE_COLUMNS: [&str; 4] = ["IntField", "StringField", "StringField1", "DecimalField"];

/// Column names of the complex schema, in destination order.
pub const COMPLEX_COLUMNS: [&str; 7] = [
    "StringField",
    "StringField2",
    "StringField3",
    "StringField4",
    "StringField5",
    "StringField6",
    "StringField7",
];

/// The two fixed row shapes a batch can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// `(IntField, StringField, StringField1, DecimalField)`
    Simple,
    /// `(StringField, StringField2 .. StringField7)`
    Complex,
}

impl SchemaKind {
    /// Destination column names in positional order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            SchemaKind::Simple => &SIMPLE_COLUMNS,
            SchemaKind::Complex => &COMPLEX_COLUMNS,
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Simple => write!(f, "simple"),
            SchemaKind::Complex => write!(f, "complex"),
        }
    }
}

/// One of the four destination tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableVariant {
    SimpleTable,
    #[serde(rename = "SimpleTable_NoKey")]
    SimpleTableNoKey,
    ComplexTable,
    #[serde(rename = "ComplexTable_NoKey")]
    ComplexTableNoKey,
}

/// Suite order and variant-to-schema pairing.
pub const TABLE_VARIANTS: [(TableVariant, SchemaKind); 4] = [
    (TableVariant::SimpleTable, SchemaKind::Simple),
    (TableVariant::SimpleTableNoKey, SchemaKind::Simple),
    (TableVariant::ComplexTable, SchemaKind::Complex),
    (TableVariant::ComplexTableNoKey, SchemaKind::Complex),
];

impl TableVariant {
    /// Destination table name.
    pub fn table_name(&self) -> &'static str {
        match self {
            TableVariant::SimpleTable => "SimpleTable",
            TableVariant::SimpleTableNoKey => "SimpleTable_NoKey",
            TableVariant::ComplexTable => "ComplexTable",
            TableVariant::ComplexTableNoKey => "ComplexTable_NoKey",
        }
    }

    /// Schema this variant is loaded with, looked up in [`TABLE_VARIANTS`].
    pub fn schema(&self) -> SchemaKind {
        TABLE_VARIANTS
            .iter()
            .find(|(variant, _)| variant == self)
            .map(|(_, schema)| *schema)
            .unwrap_or(SchemaKind::Simple)
    }

    /// Whether the destination table carries a primary key.
    pub fn has_primary_key(&self) -> bool {
        matches!(self, TableVariant::SimpleTable | TableVariant::ComplexTable)
    }

    /// All variants in suite order.
    pub fn all() -> impl Iterator<Item = TableVariant> {
        TABLE_VARIANTS.iter().map(|(variant, _)| *variant)
    }
}

impl fmt::Display for TableVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for TableVariant {
    type Err = ParameterError;

    /// Table names match case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableVariant::all()
            .find(|variant| variant.table_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParameterError::UnknownVariant(s.to_string()))
    }
}
