//! Generated row batches.

use crate::schema::SchemaKind;
use rust_decimal::Decimal;

/// One row of the simple schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleRow {
    pub int_field: i32,
    pub string_field: String,
    pub string_field1: String,
    pub decimal_field: Decimal,
}

/// One row of the complex schema.
///
/// `string_fields[0]` maps to `StringField2`, `string_fields[5]` to
/// `StringField7`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexRow {
    pub string_field: String,
    pub string_fields: [String; 6],
}

/// An ordered, homogeneous batch of generated rows.
///
/// Built once by the generator and consumed by a single load.
#[derive(Debug, Clone, PartialEq)]
pub enum RowBatch {
    Simple(Vec<SimpleRow>),
    Complex(Vec<ComplexRow>),
}

impl RowBatch {
    /// Schema of every row in this batch.
    pub fn schema(&self) -> SchemaKind {
        match self {
            RowBatch::Simple(_) => SchemaKind::Simple,
            RowBatch::Complex(_) => SchemaKind::Complex,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            RowBatch::Simple(rows) => rows.len(),
            RowBatch::Complex(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_shape() {
        let batch = RowBatch::Simple(vec![SimpleRow {
            int_field: 1,
            string_field: "a".to_string(),
            string_field1: "b".to_string(),
            decimal_field: Decimal::from(1),
        }]);
        assert_eq!(batch.schema(), SchemaKind::Simple);
        assert_eq!(batch.len(), 1);
        assert!(!batch.is_empty());

        let empty = RowBatch::Complex(Vec::new());
        assert_eq!(empty.schema(), SchemaKind::Complex);
        assert!(empty.is_empty());
    }
}
