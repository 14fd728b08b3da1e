//! Validation rules for table schemas and rows.

use std::collections::HashSet;

use super::enums::{check_enum, check_widget_header};
use crate::model::table::row_violations;
use crate::model::{ColumnDef, ScalarType, Table, TableData, TableRow};
use crate::validation::error::SchemaError;
use crate::validation::validator::{Validate, Validator};

impl Validate for Table {
    fn check(&self, v: &mut Validator) {
        check_widget_header(v, self.kind, self.category, Self::ACCEPTED_KINDS);
        v.required("data", self.data.as_ref());
    }
}

/// "The Column Contract": every row matches the schema in arity and in the
/// variant of each value, and the schema itself is well formed.
impl Validate for TableData {
    fn check(&self, v: &mut Validator) {
        v.field("schema", |v| check_schema(v, self.schema()));
        v.field("rows", |v| {
            for (i, row) in self.rows().iter().enumerate() {
                v.index(i, |v| check_row(v, self.schema(), row));
            }
        });
    }
}

/// The schema needs at least one column, valid column types and unique ids.
///
/// A repeated id is reported once for each column after the first that uses it.
fn check_schema(v: &mut Validator, schema: &[ColumnDef]) {
    if schema.is_empty() {
        v.report(SchemaError::EmptySchema);
        return;
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(schema.len());
    for (i, column) in schema.iter().enumerate() {
        v.index(i, |v| {
            check_enum::<ScalarType>(v, "value_type", column.value_type);
            if !seen.insert(column.id.as_str()) {
                v.report(SchemaError::DuplicateColumnId { id: column.id.clone() });
            }
        });
    }
}

fn check_row(v: &mut Validator, schema: &[ColumnDef], row: &TableRow) {
    for (position, error) in row_violations(schema, row.values()) {
        match position {
            Some(j) => v.field("values", |v| v.index(j, |v| v.report(error))),
            None => v.report(error),
        }
    }
}
