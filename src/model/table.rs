//! Tabular data: an explicit column schema plus rows that must conform to it.

use serde::{Deserialize, Serialize};

use super::enums::{Category, ClosedEnum, ScalarType, WidgetKind};
use super::scalar::Scalar;
use super::widget::WidgetMeta;
use crate::validation::{FieldPath, SchemaError, ValidationReport, Violation};

/// Declaration of one table column.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDef {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(enumeration = "ScalarType", tag = "3")]
    pub value_type: i32,
}

impl ColumnDef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value_type: ScalarType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value_type: value_type as i32,
        }
    }
}

/// One row of values, positionally aligned to the owning table's schema.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRow {
    #[prost(message, repeated, tag = "1")]
    values: Vec<Scalar>,
}

impl TableRow {
    pub fn new(values: Vec<Scalar>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    pub fn get(&self, i: usize) -> Option<&Scalar> {
        self.values.get(i)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Scalar>> for TableRow {
    fn from(values: Vec<Scalar>) -> Self {
        Self::new(values)
    }
}

/// A column schema and the rows conforming to it.
///
/// Rows can only be appended through [`TableData::add_row`], which checks
/// them against the schema immediately. A decoded table is not re-checked
/// until it is validated or sealed.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TableData {
    #[prost(message, repeated, tag = "1")]
    pub(crate) schema: Vec<ColumnDef>,
    #[prost(message, repeated, tag = "2")]
    pub(crate) rows: Vec<TableRow>,
}

impl TableData {
    pub fn new(schema: Vec<ColumnDef>) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    pub fn schema(&self) -> &[ColumnDef] {
        &self.schema
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn rows_size(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDef> {
        self.schema.iter().find(|c| c.id == id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.schema.iter().position(|c| c.id == id)
    }

    /// Replaces the schema.
    ///
    /// Existing rows are re-checked against the new columns. If any row no
    /// longer conforms, the schema is left as it was and every offending row
    /// is reported. Duplicate ids and an empty schema are left to the seal step.
    pub fn set_schema(&mut self, columns: Vec<ColumnDef>) -> Result<(), ValidationReport> {
        let mut violations = Vec::new();
        let rows_path = FieldPath::root().field("rows");
        for (i, row) in self.rows.iter().enumerate() {
            let row_path = rows_path.index(i);
            for (position, error) in row_violations(&columns, &row.values) {
                let path = match position {
                    Some(j) => row_path.field("values").index(j),
                    None => row_path.clone(),
                };
                violations.push(error.at(path));
            }
        }
        if !violations.is_empty() {
            return Err(ValidationReport::new(violations));
        }
        self.schema = columns;
        Ok(())
    }

    /// Appends a row after checking arity and every value's variant.
    ///
    /// On failure the table is unchanged and the first problem is returned,
    /// with a path relative to this table.
    pub fn add_row(&mut self, values: impl Into<TableRow>) -> Result<(), Violation> {
        let row = values.into();
        if row.len() != self.schema.len() {
            return Err(SchemaError::SchemaMismatch {
                expected: self.schema.len(),
                found: row.len(),
            }
            .at(FieldPath::root().field("values")));
        }
        for (i, column) in self.schema.iter().enumerate() {
            if ScalarType::from_raw(column.value_type).is_none() {
                return Err(SchemaError::EnumViolation {
                    enumeration: ScalarType::NAME,
                    value: column.value_type,
                }
                .at(FieldPath::root().field("schema").index(i).field("value_type")));
            }
        }
        let first = row_violations(&self.schema, &row.values).into_iter().next();
        if let Some((position, error)) = first {
            let path = FieldPath::root().field("values");
            return Err(error.at(position.map_or_else(|| path.clone(), |j| path.index(j))));
        }
        self.rows.push(row);
        Ok(())
    }
}

/// Checks one row against a schema.
///
/// Returns each problem with the value position it concerns (`None` for an
/// arity mismatch, in which case no per-value check is attempted). A value
/// must carry its column's variant and, if numeric, be finite. Columns whose
/// declared type is not a valid `ScalarType` get no variant check here; the
/// schema rule reports them once.
pub(crate) fn row_violations(
    schema: &[ColumnDef],
    values: &[Scalar],
) -> Vec<(Option<usize>, SchemaError)> {
    if values.len() != schema.len() {
        return vec![(
            None,
            SchemaError::SchemaMismatch {
                expected: schema.len(),
                found: values.len(),
            },
        )];
    }
    schema
        .iter()
        .zip(values)
        .enumerate()
        .filter_map(|(i, (column, value))| {
            let expected = ScalarType::from_raw(column.value_type).and_then(ScalarType::kind);
            let error = match expected {
                Some(expected) if value.kind() != expected => SchemaError::TypeMismatch {
                    expected,
                    found: value.kind(),
                },
                _ if !value.is_finite() => SchemaError::NonFiniteNumber {
                    found: value.kind(),
                },
                _ => return None,
            };
            Some((Some(i), error))
        })
        .collect()
}

/// A data-table widget: flat widget metadata plus the table itself.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(enumeration = "WidgetKind", tag = "3")]
    pub kind: i32,
    #[prost(enumeration = "Category", tag = "4")]
    pub category: i32,
    #[prost(message, optional, tag = "5")]
    pub data: Option<TableData>,
}

impl Table {
    pub const ACCEPTED_KINDS: &'static [WidgetKind] = &[WidgetKind::DataTable];

    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: WidgetKind,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: kind as i32,
            category: category as i32,
            data: Some(TableData::default()),
        }
    }

    pub fn with_data(mut self, data: TableData) -> Self {
        self.data = Some(data);
        self
    }

    /// The table body, created empty on first access if missing.
    pub fn data_mut(&mut self) -> &mut TableData {
        self.data.get_or_insert_with(TableData::default)
    }
}

impl WidgetMeta for Table {
    fn widget_id(&self) -> &str {
        &self.id
    }

    fn widget_title(&self) -> &str {
        &self.title
    }

    fn raw_widget_kind(&self) -> i32 {
        self.kind
    }

    fn raw_widget_category(&self) -> i32 {
        self.category
    }

    fn accepted_kinds(&self) -> &'static [WidgetKind] {
        Self::ACCEPTED_KINDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScalarKind;
    use crate::validation::ErrorKind;
    use rstest::rstest;

    fn summary_schema() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("metric", "Metric", ScalarType::String),
            ColumnDef::new("portfolio", "Portfolio", ScalarType::Percent),
        ]
    }

    #[test]
    fn test_add_row_type_mismatch_leaves_rows_untouched() {
        let mut data = TableData::new(summary_schema());
        data.add_row(vec![Scalar::string("Total Return"), Scalar::percent(12.5)])
            .unwrap();
        assert_eq!(data.rows_size(), 1);

        let err = data
            .add_row(vec![Scalar::string("Volatility"), Scalar::string("15.2")])
            .unwrap_err();
        assert_eq!(
            err.error,
            SchemaError::TypeMismatch {
                expected: ScalarKind::Percent,
                found: ScalarKind::String,
            }
        );
        assert_eq!(err.path.to_string(), "values[1]");
        assert_eq!(data.rows_size(), 1);
    }

    #[rstest]
    #[case(vec![Scalar::string("Total Return")])]
    #[case(vec![Scalar::string("a"), Scalar::percent(1.0), Scalar::percent(2.0)])]
    #[case(vec![])]
    fn test_add_row_arity_mismatch(#[case] values: Vec<Scalar>) {
        let mut data = TableData::new(summary_schema());
        let found = values.len();
        let err = data.add_row(values).unwrap_err();
        assert_eq!(err.error, SchemaError::SchemaMismatch { expected: 2, found });
        assert!(data.is_empty());
    }

    #[test]
    fn test_decimal_is_not_accepted_as_percent() {
        let mut data = TableData::new(summary_schema());
        let err = data
            .add_row(vec![Scalar::string("Volatility"), Scalar::decimal(15.2)])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_null_cell_is_a_mismatch() {
        let mut data = TableData::new(summary_schema());
        let err = data
            .add_row(vec![Scalar::string("Beta"), Scalar::null()])
            .unwrap_err();
        assert_eq!(
            err.error,
            SchemaError::TypeMismatch {
                expected: ScalarKind::Percent,
                found: ScalarKind::Null,
            }
        );
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_add_row_rejects_non_finite_numbers(#[case] bad: f64) {
        let mut data = TableData::new(summary_schema());
        let err = data
            .add_row(vec![Scalar::string("Sortino"), Scalar::percent(bad)])
            .unwrap_err();
        assert_eq!(
            err.error,
            SchemaError::NonFiniteNumber {
                found: ScalarKind::Percent,
            }
        );
        assert_eq!(err.path.to_string(), "values[1]");
        assert!(data.is_empty());
    }

    #[test]
    fn test_add_row_rejects_unspecified_column_type() {
        let mut data = TableData::new(vec![ColumnDef {
            id: "x".into(),
            name: "X".into(),
            value_type: 0,
        }]);
        let err = data.add_row(vec![Scalar::decimal(1.0)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnumViolation);
        assert_eq!(err.path.to_string(), "schema[0].value_type");
        assert!(data.is_empty());
    }

    #[test]
    fn test_set_schema_revalidates_existing_rows() {
        let mut data = TableData::new(summary_schema());
        data.add_row(vec![Scalar::string("Total Return"), Scalar::percent(12.5)])
            .unwrap();
        data.add_row(vec![Scalar::string("Max Drawdown"), Scalar::percent(-8.1)])
            .unwrap();

        let retyped = vec![
            ColumnDef::new("metric", "Metric", ScalarType::String),
            ColumnDef::new("portfolio", "Portfolio", ScalarType::Decimal),
        ];
        let report = data.set_schema(retyped).unwrap_err();
        assert_eq!(report.count(ErrorKind::TypeMismatch), 2);
        assert_eq!(report.violations()[1].path.to_string(), "rows[1].values[1]");
        assert_eq!(data.schema(), summary_schema().as_slice());

        let renamed = vec![
            ColumnDef::new("metric", "Measure", ScalarType::String),
            ColumnDef::new("strategy", "Strategy", ScalarType::Percent),
        ];
        data.set_schema(renamed).unwrap();
        assert_eq!(data.column_index("strategy"), Some(1));
        assert!(data.column("portfolio").is_none());
        assert_eq!(data.rows_size(), 2);
    }

    #[test]
    fn test_set_schema_reports_arity_per_row() {
        let mut data = TableData::new(summary_schema());
        data.add_row(vec![Scalar::string("a"), Scalar::percent(1.0)])
            .unwrap();
        let report = data
            .set_schema(vec![ColumnDef::new("metric", "Metric", ScalarType::String)])
            .unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path.to_string(), "rows[0]");
        assert_eq!(report.violations()[0].kind(), ErrorKind::SchemaMismatch);
    }

    #[test]
    fn test_header_only_table() {
        let table = Table::new(
            "positions",
            "Open Positions",
            WidgetKind::DataTable,
            Category::Positions,
        )
        .with_data(TableData::new(summary_schema()));
        let data = table.data.as_ref().unwrap();
        assert_eq!(data.column_count(), 2);
        assert!(data.is_empty());
        assert_eq!(table.widget_kind(), WidgetKind::DataTable);
    }
}
