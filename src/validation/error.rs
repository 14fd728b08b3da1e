//! Defines the error types for the validation module.
use std::fmt;

use thiserror::Error;

use super::path::FieldPath;
use crate::model::{ScalarKind, WidgetKind};

/// A single structural problem in a document.
///
/// Scalar accessors and `TableData::add_row` return these immediately; the
/// seal step collects them into a [`ValidationReport`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ScalarKind, found: ScalarKind },
    #[error("row has {found} values but the schema declares {expected} columns")]
    SchemaMismatch { expected: usize, found: usize },
    #[error("{value} is not a valid {enumeration}")]
    EnumViolation { enumeration: &'static str, value: i32 },
    #[error("card group {group} is out of range, the cards form {group_count} group(s)")]
    GroupIndexOutOfRange { group: u32, group_count: u32 },
    #[error("column id '{id}' is declared more than once")]
    DuplicateColumnId { id: String },
    #[error("widget id '{id}' is used more than once")]
    DuplicateWidgetId { id: String },
    #[error("widget kind {found:?} is not one of {accepted:?}")]
    WidgetKindMismatch {
        found: WidgetKind,
        accepted: &'static [WidgetKind],
    },
    #[error("table schema has no columns")]
    EmptySchema,
    #[error("group_size must be at least 1 when cards are present")]
    InvalidGroupSize,
    #[error("required field '{field}' is not set")]
    MissingField { field: &'static str },
    #[error("timestamp {millis}ms is outside the representable range")]
    TimestampOutOfRange { millis: i64 },
    #[error("{found} value is not a finite number")]
    NonFiniteNumber { found: ScalarKind },
}

/// The category of a [`SchemaError`], for filtering reports without matching on payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    SchemaMismatch,
    EnumViolation,
    GroupIndexOutOfRange,
    DuplicateColumnId,
    DuplicateWidgetId,
    WidgetKindMismatch,
    EmptySchema,
    InvalidGroupSize,
    MissingField,
    TimestampOutOfRange,
    NonFiniteNumber,
}

impl SchemaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            Self::EnumViolation { .. } => ErrorKind::EnumViolation,
            Self::GroupIndexOutOfRange { .. } => ErrorKind::GroupIndexOutOfRange,
            Self::DuplicateColumnId { .. } => ErrorKind::DuplicateColumnId,
            Self::DuplicateWidgetId { .. } => ErrorKind::DuplicateWidgetId,
            Self::WidgetKindMismatch { .. } => ErrorKind::WidgetKindMismatch,
            Self::EmptySchema => ErrorKind::EmptySchema,
            Self::InvalidGroupSize => ErrorKind::InvalidGroupSize,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::TimestampOutOfRange { .. } => ErrorKind::TimestampOutOfRange,
            Self::NonFiniteNumber { .. } => ErrorKind::NonFiniteNumber,
        }
    }

    /// Attaches the location the error was found at.
    pub fn at(self, path: FieldPath) -> Violation {
        Violation { path, error: self }
    }
}

/// A [`SchemaError`] together with where it was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: {error}")]
pub struct Violation {
    pub path: FieldPath,
    pub error: SchemaError,
}

impl Violation {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

/// Every violation found by one validation pass, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Number of violations of the given category.
    pub fn count(&self, kind: ErrorKind) -> usize {
        self.violations.iter().filter(|v| v.kind() == kind).count()
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.count(kind) > 0
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "\n  - {}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display_lists_every_violation() {
        let report = ValidationReport::new(vec![
            SchemaError::EmptySchema.at(FieldPath::root().field("data").field("schema")),
            SchemaError::DuplicateColumnId { id: "metric".into() }
                .at(FieldPath::root().field("data").field("schema").index(1)),
        ]);
        let text = report.to_string();
        assert!(text.starts_with("2 validation error(s)"));
        assert!(text.contains("data.schema: table schema has no columns"));
        assert!(text.contains("data.schema[1]: column id 'metric' is declared more than once"));
    }

    #[test]
    fn test_count_by_kind() {
        let report = ValidationReport::new(vec![
            SchemaError::InvalidGroupSize.at(FieldPath::root()),
            SchemaError::GroupIndexOutOfRange { group: 2, group_count: 2 }.at(FieldPath::root()),
            SchemaError::GroupIndexOutOfRange { group: 3, group_count: 2 }.at(FieldPath::root()),
        ]);
        assert_eq!(report.count(ErrorKind::GroupIndexOutOfRange), 2);
        assert!(report.contains(ErrorKind::InvalidGroupSize));
        assert!(!report.contains(ErrorKind::TypeMismatch));
    }
}
