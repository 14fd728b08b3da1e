//! The leaf value type used by points, table cells and cards.

use std::cmp::Ordering;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ScalarKind, ScalarType};
use crate::validation::SchemaError;

/// The populated variant of a [`Scalar`].
///
/// `Decimal` and `Percent` both carry an `f64` but are distinct: a percent of
/// `12.5` means 12.5%, a decimal of `12.5` is a bare number.
#[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarValue {
    #[prost(double, tag = "1")]
    Decimal(f64),
    #[prost(double, tag = "2")]
    Percent(f64),
    #[prost(string, tag = "3")]
    String(String),
    /// Milliseconds since the Unix epoch, UTC.
    #[prost(int64, tag = "4")]
    DateTime(i64),
    #[prost(bool, tag = "5")]
    Boolean(bool),
}

/// A tagged union holding at most one value. The empty state is null.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Scalar {
    #[prost(oneof = "ScalarValue", tags = "1, 2, 3, 4, 5")]
    value: Option<ScalarValue>,
}

impl Scalar {
    pub const fn null() -> Self {
        Self { value: None }
    }

    pub fn decimal(v: f64) -> Self {
        ScalarValue::Decimal(v).into()
    }

    pub fn percent(v: f64) -> Self {
        ScalarValue::Percent(v).into()
    }

    pub fn string(v: impl Into<String>) -> Self {
        ScalarValue::String(v.into()).into()
    }

    pub fn datetime(v: DateTime<Utc>) -> Self {
        ScalarValue::DateTime(v.timestamp_millis()).into()
    }

    pub fn timestamp_millis(millis: i64) -> Self {
        ScalarValue::DateTime(millis).into()
    }

    pub fn boolean(v: bool) -> Self {
        ScalarValue::Boolean(v).into()
    }

    /// The active variant, `ScalarKind::Null` when empty.
    pub fn kind(&self) -> ScalarKind {
        match &self.value {
            None => ScalarKind::Null,
            Some(ScalarValue::Decimal(_)) => ScalarKind::Decimal,
            Some(ScalarValue::Percent(_)) => ScalarKind::Percent,
            Some(ScalarValue::String(_)) => ScalarKind::String,
            Some(ScalarValue::DateTime(_)) => ScalarKind::DateTime,
            Some(ScalarValue::Boolean(_)) => ScalarKind::Boolean,
        }
    }

    pub fn value(&self) -> Option<&ScalarValue> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<ScalarValue> {
        self.value
    }

    pub fn has_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn has_decimal(&self) -> bool {
        matches!(self.value, Some(ScalarValue::Decimal(_)))
    }

    pub fn has_percent(&self) -> bool {
        matches!(self.value, Some(ScalarValue::Percent(_)))
    }

    pub fn has_string(&self) -> bool {
        matches!(self.value, Some(ScalarValue::String(_)))
    }

    pub fn has_datetime(&self) -> bool {
        matches!(self.value, Some(ScalarValue::DateTime(_)))
    }

    pub fn has_boolean(&self) -> bool {
        matches!(self.value, Some(ScalarValue::Boolean(_)))
    }

    pub fn as_decimal(&self) -> Result<f64, SchemaError> {
        match self.value {
            Some(ScalarValue::Decimal(v)) => Ok(v),
            _ => Err(self.mismatch(ScalarKind::Decimal)),
        }
    }

    pub fn as_percent(&self) -> Result<f64, SchemaError> {
        match self.value {
            Some(ScalarValue::Percent(v)) => Ok(v),
            _ => Err(self.mismatch(ScalarKind::Percent)),
        }
    }

    pub fn as_str(&self) -> Result<&str, SchemaError> {
        match &self.value {
            Some(ScalarValue::String(v)) => Ok(v),
            _ => Err(self.mismatch(ScalarKind::String)),
        }
    }

    pub fn as_timestamp_millis(&self) -> Result<i64, SchemaError> {
        match self.value {
            Some(ScalarValue::DateTime(v)) => Ok(v),
            _ => Err(self.mismatch(ScalarKind::DateTime)),
        }
    }

    /// Reads a datetime value.
    ///
    /// A decoded timestamp outside chrono's range fails with
    /// `TimestampOutOfRange` rather than being clamped.
    pub fn as_datetime(&self) -> Result<DateTime<Utc>, SchemaError> {
        let millis = self.as_timestamp_millis()?;
        Utc.timestamp_millis_opt(millis)
            .single()
            .ok_or(SchemaError::TimestampOutOfRange { millis })
    }

    pub fn as_boolean(&self) -> Result<bool, SchemaError> {
        match self.value {
            Some(ScalarValue::Boolean(v)) => Ok(v),
            _ => Err(self.mismatch(ScalarKind::Boolean)),
        }
    }

    /// False only for a decimal or percent holding NaN or an infinity.
    pub fn is_finite(&self) -> bool {
        match self.value {
            Some(ScalarValue::Decimal(v)) | Some(ScalarValue::Percent(v)) => v.is_finite(),
            _ => true,
        }
    }

    /// Whether this value carries the variant a column or card declares.
    ///
    /// Null never conforms, and nothing conforms to `Unspecified`.
    pub fn conforms_to(&self, declared: ScalarType) -> bool {
        declared.kind() == Some(self.kind())
    }

    fn mismatch(&self, expected: ScalarKind) -> SchemaError {
        SchemaError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<ScalarValue> for Scalar {
    fn from(value: ScalarValue) -> Self {
        Self { value: Some(value) }
    }
}

/// Bare numbers become decimals; percents must be built explicitly.
impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::decimal(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::string(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Self::datetime(v)
    }
}

/// Ordering only exists between two values of the same variant.
impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.value, &other.value) {
            (None, None) => Some(Ordering::Equal),
            (Some(ScalarValue::Decimal(a)), Some(ScalarValue::Decimal(b)))
            | (Some(ScalarValue::Percent(a)), Some(ScalarValue::Percent(b))) => a.partial_cmp(b),
            (Some(ScalarValue::String(a)), Some(ScalarValue::String(b))) => a.partial_cmp(b),
            (Some(ScalarValue::DateTime(a)), Some(ScalarValue::DateTime(b))) => a.partial_cmp(b),
            (Some(ScalarValue::Boolean(a)), Some(ScalarValue::Boolean(b))) => a.partial_cmp(b),
            _ => None,
        }
    }
}
