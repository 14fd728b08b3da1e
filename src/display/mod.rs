//! Human-readable rendering for logs and consoles.
pub mod summary;

pub use summary::format_summary;

use std::fmt;

use chrono::SecondsFormat;

use crate::model::{Scalar, ScalarValue};

/// Renders the value without its variant name: `1.42`, `12.5%`, `Total Return`,
/// an RFC 3339 timestamp, `true`, or `null`.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            None => f.write_str("null"),
            Some(ScalarValue::Decimal(v)) => write!(f, "{v}"),
            Some(ScalarValue::Percent(v)) => write!(f, "{v}%"),
            Some(ScalarValue::String(v)) => f.write_str(v),
            Some(ScalarValue::DateTime(millis)) => match self.as_datetime() {
                Ok(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
                Err(_) => write!(f, "{millis}ms"),
            },
            Some(ScalarValue::Boolean(v)) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Scalar::null(), "null")]
    #[case(Scalar::decimal(1.42), "1.42")]
    #[case(Scalar::decimal(100.0), "100")]
    #[case(Scalar::percent(-12.5), "-12.5%")]
    #[case(Scalar::string("Total Return"), "Total Return")]
    #[case(Scalar::timestamp_millis(1_704_067_200_000), "2024-01-01T00:00:00.000Z")]
    #[case(Scalar::timestamp_millis(i64::MAX), "9223372036854775807ms")]
    #[case(Scalar::boolean(false), "false")]
    fn test_scalar_display(#[case] value: Scalar, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}
