//! Validation rules for leaf values and the series that hold them.
//!
//! Both encodings must reproduce a sealed value exactly, so a decimal or
//! percent must be finite: JSON has no spelling for NaN or the infinities,
//! and NaN never compares equal to itself after decoding.

use crate::model::{Line, Point, Scalar};
use crate::validation::error::SchemaError;
use crate::validation::validator::{Validate, Validator};

/// Reports a NaN or infinite number under `field`.
pub(crate) fn check_finite(v: &mut Validator, field: &'static str, value: &Scalar) {
    if !value.is_finite() {
        v.field(field, |v| {
            v.report(SchemaError::NonFiniteNumber {
                found: value.kind(),
            })
        });
    }
}

/// Either side may hold any variant, but numbers must be finite.
impl Validate for Point {
    fn check(&self, v: &mut Validator) {
        check_finite(v, "x", self.x_value());
        check_finite(v, "y", self.y_value());
    }
}

impl Validate for Line {
    fn check(&self, v: &mut Validator) {
        v.each("data", self.points());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScalarKind;
    use crate::validation::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case(Scalar::decimal(f64::NAN), false)]
    #[case(Scalar::percent(f64::INFINITY), false)]
    #[case(Scalar::decimal(f64::NEG_INFINITY), false)]
    #[case(Scalar::decimal(f64::MAX), true)]
    #[case(Scalar::percent(-0.0), true)]
    #[case(Scalar::string("NaN"), true)]
    #[case(Scalar::null(), true)]
    fn test_is_finite(#[case] value: Scalar, #[case] finite: bool) {
        assert_eq!(value.is_finite(), finite);
    }

    #[test]
    fn test_line_reports_each_non_finite_side() {
        let line = Line::new("Drawdown").with_points([
            Point::new(Scalar::timestamp_millis(0), Scalar::percent(-1.0)),
            Point::new(Scalar::decimal(f64::NAN), Scalar::percent(f64::NEG_INFINITY)),
        ]);
        let report = line.validate().unwrap_err();
        let paths: Vec<String> = report.iter().map(|x| x.path.to_string()).collect();
        assert_eq!(paths, vec!["data[1].x", "data[1].y"]);
        assert_eq!(report.count(ErrorKind::NonFiniteNumber), 2);
        assert_eq!(
            report.violations()[1].error,
            SchemaError::NonFiniteNumber {
                found: ScalarKind::Percent,
            }
        );
    }
}
