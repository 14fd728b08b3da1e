//! Validation rules for chart headers, axes and chart payloads.
//!
//! Series order is whatever the caller appended; the per-point rule lives in
//! `scalars`.

use super::enums::{check_enum, check_widget_header};
use crate::model::{Axis, AxisKind, BarDef, ChartDef, LinesDef, WidgetKind};
use crate::validation::error::SchemaError;
use crate::validation::validator::{Validate, Validator};

impl Validate for Axis {
    fn check(&self, v: &mut Validator) {
        check_enum::<AxisKind>(v, "kind", self.kind);
    }
}

impl Validate for ChartDef {
    fn check(&self, v: &mut Validator) {
        check_chart_def(v, self, &[]);
    }
}

impl Validate for LinesDef {
    fn check(&self, v: &mut Validator) {
        check_payload_header(v, self.chart_def.as_ref(), Self::ACCEPTED_KINDS);
        v.each("lines", &self.lines);
    }
}

impl Validate for BarDef {
    fn check(&self, v: &mut Validator) {
        check_payload_header(v, self.chart_def.as_ref(), Self::ACCEPTED_KINDS);
        v.each("data", &self.data);
    }
}

fn check_payload_header(
    v: &mut Validator,
    chart_def: Option<&ChartDef>,
    accepted: &'static [WidgetKind],
) {
    match chart_def {
        Some(def) => v.field("chart_def", |v| check_chart_def(v, def, accepted)),
        None => v.report(SchemaError::MissingField { field: "chart_def" }),
    }
}

fn check_chart_def(v: &mut Validator, def: &ChartDef, accepted: &'static [WidgetKind]) {
    check_widget_header(v, def.kind, def.category, accepted);
    if let Some(axis) = &def.y_axis {
        v.nested("y_axis", axis);
    }
    if let Some(axis) = &def.x_axis {
        v.nested("x_axis", axis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Line, Point};
    use crate::validation::ErrorKind;

    fn header(kind: WidgetKind) -> ChartDef {
        ChartDef::new("equity", "Equity", kind, Category::StrategyBenchmark)
            .with_x_axis(Axis::new(AxisKind::DateTime, "Date"))
            .with_y_axis(Axis::new(AxisKind::Linear, "Returns (%)"))
    }

    #[test]
    fn test_valid_lines_chart() {
        let lines = LinesDef::new(header(WidgetKind::Lines)).with_line(Line::new("Portfolio"));
        assert_eq!(lines.validate(), Ok(()));
        assert_eq!(LinesDef::new(header(WidgetKind::Area)).validate(), Ok(()));
    }

    #[test]
    fn test_unset_header_reports_every_field() {
        let mut def = ChartDef::default();
        def.x_axis = Some(Axis {
            kind: 12,
            label: "?".into(),
        });
        let report = def.validate().unwrap_err();
        let paths: Vec<String> = report.iter().map(|x| x.path.to_string()).collect();
        assert_eq!(paths, vec!["kind", "category", "x_axis.kind"]);
        assert_eq!(report.count(ErrorKind::EnumViolation), 3);
    }

    #[test]
    fn test_payload_kind_must_match() {
        let bar = BarDef::new(header(WidgetKind::Lines));
        let report = bar.validate().unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path.to_string(), "chart_def.kind");
        assert_eq!(
            report.violations()[0].error,
            SchemaError::WidgetKindMismatch {
                found: WidgetKind::Lines,
                accepted: &[WidgetKind::Bar],
            }
        );
    }

    #[test]
    fn test_series_values_must_be_finite() {
        let mut bar = BarDef::new(header(WidgetKind::Bar));
        bar.push_series(Line::new("Monthly"));
        bar.push_series(Line::new("Yearly").with_points([Point::new("2024", f64::INFINITY)]));
        let report = bar.validate().unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].kind(), ErrorKind::NonFiniteNumber);
        assert_eq!(report.violations()[0].path.to_string(), "data[1].data[0].y");
    }

    #[test]
    fn test_missing_header() {
        let report = LinesDef::default().validate().unwrap_err();
        assert_eq!(
            report.violations()[0].error,
            SchemaError::MissingField { field: "chart_def" }
        );
    }
}
