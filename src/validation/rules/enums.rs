//! Validation rule for closed-enumeration membership.

use crate::model::{Category, ClosedEnum, WidgetKind};
use crate::validation::error::SchemaError;
use crate::validation::validator::Validator;

/// Resolves `raw` as a member of `E`, reporting an `EnumViolation` under
/// `field` for unknown numbers and for `Unspecified`.
pub(crate) fn check_enum<E: ClosedEnum>(
    v: &mut Validator,
    field: &'static str,
    raw: i32,
) -> Option<E> {
    let resolved = E::from_raw(raw);
    if resolved.is_none() {
        v.field(field, |v| {
            v.report(SchemaError::EnumViolation {
                enumeration: E::NAME,
                value: raw,
            })
        });
    }
    resolved
}

/// The header rule shared by every widget.
///
/// `kind` and `category` must be valid members, and a valid `kind` must be one
/// the payload can be rendered as (an empty `accepted` list allows any).
pub(crate) fn check_widget_header(
    v: &mut Validator,
    kind: i32,
    category: i32,
    accepted: &'static [WidgetKind],
) {
    if let Some(kind) = check_enum::<WidgetKind>(v, "kind", kind) {
        if !accepted.is_empty() && !accepted.contains(&kind) {
            v.field("kind", |v| {
                v.report(SchemaError::WidgetKindMismatch { found: kind, accepted })
            });
        }
    }
    check_enum::<Category>(v, "category", category);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxisKind, ScalarType};
    use crate::validation::ErrorKind;

    #[test]
    fn test_check_enum_reports_at_field() {
        let mut v = Validator::new();
        assert_eq!(check_enum::<AxisKind>(&mut v, "kind", 2), Some(AxisKind::Logarithmic));
        assert_eq!(check_enum::<ScalarType>(&mut v, "value_type", 99), None);
        assert_eq!(check_enum::<ScalarType>(&mut v, "value_type", 0), None);

        let report = v.finish().unwrap_err();
        assert_eq!(report.len(), 2);
        assert_eq!(report.violations()[0].path.to_string(), "value_type");
        assert_eq!(
            report.violations()[0].error,
            SchemaError::EnumViolation {
                enumeration: "ScalarType",
                value: 99,
            }
        );
    }

    #[test]
    fn test_header_kind_mismatch_only_for_valid_kinds() {
        let mut v = Validator::new();
        let bar = WidgetKind::Bar as i32;
        check_widget_header(&mut v, bar, Category::Positions as i32, &[WidgetKind::DataTable]);
        check_widget_header(&mut v, 77, 0, &[WidgetKind::DataTable]);
        check_widget_header(&mut v, WidgetKind::Pie as i32, Category::RiskAnalysis as i32, &[]);

        let report = v.finish().unwrap_err();
        assert_eq!(report.count(ErrorKind::WidgetKindMismatch), 1);
        assert_eq!(report.count(ErrorKind::EnumViolation), 2);
    }
}
