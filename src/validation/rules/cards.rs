//! Validation rules for card collections.

use super::enums::{check_enum, check_widget_header};
use super::scalars::check_finite;
use crate::model::{CardData, CardDef, ScalarType};
use crate::validation::error::SchemaError;
use crate::validation::validator::{Validate, Validator};

/// "The Grid Rule": `n` cards in groups of `group_size` form
/// `ceil(n / group_size)` groups, and every card must sit in one of them.
impl Validate for CardDef {
    fn check(&self, v: &mut Validator) {
        check_widget_header(v, self.kind, self.category, Self::ACCEPTED_KINDS);

        if self.group_size == 0 && !self.data.is_empty() {
            v.field("group_size", |v| v.report(SchemaError::InvalidGroupSize));
        }
        let group_count = self.group_count();

        v.field("data", |v| {
            for (i, card) in self.data.iter().enumerate() {
                v.index(i, |v| {
                    card.check(v);
                    // Without a usable group size the bound is meaningless; that is reported above.
                    if self.group_size > 0 && card.group >= group_count {
                        v.field("group", |v| {
                            v.report(SchemaError::GroupIndexOutOfRange {
                                group: card.group,
                                group_count,
                            })
                        });
                    }
                });
            }
        });
    }
}

/// A card's value must carry the variant its `value_type` declares and, if
/// numeric, be finite.
impl Validate for CardData {
    fn check(&self, v: &mut Validator) {
        let value = self.scalar();
        let expected = check_enum::<ScalarType>(v, "value_type", self.value_type)
            .and_then(ScalarType::kind);
        match expected {
            Some(expected) if value.kind() != expected => v.field("value", |v| {
                v.report(SchemaError::TypeMismatch {
                    expected,
                    found: value.kind(),
                })
            }),
            _ => check_finite(v, "value", value),
        }
    }
}
