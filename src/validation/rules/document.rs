//! Validation rules for the dashboard root.

use std::collections::HashSet;

use crate::model::{Dashboard, Widget, WidgetMeta, WidgetPayload};
use crate::validation::error::SchemaError;
use crate::validation::validator::{Validate, Validator};

impl Validate for Widget {
    fn check(&self, v: &mut Validator) {
        let Some(payload) = &self.payload else {
            v.report(SchemaError::MissingField { field: "payload" });
            return;
        };
        let name = payload.field_name();
        match payload {
            WidgetPayload::Lines(w) => v.nested(name, w),
            WidgetPayload::Bar(w) => v.nested(name, w),
            WidgetPayload::Table(w) => v.nested(name, w),
            WidgetPayload::Cards(w) => v.nested(name, w),
        }
    }
}

/// Checks every widget, then that non-empty widget ids are unique.
impl Validate for Dashboard {
    fn check(&self, v: &mut Validator) {
        v.each("widgets", &self.widgets);

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.widgets.len());
        v.field("widgets", |v| {
            for (i, widget) in self.widgets.iter().enumerate() {
                let id = widget.widget_id();
                if !id.is_empty() && !seen.insert(id) {
                    v.index(i, |v| v.report(SchemaError::DuplicateWidgetId { id: id.to_string() }));
                }
            }
        });
    }
}
