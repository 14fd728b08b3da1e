//! The capability set shared by every widget: identity, title, kind and category.

use super::enums::{Category, WidgetKind};

/// Read access to the metadata every dashboard widget carries.
///
/// Kind and category are exposed raw as well as typed, because a decoded
/// document may hold numbers this build does not know about.
pub trait WidgetMeta {
    fn widget_id(&self) -> &str;

    fn widget_title(&self) -> &str;

    fn raw_widget_kind(&self) -> i32;

    fn raw_widget_category(&self) -> i32;

    /// Widget kinds this payload can be rendered as. Empty means any.
    fn accepted_kinds(&self) -> &'static [WidgetKind] {
        &[]
    }

    /// The typed kind, `Unspecified` for unknown numbers.
    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::try_from(self.raw_widget_kind()).unwrap_or(WidgetKind::Unspecified)
    }

    /// The typed category, `Unspecified` for unknown numbers.
    fn widget_category(&self) -> Category {
        Category::try_from(self.raw_widget_category()).unwrap_or(Category::Unspecified)
    }
}
