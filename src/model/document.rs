//! The dashboard root and the widget envelope it holds.

use serde::{Deserialize, Serialize};

use super::card::CardDef;
use super::chart::{BarDef, LinesDef};
use super::enums::WidgetKind;
use super::table::Table;
use super::widget::WidgetMeta;

/// The payload of a [`Widget`]; exactly one variant per widget.
#[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetPayload {
    #[prost(message, tag = "1")]
    Lines(LinesDef),
    #[prost(message, tag = "2")]
    Bar(BarDef),
    #[prost(message, tag = "3")]
    Table(Table),
    #[prost(message, tag = "4")]
    Cards(CardDef),
}

impl WidgetPayload {
    /// The field name this payload occupies, used in violation paths.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Lines(_) => "lines",
            Self::Bar(_) => "bar",
            Self::Table(_) => "table",
            Self::Cards(_) => "cards",
        }
    }

    pub fn meta(&self) -> &dyn WidgetMeta {
        match self {
            Self::Lines(w) => w,
            Self::Bar(w) => w,
            Self::Table(w) => w,
            Self::Cards(w) => w,
        }
    }
}

/// One renderable unit of a dashboard.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Widget {
    #[prost(oneof = "WidgetPayload", tags = "1, 2, 3, 4")]
    pub payload: Option<WidgetPayload>,
}

impl Widget {
    pub fn as_lines(&self) -> Option<&LinesDef> {
        match &self.payload {
            Some(WidgetPayload::Lines(w)) => Some(w),
            _ => None,
        }
    }

    pub fn as_bar(&self) -> Option<&BarDef> {
        match &self.payload {
            Some(WidgetPayload::Bar(w)) => Some(w),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match &self.payload {
            Some(WidgetPayload::Table(w)) => Some(w),
            _ => None,
        }
    }

    pub fn as_cards(&self) -> Option<&CardDef> {
        match &self.payload {
            Some(WidgetPayload::Cards(w)) => Some(w),
            _ => None,
        }
    }
}

impl WidgetMeta for Widget {
    fn widget_id(&self) -> &str {
        self.payload.as_ref().map_or("", |p| p.meta().widget_id())
    }

    fn widget_title(&self) -> &str {
        self.payload.as_ref().map_or("", |p| p.meta().widget_title())
    }

    fn raw_widget_kind(&self) -> i32 {
        self.payload.as_ref().map_or(0, |p| p.meta().raw_widget_kind())
    }

    fn raw_widget_category(&self) -> i32 {
        self.payload.as_ref().map_or(0, |p| p.meta().raw_widget_category())
    }

    fn accepted_kinds(&self) -> &'static [WidgetKind] {
        match &self.payload {
            Some(p) => p.meta().accepted_kinds(),
            None => &[],
        }
    }
}

macro_rules! widget_from {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Widget {
            fn from(w: $ty) -> Self {
                Self {
                    payload: Some(WidgetPayload::$variant(w)),
                }
            }
        }
    };
}

widget_from!(Lines, LinesDef);
widget_from!(Bar, BarDef);
widget_from!(Table, Table);
widget_from!(Cards, CardDef);

/// The composition root: an ordered list of widgets forming one report.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(message, repeated, tag = "3")]
    pub widgets: Vec<Widget>,
}

impl Dashboard {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            widgets: Vec::new(),
        }
    }

    pub fn with_widget(mut self, widget: impl Into<Widget>) -> Self {
        self.widgets.push(widget.into());
        self
    }

    pub fn push(&mut self, widget: impl Into<Widget>) {
        self.widgets.push(widget.into());
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// First widget with the given id.
    pub fn find(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.widget_id() == id)
    }
}
