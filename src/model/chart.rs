//! Chart headers, axes and series.

use serde::{Deserialize, Serialize};

use super::enums::{AxisKind, Category, ClosedEnum, WidgetKind};
use super::scalar::Scalar;
use super::widget::WidgetMeta;
use crate::validation::SchemaError;

static NULL_SCALAR: Scalar = Scalar::null();

/// One chart axis: a scale kind and a display label.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    #[prost(enumeration = "AxisKind", tag = "1")]
    pub kind: i32,
    #[prost(string, tag = "2")]
    pub label: String,
}

impl Axis {
    pub fn new(kind: AxisKind, label: impl Into<String>) -> Self {
        Self {
            kind: kind as i32,
            label: label.into(),
        }
    }

    /// Builds an axis from a raw wire number, rejecting anything outside the closed set.
    pub fn from_raw(kind: i32, label: impl Into<String>) -> Result<Self, SchemaError> {
        let kind = AxisKind::from_raw(kind).ok_or(SchemaError::EnumViolation {
            enumeration: AxisKind::NAME,
            value: kind,
        })?;
        Ok(Self::new(kind, label))
    }
}

/// An `(x, y)` pair. The two sides are not required to share a variant.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    #[prost(message, optional, tag = "1")]
    pub x: Option<Scalar>,
    #[prost(message, optional, tag = "2")]
    pub y: Option<Scalar>,
}

impl Point {
    pub fn new(x: impl Into<Scalar>, y: impl Into<Scalar>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
        }
    }

    /// The x value, null when unset.
    pub fn x_value(&self) -> &Scalar {
        self.x.as_ref().unwrap_or(&NULL_SCALAR)
    }

    /// The y value, null when unset.
    pub fn y_value(&self) -> &Scalar {
        self.y.as_ref().unwrap_or(&NULL_SCALAR)
    }
}

/// A named series of points, kept in plot order.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub data: Vec<Point>,
}

impl Line {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
        }
    }

    pub fn with_points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.data.extend(points);
        self
    }

    pub fn push(&mut self, point: Point) {
        self.data.push(point);
    }

    pub fn push_xy(&mut self, x: impl Into<Scalar>, y: impl Into<Scalar>) {
        self.data.push(Point::new(x, y));
    }

    pub fn points(&self) -> &[Point] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Chart metadata shared by the chart payloads, also usable on its own as a header.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDef {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(enumeration = "WidgetKind", tag = "3")]
    pub kind: i32,
    #[prost(enumeration = "Category", tag = "4")]
    pub category: i32,
    #[prost(message, optional, tag = "5")]
    pub y_axis: Option<Axis>,
    #[prost(message, optional, tag = "6")]
    pub x_axis: Option<Axis>,
}

impl ChartDef {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: WidgetKind,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: kind as i32,
            category: category as i32,
            y_axis: None,
            x_axis: None,
        }
    }

    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = Some(axis);
        self
    }

    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = Some(axis);
        self
    }
}

impl WidgetMeta for ChartDef {
    fn widget_id(&self) -> &str {
        &self.id
    }

    fn widget_title(&self) -> &str {
        &self.title
    }

    fn raw_widget_kind(&self) -> i32 {
        self.kind
    }

    fn raw_widget_category(&self) -> i32 {
        self.category
    }
}

/// A line chart: a header plus its series.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct LinesDef {
    #[prost(message, optional, tag = "1")]
    pub chart_def: Option<ChartDef>,
    #[prost(message, repeated, tag = "2")]
    pub lines: Vec<Line>,
}

impl LinesDef {
    pub const ACCEPTED_KINDS: &'static [WidgetKind] = &[WidgetKind::Lines, WidgetKind::Area];

    pub fn new(chart_def: ChartDef) -> Self {
        Self {
            chart_def: Some(chart_def),
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// The header, created empty on first access if missing.
    pub fn chart_def_mut(&mut self) -> &mut ChartDef {
        self.chart_def.get_or_insert_with(ChartDef::default)
    }
}

/// A bar chart: one bar series per line, optionally stacked.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct BarDef {
    #[prost(message, optional, tag = "1")]
    pub chart_def: Option<ChartDef>,
    #[prost(message, repeated, tag = "2")]
    pub data: Vec<Line>,
    #[prost(bool, tag = "3")]
    pub stacked: bool,
}

impl BarDef {
    pub const ACCEPTED_KINDS: &'static [WidgetKind] = &[WidgetKind::Bar];

    pub fn new(chart_def: ChartDef) -> Self {
        Self {
            chart_def: Some(chart_def),
            data: Vec::new(),
            stacked: false,
        }
    }

    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn push_series(&mut self, series: Line) {
        self.data.push(series);
    }

    pub fn chart_def_mut(&mut self) -> &mut ChartDef {
        self.chart_def.get_or_insert_with(ChartDef::default)
    }
}

macro_rules! header_meta {
    ($ty:ty) => {
        impl WidgetMeta for $ty {
            fn widget_id(&self) -> &str {
                self.chart_def.as_ref().map_or("", |d| d.id.as_str())
            }

            fn widget_title(&self) -> &str {
                self.chart_def.as_ref().map_or("", |d| d.title.as_str())
            }

            fn raw_widget_kind(&self) -> i32 {
                self.chart_def.as_ref().map_or(0, |d| d.kind)
            }

            fn raw_widget_category(&self) -> i32 {
                self.chart_def.as_ref().map_or(0, |d| d.category)
            }

            fn accepted_kinds(&self) -> &'static [WidgetKind] {
                <$ty>::ACCEPTED_KINDS
            }
        }
    };
}

header_meta!(LinesDef);
header_meta!(BarDef);
