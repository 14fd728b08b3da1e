//! Closed enumerations exposed at the serialization boundary.
//!
//! Numbers are part of the wire contract: new members are only ever appended,
//! existing ones are never renumbered. Every enumeration reserves `0` for
//! `Unspecified`, which is what a freshly defaulted message holds and which is
//! never accepted by the seal step.
//!
//! Model structs store these as raw `i32` (as the protobuf wire format does)
//! so that values written by a newer schema survive decoding; the typed
//! accessors generated by `prost` fall back to `Unspecified` for such values.

use serde::{Deserialize, Serialize};

/// Behaviour shared by the closed enumerations, used by the validation rules.
pub trait ClosedEnum: Copy + PartialEq + TryFrom<i32> + 'static {
    /// Name of the enumeration as reported in violations.
    const NAME: &'static str;
    /// The zero value, never valid in a sealed document.
    const UNSPECIFIED: Self;

    /// Resolves a raw wire number, rejecting unknown numbers and `Unspecified`.
    fn from_raw(raw: i32) -> Option<Self> {
        Self::try_from(raw).ok().filter(|v| *v != Self::UNSPECIFIED)
    }
}

/// The kind of dashboard widget a header describes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
pub enum WidgetKind {
    Unspecified = 0,
    Card = 1,
    Lines = 2,
    Bar = 3,
    DataTable = 4,
    Area = 5,
    Histogram = 6,
    Pie = 7,
    HeatMap = 8,
    BoxPlot = 9,
}

impl WidgetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Card => "card",
            Self::Lines => "lines",
            Self::Bar => "bar",
            Self::DataTable => "data_table",
            Self::Area => "area",
            Self::Histogram => "histogram",
            Self::Pie => "pie",
            Self::HeatMap => "heat_map",
            Self::BoxPlot => "box_plot",
        }
    }
}

impl ClosedEnum for WidgetKind {
    const NAME: &'static str = "WidgetKind";
    const UNSPECIFIED: Self = Self::Unspecified;
}

/// Business grouping of a widget within a report.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
pub enum Category {
    Unspecified = 0,
    /// Strategy performance compared against its benchmark.
    StrategyBenchmark = 1,
    RiskAnalysis = 2,
    ReturnsDistribution = 3,
    Positions = 4,
    Transactions = 5,
    RoundTrip = 6,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::StrategyBenchmark => "strategy_benchmark",
            Self::RiskAnalysis => "risk_analysis",
            Self::ReturnsDistribution => "returns_distribution",
            Self::Positions => "positions",
            Self::Transactions => "transactions",
            Self::RoundTrip => "round_trip",
        }
    }
}

impl ClosedEnum for Category {
    const NAME: &'static str = "Category";
    const UNSPECIFIED: Self = Self::Unspecified;
}

/// Declared value type of a table column or card.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
pub enum ScalarType {
    Unspecified = 0,
    String = 1,
    Decimal = 2,
    Percent = 3,
    DateTime = 4,
    Boolean = 5,
}

impl ScalarType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::String => "string",
            Self::Decimal => "decimal",
            Self::Percent => "percent",
            Self::DateTime => "datetime",
            Self::Boolean => "boolean",
        }
    }

    /// The scalar variant a value of this declared type must carry.
    ///
    /// `None` for `Unspecified`, which no value satisfies.
    pub fn kind(self) -> Option<ScalarKind> {
        match self {
            Self::Unspecified => None,
            Self::String => Some(ScalarKind::String),
            Self::Decimal => Some(ScalarKind::Decimal),
            Self::Percent => Some(ScalarKind::Percent),
            Self::DateTime => Some(ScalarKind::DateTime),
            Self::Boolean => Some(ScalarKind::Boolean),
        }
    }
}

impl ClosedEnum for ScalarType {
    const NAME: &'static str = "ScalarType";
    const UNSPECIFIED: Self = Self::Unspecified;
}

/// Scale used by a chart axis.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
pub enum AxisKind {
    Unspecified = 0,
    Linear = 1,
    Logarithmic = 2,
    Category = 3,
    DateTime = 4,
}

impl AxisKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::Category => "category",
            Self::DateTime => "datetime",
        }
    }
}

impl ClosedEnum for AxisKind {
    const NAME: &'static str = "AxisKind";
    const UNSPECIFIED: Self = Self::Unspecified;
}

/// The active variant of a [`Scalar`](super::Scalar), including null.
///
/// Unlike [`ScalarType`] this is not a wire type; it only describes in-memory
/// values and is what type-mismatch errors report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Null,
    Decimal,
    Percent,
    String,
    DateTime,
    Boolean,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Decimal => "decimal",
            Self::Percent => "percent",
            Self::String => "string",
            Self::DateTime => "datetime",
            Self::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_wire_numbers_are_stable() {
        assert_eq!(WidgetKind::Lines as i32, 2);
        assert_eq!(WidgetKind::Bar as i32, 3);
        assert_eq!(Category::StrategyBenchmark as i32, 1);
        assert_eq!(ScalarType::Percent as i32, 3);
        assert_eq!(AxisKind::DateTime as i32, 4);
    }

    #[rstest]
    #[case(0, None)]
    #[case(2, Some(WidgetKind::Lines))]
    #[case(4, Some(WidgetKind::DataTable))]
    #[case(42, None)]
    #[case(-1, None)]
    fn test_from_raw_rejects_unknown_and_unspecified(
        #[case] raw: i32,
        #[case] expected: Option<WidgetKind>,
    ) {
        assert_eq!(WidgetKind::from_raw(raw), expected);
    }

    #[test]
    fn test_scalar_type_maps_to_kind() {
        assert_eq!(ScalarType::Unspecified.kind(), None);
        assert_eq!(ScalarType::Percent.kind(), Some(ScalarKind::Percent));
        assert_eq!(ScalarType::DateTime.kind(), Some(ScalarKind::DateTime));
    }
}
