//! Defines the dashboard document model.
//!
//! Every type here is plain owned data that doubles as its own protobuf
//! message (via `prost` derives) and serde value. Children are exclusively
//! owned by their parent and the graph is a tree, so cloning, dropping and
//! encoding are all structural.
pub mod card;
pub mod chart;
pub mod document;
pub mod enums;
pub mod scalar;
pub mod table;
pub mod widget;

// Re-export key types for convenient access
pub use card::{CardData, CardDef};
pub use chart::{Axis, BarDef, ChartDef, Line, LinesDef, Point};
pub use document::{Dashboard, Widget, WidgetPayload};
pub use enums::{AxisKind, Category, ClosedEnum, ScalarKind, ScalarType, WidgetKind};
pub use scalar::{Scalar, ScalarValue};
pub use table::{ColumnDef, Table, TableData, TableRow};
pub use widget::WidgetMeta;
