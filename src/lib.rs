//! Data model and serialization contract for portfolio-analytics dashboards.
//!
//! A dashboard is built from [`Scalar`] values composed into chart series,
//! table rows and card groups, each carried by a [`Widget`]. Documents are
//! mutable and unchecked while being built; [`Seal::seal`] validates the whole
//! tree at once and yields a [`Sealed`] value, the only thing the [`codec`]
//! functions will encode.
//!
//! ```
//! use epoch_folio_core::codec;
//! use epoch_folio_core::{Category, ColumnDef, Dashboard, Scalar, ScalarType};
//! use epoch_folio_core::{Seal, Table, TableData, WidgetKind};
//!
//! let mut data = TableData::new(vec![
//!     ColumnDef::new("metric", "Metric", ScalarType::String),
//!     ColumnDef::new("portfolio", "Portfolio", ScalarType::Percent),
//! ]);
//! data.add_row(vec![Scalar::string("Total Return"), Scalar::percent(12.5)]).unwrap();
//!
//! let table = Table::new("summary", "Summary", WidgetKind::DataTable, Category::Positions)
//!     .with_data(data);
//! let dashboard = Dashboard::new("report", "Report").with_widget(table);
//! let sealed = dashboard.seal().unwrap();
//! let bytes = codec::encode(&sealed);
//! assert_eq!(codec::decode::<Dashboard>(&bytes).unwrap(), *sealed);
//! ```

pub mod codec;
pub mod display;
pub mod model;
pub mod validation;

pub use codec::CodecError;
pub use display::format_summary;
pub use model::{
    Axis, AxisKind, BarDef, CardData, CardDef, Category, ChartDef, ClosedEnum, ColumnDef, Dashboard,
    Line, LinesDef, Point, Scalar, ScalarKind, ScalarType, ScalarValue, Table, TableData, TableRow,
    Widget, WidgetKind, WidgetMeta, WidgetPayload,
};
pub use validation::{
    ErrorKind, FieldPath, SchemaError, Seal, SealError, Sealed, Validate, ValidationReport,
    Violation,
};
