//! The static analysis engine for dashboard documents.
//!
//! Documents are built incrementally and are expected to be inconsistent while
//! under construction, so the structural rules are not applied by setters.
//! They run when a value is validated or sealed, and every violation found is
//! reported at once together with the path to the offending field.

// Publicly export the primary components for use by other modules.
pub use self::error::{ErrorKind, SchemaError, ValidationReport, Violation};
pub use self::path::{FieldPath, PathSegment};
pub use self::seal::{Seal, SealError, Sealed};
pub use self::validator::{Validate, Validator};

// --- MODULE DECLARATIONS ---
mod error;
mod path;
mod seal;
mod validator;
mod rules {
    pub mod cards;
    pub mod charts;
    pub mod document;
    pub mod enums;
    pub mod scalars;
    pub mod tables;
}
