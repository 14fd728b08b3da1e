//! The Building → Sealed → Serialized life cycle.
//!
//! Any model value is in the *Building* state: mutable, with no consistency
//! guarantee. [`Seal::seal`] runs every rule and, if none fails, wraps the
//! value in [`Sealed`], which only hands out shared references. The codecs
//! accept `&Sealed<T>`, so only validated documents are ever serialized.
use std::fmt;
use std::ops::Deref;

use tracing::debug;

use super::error::ValidationReport;
use super::validator::Validate;

/// A value that passed validation and can no longer be mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Sealed<T> {
    value: T,
}

impl<T> Sealed<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns to the Building state; the value must be sealed again before encoding.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Sealed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for Sealed<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// A rejected seal: the untouched value plus every violation found.
#[derive(Debug, Clone, PartialEq)]
pub struct SealError<T> {
    value: T,
    report: ValidationReport,
}

impl<T> SealError<T> {
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// The value as it was handed to `seal`, for fixing and resealing.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, ValidationReport) {
        (self.value, self.report)
    }
}

impl<T> fmt::Display for SealError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seal rejected: {}", self.report)
    }
}

impl<T: fmt::Debug> std::error::Error for SealError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.report)
    }
}

/// The Building → Sealed transition, available on everything that validates.
pub trait Seal: Validate + Sized {
    fn seal(self) -> Result<Sealed<Self>, SealError<Self>> {
        let type_name = std::any::type_name::<Self>();
        debug!(target_type = type_name, "sealing");
        match self.validate() {
            Ok(()) => {
                debug!(target_type = type_name, "sealed");
                Ok(Sealed { value: self })
            }
            Err(report) => {
                debug!(target_type = type_name, violations = report.len(), "seal rejected");
                Err(SealError { value: self, report })
            }
        }
    }
}

impl<T: Validate> Seal for T {}
