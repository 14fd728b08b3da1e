//! The central validator that orchestrates the execution of all validation rules.
use super::error::{SchemaError, ValidationReport, Violation};
use super::path::{FieldPath, PathSegment};

/// Types that can check their own structural invariants.
///
/// Implementations live next to the rules they apply (see `rules/`). They
/// report every problem to the [`Validator`] instead of stopping at the first,
/// and must not mutate anything, so validating twice gives the same report.
pub trait Validate {
    fn check(&self, validator: &mut Validator);

    /// Runs all rules for this value.
    ///
    /// # Returns
    /// - `Ok(())` if no violations are found.
    /// - `Err(ValidationReport)` containing every violation discovered.
    fn validate(&self) -> Result<(), ValidationReport> {
        let mut validator = Validator::new();
        self.check(&mut validator);
        validator.finish()
    }
}

/// Collects violations while the rules walk a document.
///
/// It tracks the path of the value currently being checked, so rules only
/// report the error and the location is attached automatically.
#[derive(Debug, Default)]
pub struct Validator {
    path: FieldPath,
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts validating at `base` instead of the document root.
    pub fn at(base: FieldPath) -> Self {
        Self {
            path: base,
            violations: Vec::new(),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Records an error at the current path.
    pub fn report(&mut self, error: SchemaError) {
        self.violations.push(error.at(self.path.clone()));
    }

    /// Runs `f` with `name` appended to the current path.
    pub fn field<F: FnOnce(&mut Self)>(&mut self, name: &'static str, f: F) {
        self.scoped(PathSegment::Field(name), f);
    }

    /// Runs `f` with `[i]` appended to the current path.
    pub fn index<F: FnOnce(&mut Self)>(&mut self, i: usize, f: F) {
        self.scoped(PathSegment::Index(i), f);
    }

    /// Validates a nested value under `name`.
    pub fn nested<T: Validate + ?Sized>(&mut self, name: &'static str, value: &T) {
        self.field(name, |v| value.check(v));
    }

    /// Validates each element of a collection under `name[i]`.
    pub fn each<'a, T, I>(&mut self, name: &'static str, items: I)
    where
        T: Validate + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.field(name, |v| {
            for (i, item) in items.into_iter().enumerate() {
                v.index(i, |v| item.check(v));
            }
        });
    }

    /// Records a missing sub-message under `name` or validates it.
    pub fn required<T: Validate>(&mut self, name: &'static str, value: Option<&T>) {
        match value {
            Some(inner) => self.nested(name, inner),
            None => self.report(SchemaError::MissingField { field: name }),
        }
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn finish(self) -> Result<(), ValidationReport> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport::new(self.violations))
        }
    }

    fn scoped<F: FnOnce(&mut Self)>(&mut self, segment: PathSegment, f: F) {
        self.path.push(segment);
        f(self);
        self.path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysEmpty;

    impl Validate for AlwaysEmpty {
        fn check(&self, validator: &mut Validator) {
            validator.report(SchemaError::EmptySchema);
        }
    }

    #[test]
    fn test_paths_are_scoped() {
        let items = [AlwaysEmpty, AlwaysEmpty];
        let mut v = Validator::new();
        v.each("tables", items.iter());
        v.required::<AlwaysEmpty>("header", None);

        let report = v.finish().unwrap_err();
        let paths: Vec<String> = report.iter().map(|x| x.path.to_string()).collect();
        assert_eq!(paths, vec!["tables[0]", "tables[1]", "<root>"]);
        assert_eq!(
            report.violations()[2].error,
            SchemaError::MissingField { field: "header" }
        );
    }

    #[test]
    fn test_empty_validator_passes() {
        assert_eq!(Validator::new().finish(), Ok(()));
    }
}
