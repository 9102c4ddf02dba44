use core::fmt;
use std::slice;
use std::vec;

use serde::Serialize;

/// Code used by the rules for fields that must be present.
pub const REQUIRED: &str = "required";

/// A validation failure of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldError {
    field: String,
    code: String,
    message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The machine readable error code, for example `sunday.not.allowed`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The message to show if the presentation layer has no translation for the code.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.code)
    }
}

/// Collects the field errors reported during a validation pass in the order
/// they were reported. A field may have any number of errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Errors {
    errors: Vec<FieldError>,
}

impl Errors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Reports that the value of `field` has been rejected.
    pub fn reject_value(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        default_message: impl Into<String>,
    ) {
        self.push(FieldError::new(field, code, default_message));
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn field_errors<'a, 'b>(
        &'a self,
        field: &'b str,
    ) -> impl Iterator<Item = &'a FieldError> + 'b
    where
        'a: 'b,
    {
        self.errors.iter().filter(move |error| error.field() == field)
    }

    /// The first error reported for `field`.
    #[must_use]
    pub fn field_error<'a>(&'a self, field: &str) -> Option<&'a FieldError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    #[must_use]
    pub fn has_field_errors(&self, field: &str) -> bool {
        self.field_error(field).is_some()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }

        Ok(())
    }
}

impl Extend<FieldError> for Errors {
    fn extend<T: IntoIterator<Item = FieldError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = FieldError;
    type IntoIter = vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a FieldError;
    type IntoIter = slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
