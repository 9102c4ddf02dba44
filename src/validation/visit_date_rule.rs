use log::debug;
use thiserror::Error;

use crate::model::Visit;
use crate::time::Date;
use crate::validation::{visit_rule, Errors, FieldError, Validator};

/// Rejects visits that are scheduled on a sunday.
///
/// A visit without a date is not checked, reporting a missing date is the job
/// of [`RequiredDate`](crate::validation::RequiredDate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitDateRule;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("{date}: Visits on Sundays are not allowed")]
pub struct SundayNotAllowed {
    date: Date,
}

impl SundayNotAllowed {
    pub const FIELD: &'static str = "date";
    pub const CODE: &'static str = "sunday.not.allowed";
    pub const MESSAGE: &'static str = "Visits on Sundays are not allowed";

    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }
}

impl From<SundayNotAllowed> for FieldError {
    fn from(_: SundayNotAllowed) -> Self {
        Self::new(
            SundayNotAllowed::FIELD,
            SundayNotAllowed::CODE,
            SundayNotAllowed::MESSAGE,
        )
    }
}

impl VisitDateRule {
    pub fn check_date(&self, date: Date) -> Result<(), SundayNotAllowed> {
        if date.is_sunday() {
            return Err(SundayNotAllowed { date });
        }

        Ok(())
    }
}

impl<T> Validator<T> for VisitDateRule
where
    T: AsRef<Visit> + ?Sized,
{
    fn validate(&self, target: &T, errors: &mut Errors) {
        let Some(date) = target.as_ref().date else {
            return;
        };

        if let Err(error) = self.check_date(date) {
            debug!("rejected visit: {}", error);
            errors.push(error.into());
        }
    }
}

visit_rule!(VisitDateRule);
