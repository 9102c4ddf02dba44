use log::debug;

use crate::model::Visit;
use crate::validation::{visit_rule, Errors, Validator, REQUIRED};

const REQUIRED_MESSAGE: &str = "is required";

/// Rejects visits without a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredDate;

impl<T> Validator<T> for RequiredDate
where
    T: AsRef<Visit> + ?Sized,
{
    fn validate(&self, target: &T, errors: &mut Errors) {
        if target.as_ref().date.is_none() {
            debug!("rejected visit without a date");
            errors.reject_value("date", REQUIRED, REQUIRED_MESSAGE);
        }
    }
}

visit_rule!(RequiredDate);

/// Rejects visits without a description or with one that is only whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredDescription;

impl<T> Validator<T> for RequiredDescription
where
    T: AsRef<Visit> + ?Sized,
{
    fn validate(&self, target: &T, errors: &mut Errors) {
        let is_blank = target
            .as_ref()
            .description
            .as_deref()
            .map_or(true, |description| description.trim().is_empty());

        if is_blank {
            debug!("rejected visit without a description");
            errors.reject_value("description", REQUIRED, REQUIRED_MESSAGE);
        }
    }
}

visit_rule!(RequiredDescription);
