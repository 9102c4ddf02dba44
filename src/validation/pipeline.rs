use log::trace;

use crate::model::Entity;
use crate::validation::{Errors, RequiredDate, RequiredDescription, Rule, VisitDateRule};

/// An ordered list of rules. Every entity is only handed to the rules that
/// apply to its kind.
#[derive(Default)]
pub struct Pipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules every visit has to pass before it can be scheduled.
    #[must_use]
    pub fn visits() -> Self {
        Self::new()
            .with_rule(RequiredDate)
            .with_rule(RequiredDescription)
            .with_rule(VisitDateRule)
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.push(rule);
        self
    }

    pub fn push(&mut self, rule: impl Rule + 'static) -> &mut Self {
        self.rules.push(Box::new(rule));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    #[must_use]
    pub fn validate(&self, entity: &dyn Entity) -> Errors {
        let mut errors = Errors::new();
        self.validate_into(entity, &mut errors);
        errors
    }

    /// Like [`Pipeline::validate`], but reports into an existing collection.
    pub fn validate_into(&self, entity: &dyn Entity, errors: &mut Errors) {
        let kind = entity.kind();

        for rule in self.rules.iter().filter(|rule| rule.applies(kind)) {
            trace!("checking {} with {}", kind, rule.name());
            rule.check(entity, errors);
        }
    }
}
