use crate::model::{Entity, Kind, Visit};
use crate::validation::Errors;

/// A check of values of type `T`. Implementing it for a type is what makes a
/// rule applicable to that type, so a rule can not be called with anything else.
pub trait Validator<T: ?Sized> {
    fn validate(&self, target: &T, errors: &mut Errors);
}

/// A rule that is routed to entities by their [`Kind`].
///
/// The pipeline asks [`Rule::applies`] first and only calls [`Rule::check`]
/// for entities whose kind has been accepted.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn applies(&self, kind: Kind) -> bool;

    fn check(&self, entity: &dyn Entity, errors: &mut Errors);
}

/// Runs `validator` on the visit `entity` is or extends.
pub(crate) fn check_visit<V>(validator: &V, entity: &dyn Entity, errors: &mut Errors)
where
    V: Validator<Visit> + ?Sized,
{
    if let Some(visit) = entity.as_visit() {
        validator.validate(visit, errors);
    }
}

/// Implements [`Rule`] for a validator of everything that is a visit.
macro_rules! visit_rule {
    ($rule:ty) => {
        impl $crate::validation::Rule for $rule {
            fn name(&self) -> &'static str {
                stringify!($rule)
            }

            fn applies(&self, kind: $crate::model::Kind) -> bool {
                kind.is_assignable_to($crate::model::Kind::Visit)
            }

            fn check(
                &self,
                entity: &dyn $crate::model::Entity,
                errors: &mut $crate::validation::Errors,
            ) {
                $crate::validation::check_visit(self, entity, errors)
            }
        }
    };
}

pub(crate) use visit_rule;
