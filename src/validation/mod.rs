mod errors;
mod pipeline;
mod required;
mod validator;
mod visit_date_rule;

pub use errors::*;
pub use pipeline::Pipeline;
pub use required::*;
pub use validator::{Rule, Validator};
pub use visit_date_rule::*;

pub(crate) use validator::{check_visit, visit_rule};
