mod utils;

pub mod input;
pub mod model;
pub mod time;
pub mod validation;

use log::{debug, info};
use serde::Serialize;

use crate::model::Visit;
use crate::validation::{Errors, Pipeline};

/// A visit that did not pass validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Position of the visit in the checked list.
    pub index: usize,
    pub id: Option<u32>,
    pub errors: Errors,
}

/// Validates every visit with `pipeline` and returns the ones that were rejected.
pub fn check_visits(visits: &[Visit], pipeline: &Pipeline) -> Vec<Rejection> {
    let rejections = visits
        .iter()
        .enumerate()
        .filter_map(|(index, visit)| {
            let errors = pipeline.validate(visit);
            debug!("visit #{}: {} errors", index, errors.len());

            errors.has_errors().then(|| Rejection {
                index,
                id: visit.id,
                errors,
            })
        })
        .collect::<Vec<_>>();

    info!(
        "checked {} visits, {} rejected",
        visits.len(),
        rejections.len()
    );

    rejections
}
