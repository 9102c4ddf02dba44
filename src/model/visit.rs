use serde::{Deserialize, Serialize};

use crate::model::{Entity, Kind};
use crate::time::Date;

/// A scheduled appointment of a pet at the clinic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Visit {
    pub id: Option<u32>,
    pub pet_id: Option<u32>,
    pub date: Option<Date>,
    pub description: Option<String>,
}

impl Visit {
    #[must_use]
    pub fn on(date: Date) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_pet(mut self, pet_id: u32) -> Self {
        self.pet_id = Some(pet_id);
        self
    }
}

impl AsRef<Visit> for Visit {
    fn as_ref(&self) -> &Visit {
        self
    }
}

impl Entity for Visit {
    fn kind(&self) -> Kind {
        Kind::Visit
    }

    fn as_visit(&self) -> Option<&Visit> {
        Some(self)
    }
}

/// A visit that continues the treatment started in an earlier visit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FollowUpVisit {
    #[serde(flatten)]
    pub visit: Visit,
    pub follows_up_on: u32,
}

impl AsRef<Visit> for FollowUpVisit {
    fn as_ref(&self) -> &Visit {
        &self.visit
    }
}

impl Entity for FollowUpVisit {
    fn kind(&self) -> Kind {
        Kind::FollowUpVisit
    }

    fn as_visit(&self) -> Option<&Visit> {
        Some(&self.visit)
    }
}
