use serde::{Deserialize, Serialize};

use crate::model::{Entity, Kind};
use crate::time::Date;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Owner {
    pub id: Option<u32>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl Entity for Owner {
    fn kind(&self) -> Kind {
        Kind::Owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pet {
    pub id: Option<u32>,
    pub owner_id: Option<u32>,
    pub name: String,
    pub birth_date: Option<Date>,
}

impl Entity for Pet {
    fn kind(&self) -> Kind {
        Kind::Pet
    }
}
