//! Resource paths of the gym API, relative to its base URL.
//!
//! Persons live under `/persons` only. Older call sites that used `/people`
//! were pointing at an endpoint the API never served.

use crate::model::{GymId, PersonId};

pub const GYMS: &str = "/gyms";
pub const PERSONS: &str = "/persons";

pub fn gym(id: GymId) -> String {
    format!("{}/{}", GYMS, id)
}

pub fn person(id: PersonId) -> String {
    format!("{}/{}", PERSONS, id)
}

pub fn person_gym(person: PersonId, gym: GymId) -> String {
    format!("{}/{}/gym/{}", PERSONS, person, gym)
}
