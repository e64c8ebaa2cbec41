pub mod model;
pub mod routes;

pub use model::{Gym, GymId, Person, PersonId, PersonPayload};
