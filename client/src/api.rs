use async_trait::async_trait;
use shared::{Gym, GymId, Person, PersonId, PersonPayload};

use crate::error::TransportError;

pub type Result<T> = std::result::Result<T, TransportError>;

/// Every call the front end makes against the gym API. Each method issues
/// exactly one request; nothing is retried, cached or deduplicated.
///
/// Futures are not `Send` because the browser implementation holds JS
/// handles across awaits.
#[async_trait(?Send)]
pub trait Api {
    async fn list_gyms(&self) -> Result<Vec<Gym>>;

    async fn create_gym(&self, gym: &Gym) -> Result<Gym>;

    async fn update_gym(&self, id: GymId, gym: &Gym) -> Result<Gym>;

    async fn delete_gym(&self, id: GymId) -> Result<()>;

    /// Persons with their gym expanded.
    async fn list_people(&self) -> Result<Vec<Person>>;

    async fn create_person(&self, payload: &PersonPayload) -> Result<Person>;

    async fn update_person(&self, id: PersonId, payload: &PersonPayload) -> Result<Person>;

    /// Points `person` at `gym`. Separate from create/update on purpose:
    /// the API has no combined endpoint.
    async fn assign_gym(&self, person: PersonId, gym: GymId) -> Result<()>;

    async fn delete_person(&self, id: PersonId) -> Result<()>;
}
