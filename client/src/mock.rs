//! In-memory stand-in for the gym API.
//!
//! `MockApi` behaves like the real server closely enough to drive the page
//! controllers end to end: it hands out ids, expands a person's gym on
//! reads and drops the association when a person is updated. Every call is
//! recorded in order, and any endpoint can be made to fail.

use std::cell::RefCell;
use std::collections::HashSet;

use async_trait::async_trait;
use shared::{Gym, GymId, Person, PersonId, PersonPayload};

use crate::api::{Api, Result};
use crate::error::TransportError;

/// One request as the server would have seen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListGyms,
    CreateGym(Gym),
    UpdateGym(GymId, Gym),
    DeleteGym(GymId),
    ListPeople,
    CreatePerson(PersonPayload),
    UpdatePerson(PersonId, PersonPayload),
    AssignGym(PersonId, GymId),
    DeletePerson(PersonId),
}

impl Call {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Call::ListGyms => Endpoint::ListGyms,
            Call::CreateGym(_) => Endpoint::CreateGym,
            Call::UpdateGym(..) => Endpoint::UpdateGym,
            Call::DeleteGym(_) => Endpoint::DeleteGym,
            Call::ListPeople => Endpoint::ListPeople,
            Call::CreatePerson(_) => Endpoint::CreatePerson,
            Call::UpdatePerson(..) => Endpoint::UpdatePerson,
            Call::AssignGym(..) => Endpoint::AssignGym,
            Call::DeletePerson(_) => Endpoint::DeletePerson,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListGyms,
    CreateGym,
    UpdateGym,
    DeleteGym,
    ListPeople,
    CreatePerson,
    UpdatePerson,
    AssignGym,
    DeletePerson,
}

#[derive(Debug, Clone)]
struct StoredPerson {
    id: PersonId,
    payload: PersonPayload,
    gym_id: Option<GymId>,
}

#[derive(Default)]
pub struct MockApi {
    gyms: RefCell<Vec<Gym>>,
    people: RefCell<Vec<StoredPerson>>,
    next_id: RefCell<u64>,
    calls: RefCell<Vec<Call>>,
    failing: RefCell<HashSet<Endpoint>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with stored gyms. Ids are taken as given.
    pub fn with_gyms(gyms: Vec<Gym>) -> Self {
        let api = Self::new();
        for gym in gyms {
            api.insert_gym(gym);
        }
        api
    }

    pub fn insert_gym(&self, gym: Gym) -> GymId {
        let id = gym.id.unwrap_or_else(|| self.allocate_id());
        self.bump_past(id);
        self.gyms.borrow_mut().push(Gym {
            id: Some(id),
            ..gym
        });
        id
    }

    pub fn insert_person(&self, person: Person) -> PersonId {
        let id = person.id.unwrap_or_else(|| self.allocate_id());
        self.bump_past(id);
        self.people.borrow_mut().push(StoredPerson {
            id,
            payload: PersonPayload::from(&person),
            gym_id: person.gym_id(),
        });
        id
    }

    /// Make every later call to `endpoint` fail with a 500.
    pub fn fail(&self, endpoint: Endpoint) {
        self.failing.borrow_mut().insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failing.borrow_mut().remove(&endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Returns the recorded calls and starts a fresh log.
    pub fn take_calls(&self) -> Vec<Call> {
        self.calls.borrow_mut().drain(..).collect()
    }

    pub fn gyms(&self) -> Vec<Gym> {
        self.gyms.borrow().clone()
    }

    pub fn people(&self) -> Vec<Person> {
        self.people
            .borrow()
            .iter()
            .map(|stored| self.expand(stored))
            .collect()
    }

    fn record(&self, call: Call) -> Result<()> {
        let endpoint = call.endpoint();
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&endpoint) {
            return Err(TransportError::Status {
                code: 500,
                text: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }

    fn allocate_id(&self) -> u64 {
        let mut next = self.next_id.borrow_mut();
        *next += 1;
        *next
    }

    fn bump_past(&self, id: u64) {
        let mut next = self.next_id.borrow_mut();
        if *next < id {
            *next = id;
        }
    }

    fn expand(&self, stored: &StoredPerson) -> Person {
        let gym = stored
            .gym_id
            .and_then(|id| self.gyms.borrow().iter().find(|g| g.id == Some(id)).cloned());
        Person {
            id: Some(stored.id),
            name: stored.payload.name.clone(),
            phone_number: stored.payload.phone_number.clone(),
            gym,
        }
    }

    fn not_found(what: &str, id: u64) -> TransportError {
        TransportError::Status {
            code: 404,
            text: format!("{} {} not found", what, id),
        }
    }
}

#[async_trait(?Send)]
impl Api for MockApi {
    async fn list_gyms(&self) -> Result<Vec<Gym>> {
        self.record(Call::ListGyms)?;
        Ok(self.gyms())
    }

    async fn create_gym(&self, gym: &Gym) -> Result<Gym> {
        self.record(Call::CreateGym(gym.clone()))?;
        let id = self.insert_gym(gym.without_id());
        Ok(Gym {
            id: Some(id),
            ..gym.clone()
        })
    }

    async fn update_gym(&self, id: GymId, gym: &Gym) -> Result<Gym> {
        self.record(Call::UpdateGym(id, gym.clone()))?;
        let mut gyms = self.gyms.borrow_mut();
        let stored = gyms
            .iter_mut()
            .find(|g| g.id == Some(id))
            .ok_or_else(|| Self::not_found("gym", id))?;
        *stored = Gym {
            id: Some(id),
            ..gym.clone()
        };
        Ok(stored.clone())
    }

    async fn delete_gym(&self, id: GymId) -> Result<()> {
        self.record(Call::DeleteGym(id))?;
        let mut gyms = self.gyms.borrow_mut();
        let before = gyms.len();
        gyms.retain(|g| g.id != Some(id));
        if gyms.len() == before {
            return Err(Self::not_found("gym", id));
        }
        Ok(())
    }

    async fn list_people(&self) -> Result<Vec<Person>> {
        self.record(Call::ListPeople)?;
        Ok(self.people())
    }

    async fn create_person(&self, payload: &PersonPayload) -> Result<Person> {
        self.record(Call::CreatePerson(payload.clone()))?;
        let id = self.allocate_id();
        let stored = StoredPerson {
            id,
            payload: payload.clone(),
            gym_id: None,
        };
        let person = self.expand(&stored);
        self.people.borrow_mut().push(stored);
        Ok(person)
    }

    async fn update_person(&self, id: PersonId, payload: &PersonPayload) -> Result<Person> {
        self.record(Call::UpdatePerson(id, payload.clone()))?;
        let mut people = self.people.borrow_mut();
        let stored = people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::not_found("person", id))?;
        stored.payload = payload.clone();
        stored.gym_id = None;
        let stored = stored.clone();
        drop(people);
        Ok(self.expand(&stored))
    }

    async fn assign_gym(&self, person: PersonId, gym: GymId) -> Result<()> {
        self.record(Call::AssignGym(person, gym))?;
        if !self.gyms.borrow().iter().any(|g| g.id == Some(gym)) {
            return Err(Self::not_found("gym", gym));
        }
        let mut people = self.people.borrow_mut();
        let stored = people
            .iter_mut()
            .find(|p| p.id == person)
            .ok_or_else(|| Self::not_found("person", person))?;
        stored.gym_id = Some(gym);
        Ok(())
    }

    async fn delete_person(&self, id: PersonId) -> Result<()> {
        self.record(Call::DeletePerson(id))?;
        let mut people = self.people.borrow_mut();
        let before = people.len();
        people.retain(|p| p.id != id);
        if people.len() == before {
            return Err(Self::not_found("person", id));
        }
        Ok(())
    }
}
