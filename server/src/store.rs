use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use shared::{Gym, GymId, Person, PersonId, PersonPayload};

use crate::error::ApiError;

type Result<T> = std::result::Result<T, ApiError>;

const GYMS: &str = "gyms";
const PERSONS: &str = "persons";

/// A person as kept on disk: the gym is a plain reference, expanded on read.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct PersonRecord {
    id: PersonId,
    name: String,
    phone_number: String,
    gym_id: Option<GymId>,
}

/// Next id to hand out for one table. Only ever moves forward, so ids of
/// deleted rows are never reused.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
struct Counter {
    next: u64,
}

/// Gyms and persons in two single-file JSON stores, plus a third holding
/// the id counters.
pub struct Store {
    gyms: jfs::Store,
    persons: jfs::Store,
    counters: jfs::Store,
    // serialises read-modify-write cycles and id allocation
    write: Mutex<()>,
}

impl Store {
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Store {
            gyms: jfs::Store::new_with_cfg(dir.join("gyms.json"), single_file())?,
            persons: jfs::Store::new_with_cfg(dir.join("persons.json"), single_file())?,
            counters: jfs::Store::new_with_cfg(dir.join("meta.json"), single_file())?,
            write: Mutex::new(()),
        })
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Takes the next id for `table`. Must be called with the write lock
    /// held. A missing counter starts past the highest id already stored.
    fn allocate<T>(&self, table: &str, existing: &BTreeMap<String, T>) -> Result<u64> {
        let id = match self.counters.all::<Counter>()?.remove(table) {
            Some(counter) => counter.next,
            None => highest_id(existing) + 1,
        };
        self.counters.save_with_id(&Counter { next: id + 1 }, table)?;
        Ok(id)
    }

    // ---- gyms ----

    pub fn gyms(&self) -> Result<Vec<Gym>> {
        Ok(sorted(self.gyms.all::<Gym>()?))
    }

    pub fn gym(&self, id: GymId) -> Result<Option<Gym>> {
        Ok(self.gyms.all::<Gym>()?.remove(&id.to_string()))
    }

    pub fn create_gym(&self, fields: Gym) -> Result<Gym> {
        let _guard = self.lock();
        let id = self.allocate(GYMS, &self.gyms.all::<Gym>()?)?;
        let gym = Gym {
            id: Some(id),
            ..fields
        };
        self.gyms.save_with_id(&gym, &id.to_string())?;
        Ok(gym)
    }

    pub fn update_gym(&self, id: GymId, fields: Gym) -> Result<Gym> {
        let _guard = self.lock();
        if self.gym(id)?.is_none() {
            return Err(ApiError::gym_not_found(id));
        }
        let gym = Gym {
            id: Some(id),
            ..fields
        };
        self.gyms.save_with_id(&gym, &id.to_string())?;
        Ok(gym)
    }

    /// Persons pointing at the gym keep the dangling reference and simply
    /// read back without a gym.
    pub fn delete_gym(&self, id: GymId) -> Result<()> {
        let _guard = self.lock();
        if self.gym(id)?.is_none() {
            return Err(ApiError::gym_not_found(id));
        }
        self.gyms.delete(&id.to_string())?;
        Ok(())
    }

    // ---- persons ----

    pub fn people(&self) -> Result<Vec<Person>> {
        let gyms = self.gyms.all::<Gym>()?;
        Ok(sorted(self.persons.all::<PersonRecord>()?)
            .into_iter()
            .map(|record| expand(record, &gyms))
            .collect())
    }

    pub fn person(&self, id: PersonId) -> Result<Person> {
        let record = self.record(id)?;
        Ok(expand(record, &self.gyms.all::<Gym>()?))
    }

    pub fn create_person(&self, payload: PersonPayload) -> Result<Person> {
        validate(&payload)?;
        let _guard = self.lock();
        let id = self.allocate(PERSONS, &self.persons.all::<PersonRecord>()?)?;
        let record = PersonRecord {
            id,
            name: payload.name,
            phone_number: payload.phone_number,
            gym_id: None,
        };
        self.persons.save_with_id(&record, &id.to_string())?;
        Ok(expand(record, &BTreeMap::new()))
    }

    /// Replaces the person's fields. The gym reference is cleared, as the
    /// body never carries one; callers re-assign it afterwards.
    pub fn update_person(&self, id: PersonId, payload: PersonPayload) -> Result<Person> {
        validate(&payload)?;
        let _guard = self.lock();
        let mut record = self.record(id)?;
        record.name = payload.name;
        record.phone_number = payload.phone_number;
        record.gym_id = None;
        self.persons.save_with_id(&record, &id.to_string())?;
        Ok(expand(record, &BTreeMap::new()))
    }

    pub fn assign_gym(&self, person: PersonId, gym: GymId) -> Result<Person> {
        let _guard = self.lock();
        let mut record = self.record(person)?;
        let gyms = self.gyms.all::<Gym>()?;
        if !gyms.contains_key(&gym.to_string()) {
            return Err(ApiError::gym_not_found(gym));
        }
        record.gym_id = Some(gym);
        self.persons.save_with_id(&record, &person.to_string())?;
        Ok(expand(record, &gyms))
    }

    pub fn delete_person(&self, id: PersonId) -> Result<()> {
        let _guard = self.lock();
        self.record(id)?;
        self.persons.delete(&id.to_string())?;
        Ok(())
    }

    fn record(&self, id: PersonId) -> Result<PersonRecord> {
        self.persons
            .all::<PersonRecord>()?
            .remove(&id.to_string())
            .ok_or_else(|| ApiError::person_not_found(id))
    }
}

fn single_file() -> jfs::Config {
    let mut cfg = jfs::Config::default();
    cfg.single = true;
    cfg
}

fn validate(payload: &PersonPayload) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("client name is required".to_string()));
    }
    Ok(())
}

fn expand(record: PersonRecord, gyms: &BTreeMap<String, Gym>) -> Person {
    let gym = record.gym_id.and_then(|id| gyms.get(&id.to_string()).cloned());
    Person {
        id: Some(record.id),
        name: record.name,
        phone_number: record.phone_number,
        gym,
    }
}

fn highest_id<T>(existing: &BTreeMap<String, T>) -> u64 {
    existing
        .keys()
        .filter_map(|key| key.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

/// jfs keys are strings, so "10" would sort before "2".
fn sorted<T>(map: BTreeMap<String, T>) -> Vec<T> {
    let mut entries: Vec<(u64, T)> = map
        .into_iter()
        .filter_map(|(key, value)| key.parse().ok().map(|id| (id, value)))
        .collect();
    entries.sort_by_key(|(id, _)| *id);
    entries.into_iter().map(|(_, value)| value).collect()
}
