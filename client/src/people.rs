//! Clients page: the persons table, the gym selector and the two-phase save.
//!
//! Saving a person is two independent requests. The person's own fields go
//! first; the gym association follows through its own endpoint once the
//! person's id is known. There is no rollback: if the second request fails
//! the person stays saved without the gym, and `SaveOutcome` says so.

use futures::future::try_join;
use shared::{Gym, GymId, Person, PersonId, PersonPayload};
use tracing::{debug, error, warn};

use crate::api::Api;
use crate::dialog::Dialog;
use crate::error::TransportError;
use crate::request::{LoadGuard, RequestState};

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Shown wherever a person has no gym.
pub const NO_GYM: &str = "—";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub phone_number: String,
    pub gym_id: Option<GymId>,
}

impl PersonDraft {
    pub fn from_person(person: &Person) -> Self {
        PersonDraft {
            name: person.name.clone(),
            phone_number: person.phone_number.clone(),
            gym_id: person.gym_id(),
        }
    }

    pub fn payload(&self) -> PersonPayload {
        PersonPayload {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

/// Select value → gym id. The empty option means "no gym".
pub fn parse_gym_choice(value: &str) -> Option<GymId> {
    value.trim().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(PersonId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GymAssignment {
    NotRequested,
    Assigned(GymId),
    Failed(GymId, TransportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The first request failed; nothing was written and nothing else sent.
    PersonFailed(TransportError),
    Saved {
        person: Person,
        gym: GymAssignment,
    },
}

impl SaveOutcome {
    pub fn person_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }

    pub fn gym_assigned(&self) -> bool {
        matches!(
            self,
            SaveOutcome::Saved {
                gym: GymAssignment::Assigned(_),
                ..
            }
        )
    }
}

/// Save the person's own fields, then, if a gym was picked, assign it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePerson {
    pub target: SaveTarget,
    pub payload: PersonPayload,
    pub gym_id: Option<GymId>,
}

impl SavePerson {
    pub async fn execute<A: Api + ?Sized>(self, api: &A) -> SaveOutcome {
        let saved = match self.target {
            SaveTarget::Create => api.create_person(&self.payload).await,
            SaveTarget::Update(id) => api.update_person(id, &self.payload).await,
        };
        let person = match saved {
            Ok(person) => person,
            Err(err) => return SaveOutcome::PersonFailed(err),
        };

        let gym = match self.gym_id {
            None => GymAssignment::NotRequested,
            Some(gym_id) => {
                let person_id = match self.target {
                    SaveTarget::Update(id) => Some(id),
                    SaveTarget::Create => person.id,
                };
                match person_id {
                    Some(person_id) => match api.assign_gym(person_id, gym_id).await {
                        Ok(()) => GymAssignment::Assigned(gym_id),
                        Err(err) => GymAssignment::Failed(gym_id, err),
                    },
                    None => GymAssignment::Failed(
                        gym_id,
                        TransportError::decode("created person came back without an id"),
                    ),
                }
            }
        };

        SaveOutcome::Saved { person, gym }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub people: Vec<Person>,
    /// Choices for the gym selector, fetched alongside `people`.
    pub gyms: Vec<Gym>,
    pub dialog: Dialog<PersonDraft>,
    pub request: RequestState,
    loads: LoadGuard,
}

impl Model {
    /// Drops whatever loads are still in flight.
    pub fn unmount(&mut self) {
        self.loads.unmount(&mut self.request);
        self.dialog.close();
    }

    /// The gym type to show for `person`. The fetched gym list wins over
    /// the copy embedded in the person.
    pub fn gym_label<'a>(&'a self, person: &'a Person) -> &'a str {
        let embedded = match &person.gym {
            Some(gym) => gym,
            None => return NO_GYM,
        };
        let joined = embedded
            .id
            .and_then(|id| self.gyms.iter().find(|gym| gym.id == Some(id)));
        let kind = joined.unwrap_or(embedded).kind.as_str();
        if kind.is_empty() {
            NO_GYM
        } else {
            kind
        }
    }

    fn load(&mut self) -> Cmd {
        Cmd::Load {
            generation: self.loads.begin(&mut self.request),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    PhoneNumber,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    LoadAll,
    Loaded {
        generation: u64,
        result: Result<(Vec<Person>, Vec<Gym>), TransportError>,
    },
    OpenCreate,
    OpenEdit(Person),
    FieldChanged(Field, String),
    GymSelected(Option<GymId>),
    Save,
    Saved(SaveOutcome),
    Cancel,
    Remove(PersonId),
    Removed(Result<(), TransportError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Persons and gyms, requested together and applied together.
    Load { generation: u64 },
    Save(SavePerson),
    Delete(PersonId),
}

impl Cmd {
    pub async fn perform<A: Api + ?Sized>(self, api: &A) -> Msg {
        match self {
            Cmd::Load { generation } => Msg::Loaded {
                generation,
                result: try_join(api.list_people(), api.list_gyms()).await,
            },
            Cmd::Save(command) => Msg::Saved(command.execute(api).await),
            Cmd::Delete(id) => Msg::Removed(api.delete_person(id).await),
        }
    }
}

pub fn update(msg: Msg, model: &mut Model) -> Option<Cmd> {
    match msg {
        Msg::LoadAll => Some(model.load()),

        Msg::Loaded { generation, result } => {
            if !model.loads.is_current(generation) {
                debug!(generation, current = model.loads.current(), "dropping stale client list");
                return None;
            }
            match result {
                Ok((people, gyms)) => {
                    model.people = people;
                    model.gyms = gyms;
                    model.request.load_succeeded();
                }
                Err(err) => {
                    error!(error = %err, "failed to load clients");
                    model.request.load_failed(err);
                }
            }
            None
        }

        Msg::OpenCreate => {
            model.dialog.open_create(PersonDraft::default());
            None
        }

        Msg::OpenEdit(person) => {
            match person.id {
                Some(id) => model.dialog.open_edit(id, PersonDraft::from_person(&person)),
                None => warn!(?person, "cannot edit a client without an id"),
            }
            None
        }

        Msg::FieldChanged(field, value) => {
            if let Some(draft) = model.dialog.draft_mut() {
                match field {
                    Field::Name => draft.name = value,
                    Field::PhoneNumber => draft.phone_number = value,
                }
            }
            None
        }

        Msg::GymSelected(gym_id) => {
            if let Some(draft) = model.dialog.draft_mut() {
                draft.gym_id = gym_id;
            }
            None
        }

        Msg::Save => {
            let command = match &model.dialog {
                Dialog::Closed => return None,
                Dialog::OpenForCreate { draft } => SavePerson {
                    target: SaveTarget::Create,
                    payload: draft.payload(),
                    gym_id: draft.gym_id,
                },
                Dialog::OpenForEdit { id, draft } => SavePerson {
                    target: SaveTarget::Update(*id),
                    payload: draft.payload(),
                    gym_id: draft.gym_id,
                },
            };
            if !model.request.begin_submit() {
                debug!("save ignored, a request is already outstanding");
                return None;
            }
            Some(Cmd::Save(command))
        }

        Msg::Saved(SaveOutcome::PersonFailed(err)) => {
            error!(error = %err, "failed to save client");
            model.request.fail(err);
            None
        }

        Msg::Saved(SaveOutcome::Saved { person, gym }) => {
            if let GymAssignment::Failed(gym_id, err) = &gym {
                warn!(
                    person = ?person.id,
                    gym = gym_id,
                    error = %err,
                    "client saved but gym assignment failed"
                );
            }
            model.request.finish();
            model.dialog.close();
            Some(model.load())
        }

        Msg::Cancel => {
            model.dialog.close();
            None
        }

        Msg::Remove(id) => {
            if !model.request.begin_submit() {
                debug!(id, "delete ignored, a request is already outstanding");
                return None;
            }
            Some(Cmd::Delete(id))
        }

        Msg::Removed(Ok(())) => {
            model.request.finish();
            Some(model.load())
        }

        Msg::Removed(Err(err)) => {
            error!(error = %err, "failed to delete client");
            model.request.fail(err);
            None
        }
    }
}
