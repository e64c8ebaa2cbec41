//! Gyms page: the card grid and its add/edit dialog.

use shared::{Gym, GymId};
use tracing::{debug, error, warn};

use crate::api::Api;
use crate::dialog::Dialog;
use crate::error::TransportError;
use crate::request::{LoadGuard, RequestState};

#[cfg(target_arch = "wasm32")]
pub mod view;

#[derive(Debug, Default)]
pub struct Model {
    /// Exactly what the last accepted load returned.
    pub gyms: Vec<Gym>,
    /// Drafts are id-less gyms; the edit target lives in the dialog.
    pub dialog: Dialog<Gym>,
    pub request: RequestState,
    loads: LoadGuard,
}

impl Model {
    /// Drops whatever loads are still in flight.
    pub fn unmount(&mut self) {
        self.loads.unmount(&mut self.request);
        self.dialog.close();
    }

    fn load(&mut self) -> Cmd {
        Cmd::Load {
            generation: self.loads.begin(&mut self.request),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Number,
    Address,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    LoadAll,
    Loaded {
        generation: u64,
        result: Result<Vec<Gym>, TransportError>,
    },
    OpenCreate,
    OpenEdit(Gym),
    FieldChanged(Field, String),
    Save,
    Saved(Result<Gym, TransportError>),
    Cancel,
    Remove(GymId),
    Removed(Result<(), TransportError>),
}

/// The one request an update asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    Load { generation: u64 },
    Create(Gym),
    Update(GymId, Gym),
    Delete(GymId),
}

impl Cmd {
    pub async fn perform<A: Api + ?Sized>(self, api: &A) -> Msg {
        match self {
            Cmd::Load { generation } => Msg::Loaded {
                generation,
                result: api.list_gyms().await,
            },
            Cmd::Create(draft) => Msg::Saved(api.create_gym(&draft).await),
            Cmd::Update(id, draft) => Msg::Saved(api.update_gym(id, &draft).await),
            Cmd::Delete(id) => Msg::Removed(api.delete_gym(id).await),
        }
    }
}

pub fn update(msg: Msg, model: &mut Model) -> Option<Cmd> {
    match msg {
        Msg::LoadAll => Some(model.load()),

        Msg::Loaded { generation, result } => {
            if !model.loads.is_current(generation) {
                debug!(generation, current = model.loads.current(), "dropping stale gym list");
                return None;
            }
            match result {
                Ok(gyms) => {
                    model.gyms = gyms;
                    model.request.load_succeeded();
                }
                Err(err) => {
                    error!(error = %err, "failed to load gyms");
                    model.request.load_failed(err);
                }
            }
            None
        }

        Msg::OpenCreate => {
            model.dialog.open_create(Gym::default());
            None
        }

        Msg::OpenEdit(gym) => {
            match gym.id {
                Some(id) => model.dialog.open_edit(id, gym.without_id()),
                None => warn!(?gym, "cannot edit a gym without an id"),
            }
            None
        }

        Msg::FieldChanged(field, value) => {
            if let Some(draft) = model.dialog.draft_mut() {
                match field {
                    Field::Type => draft.kind = value,
                    Field::Number => draft.number = value,
                    Field::Address => draft.address = value,
                }
            }
            None
        }

        Msg::Save => {
            let cmd = match &model.dialog {
                Dialog::Closed => return None,
                Dialog::OpenForCreate { draft } => Cmd::Create(draft.without_id()),
                Dialog::OpenForEdit { id, draft } => Cmd::Update(*id, draft.without_id()),
            };
            if !model.request.begin_submit() {
                debug!("save ignored, a request is already outstanding");
                return None;
            }
            Some(cmd)
        }

        Msg::Saved(Ok(_)) => {
            model.request.finish();
            model.dialog.close();
            Some(model.load())
        }

        Msg::Saved(Err(err)) => {
            error!(error = %err, "failed to save gym");
            model.request.fail(err);
            None
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
            error!(error = %err, "failed to delete gym");
            model.request.fail(err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pool() -> Gym {
        Gym {
            id: Some(1),
            kind: "Pool".to_string(),
            number: "A1".to_string(),
            address: "Main St".to_string(),
        }
    }

    #[test]
    fn edit_seeds_the_draft_from_the_gym() {
        let mut model = Model::default();
        assert_eq!(update(Msg::OpenEdit(pool()), &mut model), None);

        assert_eq!(model.dialog.editing_id(), Some(1));
        assert_eq!(model.dialog.draft(), Some(&pool().without_id()));
    }

    #[test]
    fn create_starts_from_empty_fields() {
        let mut model = Model::default();
        update(Msg::OpenEdit(pool()), &mut model);
        update(Msg::FieldChanged(Field::Type, "Sauna".into()), &mut model);
        update(Msg::OpenCreate, &mut model);

        assert_eq!(model.dialog.editing_id(), None);
        assert_eq!(model.dialog.draft(), Some(&Gym::default()));
    }

    #[test]
    fn save_creates_or_updates_by_mode() {
        let mut model = Model::default();
        update(Msg::OpenCreate, &mut model);
        update(Msg::FieldChanged(Field::Type, "Yoga".into()), &mut model);
        let created = Gym {
            kind: "Yoga".to_string(),
            ..Gym::default()
        };
        assert_eq!(update(Msg::Save, &mut model), Some(Cmd::Create(created)));

        let mut model = Model::default();
        update(Msg::OpenEdit(pool()), &mut model);
        assert_eq!(
            update(Msg::Save, &mut model),
            Some(Cmd::Update(1, pool().without_id()))
        );
    }

    #[test]
    fn save_with_closed_dialog_does_nothing() {
        let mut model = Model::default();
        assert_eq!(update(Msg::Save, &mut model), None);
        assert_eq!(model.request, RequestState::Idle);
    }

    #[test]
    fn double_save_is_ignored_while_in_flight() {
        let mut model = Model::default();
        update(Msg::OpenCreate, &mut model);
        assert!(update(Msg::Save, &mut model).is_some());
        assert_eq!(update(Msg::Save, &mut model), None);
        assert_eq!(update(Msg::Remove(1), &mut model), None);
    }

    #[test]
    fn failed_save_keeps_the_dialog_as_it_was() {
        let mut model = Model::default();
        update(Msg::OpenEdit(pool()), &mut model);
        update(Msg::Save, &mut model);
        let before = model.dialog.clone();

        let err = TransportError::network("offline");
        assert_eq!(update(Msg::Saved(Err(err.clone())), &mut model), None);
        assert_eq!(model.dialog, before);
        assert_eq!(model.request, RequestState::Failed(err));
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut model = Model::default();
        let first = update(Msg::LoadAll, &mut model);
        let second = update(Msg::LoadAll, &mut model);
        assert_eq!(first, Some(Cmd::Load { generation: 1 }));
        assert_eq!(second, Some(Cmd::Load { generation: 2 }));

        update(
            Msg::Loaded {
                generation: 2,
                result: Ok(vec![pool()]),
            },
            &mut model,
        );
        update(
            Msg::Loaded {
                generation: 1,
                result: Ok(vec![]),
            },
            &mut model,
        );
        assert_eq!(model.gyms, vec![pool()]);
    }

    #[test]
    fn load_after_unmount_is_discarded() {
        let mut model = Model::default();
        update(Msg::LoadAll, &mut model);
        model.unmount();

        update(
            Msg::Loaded {
                generation: 1,
                result: Ok(vec![pool()]),
            },
            &mut model,
        );
        assert!(model.gyms.is_empty());
        assert_eq!(model.request, RequestState::Idle);
    }

    #[test]
    fn failed_load_keeps_the_old_list() {
        let mut model = Model {
            gyms: vec![pool()],
            ..Model::default()
        };
        update(Msg::LoadAll, &mut model);
        update(
            Msg::Loaded {
                generation: 1,
                result: Err(TransportError::decode("expected array")),
            },
            &mut model,
        );
        assert_eq!(model.gyms, vec![pool()]);
    }
}
