use futures::executor::block_on;
use gym_client::gyms::{self, Field, Msg};
use gym_client::mock::{Call, Endpoint, MockApi};
use gym_client::request::RequestState;
use pretty_assertions::assert_eq;
use shared::Gym;

/// Feeds `msg` through the controller and runs every command it asks for,
/// the way the seed runtime would.
fn dispatch(model: &mut gyms::Model, api: &MockApi, msg: Msg) {
    let mut next = gyms::update(msg, model);
    while let Some(cmd) = next {
        let msg = block_on(cmd.perform(api));
        next = gyms::update(msg, model);
    }
}

fn pool() -> Gym {
    Gym {
        id: Some(1),
        kind: "Pool".to_string(),
        number: "A1".to_string(),
        address: "Main St".to_string(),
    }
}

fn mounted(api: &MockApi) -> gyms::Model {
    let mut model = gyms::Model::default();
    dispatch(&mut model, api, Msg::LoadAll);
    api.take_calls();
    model
}

#[test]
fn mount_loads_the_list() {
    let api = MockApi::with_gyms(vec![pool()]);
    let mut model = gyms::Model::default();
    dispatch(&mut model, &api, Msg::LoadAll);

    assert_eq!(model.gyms, vec![pool()]);
    assert_eq!(model.request, RequestState::Idle);
    assert_eq!(api.calls(), vec![Call::ListGyms]);
}

#[test]
fn create_posts_the_draft_then_reloads() {
    let api = MockApi::with_gyms(vec![pool()]);
    let mut model = mounted(&api);

    dispatch(&mut model, &api, Msg::OpenCreate);
    assert_eq!(model.dialog.draft(), Some(&Gym::default()));

    dispatch(&mut model, &api, Msg::FieldChanged(Field::Type, "Yoga".into()));
    dispatch(&mut model, &api, Msg::Save);

    let yoga = Gym {
        kind: "Yoga".to_string(),
        ..Gym::default()
    };
    assert_eq!(api.calls(), vec![Call::CreateGym(yoga), Call::ListGyms]);
    assert!(!model.dialog.is_open());
    assert_eq!(model.gyms, api.gyms());
    assert_eq!(model.gyms.len(), 2);
}

#[test]
fn edit_puts_to_the_remembered_id() {
    let api = MockApi::with_gyms(vec![pool()]);
    let mut model = mounted(&api);

    dispatch(&mut model, &api, Msg::OpenEdit(pool()));
    dispatch(&mut model, &api, Msg::FieldChanged(Field::Address, "Side St".into()));
    dispatch(&mut model, &api, Msg::Save);

    let calls = api.calls();
    assert!(matches!(calls[0], Call::UpdateGym(1, _)));
    assert!(!calls.iter().any(|c| matches!(c, Call::CreateGym(_))));
    assert_eq!(model.gyms[0].address, "Side St");
}

#[test]
fn failed_create_leaves_dialog_open_and_list_untouched() {
    let api = MockApi::with_gyms(vec![pool()]);
    let mut model = mounted(&api);
    api.fail(Endpoint::CreateGym);

    dispatch(&mut model, &api, Msg::OpenCreate);
    dispatch(&mut model, &api, Msg::FieldChanged(Field::Number, "B2".into()));
    dispatch(&mut model, &api, Msg::Save);

    assert_eq!(api.calls().len(), 1);
    assert_eq!(model.dialog.draft().map(|d| d.number.as_str()), Some("B2"));
    assert_eq!(model.gyms, vec![pool()]);
    assert!(matches!(model.request, RequestState::Failed(_)));

    api.recover(Endpoint::CreateGym);
    dispatch(&mut model, &api, Msg::Save);
    assert!(!model.dialog.is_open());
    assert_eq!(model.gyms.len(), 2);
}

#[test]
fn remove_deletes_then_reloads() {
    let api = MockApi::with_gyms(vec![pool()]);
    let mut model = mounted(&api);

    dispatch(&mut model, &api, Msg::Remove(1));

    assert_eq!(api.calls(), vec![Call::DeleteGym(1), Call::ListGyms]);
    assert!(model.gyms.is_empty());
}

#[test]
fn failed_remove_keeps_the_list() {
    let api = MockApi::with_gyms(vec![pool()]);
    let mut model = mounted(&api);
    api.fail(Endpoint::DeleteGym);

    dispatch(&mut model, &api, Msg::Remove(1));

    assert_eq!(api.calls(), vec![Call::DeleteGym(1)]);
    assert_eq!(model.gyms, vec![pool()]);
}

#[test]
fn list_mirrors_the_server_not_the_draft() {
    let api = MockApi::with_gyms(vec![pool()]);
    let mut model = mounted(&api);

    dispatch(&mut model, &api, Msg::OpenEdit(pool()));
    dispatch(&mut model, &api, Msg::FieldChanged(Field::Type, "Spa".into()));
    assert_eq!(model.gyms, vec![pool()]);

    dispatch(&mut model, &api, Msg::Cancel);
    assert_eq!(model.gyms, vec![pool()]);
    assert!(api.calls().is_empty());
}
