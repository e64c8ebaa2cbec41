use seed::{prelude::*, *};
use shared::Person;

use super::{parse_gym_choice, Field, Model, Msg, PersonDraft, NO_GYM};
use crate::dialog::Dialog;
use crate::widgets;

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    nodes![
        widgets::page_header("Clients", "Add client", || Msg::OpenCreate),
        table![
            attrs! {At::Class => "table table-hover"},
            thead![tr![
                th!["Name"],
                th!["Phone"],
                th!["Gym"],
                th![attrs! {At::Class => "text-end"}, "Actions"],
            ]],
            tbody![model.people.iter().map(|person| client_row(model, person))],
        ],
        person_dialog(model),
    ]
}

fn client_row(model: &Model, person: &Person) -> Node<Msg> {
    let edited = person.clone();
    tr![
        td![person.name.as_str()],
        td![person.phone_number.as_str()],
        td![model.gym_label(person)],
        td![
            attrs! {At::Class => "text-end"},
            button![
                attrs! {At::Class => "btn btn-outline-secondary btn-sm me-1"},
                ev(Ev::Click, move |_| Msg::OpenEdit(edited)),
                "Edit"
            ],
            person.id.map(|id| button![
                attrs! {At::Class => "btn btn-outline-danger btn-sm"},
                ev(Ev::Click, move |_| Msg::Remove(id)),
                "Delete"
            ]),
        ],
    ]
}

fn gym_select(model: &Model, draft: &PersonDraft) -> Node<Msg> {
    let selected = draft.gym_id;
    div![
        attrs! {At::Class => "mb-2"},
        label![attrs! {At::Class => "form-label"}, "Gym"],
        select![
            attrs! {At::Class => "form-select"},
            option![
                attrs! {At::Value => "", At::Selected => selected.is_none().as_at_value()},
                NO_GYM
            ],
            model.gyms.iter().filter_map(|gym| {
                gym.id.map(|id| {
                    option![
                        attrs! {
                            At::Value => id.to_string(),
                            At::Selected => (selected == Some(id)).as_at_value(),
                        },
                        gym.kind.as_str()
                    ]
                })
            }),
            input_ev(Ev::Change, |value| Msg::GymSelected(parse_gym_choice(&value))),
        ],
    ]
}

fn person_dialog(model: &Model) -> Vec<Node<Msg>> {
    let (title, draft) = match &model.dialog {
        Dialog::Closed => return nodes![],
        Dialog::OpenForCreate { draft } => ("Add client", draft),
        Dialog::OpenForEdit { draft, .. } => ("Edit client", draft),
    };

    widgets::modal(
        title,
        nodes![
            widgets::text_field("Name", &draft.name, |value| {
                Msg::FieldChanged(Field::Name, value)
            }),
            widgets::text_field("Phone", &draft.phone_number, |value| {
                Msg::FieldChanged(Field::PhoneNumber, value)
            }),
            gym_select(model, draft),
        ],
        model.request.is_submitting(),
        || Msg::Save,
        || Msg::Cancel,
    )
}
