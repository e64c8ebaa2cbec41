use seed::{prelude::*, *};
use shared::Gym;

use super::{Field, Model, Msg};
use crate::dialog::Dialog;
use crate::widgets;

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    nodes![
        widgets::page_header("Gyms", "Add gym", || Msg::OpenCreate),
        div![
            attrs! {At::Class => "row row-cols-1 row-cols-md-2 g-2"},
            model.gyms.iter().map(gym_card),
        ],
        gym_dialog(model),
    ]
}

fn gym_card(gym: &Gym) -> Node<Msg> {
    let edited = gym.clone();
    div![
        attrs! {At::Class => "col"},
        div![
            attrs! {At::Class => "card"},
            div![
                attrs! {At::Class => "card-body"},
                h5![attrs! {At::Class => "card-title"}, gym.kind.as_str()],
                p![
                    attrs! {At::Class => "card-text mb-1"},
                    format!("Number: {}", gym.number)
                ],
                p![
                    attrs! {At::Class => "card-text"},
                    format!("Address: {}", gym.address)
                ],
                div![
                    attrs! {At::Class => "d-flex justify-content-end"},
                    button![
                        attrs! {At::Class => "btn btn-outline-secondary btn-sm me-1"},
                        ev(Ev::Click, move |_| Msg::OpenEdit(edited)),
                        "Edit"
                    ],
                    gym.id.map(|id| button![
                        attrs! {At::Class => "btn btn-outline-danger btn-sm"},
                        ev(Ev::Click, move |_| Msg::Remove(id)),
                        "Delete"
                    ]),
                ],
            ],
        ],
    ]
}

fn gym_dialog(model: &Model) -> Vec<Node<Msg>> {
    let (title, draft) = match &model.dialog {
        Dialog::Closed => return nodes![],
        Dialog::OpenForCreate { draft } => ("Add gym", draft),
        Dialog::OpenForEdit { draft, .. } => ("Edit gym", draft),
    };

    widgets::modal(
        title,
        nodes![
            widgets::text_field("Type", &draft.kind, |value| {
                Msg::FieldChanged(Field::Type, value)
            }),
            widgets::text_field("Number", &draft.number, |value| {
                Msg::FieldChanged(Field::Number, value)
            }),
            widgets::text_field("Address", &draft.address, |value| {
                Msg::FieldChanged(Field::Address, value)
            }),
        ],
        model.request.is_submitting(),
        || Msg::Save,
        || Msg::Cancel,
    )
}
