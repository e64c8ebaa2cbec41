use seed::{prelude::*, *};

pub fn page_header<Ms: 'static>(
    title: &str,
    action: &str,
    on_click: impl FnOnce() -> Ms + Clone + 'static,
) -> Node<Ms> {
    div![
        attrs! {At::Class => "d-flex justify-content-between align-items-center mb-2"},
        h4![title],
        button![
            attrs! {At::Class => "btn btn-primary"},
            ev(Ev::Click, move |_| on_click()),
            action
        ],
    ]
}

pub fn text_field<Ms: 'static>(
    caption: &str,
    value: &str,
    on_input: impl FnOnce(String) -> Ms + Clone + 'static,
) -> Node<Ms> {
    div![
        attrs! {At::Class => "mb-2"},
        label![attrs! {At::Class => "form-label"}, caption],
        input![
            input_ev(Ev::Input, on_input),
            attrs! {
                At::Value => value,
                At::Type => "text",
                At::Class => "form-control",
            },
        ],
    ]
}

/// Bootstrap modal with Cancel/Save. Save is disabled while `busy`.
pub fn modal<Ms: 'static>(
    title: &str,
    body: Vec<Node<Ms>>,
    busy: bool,
    on_save: impl FnOnce() -> Ms + Clone + 'static,
    on_cancel: impl FnOnce() -> Ms + Clone + 'static,
) -> Vec<Node<Ms>> {
    nodes![
        div![attrs! {At::Class => "modal-backdrop fade show"}],
        div![
            attrs! {At::Class => "modal d-block", At::TabIndex => "-1"},
            div![
                attrs! {At::Class => "modal-dialog"},
                div![
                    attrs! {At::Class => "modal-content"},
                    div![
                        attrs! {At::Class => "modal-header"},
                        h5![attrs! {At::Class => "modal-title"}, title],
                    ],
                    div![attrs! {At::Class => "modal-body"}, body],
                    div![
                        attrs! {At::Class => "modal-footer"},
                        button![
                            attrs! {At::Class => "btn btn-secondary"},
                            ev(Ev::Click, move |_| on_cancel()),
                            "Cancel"
                        ],
                        button![
                            attrs! {
                                At::Class => "btn btn-primary",
                                At::Disabled => busy.as_at_value(),
                            },
                            ev(Ev::Click, move |_| on_save()),
                            "Save"
                        ],
                    ],
                ],
            ],
        ],
    ]
}
