use std::rc::Rc;

use seed::{prelude::*, *};

use crate::config::Config;
use crate::resource::ResourceClient;
use crate::{console, gyms, people};

// ------ ------
//     Init
// ------ ------

fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    let config = Config::from_build_env();
    tracing::info!(api = config.base_url(), "gym admin starting");

    orders.send_msg(Msg::Gyms(gyms::Msg::LoadAll));
    Model {
        page: Page::Gyms,
        api: Rc::new(ResourceClient::new(config)),
        gyms: gyms::Model::default(),
        people: people::Model::default(),
    }
}

// ------ ------
//     Model
// ------ ------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Gyms,
    Clients,
}

struct Model {
    page: Page,
    api: Rc<ResourceClient>,
    gyms: gyms::Model,
    people: people::Model,
}

impl Model {
    fn is_loading(&self) -> bool {
        match self.page {
            Page::Gyms => self.gyms.request.is_loading(),
            Page::Clients => self.people.request.is_loading(),
        }
    }
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    Navigate(Page),
    Gyms(gyms::Msg),
    People(people::Msg),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Navigate(page) => {
            if page == model.page {
                orders.skip();
                return;
            }
            match model.page {
                Page::Gyms => model.gyms.unmount(),
                Page::Clients => model.people.unmount(),
            }
            model.page = page;
            match page {
                Page::Gyms => orders.send_msg(Msg::Gyms(gyms::Msg::LoadAll)),
                Page::Clients => orders.send_msg(Msg::People(people::Msg::LoadAll)),
            };
        }

        Msg::Gyms(msg) => {
            if let Some(cmd) = gyms::update(msg, &mut model.gyms) {
                let api = Rc::clone(&model.api);
                orders.perform_cmd(async move { Msg::Gyms(cmd.perform(api.as_ref()).await) });
            }
        }

        Msg::People(msg) => {
            if let Some(cmd) = people::update(msg, &mut model.people) {
                let api = Rc::clone(&model.api);
                orders.perform_cmd(async move { Msg::People(cmd.perform(api.as_ref()).await) });
            }
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> impl IntoNodes<Msg> {
    div![
        style! {
            St::FontFamily => "sans-serif";
            St::MaxWidth => px(960);
            St::Margin => "auto";
        },
        nav_bar(model),
        match model.page {
            Page::Gyms => gyms::view::view(&model.gyms).map_msg(Msg::Gyms),
            Page::Clients => people::view::view(&model.people).map_msg(Msg::People),
        },
    ]
}

fn nav_bar(model: &Model) -> Node<Msg> {
    nav![
        attrs! {At::Class => "navbar navbar-light bg-white border rounded-top mt-1 mb-3 px-2"},
        a!["Gym admin", attrs! {At::Class => "navbar-brand"}],
        div![
            attrs! {At::Class => "btn-group"},
            nav_button(model, Page::Gyms, "Gyms"),
            nav_button(model, Page::Clients, "Clients"),
        ],
        IF!(model.is_loading() => div![
            attrs![At::Class => "spinner-border spinner-border-sm text-secondary"],
            span![attrs![At::Class => "visually-hidden"], "Loading..."],
        ]),
    ]
}

fn nav_button(model: &Model, page: Page, caption: &str) -> Node<Msg> {
    let class = if model.page == page {
        "btn btn-secondary"
    } else {
        "btn btn-outline-secondary"
    };
    button![
        attrs! {At::Class => class},
        ev(Ev::Click, move |_| Msg::Navigate(page)),
        caption
    ]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    console::init();
    App::start("app", init, update, view);
}
