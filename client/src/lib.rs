pub mod api;
pub mod config;
pub mod dialog;
pub mod error;
pub mod gyms;
pub mod mock;
pub mod people;
pub mod request;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
pub mod resource;
#[cfg(target_arch = "wasm32")]
mod widgets;
