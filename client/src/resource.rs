//! The browser implementation of [`Api`], on top of `seed::fetch`.

use async_trait::async_trait;
use seed::browser::fetch::{FetchError, Method, Request};
use serde::{de::DeserializeOwned, Serialize};
use shared::{routes, Gym, GymId, Person, PersonId, PersonPayload};

use crate::api::{Api, Result};
use crate::config::Config;
use crate::error::TransportError;

impl From<FetchError> for TransportError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::StatusError(status) => TransportError::Status {
                code: status.code,
                text: status.text,
            },
            FetchError::SerdeError(err) => TransportError::Decode(err.to_string()),
            other => TransportError::Network(format!("{:?}", other)),
        }
    }
}

pub struct ResourceClient {
    config: Config,
}

impl ResourceClient {
    pub fn new(config: Config) -> Self {
        ResourceClient { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get<T: DeserializeOwned + 'static>(&self, path: &str) -> Result<T> {
        let response = Request::new(self.config.url(path))
            .method(Method::Get)
            .fetch()
            .await?
            .check_status()?;
        Ok(response.json().await?)
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + 'static,
    {
        let response = Request::new(self.config.url(path))
            .method(method)
            .json(body)?
            .fetch()
            .await?
            .check_status()?;
        Ok(response.json().await?)
    }

    /// For calls whose response body carries nothing we need.
    async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        Request::new(self.config.url(path))
            .method(method)
            .fetch()
            .await?
            .check_status()?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl Api for ResourceClient {
    async fn list_gyms(&self) -> Result<Vec<Gym>> {
        self.get(routes::GYMS).await
    }

    async fn create_gym(&self, gym: &Gym) -> Result<Gym> {
        self.send(Method::Post, routes::GYMS, &gym.without_id()).await
    }

    async fn update_gym(&self, id: GymId, gym: &Gym) -> Result<Gym> {
        self.send(Method::Put, &routes::gym(id), &gym.without_id())
            .await
    }

    async fn delete_gym(&self, id: GymId) -> Result<()> {
        self.send_empty(Method::Delete, &routes::gym(id)).await
    }

    async fn list_people(&self) -> Result<Vec<Person>> {
        self.get(routes::PERSONS).await
    }

    async fn create_person(&self, payload: &PersonPayload) -> Result<Person> {
        self.send(Method::Post, routes::PERSONS, payload).await
    }

    async fn update_person(&self, id: PersonId, payload: &PersonPayload) -> Result<Person> {
        self.send(Method::Put, &routes::person(id), payload).await
    }

    async fn assign_gym(&self, person: PersonId, gym: GymId) -> Result<()> {
        self.send_empty(Method::Put, &routes::person_gym(person, gym))
            .await
    }

    async fn delete_person(&self, id: PersonId) -> Result<()> {
        self.send_empty(Method::Delete, &routes::person(id)).await
    }
}
