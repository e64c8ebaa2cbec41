use serde::{Deserialize, Deserializer, Serialize};

pub type GymId = u64;
pub type PersonId = u64;

/// A facility. `id` is absent on anything the server has not stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gym {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GymId>,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
}

impl Gym {
    /// The editable fields only, as sent in create and update bodies.
    pub fn without_id(&self) -> Gym {
        Gym {
            id: None,
            ..self.clone()
        }
    }
}

/// A client of the gym. `gym` is filled in by the server on reads only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(default)]
    pub gym: Option<Gym>,
}

impl Person {
    pub fn gym_id(&self) -> Option<GymId> {
        self.gym.as_ref().and_then(|gym| gym.id)
    }
}

/// Body of person create/update calls. The gym association is written
/// through its own endpoint and never travels here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
}

impl From<&Person> for PersonPayload {
    fn from(person: &Person) -> Self {
        PersonPayload {
            name: person.name.clone(),
            phone_number: person.phone_number.clone(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
