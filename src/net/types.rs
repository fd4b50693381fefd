//! Wire DTOs for the customers, vets, visits, and GenAI services.
//!
//! DESIGN
//! ======
//! Records are consumed mostly opaquely: string fields default to empty and
//! collections default to empty so a backend omitting a field renders as a
//! blank cell instead of failing the whole view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A pet owner, with nested pets when fetched by id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Absent while the owner is being created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Owner {
    /// "First Last", as shown on pet forms and detail headers.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Body for owner create/update requests.
    pub fn to_request(&self) -> OwnerRequest {
        OwnerRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            telephone: self.telephone.clone(),
        }
    }
}

/// Owner create/update body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

/// A pet, either nested in an owner or fetched on its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    /// ISO date (`yyyy-MM-dd`) as sent by the backend.
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default, rename = "type")]
    pub pet_type: Option<PetType>,
    /// Owner display name ("First Last"); only present on single-pet reads.
    #[serde(default)]
    pub owner: Option<String>,
    /// Filled client-side by the owner-details visit cascade.
    #[serde(default)]
    pub visits: Vec<Visit>,
}

/// Pet create/update body. The chosen type travels as `typeId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    /// Zero when creating.
    pub id: i64,
    pub name: String,
    pub birth_date: Option<String>,
    pub type_id: i64,
}

/// A pet species/category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetType {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A veterinarian and their specialties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
}

impl Vet {
    /// Space-separated specialty names, or `"none"`.
    pub fn specialties_label(&self) -> String {
        if self.specialties.is_empty() {
            return "none".to_owned();
        }
        self.specialties.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A recorded visit for a pet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<i64>,
}

/// Visit create body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisitRequest {
    /// `yyyy-MM-dd`.
    pub date: String,
    pub description: String,
}

/// GenAI request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenAiRequest {
    pub question: String,
}

/// Resolved GenAI reply. `answer` wins over `message`; blank strings and
/// non-string values count as absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenAiReply {
    Answer(String),
    Message(String),
    Empty,
}

pub const NO_RESPONSE_TEXT: &str = "No response received";

impl From<&serde_json::Value> for GenAiReply {
    /// Any JSON shape is accepted; bodies that are not objects resolve to
    /// `Empty`.
    fn from(body: &serde_json::Value) -> Self {
        let field = |name: &str| {
            body.get(name).and_then(serde_json::Value::as_str).filter(|text| !text.is_empty()).map(str::to_owned)
        };
        if let Some(answer) = field("answer") {
            Self::Answer(answer)
        } else if let Some(message) = field("message") {
            Self::Message(message)
        } else {
            Self::Empty
        }
    }
}

impl GenAiReply {
    /// Markdown text to render in the bot bubble.
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) | Self::Message(text) => text,
            Self::Empty => NO_RESPONSE_TEXT,
        }
    }
}
