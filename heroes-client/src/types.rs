//! Wire types of the heroes resource
//!
//! Field names on the wire are Spanish (`nombre`, `poder`, `estado`); the Rust
//! side uses `name`, `power`, `alive`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server-assigned hero identifier.
///
/// The API may send it as a string or a number; it is always kept as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeroId(String);

impl HeroId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HeroId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for HeroId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for HeroId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            String(String),
            I64(i64),
            U64(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::String(s) => Self(s),
            RawId::I64(n) => Self(n.to_string()),
            RawId::U64(n) => Self(n.to_string()),
        })
    }
}

/// A hero record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHero")]
pub struct Hero {
    pub id: HeroId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "poder")]
    pub power: String,
    /// `estado` as sent by the server; `None` when the field is missing.
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub alive: Option<bool>,
}

impl Hero {
    /// Whether the row renders as alive. Only an explicit `true` counts.
    pub fn is_alive(&self) -> bool {
        self.alive == Some(true)
    }
}

/// Incoming shape: the id may be under `_id` (document stores) or `id`.
///
/// List rows must carry it; a fetched record may omit it since its id is in
/// the request path.
#[derive(Debug, Deserialize)]
pub(crate) struct RawHero {
    #[serde(rename = "_id", default)]
    document_id: Option<HeroId>,
    #[serde(default)]
    id: Option<HeroId>,
    nombre: String,
    poder: String,
    #[serde(default)]
    estado: Option<bool>,
}

impl RawHero {
    /// The record, taking `requested` as its id when the body has none.
    pub(crate) fn into_hero_with(self, requested: &HeroId) -> Hero {
        Hero {
            id: self
                .document_id
                .or(self.id)
                .unwrap_or_else(|| requested.clone()),
            name: self.nombre,
            power: self.poder,
            alive: self.estado,
        }
    }
}

impl TryFrom<RawHero> for Hero {
    type Error = String;

    fn try_from(raw: RawHero) -> Result<Self, Self::Error> {
        let id = raw
            .document_id
            .or(raw.id)
            .ok_or_else(|| "hero record is missing `_id`/`id`".to_string())?;
        Ok(Self {
            id,
            name: raw.nombre,
            power: raw.poder,
            alive: raw.estado,
        })
    }
}

/// Request body for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "poder")]
    pub power: String,
    #[serde(rename = "estado")]
    pub alive: bool,
}

/// Outcome of a successful create/update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveReceipt {
    /// The server's confirmation `message`, if the body carried a non-empty one.
    pub message: Option<String>,
}

/// Body of `GET /heroes`.
///
/// The endpoint has been seen returning either a bare array or an object
/// wrapping it under `heroes`. Anything else decodes as an empty collection.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HeroListResponse {
    Sequence(Vec<Value>),
    Wrapped { heroes: Vec<Value> },
    Unrecognized(serde::de::IgnoredAny),
}

impl HeroListResponse {
    /// Decode the rows. A malformed row fails the whole list.
    pub fn into_heroes(self) -> Result<Vec<Hero>, serde_json::Error> {
        match self {
            Self::Sequence(items) | Self::Wrapped { heroes: items } => {
                items.into_iter().map(serde_json::from_value).collect()
            }
            Self::Unrecognized(_) => Ok(Vec::new()),
        }
    }
}

/// Body of `GET /heroes/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct HeroEnvelope {
    #[serde(default)]
    pub heroe: Option<RawHero>,
}
