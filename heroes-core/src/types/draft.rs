//! Editable copy of a hero record

use heroes_client::{Hero, HeroPayload};

use crate::error::ValidationError;

/// Minimum name length, checked before submission
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum name length, enforced by the input
pub const NAME_MAX_CHARS: usize = 50;
/// Minimum power length (hint only, never checked)
pub const POWER_MIN_CHARS: usize = 2;
/// Maximum power length, enforced by the input
pub const POWER_MAX_CHARS: usize = 100;

/// A text field of the draft, keyed by its input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Power,
}

impl DraftField {
    /// Input name, which is also the wire field name.
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Name => "nombre",
            Self::Power => "poder",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "nombre" => Some(Self::Name),
            "poder" => Some(Self::Power),
            _ => None,
        }
    }

    pub fn max_chars(self) -> usize {
        match self {
            Self::Name => NAME_MAX_CHARS,
            Self::Power => POWER_MAX_CHARS,
        }
    }
}

/// Client-local `{name, power, alive}` being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub power: String,
    pub alive: bool,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            power: String::new(),
            alive: true,
        }
    }
}

impl Draft {
    /// Populate from a fetched record. A missing `estado` means alive.
    pub fn from_hero(hero: &Hero) -> Self {
        Self {
            name: hero.name.clone(),
            power: hero.power.clone(),
            alive: hero.alive.unwrap_or(true),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Power => &self.power,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Power => self.power = value,
        }
    }

    pub fn toggle_alive(&mut self) {
        self.alive = !self.alive;
    }

    /// Check the draft, stopping at the first failure.
    ///
    /// The required checks look at trimmed values; the minimum length looks
    /// at the raw name, so `" a "` passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.power.trim().is_empty() {
            return Err(ValidationError::PowerRequired);
        }
        if self.name.chars().count() < NAME_MIN_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        Ok(())
    }

    pub fn to_payload(&self) -> HeroPayload {
        HeroPayload {
            name: self.name.clone(),
            power: self.power.clone(),
            alive: self.alive,
        }
    }
}
