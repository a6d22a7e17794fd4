//! Core type definitions

mod draft;
mod notification;
mod route;

pub use draft::{
    Draft, DraftField, NAME_MAX_CHARS, NAME_MIN_CHARS, POWER_MAX_CHARS, POWER_MIN_CHARS,
};
pub use notification::{
    ConfirmPrompt, Dismissal, Notification, NotificationKind, TRANSIENT_NOTIFICATION_DURATION,
};
pub use route::{FormMode, NEW_HERO_TOKEN, Route};

// Re-export library types
pub use heroes_client::{Hero, HeroId, HeroPayload};
