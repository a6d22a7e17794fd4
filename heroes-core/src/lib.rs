//! Heroes Core Library
//!
//! UI-framework-independent logic of the heroes front end:
//! - List controller (load, delete with confirmation)
//! - Record form controller (create/edit mode, draft, validation, save)
//! - Routes, notifications and user-facing texts
//!
//! The remote resource, the user interaction surface and navigation are all
//! injected through traits, so the same controllers drive any front end and
//! are tested against in-memory fakes.

pub mod error;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ValidationError};
pub use i18n::{Language, Texts};
pub use services::{
    ControllerContext, FormState, ListController, ListDisplay, ListState, RecordFormController,
};
pub use traits::{Navigator, UserInteraction};
