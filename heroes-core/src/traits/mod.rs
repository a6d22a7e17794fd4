//! Capabilities injected into the controllers by the front end

mod interaction;
mod navigator;

pub use interaction::UserInteraction;
pub use navigator::Navigator;
