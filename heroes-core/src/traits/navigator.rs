//! Navigation abstract Trait

use crate::types::Route;

/// Switches the active screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
