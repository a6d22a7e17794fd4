//! Navigation routes and editor mode detection

use std::fmt;

use heroes_client::HeroId;

/// Editor route parameter that selects create mode.
pub const NEW_HERO_TOKEN: &str = "nuevo";

/// The two screens of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/heroes`
    List,
    /// `/heroe/{param}` where `param` is an id or [`NEW_HERO_TOKEN`]
    Editor(String),
}

impl Route {
    pub fn new_hero() -> Self {
        Self::Editor(NEW_HERO_TOKEN.to_string())
    }

    pub fn edit_hero(id: &HeroId) -> Self {
        Self::Editor(id.as_str().to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => "/heroes".to_string(),
            Self::Editor(param) => format!("/heroe/{param}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Whether the editor creates a new record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(HeroId),
}

impl FormMode {
    /// Absent, empty or [`NEW_HERO_TOKEN`] selects create; anything else is an id.
    pub fn from_route_param(param: Option<&str>) -> Self {
        match param {
            None | Some("" | NEW_HERO_TOKEN) => Self::Create,
            Some(id) => Self::Edit(HeroId::from(id)),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn hero_id(&self) -> Option<&HeroId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_param() {
        assert_eq!(FormMode::from_route_param(None), FormMode::Create);
        assert_eq!(FormMode::from_route_param(Some("")), FormMode::Create);
        assert_eq!(FormMode::from_route_param(Some("nuevo")), FormMode::Create);
        assert_eq!(
            FormMode::from_route_param(Some("42")),
            FormMode::Edit(HeroId::from("42"))
        );
    }

    #[test]
    fn only_edit_mode_has_an_id() {
        assert_eq!(FormMode::Create.hero_id(), None);
        assert_eq!(
            FormMode::from_route_param(Some("7")).hero_id(),
            Some(&HeroId::from("7"))
        );
    }

    #[test]
    fn paths() {
        assert_eq!(Route::List.path(), "/heroes");
        assert_eq!(Route::new_hero().path(), "/heroe/nuevo");
        assert_eq!(Route::edit_hero(&HeroId::from("abc")).to_string(), "/heroe/abc");
    }
}
