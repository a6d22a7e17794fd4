//! User-facing texts raised by the controllers
//!
//! Notification titles, confirmation prompt, validation warnings and fallback
//! error messages. Plain static structs: the set of keys is checked at
//! compile time and selecting a language is a pointer lookup.

mod en_us;
mod es_es;

use serde::{Deserialize, Serialize};

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::EsEs]
    }

    /// Name of the language in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::EsEs => "Español",
        }
    }

    /// BCP 47 code
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EsEs => "es-ES",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "es-ES" | "es" => Some(Language::EsEs),
            _ => None,
        }
    }

    /// Next language, for cycling in a settings control.
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::EsEs,
            Language::EsEs => Language::EnUs,
        }
    }
}

/// All texts the controllers show.
pub struct Texts {
    pub titles: TitleTexts,
    pub confirm_delete: ConfirmDeleteTexts,
    pub validation: ValidationTexts,
    pub list: ListTexts,
    pub form: FormTexts,
    /// Button that dismisses a blocking notification
    pub acknowledge: &'static str,
}

impl Texts {
    pub fn for_language(language: Language) -> &'static Texts {
        match language {
            Language::EnUs => &en_us::TEXTS,
            Language::EsEs => &es_es::TEXTS,
        }
    }
}

/// Notification titles
pub struct TitleTexts {
    pub error: &'static str,
    pub validation: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub text: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
}

pub struct ValidationTexts {
    pub name_required: &'static str,
    pub power_required: &'static str,
    pub name_too_short: &'static str,
}

pub struct ListTexts {
    /// Inline error state after a failed load
    pub load_error: &'static str,
    /// Notification after a failed load
    pub load_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

pub struct FormTexts {
    /// Inline error state after a failed fetch-by-id
    pub load_error: &'static str,
    /// Notification after a failed fetch-by-id
    pub load_failed: &'static str,
    /// Fallback when a failed save carries no usable message
    pub save_failed: &'static str,
}
