//! 国际化（i18n）模块
//!
//! Texts of the terminal chrome: page titles, labels, key hints. Messages
//! raised by the controllers come from [`heroes_core::Texts`] instead.
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod es_es;
pub mod keys;

pub use heroes_core::Language;
pub use keys::*;

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &es_es::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::EsEs => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EsEs,
        _ => Language::EnUs,
    }
}
