//! Display-width aware text fitting

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max` terminal columns, ending in `…` when cut.
pub fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// The end of `text` that fits in `max` columns, so a cursor at the end
/// stays visible while typing.
pub fn tail_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(fit_width("Batman", 10), "Batman");
        assert_eq!(tail_width("Batman", 10), "Batman");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(fit_width("Superman", 5), "Supe…");
        assert_eq!(fit_width("Superman", 0), "");
    }

    #[test]
    fn wide_chars_count_double() {
        // 每个汉字占两列
        assert_eq!(fit_width("超人超人", 5), "超人…");
        assert_eq!(tail_width("超人超人", 5), "超人");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail_width("Velocidad", 4), "idad");
        assert_eq!(tail_width("", 4), "");
    }
}
