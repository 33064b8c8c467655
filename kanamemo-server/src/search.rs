//! Search query normalization
//!
//! Queries are folded before the `LIKE` match so that case, full-width
//! alphanumerics and katakana in the query still hit stored text:
//!
//! 1. Unicode lower-casing
//! 2. Full-width `Ａ-Ｚ ａ-ｚ ０-９` to ASCII
//! 3. Katakana `ァ-ヴ` to hiragana
//!
//! Only the query is folded, stored content is matched as written.

/// Distance from full-width alphanumerics to their ASCII counterparts
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Distance from katakana to hiragana
const KATAKANA_OFFSET: u32 = 0x60;

/// Normalize a search query. Idempotent.
///
/// # Example
/// ```
/// use kanamemo_server::search::normalize;
///
/// assert_eq!(normalize("ＡＢＣ１２３"), "abc123");
/// assert_eq!(normalize("カタカナ"), "かたかな");
/// ```
pub fn normalize(query: &str) -> String {
    query.to_lowercase().chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let offset = match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => FULLWIDTH_OFFSET,
        'ァ'..='ヴ' => KATAKANA_OFFSET,
        _ => return c,
    };
    char::from_u32(c as u32 - offset).unwrap_or(c)
}

/// Build the `LIKE` pattern for a query: normalized, metacharacters escaped,
/// wrapped in `%` so it matches as a substring.
pub fn like_pattern(query: &str) -> String {
    let normalized = normalize(query);
    let mut pattern = String::with_capacity(normalized.len() + 2);
    pattern.push('%');
    for c in normalized.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii() {
        assert_eq!(normalize("Hello World"), "hello world");
    }

    #[test]
    fn folds_fullwidth_alphanumerics() {
        assert_eq!(normalize("ｈｅｌｌｏ"), "hello");
        assert_eq!(normalize("Ｒｕｓｔ２０２４"), "rust2024");
        assert_eq!(normalize("ＡＢＣ"), "abc");
    }

    #[test]
    fn folds_katakana_range_edges() {
        assert_eq!(normalize("ァ"), "ぁ");
        assert_eq!(normalize("ヴ"), "ゔ");
        assert_eq!(normalize("メモ"), "めも");
    }

    #[test]
    fn leaves_other_text_alone() {
        // long vowel mark and half-width katakana are outside the folded ranges
        assert_eq!(normalize("ー"), "ー");
        assert_eq!(normalize("ｶﾀｶﾅ"), "ｶﾀｶﾅ");
        assert_eq!(normalize("漢字とひらがな"), "漢字とひらがな");
        assert_eq!(normalize("！？"), "！？");
    }

    #[test]
    fn mixed_input() {
        assert_eq!(normalize("ＴＯＤＯリスト Rust"), "todoりすと rust");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "",
            "Hello",
            "ＨＥＬＬＯ ｗｏｒｌｄ ０９",
            "カタカナとひらがな",
            "ÀÉÎ ΣΑΣ İstanbul",
            "ｶﾀｶﾅ ヴァイオリン",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern("メモ"), "%めも%");
        assert_eq!(like_pattern(""), "%%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }
}
