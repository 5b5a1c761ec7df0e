//! Full-width form and quotation mark normalization.

/// Offset between a full-width form (U+FF01..U+FF5E) and its ASCII equivalent.
pub const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Quotation marks folded to the ASCII apostrophe: ‘ ’ 「 」
const SINGLE_QUOTES: &[char] = &['\u{2018}', '\u{2019}', '\u{300C}', '\u{300D}'];

/// Quotation marks folded to the ASCII double quote: “ ” 『 』
const DOUBLE_QUOTES: &[char] = &['\u{201C}', '\u{201D}', '\u{300E}', '\u{300F}'];

/// Converts full-width characters and CJK quotation marks to ASCII.
///
/// - U+FF01..U+FF5E are shifted down by [`FULL_WIDTH_OFFSET`] (`！` -> `!`)
/// - ‘ ’ 「 」 become `'`
/// - “ ” 『 』 become `"`
///
/// Every other character, including the ideographic space U+3000, is kept.
///
/// # Example
///
/// ```
/// use hancut::fullwidth::convert_full_width_char;
///
/// assert_eq!(convert_full_width_char("Ｈｉ！「好」"), "Hi!'好'");
/// ```
pub fn convert_full_width_char(text: &str) -> String {
    text.chars()
        .map(|c| {
            normalize_fullwidth(c)
                .or_else(|| normalize_quote(c))
                .unwrap_or(c)
        })
        .collect()
}

/// Normalize a full-width character to its ASCII equivalent
pub fn normalize_fullwidth(c: char) -> Option<char> {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - FULL_WIDTH_OFFSET),
        _ => None,
    }
}

/// Normalize a curly or CJK quotation mark to its ASCII equivalent
pub fn normalize_quote(c: char) -> Option<char> {
    if SINGLE_QUOTES.contains(&c) {
        Some('\'')
    } else if DOUBLE_QUOTES.contains(&c) {
        Some('"')
    } else {
        None
    }
}
