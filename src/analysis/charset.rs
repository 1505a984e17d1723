//! Static character tables used by the classifier and the char-group tokenizer.
//!
//! Token boundaries depend on the exact membership of these sets, so they are
//! enumerated code point by code point rather than derived from Unicode
//! properties.

/// ASCII digits followed by their fullwidth forms.
pub const DIGITS: [char; 20] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', //
    '\u{FF10}', // fullwidth 0
    '\u{FF11}', // fullwidth 1
    '\u{FF12}', // fullwidth 2
    '\u{FF13}', // fullwidth 3
    '\u{FF14}', // fullwidth 4
    '\u{FF15}', // fullwidth 5
    '\u{FF16}', // fullwidth 6
    '\u{FF17}', // fullwidth 7
    '\u{FF18}', // fullwidth 8
    '\u{FF19}', // fullwidth 9
];

/// The ASCII alphabet, lowercase then uppercase.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters treated as blank.
///
/// This is not the Unicode `White_Space` property. Several entries are
/// formatting or separator characters that render as blank; their presence in
/// source text is almost always a bug. See
/// <https://en.wikipedia.org/wiki/Whitespace_character>.
pub const SPACES: [char; 36] = [
    // unicode whitespace
    '\u{0009}', // horizontal tab
    '\u{000A}', // line feed
    '\u{000B}', // vertical tab
    '\u{000C}', // form feed
    '\u{000D}', // carriage return
    '\u{0020}', // space
    '\u{0085}', // next line
    '\u{00A0}', // non-breaking space
    '\u{1680}', // ogham space
    '\u{2000}', // en quad
    '\u{2001}', // em quad
    '\u{2002}', // en space
    '\u{2003}', // em space
    '\u{2004}', // 3-per-em space
    '\u{2005}', // 4-per-em space
    '\u{2006}', // 6-per-em space
    '\u{2007}', // figure space
    '\u{2008}', // punctuation space
    '\u{2009}', // thin space
    '\u{200A}', // hair space
    '\u{2028}', // line separator
    '\u{2029}', // paragraph separator
    '\u{202F}', // narrow non-breaking space
    '\u{205F}', // medium mathematical space
    '\u{3000}', // ideographic space
    // information separators, blank
    '\u{001C}', // file separator
    '\u{001D}', // group separator
    '\u{001E}', // record separator
    '\u{001F}', // unit separator
    // not whitespace, but render as blank
    '\u{180E}', // mongolian vowel separator
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner (splitting on this breaks some emoji sequences)
    '\u{2060}', // word joiner
    '\u{FEFF}', // zero width no-break space / byte order mark
    // defined as not whitespace, but blank
    '\u{2800}', // braille pattern blank
];

/// Control and invalid code points. Always classified as punctuation.
pub const UNPRINTABLE: [char; 26] = [
    '\u{0000}', // null
    '\u{0001}', // start of heading
    '\u{0002}', // start of text
    '\u{0003}', // end of text
    '\u{0004}', // end of transmission
    '\u{0005}', // enquiry
    '\u{0006}', // acknowledge
    '\u{0007}', // bell
    '\u{0008}', // backspace
    '\u{000E}', // shift out
    '\u{000F}', // shift in
    '\u{0010}', // data link escape
    '\u{0011}', // device control 1
    '\u{0012}', // device control 2
    '\u{0013}', // device control 3
    '\u{0014}', // device control 4
    '\u{0015}', // negative acknowledge
    '\u{0016}', // synchronous idle
    '\u{0017}', // end of transmission block
    '\u{0018}', // cancel
    '\u{0019}', // end of medium
    '\u{001A}', // substitute
    '\u{001B}', // escape
    '\u{007F}', // delete
    '\u{FFEF}', // unassigned, should never occur
    '\u{FFFD}', // replacement character
];

/// Check if `c` is in [`ALPHABET`].
#[inline]
pub fn is_alphabet(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if `c` is in [`DIGITS`].
#[inline]
pub fn is_digit(c: char) -> bool {
    matches!(c, '0'..='9' | '\u{FF10}'..='\u{FF19}')
}

/// Check if `c` is in [`SPACES`].
#[inline]
pub fn is_space(c: char) -> bool {
    SPACES.contains(&c)
}

/// Check if `c` is in [`UNPRINTABLE`].
#[inline]
pub fn is_unprintable(c: char) -> bool {
    UNPRINTABLE.contains(&c)
}
