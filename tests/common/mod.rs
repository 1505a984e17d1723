//! Shared fixtures for integration tests.

#![allow(dead_code)]

use tokenseg::analysis::charset;

/// Inputs covering every branch of both tokenizers.
pub fn corpus() -> Vec<String> {
    let mut texts: Vec<String> = [
        "",
        "a",
        " ",
        "Hello, world!",
        "abc123 456!!",
        "aaaaa",
        "The quick brown fox jumps over the lazy dog.",
        "  leading and trailing  ",
        "tabs\t\tand\nnewlines\r\n",
        "mixed  \t \t runs",
        "café naïve résumé",
        "cafe\u{0301} decomposed",
        "日本語のテキスト、東京。",
        "Привет, мир!",
        "مرحبا بالعالم",
        "ｆｕｌｌｗｉｄｔｈ　１２３４",
        "emoji 🙂👍🏽 and zwj 👨\u{200D}👩\u{200D}👧",
        "zero\u{200B}width\u{2060}joiner\u{FEFF}",
        "control\u{0000}\u{0007}\u{001B}chars\u{007F}",
        "replacement \u{FFFD} and \u{FFEF}",
        "private \u{E000}\u{F8FF} use",
        "unassigned \u{0378}\u{0379}",
        "$100 + 20% = «fair» price?",
        "e-mail: user_name@example.com",
        "C++ / Rust // comments",
        "Ⅻ ½ ²³ ǅ ʰ",
        "\u{3000}ideographic\u{3000}\u{3000}space",
        "a1b2c3d4",
        "1,234,567.89",
        "braille\u{2800}\u{2800}blank",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    texts.push("x".repeat(70_000));
    texts.push(" ".repeat(70_000));
    texts.push("é".repeat(70_000));

    let mut all_tables = String::new();
    all_tables.extend(charset::SPACES);
    all_tables.extend(charset::UNPRINTABLE);
    all_tables.extend(charset::DIGITS);
    all_tables.push_str(charset::ALPHABET);
    texts.push(all_tables);

    texts
}

/// Maximum token lengths exercised by the char-group tests.
pub const MAX_LENS: [usize; 6] = [1, 2, 3, 7, 64, 65535];
