//! Input sanitization: reduce raw text to the upper-case alphabet the
//! ciphers operate on.

const DIGIT_WORDS: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// Append the sanitized form of `c` to `out`.
///
/// Letters are upper-cased, digits are spelled out, anything else is dropped.
pub fn transform_char(c: char, out: &mut String) {
    if c.is_ascii_alphabetic() {
        out.push(c.to_ascii_uppercase());
    } else if let Some(d) = c.to_digit(10) {
        out.push_str(DIGIT_WORDS[d as usize]);
    }
}

/// Sanitize a whole input text
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        transform_char(c, &mut out);
    }
    out
}
