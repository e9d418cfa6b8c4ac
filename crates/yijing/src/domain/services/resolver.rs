//! Symbol Resolver - Maps three numbers to a hexagram reading

use crate::domain::entities::{DivinationResult, DrawNumbers, Hexagram, Trigram};

/// Number of lines in a hexagram
const LINES: i64 = 6;

/// Resolve a reading from the drawn numbers.
///
/// - upper trigram: `second mod 8`
/// - lower trigram: `first mod 8`
/// - hexagram: table entry for (upper, lower), default #1
/// - changing line: `third mod 6`, with 0 meaning the sixth line
pub fn resolve(numbers: DrawNumbers) -> DivinationResult {
    let upper = Trigram::from_number(numbers.second());
    let lower = Trigram::from_number(numbers.first());
    let hexagram = Hexagram::lookup(upper, lower);

    DivinationResult {
        upper,
        lower,
        hexagram,
        changing_line: changing_line(numbers.third()),
        numbers,
    }
}

pub fn resolve_numbers(first: i64, second: i64, third: i64) -> DivinationResult {
    resolve(DrawNumbers::new(first, second, third))
}

/// Changing line for the third number, always within `1..=6`
pub fn changing_line(n: i64) -> u8 {
    match n.rem_euclid(LINES) {
        0 => LINES as u8,
        line => line as u8,
    }
}
