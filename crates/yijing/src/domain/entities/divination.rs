//! Divination - The three drawn numbers and their resolved reading

use serde::Serialize;
use serde_json::Value;

use super::{Hexagram, Trigram};

/// The three numbers a reading is cast from.
///
/// Conventionally in `100..=999`, but any integers are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawNumbers(pub [i64; 3]);

impl DrawNumbers {
    pub fn new(first: i64, second: i64, third: i64) -> Self {
        Self([first, second, third])
    }

    /// Selects the lower trigram
    pub fn first(&self) -> i64 {
        self.0[0]
    }

    /// Selects the upper trigram
    pub fn second(&self) -> i64 {
        self.0[1]
    }

    /// Selects the changing line
    pub fn third(&self) -> i64 {
        self.0[2]
    }

    /// Read client-supplied numbers from a JSON value.
    ///
    /// Only an array of exactly three integers counts; anything else is
    /// treated as "no numbers supplied" rather than as an error.
    pub fn from_json(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() != 3 {
            return None;
        }

        let mut numbers = [0i64; 3];
        for (slot, item) in numbers.iter_mut().zip(items) {
            *slot = item.as_i64()?;
        }
        Some(Self(numbers))
    }
}

impl From<[i64; 3]> for DrawNumbers {
    fn from(numbers: [i64; 3]) -> Self {
        Self(numbers)
    }
}

impl std::fmt::Display for DrawNumbers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.0[0], self.0[1], self.0[2])
    }
}

/// A fully resolved reading. Ephemeral: built per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DivinationResult {
    pub upper: &'static Trigram,
    pub lower: &'static Trigram,
    pub hexagram: &'static Hexagram,
    /// Active line, always within `1..=6`
    pub changing_line: u8,
    pub numbers: DrawNumbers,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_accepts_three_integers() {
        assert_eq!(
            DrawNumbers::from_json(&json!([123, 456, 789])),
            Some(DrawNumbers::new(123, 456, 789))
        );
        assert_eq!(
            DrawNumbers::from_json(&json!([-5, 0, 12])),
            Some(DrawNumbers::new(-5, 0, 12))
        );
    }

    #[test]
    fn test_from_json_treats_malformed_as_absent() {
        for value in [
            json!(null),
            json!([]),
            json!([1, 2]),
            json!([1, 2, 3, 4]),
            json!(["1", "2", "3"]),
            json!([1.5, 2, 3]),
            json!("123"),
            json!({"a": 1}),
            json!([1, 2, 18446744073709551615u64]),
        ] {
            assert_eq!(DrawNumbers::from_json(&value), None, "{}", value);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DrawNumbers::new(101, 202, 303).to_string(), "101, 202, 303");
    }
}
