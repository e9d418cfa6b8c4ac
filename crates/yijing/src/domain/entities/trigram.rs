//! Trigram (八卦) - The eight three-line figures

use serde::Serialize;

/// One of the eight trigrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trigram {
    /// Display name, also used to build hexagram keys
    pub name: &'static str,
    /// Unicode glyph (☰ ... ☷)
    pub symbol: &'static str,
    /// Associated natural element
    pub element: &'static str,
}

/// The eight trigrams, indexed by `number mod 8`
pub const TRIGRAMS: [Trigram; 8] = [
    Trigram { name: "坤", symbol: "☷", element: "地" },
    Trigram { name: "乾", symbol: "☰", element: "天" },
    Trigram { name: "兌", symbol: "☱", element: "澤" },
    Trigram { name: "離", symbol: "☲", element: "火" },
    Trigram { name: "震", symbol: "☳", element: "雷" },
    Trigram { name: "巽", symbol: "☴", element: "風" },
    Trigram { name: "坎", symbol: "☵", element: "水" },
    Trigram { name: "艮", symbol: "☶", element: "山" },
];

impl Trigram {
    /// Look up the trigram for any integer.
    ///
    /// Uses the Euclidean remainder, so negative numbers land on a valid slot
    /// as well and the lookup never fails.
    pub fn from_number(n: i64) -> &'static Trigram {
        &TRIGRAMS[n.rem_euclid(TRIGRAMS.len() as i64) as usize]
    }

    /// Find a trigram by its display name
    pub fn by_name(name: &str) -> Option<&'static Trigram> {
        TRIGRAMS.iter().find(|t| t.name == name)
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.symbol)
    }
}
