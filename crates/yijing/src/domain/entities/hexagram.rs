//! Hexagram (卦象) - A stacked pair of trigrams

use serde::Serialize;

use super::Trigram;

/// A hexagram entry keyed by its (upper, lower) trigram names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// King Wen sequence number
    #[serde(rename = "num")]
    pub number: u8,
    pub name: &'static str,
    pub meaning: &'static str,
    /// Qualitative fortune label (大吉, 中平, 下下, ...)
    pub fortune: &'static str,
    #[serde(skip)]
    pub upper: &'static str,
    #[serde(skip)]
    pub lower: &'static str,
}

/// The populated part of the hexagram table. Index 0 doubles as the default.
pub const HEXAGRAMS: [Hexagram; 10] = [
    Hexagram {
        number: 1,
        name: "乾為天",
        meaning: "元亨利貞。剛健中正，自強不息。",
        fortune: "大吉",
        upper: "乾",
        lower: "乾",
    },
    Hexagram {
        number: 2,
        name: "坤為地",
        meaning: "元亨，利牝馬之貞。",
        fortune: "吉",
        upper: "坤",
        lower: "坤",
    },
    Hexagram {
        number: 3,
        name: "水雷屯",
        meaning: "元亨利貞，勿用有攸往。",
        fortune: "中平",
        upper: "坎",
        lower: "震",
    },
    Hexagram {
        number: 4,
        name: "山水蒙",
        meaning: "亨。匪我求童蒙，童蒙求我。",
        fortune: "中下",
        upper: "艮",
        lower: "坎",
    },
    Hexagram {
        number: 5,
        name: "水天需",
        meaning: "有孚，光亨，貞吉。",
        fortune: "中上",
        upper: "坎",
        lower: "乾",
    },
    Hexagram {
        number: 6,
        name: "天水訟",
        meaning: "有孚，窒。惕中吉。",
        fortune: "下下",
        upper: "乾",
        lower: "坎",
    },
    Hexagram {
        number: 7,
        name: "地水師",
        meaning: "貞，丈人，吉無咎。",
        fortune: "中上",
        upper: "坤",
        lower: "坎",
    },
    Hexagram {
        number: 8,
        name: "水地比",
        meaning: "吉。原筮元永貞，無咎。",
        fortune: "上上",
        upper: "坎",
        lower: "坤",
    },
    Hexagram {
        number: 9,
        name: "風天小畜",
        meaning: "亨。密雲不雨。",
        fortune: "中下",
        upper: "巽",
        lower: "乾",
    },
    Hexagram {
        number: 10,
        name: "天澤履",
        meaning: "履虎尾，不咥人，亨。",
        fortune: "中上",
        upper: "乾",
        lower: "兌",
    },
];

impl Hexagram {
    /// Resolve the hexagram for an (upper, lower) trigram pair.
    ///
    /// Pairs missing from the table silently resolve to 乾為天 (#1).
    pub fn lookup(upper: &Trigram, lower: &Trigram) -> &'static Hexagram {
        Self::find(upper.name, lower.name).unwrap_or_else(Self::default_entry)
    }

    /// Exact lookup by trigram names, without the default
    pub fn find(upper: &str, lower: &str) -> Option<&'static Hexagram> {
        HEXAGRAMS
            .iter()
            .find(|h| h.upper == upper && h.lower == lower)
    }

    /// The entry used for every unmapped pair: the pure 乾 hexagram
    pub fn default_entry() -> &'static Hexagram {
        &HEXAGRAMS[0]
    }

    /// Table key: upper name followed by lower name (e.g. "坎震")
    pub fn key(&self) -> String {
        format!("{}{}", self.upper, self.lower)
    }

    pub fn all() -> &'static [Hexagram] {
        &HEXAGRAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TRIGRAMS;

    fn trigram(name: &str) -> &'static Trigram {
        Trigram::by_name(name).expect("known trigram")
    }

    #[test]
    fn test_documented_pairs_resolve_exactly() {
        let expected = [
            ("乾", "乾", 1, "大吉"),
            ("坤", "坤", 2, "吉"),
            ("坎", "震", 3, "中平"),
            ("艮", "坎", 4, "中下"),
            ("坎", "乾", 5, "中上"),
            ("乾", "坎", 6, "下下"),
            ("坤", "坎", 7, "中上"),
            ("坎", "坤", 8, "上上"),
            ("巽", "乾", 9, "中下"),
            ("乾", "兌", 10, "中上"),
        ];

        for (upper, lower, number, fortune) in expected {
            let hexagram = Hexagram::lookup(trigram(upper), trigram(lower));
            assert_eq!(hexagram.number, number, "{}{}", upper, lower);
            assert_eq!(hexagram.fortune, fortune, "{}{}", upper, lower);
        }
    }

    #[test]
    fn test_unmapped_pairs_fall_back_to_first_entry() {
        let mut unmapped = 0;
        for upper in &TRIGRAMS {
            for lower in &TRIGRAMS {
                if Hexagram::find(upper.name, lower.name).is_none() {
                    unmapped += 1;
                    assert_eq!(Hexagram::lookup(upper, lower).number, 1);
                }
            }
        }
        assert_eq!(unmapped, 64 - HEXAGRAMS.len());
    }

    #[test]
    fn test_key_and_serialized_shape() {
        let hexagram = Hexagram::find("坎", "震").unwrap();
        assert_eq!(hexagram.key(), "坎震");

        let json = serde_json::to_value(hexagram).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "num": 3,
                "name": "水雷屯",
                "meaning": "元亨利貞，勿用有攸往。",
                "fortune": "中平"
            })
        );
    }
}
