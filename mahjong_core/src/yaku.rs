//! 役の一覧（catalog）.
//!
//! The list is fixed at compile time. Its order is the display order of the
//! calculator and has no meaning for scoring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Presentation grouping, roughly by how often a yaku shows up.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Tier {
    S,
    A,
    B,
    C,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tier: {0:?} (expected S, A, B or C)")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" | "s" => Ok(Tier::S),
            "A" | "a" => Ok(Tier::A),
            "B" | "b" => Ok(Tier::B),
            "C" | "c" => Ok(Tier::C),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct YakuDef {
    pub id: &'static str,
    pub name: &'static str,
    pub han: u32,
    /// 門前限定
    pub menzen_only: bool,
    pub tier: Tier,
    /// 喰い下がり: one han less when the hand is open
    pub kuisagari: bool,
}

// ===== ids the engine and selection rules refer to =====
pub const RIICHI: &str = "riichi";
pub const TANYAO: &str = "tanyao";
pub const PINFU: &str = "pinfu";
pub const MENZEN_TSUMO: &str = "menzen-tsumo";
pub const CHIITOITSU: &str = "chiitoitsu";
pub const HONITSU: &str = "honitsu";
pub const CHINITSU: &str = "chinitsu";
pub const YAKUMAN: &str = "yakuman";

const fn def(
    id: &'static str,
    name: &'static str,
    han: u32,
    menzen_only: bool,
    tier: Tier,
    kuisagari: bool,
) -> YakuDef {
    YakuDef {
        id,
        name,
        han,
        menzen_only,
        tier,
        kuisagari,
    }
}

static YAKU_LIST: [YakuDef; 24] = [
    // S
    def(RIICHI, "立直", 1, true, Tier::S, false),
    def(TANYAO, "断幺九", 1, false, Tier::S, false),
    def(PINFU, "平和", 1, true, Tier::S, false),
    def(MENZEN_TSUMO, "門前清自摸和", 1, true, Tier::S, false),
    def("haku", "役牌：白", 1, false, Tier::S, false),
    def("hatsu", "役牌：發", 1, false, Tier::S, false),
    def("chun", "役牌：中", 1, false, Tier::S, false),
    def("seat-wind", "役牌：自風牌", 1, false, Tier::S, false),
    def("round-wind", "役牌：場風牌", 1, false, Tier::S, false),
    // A
    def("ipeikou", "一盃口", 1, true, Tier::A, false),
    def(CHIITOITSU, "七対子", 2, true, Tier::A, false),
    def("toitoi", "対々和", 2, false, Tier::A, false),
    def("sanankou", "三暗刻", 2, false, Tier::A, false),
    def("sankantsu", "三槓子", 2, false, Tier::A, false),
    def("sanshoku-doujun", "三色同順", 2, false, Tier::A, true),
    def("ikkitsuukan", "一気通貫", 2, false, Tier::A, true),
    def("chanta", "混全帯幺九", 2, false, Tier::A, true),
    def("honroutou", "混老頭", 2, false, Tier::A, false),
    def("shousangen", "小三元", 2, false, Tier::A, false),
    // B
    def("ryanpeikou", "二盃口", 3, true, Tier::B, false),
    def(HONITSU, "混一色", 3, false, Tier::B, true),
    def("junchan", "純全帯幺九", 3, false, Tier::B, true),
    def(CHINITSU, "清一色", 6, false, Tier::B, true),
    // C
    def(YAKUMAN, "役満", 13, false, Tier::C, false),
];

pub fn all() -> &'static [YakuDef] {
    &YAKU_LIST
}

pub fn by_tier(tier: Tier) -> impl Iterator<Item = &'static YakuDef> {
    YAKU_LIST.iter().filter(move |y| y.tier == tier)
}

pub fn find(id: &str) -> Option<&'static YakuDef> {
    YAKU_LIST.iter().find(|y| y.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_han_positive() {
        let mut seen = HashSet::new();
        for y in all() {
            assert!(seen.insert(y.id), "duplicate id {}", y.id);
            assert!(y.han >= 1, "{} has no han", y.id);
        }
    }

    #[test]
    fn tier_sizes() {
        assert_eq!(by_tier(Tier::S).count(), 9);
        assert_eq!(by_tier(Tier::A).count(), 10);
        assert_eq!(by_tier(Tier::B).count(), 4);
        assert_eq!(by_tier(Tier::C).count(), 1);
    }

    #[test]
    fn by_tier_keeps_catalog_order() {
        let ids: Vec<_> = by_tier(Tier::B).map(|y| y.id).collect();
        assert_eq!(ids, vec!["ryanpeikou", "honitsu", "junchan", "chinitsu"]);
    }

    #[test]
    fn flags_match_table() {
        let menzen: Vec<_> = all().iter().filter(|y| y.menzen_only).map(|y| y.id).collect();
        assert_eq!(
            menzen,
            vec!["riichi", "pinfu", "menzen-tsumo", "ipeikou", "chiitoitsu", "ryanpeikou"]
        );

        let kuisagari: Vec<_> = all().iter().filter(|y| y.kuisagari).map(|y| y.id).collect();
        assert_eq!(
            kuisagari,
            vec!["sanshoku-doujun", "ikkitsuukan", "chanta", "honitsu", "junchan", "chinitsu"]
        );
        // every kuisagari yaku is worth at least 2, so the reduced value stays positive
        assert!(all().iter().filter(|y| y.kuisagari).all(|y| y.han >= 2));
        assert!(!all().iter().any(|y| y.kuisagari && y.menzen_only));
    }

    #[test]
    fn find_known_and_unknown() {
        let y = find(CHINITSU).unwrap();
        assert_eq!(y.han, 6);
        assert_eq!(y.tier, Tier::B);
        assert_eq!(find(y.id), Some(y));
        assert!(find("kokushi").is_none());
        assert_eq!(find(YAKUMAN).unwrap().han, 13);
    }

    #[test]
    fn parse_tier() {
        assert_eq!("A".parse::<Tier>(), Ok(Tier::A));
        assert_eq!(" c ".parse::<Tier>(), Ok(Tier::C));
        assert_eq!("X".parse::<Tier>(), Err(ParseTierError("X".into())));
        assert_eq!(Tier::B.to_string(), "B");
    }
}
