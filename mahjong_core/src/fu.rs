use crate::yaku::{YakuDef, CHIITOITSU, PINFU};
use crate::WinType;

/// 符. The calculator never sees the tiles, so fu comes from the selected
/// yaku and the way the hand was won:
///
/// - 七対子 25
/// - 平和ツモ 20, 平和ロン 30
/// - 門前ロン 40
/// - otherwise 30
pub fn calc_fu(yaku: &[&YakuDef], win_type: WinType, open: bool) -> u32 {
    let has = |id: &str| yaku.iter().any(|y| y.id == id);

    if has(CHIITOITSU) {
        return 25;
    }

    if has(PINFU) {
        return match win_type {
            WinType::Tsumo => 20,
            WinType::Ron => 30,
        };
    }

    if !open && win_type == WinType::Ron {
        return 40;
    }

    30
}
