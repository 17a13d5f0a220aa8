use crate::fu::calc_fu;
use crate::points::calc_points;
use crate::yaku::{self, YakuDef, MENZEN_TSUMO};
use crate::{ScoreOutcome, ScoreRequest, ScoreResult, WinType};
use std::collections::BTreeSet;
use tracing::debug;

pub fn score(req: &ScoreRequest) -> ScoreOutcome {
    let resolved = resolve_yaku(req);
    let auto_tsumo = implicit_tsumo(req);

    if resolved.is_empty() && req.dora == 0 && !auto_tsumo {
        debug!("nothing selected");
        return ScoreOutcome::NothingSelected;
    }

    let han = total_han(&resolved, req, auto_tsumo);
    let fu = calc_fu(&resolved, req.win_type, req.open);

    let ids: Vec<&str> = resolved.iter().map(|y| y.id).collect();
    debug!(
        yaku = ?ids,
        auto_tsumo,
        dora = req.dora,
        han,
        fu,
        "resolved hand"
    );

    match calc_points(fu, han, req.win_type, req.dealer) {
        Some(bd) => ScoreOutcome::Scored(ScoreResult {
            fu,
            han,
            label: bd.label,
            limit: bd.limit,
            from_non_dealer: bd.from_non_dealer,
            from_dealer: bd.from_dealer,
            total: bd.total,
        }),
        None => {
            debug!(fu, han, "no entry in point table");
            ScoreOutcome::Undefined { fu, han }
        }
    }
}

/// Catalog entries for the selected ids, in catalog order, each at most once.
/// Unknown ids and yaku that cannot apply to this hand are dropped.
fn resolve_yaku(req: &ScoreRequest) -> Vec<&'static YakuDef> {
    let ids: BTreeSet<&str> = req.selected_yaku.iter().map(String::as_str).collect();

    yaku::all()
        .iter()
        .filter(|y| ids.contains(y.id))
        .filter(|y| admits(y, req))
        .collect()
}

/// 門前限定役 never count for an open hand, and 門前清自摸和 never counts for ron.
fn admits(y: &YakuDef, req: &ScoreRequest) -> bool {
    if y.menzen_only && req.open {
        debug!(yaku = y.id, "menzen-only yaku ignored for open hand");
        return false;
    }
    if y.id == MENZEN_TSUMO && req.win_type == WinType::Ron {
        debug!("menzen tsumo ignored for ron");
        return false;
    }
    true
}

/// A concealed hand won by tsumo always carries 門前清自摸和, selected or not.
fn implicit_tsumo(req: &ScoreRequest) -> bool {
    req.win_type == WinType::Tsumo
        && !req.open
        && !req.selected_yaku.iter().any(|id| id == MENZEN_TSUMO)
}

/// 喰い下がり
fn kuisagari(y: &YakuDef, open: bool) -> bool {
    open && y.kuisagari
}

fn total_han(resolved: &[&YakuDef], req: &ScoreRequest, auto_tsumo: bool) -> u32 {
    let yaku_han: u32 = resolved
        .iter()
        .map(|y| if kuisagari(y, req.open) { y.han - 1 } else { y.han })
        .sum();

    // dora comes straight from the caller
    yaku_han
        .saturating_add(req.dora)
        .saturating_add(u32::from(auto_tsumo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaku::{CHINITSU, PINFU, RIICHI, TANYAO};

    fn req(ids: &[&str], win_type: WinType, open: bool) -> ScoreRequest {
        ScoreRequest {
            selected_yaku: ids.iter().map(|s| s.to_string()).collect(),
            dora: 0,
            win_type,
            open,
            dealer: false,
        }
    }

    #[test]
    fn resolve_dedups_and_drops_unknown() {
        let r = req(&[TANYAO, "tanyao", "nonexistent", RIICHI], WinType::Ron, false);
        let ids: Vec<_> = resolve_yaku(&r).iter().map(|y| y.id).collect();
        assert_eq!(ids, vec![RIICHI, TANYAO]);
    }

    #[test]
    fn resolve_drops_menzen_only_when_open() {
        let r = req(&[RIICHI, PINFU, TANYAO], WinType::Ron, true);
        let ids: Vec<_> = resolve_yaku(&r).iter().map(|y| y.id).collect();
        assert_eq!(ids, vec![TANYAO]);
    }

    #[test]
    fn resolve_drops_menzen_tsumo_for_ron() {
        let r = req(&[MENZEN_TSUMO, TANYAO], WinType::Ron, false);
        let ids: Vec<_> = resolve_yaku(&r).iter().map(|y| y.id).collect();
        assert_eq!(ids, vec![TANYAO]);
    }

    #[test]
    fn implicit_tsumo_rules() {
        assert!(implicit_tsumo(&req(&[], WinType::Tsumo, false)));
        assert!(!implicit_tsumo(&req(&[MENZEN_TSUMO], WinType::Tsumo, false)));
        assert!(!implicit_tsumo(&req(&[], WinType::Tsumo, true)));
        assert!(!implicit_tsumo(&req(&[], WinType::Ron, false)));
    }

    #[test]
    fn explicit_menzen_tsumo_counts_once() {
        let r = req(&[MENZEN_TSUMO, TANYAO], WinType::Tsumo, false);
        let resolved = resolve_yaku(&r);
        assert_eq!(total_han(&resolved, &r, implicit_tsumo(&r)), 2);
    }

    #[test]
    fn kuisagari_only_when_open() {
        let closed = req(&[CHINITSU], WinType::Ron, false);
        let open = req(&[CHINITSU], WinType::Ron, true);
        assert_eq!(total_han(&resolve_yaku(&closed), &closed, false), 6);
        assert_eq!(total_han(&resolve_yaku(&open), &open, false), 5);
    }

    #[test]
    fn dora_never_reduced() {
        let mut r = req(&[CHINITSU], WinType::Ron, true);
        r.dora = 3;
        assert_eq!(total_han(&resolve_yaku(&r), &r, false), 8);
    }

    #[test]
    fn han_saturates_on_huge_dora() {
        let mut r = req(&[CHINITSU], WinType::Tsumo, false);
        r.dora = u32::MAX;
        assert_eq!(total_han(&resolve_yaku(&r), &r, true), u32::MAX);
    }
}
