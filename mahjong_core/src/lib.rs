use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum WinType {
    /// 自摸和（self-draw）
    #[default]
    Tsumo,
    /// 栄和（claimed discard）
    Ron,
}

/// What the caller selected on the calculator.
///
/// `selected_yaku` holds catalog ids; order does not matter and duplicates
/// collapse. Ids the catalog does not know are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScoreRequest {
    #[serde(default)]
    pub selected_yaku: Vec<String>,
    #[serde(default)]
    pub dora: u32,
    pub win_type: WinType,
    /// 副露あり
    #[serde(default)]
    pub open: bool,
    /// 親
    #[serde(default)]
    pub dealer: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScoreResult {
    pub fu: u32,
    pub han: u32,
    /// "Mangan" .. "Yakuman" for limit hands, otherwise e.g. "2han40fu"
    pub label: String,
    pub limit: Option<Limit>,
    /// Tsumo only. Non-dealer winner: paid by each of the two other
    /// non-dealers. Dealer winner: paid by each of the three non-dealers.
    pub from_non_dealer: Option<u32>,
    /// Tsumo only. Non-dealer winner: paid by the dealer. Dealer winner:
    /// the same all-pay amount as `from_non_dealer`.
    pub from_dealer: Option<u32>,
    /// Everything the winner receives.
    pub total: u32,
}

/// Result of scoring a request. Only `Scored` carries points; the other two
/// are normal states a calculator passes through, not failures.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreOutcome {
    Scored(ScoreResult),
    /// No yaku, no dora and no implicit menzen tsumo.
    NothingSelected,
    /// The fu/han pair has no entry in the point table.
    Undefined { fu: u32, han: u32 },
}

impl ScoreOutcome {
    pub fn result(&self) -> Option<&ScoreResult> {
        match self {
            ScoreOutcome::Scored(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_result(self) -> Option<ScoreResult> {
        match self {
            ScoreOutcome::Scored(r) => Some(r),
            _ => None,
        }
    }
}

mod engine;
mod fu;
mod points;
pub mod selection;
pub mod yaku;

pub use points::Limit;
pub use engine::score;
pub use selection::{Selection, SelectionAction};
pub use yaku::{ParseTierError, Tier, YakuDef};
