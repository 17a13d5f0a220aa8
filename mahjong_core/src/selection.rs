//! Editable calculator state.
//!
//! `Selection` keeps the request consistent while the user clicks around:
//! going open drops 門前限定役, switching to ron drops 門前清自摸和, and
//! yaku that cannot apply are refused instead of being added.

use crate::yaku::{self, MENZEN_TSUMO};
use crate::{score, ScoreOutcome, ScoreRequest, WinType};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Selection {
    #[serde(default)]
    selected_yaku: Vec<String>,
    #[serde(default)]
    dora: u32,
    #[serde(default)]
    win_type: WinType,
    #[serde(default)]
    open: bool,
    #[serde(default)]
    dealer: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionAction {
    ToggleYaku { id: String },
    SetWinType { win_type: WinType },
    ToggleOpen,
    ToggleDealer,
    IncrementDora,
    DecrementDora,
    Reset,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_yaku(&self) -> &[String] {
        &self.selected_yaku
    }

    pub fn dora(&self) -> u32 {
        self.dora
    }

    pub fn win_type(&self) -> WinType {
        self.win_type
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_dealer(&self) -> bool {
        self.dealer
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_yaku.iter().any(|s| s == id)
    }

    /// Whether `id` can be selected right now. Unknown ids are not disabled,
    /// they are simply not in the catalog.
    pub fn is_disabled(&self, id: &str) -> bool {
        let Some(y) = yaku::find(id) else {
            return false;
        };
        if y.menzen_only && self.open {
            return true;
        }
        y.id == MENZEN_TSUMO && self.win_type == WinType::Ron
    }

    /// Ids of every catalog entry that is currently disabled.
    pub fn disabled_yaku(&self) -> Vec<&'static str> {
        yaku::all()
            .iter()
            .filter(|y| self.is_disabled(y.id))
            .map(|y| y.id)
            .collect()
    }

    /// Adds or removes `id`. Returns false if the toggle was refused.
    pub fn toggle_yaku(&mut self, id: &str) -> bool {
        if let Some(pos) = self.selected_yaku.iter().position(|s| s == id) {
            self.selected_yaku.remove(pos);
            return true;
        }
        if yaku::find(id).is_none() || self.is_disabled(id) {
            debug!(yaku = id, "toggle refused");
            return false;
        }
        self.selected_yaku.push(id.to_string());
        true
    }

    pub fn set_win_type(&mut self, win_type: WinType) {
        self.win_type = win_type;
        if win_type == WinType::Ron {
            self.selected_yaku.retain(|id| id != MENZEN_TSUMO);
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        if self.open {
            self.selected_yaku
                .retain(|id| !yaku::find(id).is_some_and(|y| y.menzen_only));
        }
    }

    pub fn toggle_dealer(&mut self) {
        self.dealer = !self.dealer;
    }

    pub fn increment_dora(&mut self) {
        self.dora = self.dora.saturating_add(1);
    }

    pub fn decrement_dora(&mut self) {
        self.dora = self.dora.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies one action. Returns false only for a refused yaku toggle.
    pub fn apply(&mut self, action: &SelectionAction) -> bool {
        match action {
            SelectionAction::ToggleYaku { id } => return self.toggle_yaku(id),
            SelectionAction::SetWinType { win_type } => self.set_win_type(*win_type),
            SelectionAction::ToggleOpen => self.toggle_open(),
            SelectionAction::ToggleDealer => self.toggle_dealer(),
            SelectionAction::IncrementDora => self.increment_dora(),
            SelectionAction::DecrementDora => self.decrement_dora(),
            SelectionAction::Reset => self.reset(),
        }
        true
    }

    pub fn request(&self) -> ScoreRequest {
        ScoreRequest {
            selected_yaku: self.selected_yaku.clone(),
            dora: self.dora,
            win_type: self.win_type,
            open: self.open,
            dealer: self.dealer,
        }
    }

    pub fn score(&self) -> ScoreOutcome {
        score(&self.request())
    }
}
