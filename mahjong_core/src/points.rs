use crate::WinType;
use serde::Serialize;

/// 満貫以上の区分
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Limit {
    Mangan,
    Haneman,
    Baiman,
    Sanbaiman,
    Yakuman,
}

impl Limit {
    /// Limit reached by `han` at `fu`, if any. 4翻30符/40符 is rounded up to
    /// mangan.
    pub fn from_han_fu(han: u32, fu: u32) -> Option<Limit> {
        match han {
            13.. => Some(Limit::Yakuman),
            11..=12 => Some(Limit::Sanbaiman),
            8..=10 => Some(Limit::Baiman),
            6..=7 => Some(Limit::Haneman),
            5 => Some(Limit::Mangan),
            4 if fu == 30 || fu == 40 => Some(Limit::Mangan),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Limit::Mangan => "Mangan",
            Limit::Haneman => "Haneman",
            Limit::Baiman => "Baiman",
            Limit::Sanbaiman => "Sanbaiman",
            Limit::Yakuman => "Yakuman",
        }
    }

    /// Non-dealer ron value; everything else is derived from it.
    fn ko_ron(self) -> u32 {
        match self {
            Limit::Mangan => 8000,
            Limit::Haneman => 12000,
            Limit::Baiman => 16000,
            Limit::Sanbaiman => 24000,
            Limit::Yakuman => 32000,
        }
    }

    fn payments(self) -> Payments {
        let ko_ron = self.ko_ron();
        Payments {
            ko_ron,
            oya_ron: ko_ron * 3 / 2,
            ko_tsumo: (ko_ron / 2, ko_ron / 4),
            oya_tsumo: ko_ron / 2,
        }
    }
}

/// Every way a given hand value can be paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Payments {
    ko_ron: u32,
    oya_ron: u32,
    /// (dealer pays, each other non-dealer pays)
    ko_tsumo: (u32, u32),
    /// each non-dealer pays
    oya_tsumo: u32,
}

#[derive(Debug, Clone, Copy)]
struct PointRow {
    fu: u32,
    han: u32,
    payments: Payments,
}

const fn row(fu: u32, han: u32, ko_ron: u32, oya_ron: u32, ko_tsumo: (u32, u32), oya_tsumo: u32) -> PointRow {
    PointRow {
        fu,
        han,
        payments: Payments {
            ko_ron,
            oya_ron,
            ko_tsumo,
            oya_tsumo,
        },
    }
}

// 満貫未満の点数表. Only the fu/han pairs this calculator can produce are listed.
const POINT_TABLE: [PointRow; 12] = [
    row(20, 2, 1300, 2100, (700, 400), 700),
    row(20, 3, 2600, 3900, (1300, 700), 1300),
    row(20, 4, 5200, 7800, (2600, 1300), 2600),
    row(25, 2, 1600, 2400, (800, 400), 800),
    row(25, 3, 3200, 4800, (1600, 800), 1600),
    row(25, 4, 6400, 9600, (3200, 1600), 3200),
    row(30, 1, 1000, 1500, (500, 300), 500),
    row(30, 2, 2000, 2900, (1000, 500), 1000),
    row(30, 3, 3900, 5800, (2000, 1000), 2000),
    row(40, 1, 1300, 2000, (700, 400), 700),
    row(40, 2, 2600, 3900, (1300, 700), 1300),
    row(40, 3, 5200, 7700, (2600, 1300), 2600),
];

fn lookup(fu: u32, han: u32) -> Option<Payments> {
    POINT_TABLE
        .iter()
        .find(|r| r.fu == fu && r.han == han)
        .map(|r| r.payments)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointBreakdown {
    pub label: String,
    pub limit: Option<Limit>,
    pub from_non_dealer: Option<u32>,
    pub from_dealer: Option<u32>,
    pub total: u32,
}

/// Points for a hand of `han` at `fu`. `None` when the pair is below mangan
/// and missing from the table.
pub fn calc_points(fu: u32, han: u32, win_type: WinType, dealer: bool) -> Option<PointBreakdown> {
    let limit = Limit::from_han_fu(han, fu);
    let (payments, label) = match limit {
        Some(l) => (l.payments(), l.label().to_string()),
        None => (lookup(fu, han)?, format!("{}han{}fu", han, fu)),
    };

    let (from_non_dealer, from_dealer, total) = match (win_type, dealer) {
        (WinType::Ron, false) => (None, None, payments.ko_ron),
        (WinType::Ron, true) => (None, None, payments.oya_ron),
        (WinType::Tsumo, false) => {
            let (oya, ko) = payments.ko_tsumo;
            (Some(ko), Some(oya), oya + ko * 2)
        }
        (WinType::Tsumo, true) => {
            let each = payments.oya_tsumo;
            (Some(each), Some(each), each * 3)
        }
    };

    Some(PointBreakdown {
        label,
        limit,
        from_non_dealer,
        from_dealer,
        total,
    })
}
