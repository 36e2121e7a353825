use core::time::Duration;

use serde::Serialize;
use twentyone::{
    Card, Color, DealerCard, Outcome, Phase, RoundSnapshot, Suit, Table, TableOptions, Verdict,
};
use wasm_bindgen::prelude::*;

/// Browser binding for a [`Table`].
///
/// Every action takes the page clock in milliseconds (e.g. `performance.now()`).
/// The page schedules its own `setTimeout` for `restart_due_at()` and calls
/// `poll()` when it fires; a stale timer finds nothing to do.
#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            table: Table::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.table = Table::new(*self.table.options(), seed as u64);
    }

    pub fn deal(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        let snapshot = self.table.deal(millis(now_ms)).map_err(js_err)?;
        to_js_value(&JsSnapshot::from(&snapshot))
    }

    pub fn hit(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        let snapshot = self.table.hit(millis(now_ms)).map_err(js_err)?;
        to_js_value(&JsSnapshot::from(&snapshot))
    }

    pub fn stand(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        let snapshot = self.table.stand(millis(now_ms)).map_err(js_err)?;
        to_js_value(&JsSnapshot::from(&snapshot))
    }

    pub fn restart(&mut self) -> Result<JsValue, JsValue> {
        let snapshot = self.table.restart();
        to_js_value(&JsSnapshot::from(&snapshot))
    }

    /// Returns the cleared snapshot if the automatic restart fired, `null` otherwise.
    pub fn poll(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        match self.table.poll(millis(now_ms)) {
            Some(snapshot) => to_js_value(&JsSnapshot::from(&snapshot)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn restart_due_at(&self) -> Option<f64> {
        self.table
            .restart_due_at()
            .map(|at| at.as_secs_f64() * 1000.0)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(&self.table.snapshot()))
    }

    pub fn outcome(&self) -> Option<String> {
        self.table.outcome().map(|outcome| outcome_to_str(outcome).to_string())
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    phase: &'static str,
    player: Vec<JsCard>,
    dealer: Vec<Option<JsCard>>,
    player_score: u16,
    dealer_score: Option<u16>,
    dealer_visible_score: u16,
    outcome: Option<JsOutcome>,
}

impl From<&RoundSnapshot> for JsSnapshot {
    fn from(snapshot: &RoundSnapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            player: snapshot.player.iter().copied().map(card_to_js).collect(),
            dealer: snapshot.dealer.iter().map(dealer_card_to_js).collect(),
            player_score: snapshot.player_score,
            dealer_score: snapshot.dealer_score,
            dealer_visible_score: snapshot.dealer_visible_score,
            outcome: snapshot.outcome.map(JsOutcome::from),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: &'static str,
    suit: &'static str,
    symbol: char,
    color: &'static str,
}

#[derive(Serialize)]
struct JsOutcome {
    kind: &'static str,
    verdict: &'static str,
    message: &'static str,
}

impl From<Outcome> for JsOutcome {
    fn from(outcome: Outcome) -> Self {
        Self {
            kind: outcome_to_str(outcome),
            verdict: verdict_to_str(outcome.verdict()),
            message: outcome.message(),
        }
    }
}

fn millis(now_ms: f64) -> Duration {
    if now_ms.is_nan() || now_ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(now_ms / 1000.0).unwrap_or(Duration::MAX)
}

fn dealer_card_to_js(dealer_card: &DealerCard) -> Option<JsCard> {
    if dealer_card.hidden {
        None
    } else {
        Some(card_to_js(dealer_card.card))
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.label(),
        suit: suit_to_str(card.suit),
        symbol: card.suit.symbol(),
        color: match card.color() {
            Color::Black => "black",
            Color::Red => "red",
        },
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Clubs => "Clubs",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "NotStarted",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Resolved => "Resolved",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "PlayerBust",
        Outcome::PlayerBlackjack => "PlayerBlackjack",
        Outcome::DealerBust => "DealerBust",
        Outcome::PlayerWin => "PlayerWin",
        Outcome::DealerWin => "DealerWin",
        Outcome::Push => "Push",
    }
}

fn verdict_to_str(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Win => "win",
        Verdict::Lose => "lose",
        Verdict::Push => "push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_clock_converts_to_duration() {
        assert_eq!(millis(1500.0), Duration::from_millis(1500));
        assert_eq!(millis(0.0), Duration::ZERO);
        assert_eq!(millis(-5.0), Duration::ZERO);
        assert_eq!(millis(f64::NAN), Duration::ZERO);
    }

    #[test]
    fn out_of_range_clock_saturates() {
        assert_eq!(millis(f64::MAX), Duration::MAX);
        assert_eq!(millis(f64::INFINITY), Duration::MAX);
    }
}
