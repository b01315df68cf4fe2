//! PayPal fee calculator
//!
//! Two linked amount fields: what is sent and what the recipient gets after
//! PayPal's cut. Editing either side recomputes the other.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::locale::round_half_away;
use crate::log;

/// Digits with at most one decimal point. Also matches the empty string.
static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("amount pattern compiles"));

/// A percentage plus a fixed fee, charged per transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    /// Share of the sent amount, e.g. `0.054` for 5.4%
    pub percentage: f64,
    /// Flat fee in dollars
    pub fixed: f64,
}

impl Default for FeeSchedule {
    /// Estimate for international payments in USD.
    fn default() -> Self {
        Self {
            percentage: 0.054,
            fixed: 0.30,
        }
    }
}

impl FeeSchedule {
    /// What arrives when `send` is sent. Never negative.
    pub fn received_for(&self, send: f64) -> f64 {
        // NaN fails this comparison too
        if !(send > 0.0) {
            return 0.0;
        }
        let fee = send * self.percentage + self.fixed;
        (send - fee).max(0.0)
    }

    /// What must be sent so that `receive` arrives.
    pub fn send_for(&self, receive: f64) -> f64 {
        if !(receive > 0.0) {
            return 0.0;
        }
        // receive = send - (send * p + f)  =>  send = (receive + f) / (1 - p)
        ((receive + self.fixed) / (1.0 - self.percentage)).max(0.0)
    }

    /// Human-readable rate, e.g. `5.4% + $0.30`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FeeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% + ${:.2}", self.percentage * 100.0, self.fixed)
    }
}

/// Which of the two fields an event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Amount sent
    Send,
    /// Amount the destination account receives
    Receive,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Send => Side::Receive,
            Side::Receive => Side::Send,
        }
    }
}

/// Amount text parsed the way the input accepts it.
fn parse_amount(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

fn cents(value: f64) -> String {
    format!("{:.2}", round_half_away(value, 2))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayPalCalculator {
    schedule: FeeSchedule,
    send: String,
    receive: String,
}

impl Default for PayPalCalculator {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}

impl PayPalCalculator {
    /// Starts from sending `5.00`.
    pub fn new(schedule: FeeSchedule) -> Self {
        Self {
            schedule,
            send: cents(5.0),
            receive: cents(schedule.received_for(5.0)),
        }
    }

    pub fn schedule(&self) -> FeeSchedule {
        self.schedule
    }

    pub fn send(&self) -> &str {
        &self.send
    }

    pub fn receive(&self) -> &str {
        &self.receive
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Send => &self.send,
            Side::Receive => &self.receive,
        }
    }

    fn text_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::Send => &mut self.send,
            Side::Receive => &mut self.receive,
        }
    }

    fn convert(&self, from: Side, amount: f64) -> f64 {
        match from {
            Side::Send => self.schedule.received_for(amount),
            Side::Receive => self.schedule.send_for(amount),
        }
    }

    /// Text typed into one side. Returns `false` and keeps the old text
    /// when the edit is not a plain decimal amount.
    ///
    /// The other side gets the unrounded result, or is cleared when the
    /// typed amount is not positive.
    pub fn input(&mut self, side: Side, text: &str) -> bool {
        if !AMOUNT.is_match(text) {
            log::debug!(?side, text, "rejected amount edit");
            return false;
        }
        *self.text_mut(side) = text.to_string();
        let other = match parse_amount(text) {
            Some(amount) => self.convert(side, amount).to_string(),
            None => String::new(),
        };
        *self.text_mut(side.other()) = other;
        true
    }

    /// Focus left one side: normalize both to cents.
    pub fn blur(&mut self, side: Side) {
        let Some(amount) = parse_amount(self.text(side)) else {
            self.send = cents(0.0);
            self.receive = cents(0.0);
            return;
        };
        let other = cents(self.convert(side, amount));
        *self.text_mut(side) = cents(amount);
        *self.text_mut(side.other()) = other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_dollars_sent_is_four_forty_three_received() {
        let fees = FeeSchedule::default();
        assert!((fees.received_for(5.0) - 4.43).abs() < 1e-9);
        assert!((fees.send_for(4.43) - 5.0).abs() < 0.01);
    }

    #[test]
    fn non_positive_amounts_are_free() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.received_for(0.0), 0.0);
        assert_eq!(fees.received_for(-3.0), 0.0);
        assert_eq!(fees.received_for(f64::NAN), 0.0);
        assert_eq!(fees.send_for(0.0), 0.0);
        assert_eq!(fees.send_for(f64::NAN), 0.0);
    }

    #[test]
    fn fee_larger_than_amount_receives_nothing() {
        assert_eq!(FeeSchedule::default().received_for(0.25), 0.0);
    }

    #[test]
    fn describe_rate() {
        insta::assert_snapshot!(FeeSchedule::default().describe(), @"5.4% + $0.30");
    }

    #[test]
    fn starts_at_five_dollars() {
        let calc = PayPalCalculator::default();
        assert_eq!(calc.send(), "5.00");
        assert_eq!(calc.receive(), "4.43");
    }

    #[test]
    fn typing_updates_the_other_side_unrounded() {
        let mut calc = PayPalCalculator::default();
        assert!(calc.input(Side::Send, "10"));
        assert_eq!(calc.send(), "10");
        assert_eq!(calc.receive(), "9.16");

        assert!(calc.input(Side::Receive, "10"));
        assert_eq!(calc.send(), "10.887949260042285");
    }

    #[test]
    fn partial_input_is_kept() {
        let mut calc = PayPalCalculator::default();
        assert!(calc.input(Side::Send, "2."));
        assert_eq!(calc.send(), "2.");
        assert_eq!(calc.receive(), "1.592");

        assert!(calc.input(Side::Send, "."));
        assert_eq!(calc.receive(), "");
        assert!(calc.input(Side::Send, ""));
        assert_eq!(calc.receive(), "");
    }

    #[test]
    fn rejected_edits_keep_old_text() {
        let mut calc = PayPalCalculator::default();
        for bad in ["abc", "1.2.3", "-5", "1,5", "1e3"] {
            assert!(!calc.input(Side::Send, bad), "{bad} accepted");
        }
        assert_eq!(calc.send(), "5.00");
        assert_eq!(calc.receive(), "4.43");
    }

    #[test]
    fn blur_normalizes_to_cents() {
        let mut calc = PayPalCalculator::default();
        calc.input(Side::Receive, "100");
        calc.blur(Side::Receive);
        assert_eq!(calc.receive(), "100.00");
        assert_eq!(calc.send(), "106.03");

        calc.input(Side::Send, "5");
        calc.blur(Side::Send);
        assert_eq!(calc.send(), "5.00");
        assert_eq!(calc.receive(), "4.43");
    }

    #[test]
    fn blur_rounds_half_cents_up() {
        let mut calc = PayPalCalculator::default();
        calc.input(Side::Send, "2.125");
        calc.blur(Side::Send);
        assert_eq!(calc.send(), "2.13");
    }

    #[test]
    fn blur_on_nothing_resets_both() {
        let mut calc = PayPalCalculator::default();
        calc.input(Side::Send, "0");
        calc.blur(Side::Send);
        assert_eq!(calc.send(), "0.00");
        assert_eq!(calc.receive(), "0.00");

        calc.input(Side::Receive, "");
        calc.blur(Side::Receive);
        assert_eq!(calc.send(), "0.00");
        assert_eq!(calc.receive(), "0.00");
    }
}
