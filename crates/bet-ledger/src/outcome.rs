//! Outcome classification from free-text result labels.
//!
//! Sheets in the wild use "Green", "win ✅", "RED ❌", "push", or leave the
//! column empty and rely on the profit column. The rules below interleave the
//! lexical and numeric signals in a fixed order; that order is load-bearing.

use crate::types::OutcomeKind;

const WIN_MARKERS: [&str; 3] = ["win", "green", "✅"];
const LOSS_MARKERS: [&str; 3] = ["loss", "red", "❌"];
const VOID_MARKERS: [&str; 3] = ["void", "push", "⚪"];

fn mentions(label: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| label.contains(m))
}

/// Map a result label and the row's parsed profit to an outcome.
///
/// First match wins:
///   1. label mentions win/green/✅       → WIN
///   2. profit > 0                        → WIN
///   3. label mentions loss/red/❌        → LOSS
///   4. profit < 0                        → LOSS
///   5. label mentions void/push/⚪       → VOID
///   6. profit == 0                       → VOID
///   7. otherwise (NaN profit)            → PENDING
///
/// So `("Green ✅", -5.0)` is WIN (label first) while `("", -5.0)` is LOSS.
/// An explicit label is never cross-checked against the profit sign.
pub fn classify(label: &str, profit: f64) -> OutcomeKind {
    let label = label.trim().to_lowercase();

    if mentions(&label, &WIN_MARKERS) {
        return OutcomeKind::Win;
    }
    if profit > 0.0 {
        return OutcomeKind::Win;
    }
    if mentions(&label, &LOSS_MARKERS) {
        return OutcomeKind::Loss;
    }
    if profit < 0.0 {
        return OutcomeKind::Loss;
    }
    if mentions(&label, &VOID_MARKERS) || profit == 0.0 {
        return OutcomeKind::Void;
    }
    OutcomeKind::Pending
}
