//! # Offer Evaluator
//!
//! Derives free bonus items and applied-offer flags from a cart snapshot.
//!
//! ## Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Offer Evaluation (per cart change)                   │
//! │                                                                         │
//! │  Cart snapshot                                                          │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  for rule in STANDARD_OFFERS:                                           │
//! │      line = first line whose name ≈ rule.trigger_name                  │
//! │      free = floor(line.quantity / rule.threshold)                      │
//! │      free > 0 ──► applied[rule.kind] = true                            │
//! │                   emit free × FreeItem { id: prefix-1..n, price: 0 }   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  OfferOutcome { free_items, applied }   ◄── brand-new value every time │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  OfferTracker: inactive → active?  ──► Notice::OfferApplied (once)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Current Offers
//! | Offer  | Trigger      | Every | Grants           |
//! |--------|--------------|-------|------------------|
//! | coke   | `Coca-Cola`  | 6     | `Free Coca-Cola` |
//! | coffee | `Croissants` | 3     | `Free Coffee`    |
//!
//! Quantities between thresholds earn no partial credit; 12 cokes earn 2.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::notice::Notice;
use crate::types::{AppliedOffers, CartLine, FreeItem, OfferKind};

// =============================================================================
// Rule Table
// =============================================================================

/// Where a free item takes a display attribute from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeItemField {
    /// Copy the attribute from the triggering cart line.
    FromTrigger,
    /// Use a fixed value.
    Fixed(&'static str),
}

impl FreeItemField {
    fn resolve(&self, trigger: &str) -> String {
        match self {
            FreeItemField::FromTrigger => trigger.to_string(),
            FreeItemField::Fixed(value) => (*value).to_string(),
        }
    }
}

/// A "buy N get 1 free" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferRule {
    pub kind: OfferKind,
    /// Product name that triggers the offer, matched case-insensitively.
    pub trigger_name: &'static str,
    /// Units needed per free item.
    pub threshold: u32,
    pub free_item_name: &'static str,
    /// Free item ids are `{id_prefix}{n}`, n starting at 1.
    pub id_prefix: &'static str,
    pub description: &'static str,
    pub category: FreeItemField,
    pub image: FreeItemField,
    /// Marketing line shown in the offer banner.
    pub offer_text: &'static str,
}

/// The storefront's promotions, in evaluation order.
pub static STANDARD_OFFERS: [OfferRule; 2] = [
    OfferRule {
        kind: OfferKind::Coke,
        trigger_name: "coca-cola",
        threshold: 6,
        free_item_name: "Free Coca-Cola",
        id_prefix: "free-coke-",
        description: "Free item offer",
        category: FreeItemField::FromTrigger,
        image: FreeItemField::FromTrigger,
        offer_text: "Buy 6 cans of Coca-Cola, get 1 free",
    },
    OfferRule {
        kind: OfferKind::Coffee,
        trigger_name: "croissants",
        threshold: 3,
        free_item_name: "Free Coffee",
        id_prefix: "free-coffee-",
        description: "Free coffee with croissant offer",
        category: FreeItemField::Fixed("drinks"),
        image: FreeItemField::Fixed(""),
        offer_text: "Buy 3 croissants, get a free coffee",
    },
];

/// Returns the rule for `kind`.
pub fn rule_for(kind: OfferKind) -> &'static OfferRule {
    match kind {
        OfferKind::Coke => &STANDARD_OFFERS[0],
        OfferKind::Coffee => &STANDARD_OFFERS[1],
    }
}

impl OfferRule {
    /// First cart line whose product name matches the trigger.
    pub fn trigger_line<'a>(&self, lines: &'a [CartLine]) -> Option<&'a CartLine> {
        lines
            .iter()
            .find(|l| l.product.name.to_lowercase() == self.trigger_name)
    }

    /// Free units earned by `quantity` trigger units.
    pub fn free_count(&self, quantity: u32) -> u32 {
        if self.threshold == 0 {
            return 0;
        }
        quantity / self.threshold
    }

    fn free_item(&self, trigger: &CartLine, n: u32) -> FreeItem {
        FreeItem {
            id: format!("{}{}", self.id_prefix, n),
            name: self.free_item_name.to_string(),
            description: self.description.to_string(),
            category: self.category.resolve(&trigger.product.category),
            price: Money::zero(),
            image: self.image.resolve(&trigger.product.image),
            available: 1,
            offer: self.kind,
        }
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Everything the offers derive from one cart snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OfferOutcome {
    pub free_items: Vec<FreeItem>,
    pub applied: AppliedOffers,
}

impl OfferOutcome {
    /// Free items granted by `kind`.
    pub fn free_count(&self, kind: OfferKind) -> usize {
        self.free_items.iter().filter(|i| i.offer == kind).count()
    }
}

/// Evaluates the standard offers against `lines`.
///
/// Pure and idempotent: the same lines always give an equal outcome.
pub fn evaluate_offers(lines: &[CartLine]) -> OfferOutcome {
    evaluate_rules(&STANDARD_OFFERS, lines)
}

/// Evaluates an arbitrary rule table against `lines`.
pub fn evaluate_rules(rules: &[OfferRule], lines: &[CartLine]) -> OfferOutcome {
    let mut outcome = OfferOutcome::default();

    for rule in rules {
        let Some(trigger) = rule.trigger_line(lines) else {
            continue;
        };

        let free = rule.free_count(trigger.quantity);
        if free == 0 {
            continue;
        }

        outcome.applied.apply(rule.kind);
        outcome
            .free_items
            .extend((1..=free).map(|n| rule.free_item(trigger, n)));
    }

    outcome
}

// =============================================================================
// Transition Tracking
// =============================================================================

/// Remembers which offers were active so activation is announced once.
///
/// ```text
/// inactive ──(threshold reached)──► active     → Notice::OfferApplied
/// active   ──(still reached)──────► active     → (silence)
/// active   ──(dropped below)──────► inactive   → (silence, re-armed)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OfferTracker {
    previous: AppliedOffers,
}

impl OfferTracker {
    /// Creates a tracker with every offer inactive.
    pub fn new() -> Self {
        OfferTracker::default()
    }

    /// Offers applied at the last observation.
    pub fn previous(&self) -> AppliedOffers {
        self.previous
    }

    /// Records `outcome` and returns a notice per newly activated offer.
    pub fn observe(&mut self, outcome: &OfferOutcome) -> Vec<Notice> {
        let notices = OfferKind::ALL
            .into_iter()
            .filter(|&kind| outcome.applied.is_applied(kind) && !self.previous.is_applied(kind))
            .map(|kind| Notice::OfferApplied {
                offer: kind,
                free_item_name: rule_for(kind).free_item_name.to_string(),
                free_count: outcome.free_count(kind),
            })
            .collect();

        self.previous = outcome.applied;
        notices
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
