//! # Notices
//!
//! One-shot events for the presentation layer (toasts, banners).
//!
//! The core never logs or renders. It queues a `Notice`, the UI drains the
//! queue once and decides how to show it.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::OfferKind;

/// How prominently the UI should show a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-facing event raised by a cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum Notice {
    /// An offer went from inactive to active.
    #[serde(rename_all = "camelCase")]
    OfferApplied {
        offer: OfferKind,
        free_item_name: String,
        free_count: usize,
    },

    /// `increase_quantity` was declined because the line is at its stock ceiling.
    #[serde(rename_all = "camelCase")]
    StockLimitReached { product_id: String, name: String },

    /// `add_to_cart` was declined because no stock is left.
    #[serde(rename_all = "camelCase")]
    OutOfStock { product_id: String, name: String },
}

impl Notice {
    /// Suggested presentation level.
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::OfferApplied { .. } => NoticeLevel::Info,
            Notice::StockLimitReached { .. } | Notice::OutOfStock { .. } => NoticeLevel::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::OfferApplied {
                free_item_name,
                free_count,
                ..
            } => write!(f, "Offer applied: {} x{}", free_item_name, free_count),
            Notice::StockLimitReached { name, .. } => {
                write!(f, "Cannot increase quantity of {}, stock limit reached", name)
            }
            Notice::OutOfStock { name, .. } => write!(f, "{} is out of stock", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_notice_text() {
        let notice = Notice::OfferApplied {
            offer: OfferKind::Coke,
            free_item_name: "Free Coca-Cola".to_string(),
            free_count: 2,
        };
        assert_eq!(notice.to_string(), "Offer applied: Free Coca-Cola x2");
        assert_eq!(notice.level(), NoticeLevel::Info);
    }

    #[test]
    fn test_notice_serializes_with_kind_tag() {
        let notice = Notice::StockLimitReached {
            product_id: "p1".to_string(),
            name: "Bananas".to_string(),
        };
        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["kind"], "stockLimitReached");
        assert_eq!(json["productId"], "p1");
        assert_eq!(notice.level(), NoticeLevel::Error);
    }
}
