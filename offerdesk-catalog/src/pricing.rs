use offerdesk_shared::{Cadence, DiscountType, Offer, Tier};
use serde::Serialize;

use crate::currency::{format_amount, format_price, minor_to_decimal};

/// Semantic colour category for the discount label
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTone {
    /// Percentage discounts (green)
    Positive,
    /// Fixed amount discounts (blue)
    Informational,
    /// Free trials (pink)
    Accent,
    /// No styling for discount types we cannot price
    Neutral,
}

/// Display-ready pricing for one offer
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiscountSummary {
    pub label: String,
    pub tone: DiscountTone,
    /// Base tier price in minor units
    pub original_price: i64,
    /// Price after discount in minor units, never negative
    pub discounted_price: f64,
    /// Empty for trials
    pub original_price_text: String,
    pub discounted_price_text: String,
}

/// Price an offer against its tier.
///
/// A missing tier prices from zero. Unrecognized discount types produce an
/// empty label and leave the base price untouched.
pub fn compute_discount(
    discount_type: DiscountType,
    amount: i64,
    cadence: Cadence,
    currency: &str,
    tier: Option<&Tier>,
) -> DiscountSummary {
    let original_price = tier.map(|t| t.price_for(cadence)).unwrap_or(0);
    let base = original_price as f64;

    let (label, tone, discounted) = match discount_type {
        DiscountType::Percent => (
            format!("{}% off", amount),
            DiscountTone::Positive,
            base - (base * amount as f64) / 100.0,
        ),
        DiscountType::Fixed => (
            format!("{} {} off", format_amount(minor_to_decimal(amount as f64)), currency),
            DiscountTone::Informational,
            base - amount as f64,
        ),
        DiscountType::Trial => (
            format!("{} days free", amount),
            DiscountTone::Accent,
            base,
        ),
        DiscountType::Unrecognized => (String::new(), DiscountTone::Neutral, base),
    };

    let discounted_price = discounted.max(0.0);

    let original_price_text = if discount_type == DiscountType::Trial {
        String::new()
    } else {
        format_price(base, currency)
    };

    DiscountSummary {
        label,
        tone,
        original_price,
        discounted_price,
        original_price_text,
        discounted_price_text: format_price(discounted_price, currency),
    }
}

impl DiscountSummary {
    pub fn for_offer(offer: &Offer, tier: Option<&Tier>) -> Self {
        compute_discount(
            offer.discount_type,
            offer.amount,
            offer.cadence,
            &offer.currency,
            tier,
        )
    }
}
