use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::OfferError;

pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// How an offer discounts the tier price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percent,
    Fixed,
    Trial,
    /// Anything the store sends that we do not know how to price
    #[serde(other)]
    Unrecognized,
}

impl FromStr for DiscountType {
    type Err = OfferError;

    /// Never fails: unknown discount types price as `Unrecognized`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "percent" => DiscountType::Percent,
            "fixed" => DiscountType::Fixed,
            "trial" => DiscountType::Trial,
            _ => DiscountType::Unrecognized,
        })
    }
}

/// Billing period, selects which tier price is the base
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Month,
    Year,
}

impl FromStr for Cadence {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Cadence::Month),
            "year" => Ok(Cadence::Year),
            other => Err(OfferError::unrecognized("cadence", other)),
        }
    }
}

/// How long the discount applies. Display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OfferDuration {
    Once,
    Repeating,
    Forever,
}

impl FromStr for OfferDuration {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "once" => Ok(OfferDuration::Once),
            "repeating" => Ok(OfferDuration::Repeating),
            "forever" => Ok(OfferDuration::Forever),
            other => Err(OfferError::unrecognized("duration", other)),
        }
    }
}

/// Offer lifecycle, independent of the tier lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Active,
    Archived,
}

impl FromStr for OfferStatus {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(OfferStatus::Active),
            "archived" => Ok(OfferStatus::Archived),
            other => Err(OfferError::unrecognized("status", other)),
        }
    }
}

/// A promotional discount attached to a tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub amount: i64,
    pub cadence: Cadence,
    pub duration: OfferDuration,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: OfferStatus,
    #[serde(default)]
    pub redemption_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub tier_id: String,
}

impl Offer {
    /// Creation time in epoch millis, offers without one sort as the earliest
    pub fn created_at_millis(&self) -> i64 {
        self.created_at.map(|ts| ts.timestamp_millis()).unwrap_or(0)
    }

    pub fn is_trial(&self) -> bool {
        self.discount_type == DiscountType::Trial
    }
}

/// Subscription pricing plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tier {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub monthly_price: i64,
    #[serde(default)]
    pub yearly_price: i64,
    pub active: bool,
}

impl Tier {
    /// Base price in minor units for the given cadence
    pub fn price_for(&self, cadence: Cadence) -> i64 {
        match cadence {
            Cadence::Month => self.monthly_price,
            Cadence::Year => self.yearly_price,
        }
    }
}
