pub mod currency;
pub mod pricing;
pub mod tiers;

pub use currency::{currency_symbol, format_price};
pub use pricing::{compute_discount, DiscountSummary, DiscountTone};
pub use tiers::TierIndex;
