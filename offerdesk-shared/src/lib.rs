pub mod error;
pub mod models;

pub use error::OfferError;
pub use models::{Cadence, DiscountType, Offer, OfferDuration, OfferStatus, Tier};
