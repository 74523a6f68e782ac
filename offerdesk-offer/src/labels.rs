use offerdesk_shared::{Cadence, Offer, OfferDuration};

pub const EMPTY_STATE_MESSAGE: &str = "No offers found.";

pub fn cadence_label(cadence: Cadence) -> &'static str {
    match cadence {
        Cadence::Month => "monthly",
        Cadence::Year => "yearly",
    }
}

pub fn duration_label(duration: OfferDuration) -> &'static str {
    match duration {
        OfferDuration::Once => "First payment",
        OfferDuration::Repeating => "Repeating",
        OfferDuration::Forever => "Forever",
    }
}

/// Second line of the terms column. Trials have no duration to show.
pub fn terms_label(offer: &Offer) -> &'static str {
    if offer.is_trial() {
        "Trial period"
    } else {
        duration_label(offer.duration)
    }
}

/// "1 offer", "3 offers"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 offer".to_string()
    } else {
        format!("{} offers", count)
    }
}
