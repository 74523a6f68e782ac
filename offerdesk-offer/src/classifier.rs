use std::str::FromStr;

use offerdesk_catalog::TierIndex;
use offerdesk_shared::{Offer, OfferError, OfferStatus, Tier};
use serde::{Deserialize, Serialize};

/// Visibility partition used by the offers list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    #[default]
    Active,
    Archived,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Active => "active",
            Bucket::Archived => "archived",
        }
    }

    /// Heading shown above the list
    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Active => "Active offers",
            Bucket::Archived => "Archived offers",
        }
    }

    pub fn contains(&self, offer: &Offer, tier: Option<&Tier>) -> bool {
        match self {
            Bucket::Active => is_active(offer, tier),
            Bucket::Archived => is_archived(offer, tier),
        }
    }
}

impl FromStr for Bucket {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Bucket::Active),
            "archived" => Ok(Bucket::Archived),
            other => Err(OfferError::unrecognized("bucket", other)),
        }
    }
}

/// Active only while both the offer and its tier are live.
pub fn is_active(offer: &Offer, tier: Option<&Tier>) -> bool {
    offer.status == OfferStatus::Active && tier.is_some_and(|t| t.active)
}

/// Archived by its own lifecycle, or because its tier was archived.
///
/// Not the complement of [`is_active`]: an archived offer whose tier is
/// missing still matches here, an active one with a missing tier matches
/// neither.
pub fn is_archived(offer: &Offer, tier: Option<&Tier>) -> bool {
    offer.status == OfferStatus::Archived || tier.is_some_and(|t| !t.active)
}

/// Per-bucket totals over the whole offer snapshot
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct BucketCounts {
    pub active: usize,
    pub archived: usize,
}

impl BucketCounts {
    pub fn tally(offers: &[Offer], tiers: &TierIndex<'_>) -> Self {
        offers.iter().fold(Self::default(), |mut counts, offer| {
            let tier = tiers.get(&offer.tier_id);
            if is_active(offer, tier) {
                counts.active += 1;
            }
            if is_archived(offer, tier) {
                counts.archived += 1;
            }
            counts
        })
    }

    pub fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Active => self.active,
            Bucket::Archived => self.archived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offerdesk_shared::{Cadence, DiscountType, OfferDuration};

    fn offer(status: OfferStatus, tier_id: &str) -> Offer {
        Offer {
            id: format!("offer-{}", tier_id),
            name: "Spring sale".to_string(),
            code: "spring".to_string(),
            discount_type: DiscountType::Percent,
            amount: 10,
            cadence: Cadence::Month,
            duration: OfferDuration::Once,
            currency: "USD".to_string(),
            status,
            redemption_count: 0,
            created_at: None,
            tier_id: tier_id.to_string(),
        }
    }

    fn tier(id: &str, active: bool) -> Tier {
        Tier {
            id: id.to_string(),
            name: "Gold".to_string(),
            monthly_price: 1000,
            yearly_price: 10000,
            active,
        }
    }

    #[test]
    fn test_bucket_membership_matrix() {
        let live = tier("live", true);
        let retired = tier("retired", false);

        let cases = [
            (OfferStatus::Active, Some(&live), true, false),
            (OfferStatus::Active, Some(&retired), false, true),
            (OfferStatus::Archived, Some(&live), false, true),
            (OfferStatus::Archived, Some(&retired), false, true),
            (OfferStatus::Active, None, false, false),
            (OfferStatus::Archived, None, false, true),
        ];

        for (status, tier, active, archived) in cases {
            let o = offer(status, "x");
            assert_eq!(is_active(&o, tier), active, "{:?} {:?}", status, tier);
            assert_eq!(is_archived(&o, tier), archived, "{:?} {:?}", status, tier);
        }
    }

    #[test]
    fn test_tally_counts_dangling_archived_offer() {
        let tiers = vec![tier("live", true), tier("retired", false)];
        let index = TierIndex::new(Some(tiers.as_slice()));
        let offers = vec![
            offer(OfferStatus::Active, "live"),
            offer(OfferStatus::Active, "retired"),
            offer(OfferStatus::Archived, "live"),
            offer(OfferStatus::Active, "missing"),
            offer(OfferStatus::Archived, "missing"),
        ];

        let counts = BucketCounts::tally(&offers, &index);

        assert_eq!(counts, BucketCounts { active: 1, archived: 3 });
        assert_eq!(counts.get(Bucket::Archived), 3);
    }

    #[test]
    fn test_bucket_parsing() {
        assert_eq!("archived".parse::<Bucket>().unwrap(), Bucket::Archived);
        assert_eq!(
            "hidden".parse::<Bucket>(),
            Err(OfferError::unrecognized("bucket", "hidden"))
        );
        assert_eq!(Bucket::default(), Bucket::Active);
        assert_eq!(Bucket::Archived.title(), "Archived offers");
    }
}
