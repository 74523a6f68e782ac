//! Offers list assembly.
//!
//! Takes the fetched offer and tier snapshots plus the operator's tab and sort
//! choice, and produces the rows to display alongside per-tab totals. The
//! whole snapshot is sorted first, then filtered to the selected bucket, so
//! both tabs share one ordering. Offers whose tier is missing from the
//! snapshot are left out of the rows but still count toward the totals.

use offerdesk_catalog::{DiscountSummary, TierIndex};
use offerdesk_shared::{Offer, Tier};
use serde::Serialize;

use crate::classifier::{Bucket, BucketCounts};
use crate::labels::{cadence_label, count_label, terms_label};
use crate::links::LinkSettings;
use crate::sorting::SortPreference;

/// One displayed offer
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OfferRow {
    pub offer_id: String,
    pub name: String,
    pub code: String,
    pub tier_name: String,
    /// e.g. "Gold monthly"
    pub plan_label: String,
    pub discount: DiscountSummary,
    pub terms_label: String,
    pub redemption_count: u64,
    /// Only offered when there is at least one redemption to look at
    pub redemption_link: Option<String>,
    /// Copy link, withheld while the tier is archived
    pub share_link: Option<String>,
    pub tier_archived: bool,
    pub editable: bool,
}

impl OfferRow {
    fn build(offer: &Offer, tier: &Tier, links: &LinkSettings) -> Self {
        let tier_archived = !tier.active;

        Self {
            offer_id: offer.id.clone(),
            name: offer.name.clone(),
            code: offer.code.clone(),
            tier_name: tier.name.clone(),
            plan_label: format!("{} {}", tier.name, cadence_label(offer.cadence)),
            discount: DiscountSummary::for_offer(offer, Some(tier)),
            terms_label: terms_label(offer).to_string(),
            redemption_count: offer.redemption_count,
            redemption_link: (offer.redemption_count > 0)
                .then(|| links.redemption_filter_link(&offer.id)),
            share_link: (!tier_archived).then(|| links.share_link(&offer.code)),
            tier_archived,
            editable: !tier_archived,
        }
    }
}

/// Rows for the selected tab plus totals for both tabs
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OfferListing {
    pub bucket: Bucket,
    pub sort: SortPreference,
    pub rows: Vec<OfferRow>,
    pub active_count: usize,
    pub archived_count: usize,
}

impl OfferListing {
    /// Total for the selected tab
    pub fn count(&self) -> usize {
        match self.bucket {
            Bucket::Active => self.active_count,
            Bucket::Archived => self.archived_count,
        }
    }

    pub fn count_label(&self) -> String {
        count_label(self.count())
    }

    pub fn title(&self) -> &'static str {
        self.bucket.title()
    }

    /// True when the tab should show the empty state
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

pub fn classify_and_sort(
    offers: &[Offer],
    tiers: Option<&[Tier]>,
    bucket: Bucket,
    sort: SortPreference,
) -> OfferListing {
    classify_and_sort_with_links(offers, tiers, bucket, sort, &LinkSettings::default())
}

pub fn classify_and_sort_with_links(
    offers: &[Offer],
    tiers: Option<&[Tier]>,
    bucket: Bucket,
    sort: SortPreference,
    links: &LinkSettings,
) -> OfferListing {
    let index = TierIndex::new(tiers);
    let counts = BucketCounts::tally(offers, &index);

    let rows: Vec<OfferRow> = sort
        .sorted(offers)
        .into_iter()
        .filter_map(|offer| {
            let tier = index.get(&offer.tier_id);
            if !bucket.contains(offer, tier) {
                return None;
            }
            match tier {
                Some(tier) => Some(OfferRow::build(offer, tier, links)),
                None => {
                    tracing::warn!(
                        "Offer {} references unknown tier {}, leaving it out",
                        offer.id,
                        offer.tier_id
                    );
                    None
                }
            }
        })
        .collect();

    tracing::debug!(
        "Classified {} offers: {} active, {} archived, {} shown as {}",
        offers.len(),
        counts.active,
        counts.archived,
        rows.len(),
        bucket.as_str()
    );

    OfferListing {
        bucket,
        sort,
        rows,
        active_count: counts.active,
        archived_count: counts.archived,
    }
}
