use std::collections::HashMap;

use offerdesk_shared::Tier;

/// Borrowed lookup of tiers by id over a snapshot.
///
/// When the snapshot repeats an id the first tier wins.
pub struct TierIndex<'a> {
    tiers: HashMap<&'a str, &'a Tier>,
}

impl<'a> TierIndex<'a> {
    /// `None` models a tier list that has not been fetched: every lookup misses.
    pub fn new(tiers: Option<&'a [Tier]>) -> Self {
        let mut index = HashMap::new();
        for tier in tiers.unwrap_or_default() {
            index.entry(tier.id.as_str()).or_insert(tier);
        }
        Self { tiers: index }
    }

    pub fn get(&self, tier_id: &str) -> Option<&'a Tier> {
        self.tiers.get(tier_id).copied()
    }
}
