use std::cmp::Ordering;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions};
use offerdesk_shared::{Offer, OfferError};
use serde::{Deserialize, Serialize};

/// Column the list is ordered by
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    DateAdded,
    Name,
    Redemptions,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateAdded => "date-added",
            SortKey::Name => "name",
            SortKey::Redemptions => "redemptions",
        }
    }

    /// Ascending comparison for this key
    pub fn compare(&self, a: &Offer, b: &Offer) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Redemptions => a.redemption_count.cmp(&b.redemption_count),
            SortKey::DateAdded => a.created_at_millis().cmp(&b.created_at_millis()),
        }
    }
}

impl FromStr for SortKey {
    type Err = OfferError;

    /// Unknown keys sort by date added.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "name" => SortKey::Name,
            "redemptions" => SortKey::Redemptions,
            _ => SortKey::DateAdded,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(OfferError::unrecognized("sort direction", other)),
        }
    }
}

/// Sort key and direction chosen by the operator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortPreference {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortPreference {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn toggled(self) -> Self {
        Self {
            direction: self.direction.flipped(),
            ..self
        }
    }

    pub fn with_key(self, key: SortKey) -> Self {
        Self { key, ..self }
    }

    pub fn compare(&self, a: &Offer, b: &Offer) -> Ordering {
        self.direction.apply(self.key.compare(a, b))
    }

    /// Stable ordering of the whole snapshot; ties keep input order.
    pub fn sorted<'a>(&self, offers: &'a [Offer]) -> Vec<&'a Offer> {
        let mut sorted: Vec<&Offer> = offers.iter().collect();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

thread_local! {
    // Root collation, what an unlocalised `localeCompare` uses
    static NAME_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Locale-aware name ordering; names equal under collation put lower case first.
fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => {
                let folded_a = a.chars().flat_map(char::to_lowercase);
                let folded_b = b.chars().flat_map(char::to_lowercase);
                folded_a.cmp(folded_b)
            }
        })
        .then_with(|| b.cmp(a))
}
