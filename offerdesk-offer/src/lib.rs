pub mod classifier;
pub mod labels;
pub mod links;
pub mod listing;
pub mod sorting;

pub use classifier::{Bucket, BucketCounts};
pub use labels::{cadence_label, duration_label};
pub use links::{offer_share_link, redemption_filter_link, LinkSettings};
pub use listing::{classify_and_sort, classify_and_sort_with_links, OfferListing, OfferRow};
pub use sorting::{SortDirection, SortKey, SortPreference};
