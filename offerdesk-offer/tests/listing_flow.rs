use offerdesk_offer::{classify_and_sort, Bucket, SortDirection, SortKey, SortPreference};
use offerdesk_shared::{Offer, Tier};
use pretty_assertions::assert_eq;

fn snapshot() -> (Vec<Offer>, Vec<Tier>) {
    let tiers: Vec<Tier> = serde_json::from_value(serde_json::json!([
        {"id": "gold", "name": "Gold", "monthly_price": 2000, "yearly_price": 20000, "active": true},
        {"id": "legacy", "name": "Legacy", "monthly_price": 500, "yearly_price": 5000, "active": false}
    ]))
    .unwrap();

    let offers: Vec<Offer> = serde_json::from_value(serde_json::json!([
        {
            "id": "spring", "name": "Spring sale", "code": "spring", "type": "percent",
            "amount": 20, "cadence": "month", "duration": "once", "status": "active",
            "redemption_count": 5, "created_at": "2024-03-01T00:00:00Z", "tier_id": "gold"
        },
        {
            "id": "trial", "name": "Two weeks free", "code": "trial", "type": "trial",
            "amount": 14, "cadence": "year", "duration": "once", "status": "active",
            "redemption_count": 1, "created_at": "2024-05-01T00:00:00Z", "tier_id": "gold"
        },
        {
            "id": "winter", "name": "Winter", "code": "winter", "type": "fixed",
            "amount": 500, "cadence": "month", "duration": "forever", "status": "archived",
            "redemption_count": 9, "created_at": "2023-12-01T00:00:00Z", "tier_id": "gold"
        },
        {
            "id": "retired", "name": "Legacy deal", "code": "legacy", "type": "fixed",
            "amount": 900, "cadence": "month", "duration": "repeating", "status": "active",
            "redemption_count": 9, "tier_id": "legacy"
        },
        {
            "id": "orphan", "name": "Orphan", "code": "orphan", "type": "percent",
            "amount": 10, "cadence": "month", "duration": "once", "status": "active",
            "redemption_count": 2, "created_at": "2024-06-01T00:00:00Z", "tier_id": "gone"
        },
        {
            "id": "orphan-archived", "name": "Orphan archived", "code": "orphan2", "type": "percent",
            "amount": 10, "cadence": "month", "duration": "once", "status": "archived",
            "redemption_count": 0, "tier_id": "gone"
        }
    ]))
    .unwrap();

    (offers, tiers)
}

fn ids(rows: &[offerdesk_offer::OfferRow]) -> Vec<&str> {
    rows.iter().map(|r| r.offer_id.as_str()).collect()
}

#[test]
fn active_tab_shows_live_offers_newest_first() {
    let (offers, tiers) = snapshot();

    let listing = classify_and_sort(&offers, Some(tiers.as_slice()), Bucket::Active, SortPreference::default());

    assert_eq!(ids(&listing.rows), vec!["trial", "spring"]);
    assert_eq!(listing.active_count, 2);
    assert_eq!(listing.count_label(), "2 offers");

    let spring = &listing.rows[1];
    assert_eq!(spring.discount.label, "20% off");
    assert_eq!(spring.discount.discounted_price, 1600.0);
    assert_eq!(spring.discount.original_price_text, "$20");
    assert_eq!(spring.discount.discounted_price_text, "$16");
}

#[test]
fn archived_tab_includes_offers_on_archived_tiers() {
    let (offers, tiers) = snapshot();

    let listing = classify_and_sort(
        &offers,
        Some(tiers.as_slice()),
        Bucket::Archived,
        SortPreference::new(SortKey::Redemptions, SortDirection::Desc),
    );

    // winter and retired tie on redemptions and keep snapshot order
    assert_eq!(ids(&listing.rows), vec!["winter", "retired"]);
    // the archived offer with a missing tier is counted but not shown
    assert_eq!(listing.archived_count, 3);

    let retired = &listing.rows[1];
    assert!(retired.tier_archived);
    assert_eq!(retired.discount.discounted_price_text, "$0");
}

#[test]
fn every_offer_with_a_known_tier_lands_in_exactly_one_tab() {
    let (offers, tiers) = snapshot();
    let sort = SortPreference::new(SortKey::Name, SortDirection::Asc);

    let active = classify_and_sort(&offers, Some(tiers.as_slice()), Bucket::Active, sort);
    let archived = classify_and_sort(&offers, Some(tiers.as_slice()), Bucket::Archived, sort);

    for offer in offers.iter().filter(|o| o.tier_id != "gone") {
        let shown = active.rows.iter().filter(|r| r.offer_id == offer.id).count()
            + archived.rows.iter().filter(|r| r.offer_id == offer.id).count();
        assert_eq!(shown, 1, "offer {}", offer.id);
    }

    for orphan in ["orphan", "orphan-archived"] {
        assert!(!active.rows.iter().any(|r| r.offer_id == orphan));
        assert!(!archived.rows.iter().any(|r| r.offer_id == orphan));
    }
}

#[test]
fn missing_tier_list_renders_nothing() {
    let (offers, _) = snapshot();

    let listing = classify_and_sort(&offers, None, Bucket::Active, SortPreference::default());

    assert!(listing.rows.is_empty());
    assert_eq!(listing.active_count, 0);
    assert!(listing.is_empty());
}

#[test]
fn repeated_calls_are_identical() {
    let (offers, tiers) = snapshot();
    let sort = SortPreference::new(SortKey::Name, SortDirection::Desc);

    let first = classify_and_sort(&offers, Some(tiers.as_slice()), Bucket::Active, sort);
    let second = classify_and_sort(&offers, Some(tiers.as_slice()), Bucket::Active, sort);

    assert_eq!(first, second);
}
