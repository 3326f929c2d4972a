// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for gadget listing persistence operations.

use crate::tests::{create_test_published_listing, create_test_submission};
use crate::{ListingChanges, Persistence, PublicListingFilter};
use gadget_market_domain::{GadgetCondition, GadgetType, ListingStatus};

#[test]
fn test_create_and_get_listing() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let listing_id = persistence
        .create_listing(&create_test_submission("Pixel 6"))
        .unwrap();
    assert!(listing_id > 0);

    let listing = persistence.get_listing(listing_id).unwrap().unwrap();
    assert_eq!(listing.listing_id, listing_id);
    assert_eq!(listing.name, "Pixel 6");
    assert_eq!(listing.gadget_type, GadgetType::Phone);
    assert_eq!(listing.condition, GadgetCondition::Used);
    assert_eq!(listing.status, ListingStatus::Pending);
    assert_eq!(listing.listing_price, None);
    assert!(!listing.created_at.is_empty());
}

#[test]
fn test_get_unknown_listing_returns_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.get_listing(999).unwrap().is_none());
}

#[test]
fn test_partial_update_changes_only_supplied_fields() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let listing_id = persistence
        .create_listing(&create_test_submission("Pixel 6"))
        .unwrap();

    let changes = ListingChanges {
        listing_price: Some(199.0),
        description: Some(String::from("Refurbished, new battery")),
        ..ListingChanges::default()
    };
    let updated = persistence.update_listing(listing_id, &changes).unwrap();
    assert_eq!(updated, 1);

    let listing = persistence.get_listing(listing_id).unwrap().unwrap();
    assert_eq!(listing.listing_price, Some(199.0));
    assert_eq!(listing.description, "Refurbished, new battery");
    // Untouched fields keep their values.
    assert_eq!(listing.name, "Pixel 6");
    assert!((listing.seller_price - 150.0).abs() < f64::EPSILON);
    assert_eq!(listing.status, ListingStatus::Pending);
}

#[test]
fn test_empty_update_is_a_noop() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let listing_id = persistence
        .create_listing(&create_test_submission("Pixel 6"))
        .unwrap();

    let updated = persistence
        .update_listing(listing_id, &ListingChanges::default())
        .unwrap();
    assert_eq!(updated, 0);

    let listing = persistence.get_listing(listing_id).unwrap().unwrap();
    assert_eq!(listing.name, "Pixel 6");
}

#[test]
fn test_set_listing_status() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let listing_id = persistence
        .create_listing(&create_test_published_listing("ThinkPad X1", 750.0))
        .unwrap();

    let updated = persistence
        .set_listing_status(listing_id, ListingStatus::Sold)
        .unwrap();
    assert_eq!(updated, 1);

    let listing = persistence.get_listing(listing_id).unwrap().unwrap();
    assert_eq!(listing.status, ListingStatus::Sold);
}

#[test]
fn test_soft_delete_keeps_the_row() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let listing_id = persistence
        .create_listing(&create_test_submission("Pixel 6"))
        .unwrap();

    persistence
        .set_listing_status(listing_id, ListingStatus::Deleted)
        .unwrap();

    // The row is still there, just marked deleted.
    let listing = persistence.get_listing(listing_id).unwrap().unwrap();
    assert_eq!(listing.status, ListingStatus::Deleted);
}

#[test]
fn test_bulk_status_applies_uniformly_and_skips_unknown_ids() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let first = persistence
        .create_listing(&create_test_published_listing("Laptop A", 500.0))
        .unwrap();
    let second = persistence
        .create_listing(&create_test_submission("Phone B"))
        .unwrap();

    let updated = persistence
        .bulk_set_listing_status(&[first, second, 9999], ListingStatus::Sold)
        .unwrap();
    assert_eq!(updated, 2);

    assert_eq!(
        persistence.get_listing(first).unwrap().unwrap().status,
        ListingStatus::Sold
    );
    assert_eq!(
        persistence.get_listing(second).unwrap().unwrap().status,
        ListingStatus::Sold
    );
}

#[test]
fn test_bulk_status_with_empty_id_set_updates_nothing() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let updated = persistence
        .bulk_set_listing_status(&[], ListingStatus::Deleted)
        .unwrap();
    assert_eq!(updated, 0);
}

#[test]
fn test_list_by_status_partitions_listings() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_listing(&create_test_submission("Pending 1"))
        .unwrap();
    persistence
        .create_listing(&create_test_submission("Pending 2"))
        .unwrap();
    persistence
        .create_listing(&create_test_published_listing("Published", 300.0))
        .unwrap();

    let pending = persistence
        .list_listings_by_status(ListingStatus::Pending)
        .unwrap();
    let available = persistence
        .list_listings_by_status(ListingStatus::Available)
        .unwrap();
    let sold = persistence
        .list_listings_by_status(ListingStatus::Sold)
        .unwrap();

    assert_eq!(pending.len(), 2);
    assert_eq!(available.len(), 1);
    assert_eq!(sold.len(), 0);
}

#[test]
fn test_public_query_excludes_unpriced_and_non_available() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_listing(&create_test_submission("Pending, unpriced"))
        .unwrap();
    let sold_id = persistence
        .create_listing(&create_test_published_listing("Sold laptop", 400.0))
        .unwrap();
    persistence
        .set_listing_status(sold_id, ListingStatus::Sold)
        .unwrap();
    persistence
        .create_listing(&create_test_published_listing("Visible laptop", 450.0))
        .unwrap();

    let visible = persistence
        .list_public_listings(&PublicListingFilter::default())
        .unwrap();

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Visible laptop");
    for listing in &visible {
        assert_eq!(listing.status, ListingStatus::Available);
        assert!(listing.listing_price.is_some());
    }
}

#[test]
fn test_public_query_orders_newest_first() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let older = persistence
        .create_listing(&create_test_published_listing("Older", 100.0))
        .unwrap();
    let newer = persistence
        .create_listing(&create_test_published_listing("Newer", 200.0))
        .unwrap();

    let visible = persistence
        .list_public_listings(&PublicListingFilter::default())
        .unwrap();

    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].listing_id, newer);
    assert_eq!(visible[1].listing_id, older);
}

#[test]
fn test_public_query_filters() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    // A cheap used phone.
    let mut phone = create_test_published_listing("Cheap phone", 80.0);
    phone.gadget_type = GadgetType::Phone;
    phone.condition = GadgetCondition::Used;
    persistence.create_listing(&phone).unwrap();

    // An expensive open-box laptop.
    let mut laptop = create_test_published_listing("Expensive laptop", 900.0);
    laptop.gadget_type = GadgetType::Laptop;
    laptop.condition = GadgetCondition::OpenBox;
    persistence.create_listing(&laptop).unwrap();

    let phones = persistence
        .list_public_listings(&PublicListingFilter {
            gadget_type: Some(GadgetType::Phone),
            ..PublicListingFilter::default()
        })
        .unwrap();
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0].name, "Cheap phone");

    let pricey = persistence
        .list_public_listings(&PublicListingFilter {
            price_min: Some(500.0),
            ..PublicListingFilter::default()
        })
        .unwrap();
    assert_eq!(pricey.len(), 1);
    assert_eq!(pricey[0].name, "Expensive laptop");

    let affordable = persistence
        .list_public_listings(&PublicListingFilter {
            price_max: Some(100.0),
            ..PublicListingFilter::default()
        })
        .unwrap();
    assert_eq!(affordable.len(), 1);
    assert_eq!(affordable[0].name, "Cheap phone");

    let open_box = persistence
        .list_public_listings(&PublicListingFilter {
            condition: Some(GadgetCondition::OpenBox),
            ..PublicListingFilter::default()
        })
        .unwrap();
    assert_eq!(open_box.len(), 1);

    let impossible = persistence
        .list_public_listings(&PublicListingFilter {
            gadget_type: Some(GadgetType::Phone),
            price_min: Some(500.0),
            ..PublicListingFilter::default()
        })
        .unwrap();
    assert!(impossible.is_empty());
}
