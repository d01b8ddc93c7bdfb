//! Integration tests for the file-backed catalog store

use std::sync::{Arc, Mutex};

use carlot_domain::notify::Notifier;
use carlot_domain::repository::CatalogRepository;
use carlot_store::CatalogStore;
use carlot_types::{Car, Error, NewCar};
use tempfile::tempdir;

/// Notifier that records every message for later inspection
#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("success: {}", message));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("error: {}", message));
    }
}

fn ids(cars: &[Car]) -> Vec<String> {
    cars.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_open_seeds_catalog() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    assert!(store.catalog_path().exists());
    assert_eq!(store.count().unwrap(), 6);

    let all = store.find_all().expect("Failed to list catalog");
    assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5", "6"]);
    assert!(all.iter().all(Car::is_available));
    assert!(all.iter().all(|c| c.buyer_id.is_none()));
}

#[test]
fn test_reopen_does_not_reseed() {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");
    assert!(store.remove("1").expect("Failed to remove"));
    drop(store);

    // The slot already exists, so opening again must not restore the seed
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to reopen store");
    assert_eq!(store.count().unwrap(), 5);
    assert!(store.find_by_id("1").unwrap().is_none());
}

#[test]
fn test_add_then_find_by_id() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    let draft = NewCar::new("Mazda", "MX-5", 2019, 19500)
        .with_description("Lightweight roadster")
        .with_features(vec!["Convertible".to_string(), "Manual".to_string()]);

    let added = store.add(draft.clone()).expect("Failed to add car");
    assert!(!added.id.is_empty());
    assert!(added.is_available());

    let found = store
        .find_by_id(&added.id)
        .expect("Failed to look up car")
        .expect("Added car not found");
    assert_eq!(found, added);
    assert_eq!(found, draft.into_car(added.id.clone()));

    // Appended at the end, after the seed records
    let all = store.find_all().unwrap();
    assert_eq!(all.last().unwrap().id, added.id);
    assert_eq!(all.len(), 7);
}

#[test]
fn test_added_cars_get_distinct_ids() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    let first = store.add(NewCar::new("Kia", "Rio", 2018, 9000)).unwrap();
    let second = store.add(NewCar::new("Kia", "Rio", 2018, 9000)).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_purchase_marks_car_sold() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    assert!(store.purchase("2", "userA").expect("Purchase failed"));

    let car = store.find_by_id("2").unwrap().expect("Car 2 missing");
    assert!(car.sold);
    assert_eq!(car.buyer_id.as_deref(), Some("userA"));

    let purchases = store.find_purchased_by("userA").unwrap();
    assert_eq!(ids(&purchases), vec!["2"]);
    assert!(store.find_purchased_by("userB").unwrap().is_empty());
}

#[test]
fn test_purchase_is_idempotent_false_on_second_call() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    assert!(store.purchase("2", "userA").unwrap());
    let before = store.find_all().unwrap();

    // Second buyer loses and nothing changes
    assert!(!store.purchase("2", "userB").unwrap());
    let after = store.find_all().unwrap();
    assert_eq!(before, after);
    assert_eq!(
        store.find_by_id("2").unwrap().unwrap().buyer_id.as_deref(),
        Some("userA")
    );
}

#[test]
fn test_purchase_unknown_id_fails() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    assert!(!store.purchase("999", "userA").unwrap());
    assert_eq!(store.count().unwrap(), 6);
}

#[test]
fn test_available_is_unsold_subset_of_all() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    store.purchase("3", "userA").unwrap();
    store.purchase("5", "userB").unwrap();

    let all = store.find_all().unwrap();
    let available = store.find_available().unwrap();

    assert_eq!(ids(&available), vec!["1", "2", "4", "6"]);
    assert!(available.iter().all(|c| !c.sold));
    for car in &available {
        assert!(all.contains(car));
    }
}

#[test]
fn test_update_replaces_record_in_place() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    let mut car = store.find_by_id("3").unwrap().expect("Car 3 missing");
    car.price = 33000;
    car.features.push("Price Reduced".to_string());

    assert!(store.update(car.clone()).expect("Update failed"));

    let stored = store.find_by_id("3").unwrap().unwrap();
    assert_eq!(stored, car);

    // Position in the collection is unchanged
    let all = store.find_all().unwrap();
    assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_update_unknown_id_fails() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    let ghost = NewCar::new("Saab", "900", 1995, 4000).into_car("999".to_string());
    assert!(!store.update(ghost).unwrap());
    assert_eq!(store.count().unwrap(), 6);
}

#[test]
fn test_update_rejects_inconsistent_record() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    let mut car = store.find_by_id("1").unwrap().unwrap();
    car.sold = true; // sold without a buyer

    match store.update(car) {
        Err(Error::InconsistentRecord(id)) => assert_eq!(id, "1"),
        other => panic!("Expected InconsistentRecord, got {:?}", other.map(|_| ())),
    }

    // And the reverse: a buyer on an unsold record
    let mut car = store.find_by_id("1").unwrap().unwrap();
    car.buyer_id = Some("userA".to_string());
    assert!(store.update(car).is_err());

    // Catalog untouched either way
    let stored = store.find_by_id("1").unwrap().unwrap();
    assert!(stored.is_available());
    assert!(stored.buyer_id.is_none());
}

#[test]
fn test_remove_unknown_id_leaves_catalog_unchanged() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    assert!(!store.remove("999").unwrap());
    assert_eq!(store.count().unwrap(), 6);
}

#[test]
fn test_remove_keeps_order_of_remaining_records() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    assert!(store.remove("4").unwrap());
    let all = store.find_all().unwrap();
    assert_eq!(ids(&all), vec!["1", "2", "3", "5", "6"]);
}

#[test]
fn test_state_survives_reopen() {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    let added_id = {
        let store =
            CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");
        store.purchase("6", "userA").unwrap();
        store.add(NewCar::new("Subaru", "Outback", 2020, 28000)).unwrap().id
    };

    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to reopen store");
    assert_eq!(store.count().unwrap(), 7);
    assert!(store.find_by_id("6").unwrap().unwrap().sold);
    assert!(store.find_by_id(&added_id).unwrap().is_some());
}

#[test]
fn test_mutations_notify_outcomes() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let notifier = RecordingNotifier::default();
    let store = CatalogStore::open(temp_dir.path().to_path_buf())
        .expect("Failed to open store")
        .with_notifier(Box::new(notifier.clone()));

    store.purchase("1", "userA").unwrap();
    store.purchase("1", "userB").unwrap();
    store.add(NewCar::new("Fiat", "500", 2017, 8000)).unwrap();
    store.remove("999").unwrap();
    store.remove("2").unwrap();

    assert_eq!(
        notifier.messages(),
        vec![
            "success: Car purchased successfully!",
            "error: Car is not available for purchase!",
            "success: Car added successfully!",
            "error: Car not found!",
            "success: Car deleted successfully!",
        ]
    );
}

#[test]
fn test_reads_are_silent() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let notifier = RecordingNotifier::default();
    let store = CatalogStore::open(temp_dir.path().to_path_buf())
        .expect("Failed to open store")
        .with_notifier(Box::new(notifier.clone()));

    store.find_all().unwrap();
    store.find_available().unwrap();
    store.find_by_id("1").unwrap();
    store.find_purchased_by("userA").unwrap();

    assert!(notifier.messages().is_empty());
}

#[test]
fn test_catalog_slot_keeps_wire_shape() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");
    store.purchase("2", "userA").unwrap();

    let raw = std::fs::read_to_string(store.catalog_path()).expect("Failed to read slot");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("Slot is not valid JSON");

    let cars = value.as_array().expect("Slot must hold an ordered array");
    assert_eq!(cars.len(), 6);
    assert_eq!(cars[1]["sellerId"], "userA");
    assert_eq!(cars[1]["sold"], true);
    assert!(cars[0]["imageUrl"].as_str().unwrap().contains("unsplash"));
    assert!(cars[0]["sellerId"].is_null());
}

#[test]
fn test_corrupted_slot_surfaces_json_error() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = CatalogStore::open(temp_dir.path().to_path_buf()).expect("Failed to open store");

    std::fs::write(store.catalog_path(), "not json").expect("Failed to corrupt slot");
    match store.find_all() {
        Err(Error::Json(_)) => {}
        other => panic!("Expected Json error, got {:?}", other.map(|c| c.len())),
    }
}
