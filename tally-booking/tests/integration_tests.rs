//! Integration tests for tally-booking against the filesystem backend

use serde_json::Value;
use std::fs;
use tally_booking::{
    BookingError, BookingService, Customer, JsonDirStorage, Repository, StoreRepository,
};
use tempfile::TempDir;

#[test]
fn test_data_dir_created_on_first_write() {
    let dir = TempDir::new().unwrap();
    let storage = JsonDirStorage::new(dir.path().join("data"));

    let mut booking = BookingService::open(storage.clone()).unwrap();
    assert!(booking.list_customers().is_empty());

    booking.create_customer("123", "Test Customer", "1234567890").unwrap();
    let text = fs::read_to_string(storage.path_for("customers")).unwrap();
    let doc: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc[0]["customer_id"], "123");
    assert_eq!(doc[0]["phone_number"], "1234567890");
}

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let storage = JsonDirStorage::new(dir.path());

    let code = {
        let mut booking = BookingService::open(storage.clone()).unwrap();
        booking.create_hotel("Test Hotel", 100, "Test Ubication").unwrap();
        booking.create_customer("c1", "Ana", "555").unwrap();
        booking
            .create_reservation("c1", "Test Hotel", "Test Room")
            .unwrap()
            .reservation_code
    };

    let mut booking = BookingService::open(storage).unwrap();
    assert_eq!(booking.show_hotel("Test Hotel").unwrap().num_rooms, 100);
    assert_eq!(booking.show_reservation(&code).unwrap().room, "Test Room");

    booking.cancel_reservation(&code).unwrap();
    assert!(!booking.show_reservation(&code).unwrap().active);
}

#[test]
fn test_existing_document_is_indexed() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("customers.json"),
        r#"[
    {"customer_id": "a", "name": "A", "phone_number": "1"},
    {"customer_id": "b", "name": "B", "phone_number": "2"}
]"#,
    )
    .unwrap();

    let repo: StoreRepository<Customer, _> =
        StoreRepository::open(JsonDirStorage::new(dir.path())).unwrap();
    assert_eq!(repo.find("b").unwrap().name, "B");
    assert_eq!(repo.list().len(), 2);
}

#[test]
fn test_duplicate_hotel_rejected() {
    let dir = TempDir::new().unwrap();
    let mut booking = BookingService::open(JsonDirStorage::new(dir.path())).unwrap();
    booking.create_hotel("Sol", 10, "Cancun").unwrap();
    assert!(matches!(
        booking.create_hotel("Sol", 20, "Tulum"),
        Err(BookingError::DuplicateKey { .. })
    ));
}

#[test]
fn test_corrupt_document_reports_collection() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hotels.json"), "[{").unwrap();

    let err = BookingService::open(JsonDirStorage::new(dir.path()))
        .err()
        .unwrap();
    assert!(err.to_string().contains("hotels"));
}
