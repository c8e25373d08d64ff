// Customer repository against SQLite

use std::collections::HashSet;

use accessdata_core::{Customer, CustomerId, CustomerRepository, ExErrorKind, Repository};
use accessdata_store::db::open_store_in_memory;
use accessdata_store::SqliteRepo;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    open_store_in_memory().unwrap()
}

fn seed(repo: &mut SqliteRepo<'_>) -> Vec<Customer> {
    [
        ("Jack", "Bauer"),
        ("Chloe", "O'Brian"),
        ("Kim", "Bauer"),
        ("David", "Palmer"),
        ("Michelle", "Dessler"),
    ]
    .into_iter()
    .map(|(first, last)| repo.save(Customer::new(first, last)).unwrap())
    .collect()
}

#[test]
fn test_save_assigns_distinct_ids() {
    let conn = setup_test_db();
    let mut repo = SqliteRepo::new(&conn);

    let saved = seed(&mut repo);

    let ids: HashSet<CustomerId> = saved.iter().map(|c| c.id.unwrap()).collect();
    assert_eq!(ids.len(), 5);
    assert_eq!(saved[0].first_name, "Jack");
}

#[test]
fn test_save_persisted_customer_rejected() {
    let conn = setup_test_db();
    let mut repo = SqliteRepo::new(&conn);
    let jack = repo.save(Customer::new("Jack", "Bauer")).unwrap();

    let err = repo.save(jack).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::AlreadyPersisted);
    assert_eq!(Repository::<Customer>::count(&repo).unwrap(), 1);
}

#[test]
fn test_find_all_and_count() {
    let conn = setup_test_db();
    let mut repo = SqliteRepo::new(&conn);
    let saved = seed(&mut repo);

    let all: Vec<Customer> = repo.find_all().unwrap();

    assert_eq!(all, saved, "rows come back ascending by id");
    assert_eq!(Repository::<Customer>::count(&repo).unwrap(), 5);
}

#[test]
fn test_find_by_id_matches_saved() {
    let conn = setup_test_db();
    let mut repo = SqliteRepo::new(&conn);

    for customer in seed(&mut repo) {
        let found: Customer = repo.get_by_id(customer.id.unwrap()).unwrap();
        assert_eq!(found, customer);
    }
}

#[test]
fn test_find_by_id_absent() {
    let conn = setup_test_db();
    let mut repo = SqliteRepo::new(&conn);
    seed(&mut repo);

    let missing = CustomerId::new(10_000);
    let found: Option<Customer> = repo.find_by_id(missing).unwrap();
    assert!(found.is_none());

    let err = Repository::<Customer>::get_by_id(&repo, missing).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity(), Some("Customer"));
}

#[test]
fn test_find_by_last_name_bauer() {
    let conn = setup_test_db();
    let mut repo = SqliteRepo::new(&conn);
    seed(&mut repo);

    let bauers: HashSet<String> = repo
        .find_by_last_name("Bauer")
        .unwrap()
        .into_iter()
        .map(|c| c.first_name)
        .collect();

    assert_eq!(bauers, HashSet::from(["Jack".to_string(), "Kim".to_string()]));
}

#[test]
fn test_find_by_last_name_is_case_sensitive_and_empty_on_miss() {
    let conn = setup_test_db();
    let mut repo = SqliteRepo::new(&conn);
    seed(&mut repo);

    assert!(repo.find_by_last_name("bauer").unwrap().is_empty());
    assert!(repo.find_by_last_name("Nonexistent").unwrap().is_empty());
}

#[test]
fn test_reads_do_not_mutate() {
    let conn = setup_test_db();
    let mut repo = SqliteRepo::new(&conn);
    seed(&mut repo);

    let first: Vec<Customer> = repo.find_all().unwrap();
    let bauers1 = repo.find_by_last_name("Bauer").unwrap();
    let second: Vec<Customer> = repo.find_all().unwrap();
    let bauers2 = repo.find_by_last_name("Bauer").unwrap();

    assert_eq!(first, second);
    assert_eq!(bauers1, bauers2);
}

#[test]
fn test_file_backed_store_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.db");

    let saved = {
        let conn = accessdata_store::db::open_store(&path).unwrap();
        let mut repo = SqliteRepo::new(&conn);
        repo.save(Customer::new("Michelle", "Dessler")).unwrap()
    };

    let conn = accessdata_store::db::open_store(&path).unwrap();
    let repo = SqliteRepo::new(&conn);
    let found: Option<Customer> = repo.find_by_id(saved.id.unwrap()).unwrap();
    assert_eq!(found, Some(saved));
}
