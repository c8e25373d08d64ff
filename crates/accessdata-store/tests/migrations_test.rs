// Integration tests for the migration framework

use accessdata_core::ExErrorKind;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();

    let tables = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap();

    tables
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = accessdata_store::migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed and the schema exists
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    let tables = get_table_names(&conn);
    for expected in [
        "schema_version",
        "customers",
        "teams",
        "games",
        "sqlite_sequence", // Auto-created by SQLite for AUTOINCREMENT columns
    ] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
    assert_eq!(tables.len(), 5, "Unexpected tables: {:?}", tables);
}

#[test]
fn test_migration_idempotency() {
    let mut conn = setup_test_db();
    accessdata_store::migrations::apply_migrations(&mut conn).unwrap();

    let result = accessdata_store::migrations::apply_migrations(&mut conn);
    assert!(result.is_ok(), "Re-running migrations should succeed");

    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    let expected = accessdata_store::migrations::get_migrations().len() as i64;
    assert_eq!(version_count, expected);
}

#[test]
fn test_checksum_recorded() {
    let mut conn = setup_test_db();
    accessdata_store::migrations::apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            ["001_customers"],
            |row| row.get(0),
        )
        .unwrap();

    assert_eq!(checksum.len(), 64, "SHA256 checksum should be 64 hex chars");
}

#[test]
fn test_checksum_mismatch_detected() {
    // Given: A migrated database whose recorded checksum was tampered with
    let mut conn = setup_test_db();
    accessdata_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '002_teams_games'",
        [],
    )
    .unwrap();

    // When: Migrations are re-run
    let err = accessdata_store::migrations::apply_migrations(&mut conn).unwrap_err();

    // Then: The mismatch is reported
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(err.message().contains("002_teams_games"));
}
