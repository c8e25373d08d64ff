use accessdata_core::repository::ensure_unsaved;
use accessdata_core::{Customer, CustomerId, CustomerRepository, Repository};
use rusqlite::OptionalExtension;

use super::sqlite_repo::SqliteRepo;
use crate::errors::{from_rusqlite, Result};

const SELECT_CUSTOMER: &str = "SELECT id, first_name, last_name FROM customers";

fn map_customer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer::with_id(
        CustomerId::new(row.get(0)?),
        row.get(1)?,
        row.get(2)?,
    ))
}

impl Repository<Customer> for SqliteRepo<'_> {
    fn save(&mut self, customer: Customer) -> Result<Customer> {
        ensure_unsaved(&customer)?;
        let id = self.insert(
            "INSERT INTO customers (first_name, last_name) VALUES (?1, ?2)",
            rusqlite::params![customer.first_name, customer.last_name],
        )?;
        tracing::debug!(entity = "Customer", entity_id = id, "inserted");
        Ok(Customer::with_id(
            CustomerId::new(id),
            customer.first_name,
            customer.last_name,
        ))
    }

    fn find_all(&self) -> Result<Vec<Customer>> {
        self.query_all(
            &format!("{} ORDER BY id", SELECT_CUSTOMER),
            [],
            map_customer,
        )
    }

    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        self.conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_CUSTOMER),
                [id.get()],
                map_customer,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn count(&self) -> Result<u64> {
        self.count_rows("SELECT COUNT(*) FROM customers")
    }
}

impl CustomerRepository for SqliteRepo<'_> {
    fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Customer>> {
        // `=` on TEXT uses BINARY collation: exact and case-sensitive
        self.query_all(
            &format!("{} WHERE last_name = ?1 ORDER BY id", SELECT_CUSTOMER),
            [last_name],
            map_customer,
        )
    }
}
