//! Customer seed-and-report runner

use std::time::Instant;

use accessdata_core::{log_op_end, log_op_error, log_op_start};
use accessdata_core::{Customer, CustomerRepository, ExError, ExErrorKind, Result};
use serde::Serialize;

use super::report::ReportLog;

/// First and last names saved by the customer runner, in insertion order
pub const SEED_CUSTOMERS: [(&str, &str); 5] = [
    ("Jack", "Bauer"),
    ("Chloe", "O'Brian"),
    ("Kim", "Bauer"),
    ("David", "Palmer"),
    ("Michelle", "Dessler"),
];

const LAST_NAME_QUERY: &str = "Bauer";

/// Everything the customer runner saved, read and logged
#[derive(Debug, Clone, Serialize)]
pub struct CustomerReport {
    pub saved: Vec<Customer>,
    pub all: Vec<Customer>,
    pub found_by_id: Customer,
    pub by_last_name: Vec<Customer>,
    pub lines: Vec<String>,
}

/// Seed the customers, then log `find_all`, `get_by_id` and `find_by_last_name`
///
/// The id lookup uses the id returned when the first seed row was saved.
///
/// ## Errors
///
/// - `AlreadyPersisted` / `Persistence` from the saves
/// - `NotFound` if the first saved customer cannot be read back
pub fn run_customer_demo<R: CustomerRepository>(repo: &mut R) -> Result<CustomerReport> {
    log_op_start!("customer_demo");
    let start = Instant::now();

    let report = customer_demo_impl(repo).map_err(|e| {
        log_op_error!(
            "customer_demo",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "customer_demo",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = report.all.len() as u64
    );
    Ok(report)
}

fn customer_demo_impl<R: CustomerRepository>(repo: &mut R) -> Result<CustomerReport> {
    let mut log = ReportLog::default();

    let saved = repo.save_all(
        SEED_CUSTOMERS
            .iter()
            .map(|(first, last)| Customer::new(*first, *last)),
    )?;

    let all = repo.find_all()?;
    log.heading("Customers found with findAll():");
    log.entries(&all);
    log.line("");

    let first_id = saved.first().and_then(|c| c.id).ok_or_else(|| {
        ExError::new(ExErrorKind::Internal)
            .with_op("customer_demo")
            .with_entity("Customer")
            .with_message("seeding returned no customer id")
    })?;
    let found_by_id = repo.get_by_id(first_id)?;
    log.heading(format!("Customer found with findById({}):", first_id));
    log.line(found_by_id.to_string());
    log.line("");

    let by_last_name = repo.find_by_last_name(LAST_NAME_QUERY)?;
    log.heading(format!(
        "Customer found with findByLastName('{}'):",
        LAST_NAME_QUERY
    ));
    log.entries(&by_last_name);
    log.line("");

    Ok(CustomerReport {
        saved,
        all,
        found_by_id,
        by_last_name,
        lines: log.into_lines(),
    })
}
