//! Core types shared across accessdata facilities
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging and error facilities

pub mod schema;
