//! Seed-and-report runners
//!
//! ## Logging Ownership
//!
//! Runners own the boundary events (`log_op_start!`, `log_op_end!`,
//! `log_op_error!`). Report lines are plain `info` events whose message is
//! the rendered line.

pub mod customers;
pub mod games;
mod report;
