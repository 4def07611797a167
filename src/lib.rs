//! Payroll ledger for a small organisation
//!
//! This crate keeps an employee register and an append-only salary ledger in
//! SQLite, calculates monthly payroll figures, and exports ledger reports as
//! spreadsheets. An axum HTTP API exposes every operation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
