//! hostel-ledger - Command-line hostel rent and payment tracker
//!
//! This library provides the core functionality for the hostel-ledger
//! application: tenant management, monthly rent/holiday payment recording
//! against a seasonal fee schedule, and unpaid-balance reporting.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (months, fee schedule, tenants, payments, users)
//! - `storage`: SQLite storage layer (one repository per table)
//! - `services`: Business logic layer (auth, tenant CRUD, payment recording,
//!   dashboard aggregation)
//! - `display`: Terminal table formatting
//! - `export`: CSV and PDF report generation
//! - `cli`: clap subcommands and their handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::HostelError;
