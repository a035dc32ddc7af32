//! # machmon - maintenance monitoring
//!
//! A command-line dashboard over a plant's maintenance records: machines,
//! issues, forum questions, downtime, spare parts and purchase orders.
//!
//! ## Features
//!
//! - **Filtering**: free-text search plus a per-view tag bar; categorical and
//!   threshold tags resolve to typed predicates
//! - **Classification**: severity and status badges from configurable
//!   threshold tiers and colour palettes
//! - **Selection**: one detail slot per view, with lookup by identifier
//! - **Sources**: built-in sample data, a JSON catalog file or a local SQLite
//!   store filled with `machmon import`
//! - **Export**: filtered listings to CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use machmon::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
