//! # liftlog - work-time approval and overtime tracking
//!
//! A command-line utility for field-service organizations: supervisors review
//! staff work-time entries and approve or reject them, and everyone can see
//! which days ran over the daily overtime threshold.
//!
//! ## Features
//!
//! - **Approval Workflow**: `pending` → `approved` | `rejected`, enforced locally
//!   and carried out by the backend
//! - **Overtime Detection**: Per-day totals of recorded durations, warnings above 8:30
//! - **Warning Cache**: Last computed warnings kept in a local SQLite store
//! - **Entry Submission**: Validated creation of new `pending` entries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use liftlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
