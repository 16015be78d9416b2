//! Core library modules for the liftlog application.
//!
//! ## Features
//!
//! - **Data Model**: Time entries, work-time records, approval states
//! - **Duration Handling**: `H:MM` parsing and formatting
//! - **Overtime Pipeline**: Daily aggregation, threshold detection, warning cache
//! - **Approval Workflow**: Pending → approved/rejected transitions with reload
//! - **Core Infrastructure**: Configuration, data storage, messaging, console views
//!
//! ## Usage
//!
//! ```rust
//! use liftlog::libs::entry::ArbeitszeitEntry;
//! use liftlog::libs::overtime::detect;
//! use liftlog::libs::summary::DailyAggregator;
//!
//! let entries = vec![
//!     ArbeitszeitEntry::new("2024-01-15", "05:00"),
//!     ArbeitszeitEntry::new("2024-01-15", "04:00"),
//! ];
//! let warnings = detect(&entries.daily_totals());
//! assert_eq!(warnings[0].total_hours, "9:00");
//! ```

pub mod approval;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod entry;
pub mod error;
pub mod messages;
pub mod overtime;
pub mod store;
pub mod summary;
pub mod view;
pub mod warning_cache;
