//! # shoot-tracker
//!
//! REST API and flat-file store for tracking photo-shoot bookings.
//!
//! A booking is recorded as a pending shoot, moved to the edited bucket
//! once the photos are processed, and can be moved back if needed. Every
//! move mints a new id in the target bucket. Monthly earnings are
//! aggregated from the shoot dates and prices.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ShootService (service/)
//!     │
//!     ├── ShootStore trait (persistence/)
//!     │     ├── JsonFileStore  (one JSON document on disk)
//!     │     └── InMemoryStore
//!     │
//!     └── ShootDocument transitions (persistence/document)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
