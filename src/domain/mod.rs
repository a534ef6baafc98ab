//! Domain layer: record identity, shoot records, and earnings statistics.
//!
//! A booking lives in exactly one of two buckets: pending ([`Shoot`]) or
//! edited ([`EditedShoot`]). Moving between buckets produces a new record
//! under a freshly minted [`ShootId`].

pub mod shoot;
pub mod shoot_id;
pub mod stats;

pub use shoot::{EditedShoot, Shoot, ShootFields};
pub use shoot_id::ShootId;
pub use stats::{MonthlyStats, StatsScope};
