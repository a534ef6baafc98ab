//! Data Transfer Objects for REST request/response serialization.
//!
//! Record responses reuse the domain types directly; only request bodies
//! and query strings have dedicated DTOs.

pub mod common_dto;
pub mod shoot_dto;

pub use common_dto::*;
pub use shoot_dto::*;
