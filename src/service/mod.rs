//! Service layer: business logic orchestration.
//!
//! [`ShootService`] sits between the REST handlers and the injected
//! [`super::persistence::ShootStore`].

pub mod shoot_service;

pub use shoot_service::ShootService;
