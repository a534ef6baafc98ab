//! Persistence layer: the record store and its backends.
//!
//! [`ShootStore`] is the store contract the service layer depends on.
//! Backends that keep the whole two-bucket document in one place implement
//! the smaller [`DocumentBackend`] trait and get [`ShootStore`] for free:
//! each operation loads the document, applies one [`ShootDocument`]
//! transition, and writes the complete next state back exactly once.
//!
//! No cross-process locking exists. Two processes sharing a data file race,
//! and the losing write is silently lost.

pub mod document;
pub mod json_file;
pub mod memory;

use std::fmt;

use async_trait::async_trait;
use chrono::Utc;

pub use document::ShootDocument;
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::domain::{EditedShoot, Shoot, ShootFields, ShootId};
use crate::error::TrackerError;

/// Owner of the pending and edited buckets.
///
/// "Absent" is a normal outcome and is reported as `None` / `false`;
/// errors are reserved for persistence failures.
#[async_trait]
pub trait ShootStore: Send + Sync + fmt::Debug {
    /// Returns all pending shoots in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the backend fails.
    async fn list_pending(&self) -> Result<Vec<Shoot>, TrackerError>;

    /// Returns the pending shoot with the given id, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the backend fails.
    async fn get_pending(&self, id: ShootId) -> Result<Option<Shoot>, TrackerError>;

    /// Records a new pending shoot under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the write fails.
    async fn create_pending(&self, fields: ShootFields) -> Result<Shoot, TrackerError>;

    /// Replaces the fields of a pending shoot and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the write fails.
    async fn update_pending(
        &self,
        id: ShootId,
        fields: ShootFields,
    ) -> Result<Option<Shoot>, TrackerError>;

    /// Deletes a pending shoot. Returns `false` if it was absent.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the write fails.
    async fn delete_pending(&self, id: ShootId) -> Result<bool, TrackerError>;

    /// Moves a pending shoot to the edited bucket under a new id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the write fails, in
    /// which case neither bucket has changed.
    async fn move_to_edited(&self, id: ShootId) -> Result<Option<EditedShoot>, TrackerError>;

    /// Returns all edited shoots in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the backend fails.
    async fn list_edited(&self) -> Result<Vec<EditedShoot>, TrackerError>;

    /// Returns the edited shoot with the given id, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the backend fails.
    async fn get_edited(&self, id: ShootId) -> Result<Option<EditedShoot>, TrackerError>;

    /// Replaces the fields of an edited shoot and refreshes `edited_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the write fails.
    async fn update_edited(
        &self,
        id: ShootId,
        fields: ShootFields,
    ) -> Result<Option<EditedShoot>, TrackerError>;

    /// Moves an edited shoot back to the pending bucket under a new id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the write fails, in
    /// which case neither bucket has changed.
    async fn move_back_to_pending(&self, id: ShootId) -> Result<Option<Shoot>, TrackerError>;

    /// Deletes an edited shoot. Returns `false` if it was absent.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the write fails.
    async fn delete_edited(&self, id: ShootId) -> Result<bool, TrackerError>;
}

/// A backend that stores the whole [`ShootDocument`] as one unit.
#[async_trait]
pub trait DocumentBackend: Send + Sync + fmt::Debug {
    /// Loads the current document.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the backend fails.
    async fn load(&self) -> Result<ShootDocument, TrackerError>;

    /// Applies `op` to the current document and persists the result with a
    /// single write. When `op` returns `None` nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::PersistenceError`] if the write fails; the
    /// stored document is then unchanged.
    async fn mutate<T, F>(&self, op: F) -> Result<Option<T>, TrackerError>
    where
        T: Send + 'static,
        F: FnOnce(&mut ShootDocument) -> Option<T> + Send + 'static;
}

#[async_trait]
impl<B: DocumentBackend> ShootStore for B {
    async fn list_pending(&self) -> Result<Vec<Shoot>, TrackerError> {
        Ok(self.load().await?.shoots)
    }

    async fn get_pending(&self, id: ShootId) -> Result<Option<Shoot>, TrackerError> {
        Ok(self.load().await?.pending(id).cloned())
    }

    async fn create_pending(&self, fields: ShootFields) -> Result<Shoot, TrackerError> {
        self.mutate(move |doc| Some(doc.create_pending(fields, Utc::now())))
            .await?
            .ok_or_else(|| TrackerError::Internal("create produced no record".to_string()))
    }

    async fn update_pending(
        &self,
        id: ShootId,
        fields: ShootFields,
    ) -> Result<Option<Shoot>, TrackerError> {
        self.mutate(move |doc| doc.update_pending(id, fields, Utc::now()))
            .await
    }

    async fn delete_pending(&self, id: ShootId) -> Result<bool, TrackerError> {
        let removed = self
            .mutate(move |doc| doc.delete_pending(id).then_some(()))
            .await?;
        Ok(removed.is_some())
    }

    async fn move_to_edited(&self, id: ShootId) -> Result<Option<EditedShoot>, TrackerError> {
        self.mutate(move |doc| doc.move_to_edited(id, Utc::now()))
            .await
    }

    async fn list_edited(&self) -> Result<Vec<EditedShoot>, TrackerError> {
        Ok(self.load().await?.edited_shoots)
    }

    async fn get_edited(&self, id: ShootId) -> Result<Option<EditedShoot>, TrackerError> {
        Ok(self.load().await?.edited(id).cloned())
    }

    async fn update_edited(
        &self,
        id: ShootId,
        fields: ShootFields,
    ) -> Result<Option<EditedShoot>, TrackerError> {
        self.mutate(move |doc| doc.update_edited(id, fields, Utc::now()))
            .await
    }

    async fn move_back_to_pending(&self, id: ShootId) -> Result<Option<Shoot>, TrackerError> {
        self.mutate(move |doc| doc.move_back_to_pending(id, Utc::now()))
            .await
    }

    async fn delete_edited(&self, id: ShootId) -> Result<bool, TrackerError> {
        let removed = self
            .mutate(move |doc| doc.delete_edited(id).then_some(()))
            .await?;
        Ok(removed.is_some())
    }
}
