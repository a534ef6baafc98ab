//! Shoot service: turns store outcomes into typed results and logs mutations.

use std::sync::Arc;

use crate::domain::stats::monthly_stats;
use crate::domain::{EditedShoot, MonthlyStats, Shoot, ShootFields, ShootId, StatsScope};
use crate::error::TrackerError;
use crate::persistence::ShootStore;

/// Orchestration layer for all booking operations.
///
/// Stateless coordinator over an injected [`ShootStore`]. Absent records
/// become [`TrackerError::ShootNotFound`] or
/// [`TrackerError::EditedShootNotFound`]; every successful mutation is
/// logged with the affected ids.
#[derive(Debug, Clone)]
pub struct ShootService {
    store: Arc<dyn ShootStore>,
}

impl ShootService {
    /// Creates a new `ShootService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ShootStore>) -> Self {
        Self { store }
    }

    /// Lists pending shoots in storage order.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError`] if the store fails.
    pub async fn list_shoots(&self) -> Result<Vec<Shoot>, TrackerError> {
        self.store.list_pending().await
    }

    /// Fetches one pending shoot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ShootNotFound`] if the id is absent.
    pub async fn get_shoot(&self, id: ShootId) -> Result<Shoot, TrackerError> {
        self.store
            .get_pending(id)
            .await?
            .ok_or_else(|| TrackerError::ShootNotFound(id.to_string()))
    }

    /// Records a new pending shoot.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError`] if the store fails.
    pub async fn create_shoot(&self, fields: ShootFields) -> Result<Shoot, TrackerError> {
        let shoot = self.store.create_pending(fields).await?;
        tracing::info!(id = %shoot.id, model = %shoot.model_name, "shoot created");
        Ok(shoot)
    }

    /// Replaces the fields of a pending shoot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ShootNotFound`] if the id is absent.
    pub async fn update_shoot(
        &self,
        id: ShootId,
        fields: ShootFields,
    ) -> Result<Shoot, TrackerError> {
        let shoot = self
            .store
            .update_pending(id, fields)
            .await?
            .ok_or_else(|| TrackerError::ShootNotFound(id.to_string()))?;
        tracing::info!(%id, "shoot updated");
        Ok(shoot)
    }

    /// Deletes a pending shoot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ShootNotFound`] if the id is absent.
    pub async fn delete_shoot(&self, id: ShootId) -> Result<(), TrackerError> {
        if !self.store.delete_pending(id).await? {
            return Err(TrackerError::ShootNotFound(id.to_string()));
        }
        tracing::info!(%id, "shoot deleted");
        Ok(())
    }

    /// Moves a pending shoot into the edited bucket.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ShootNotFound`] if the id is absent.
    pub async fn move_to_edited(&self, id: ShootId) -> Result<EditedShoot, TrackerError> {
        let edited = self
            .store
            .move_to_edited(id)
            .await?
            .ok_or_else(|| TrackerError::ShootNotFound(id.to_string()))?;
        tracing::info!(from = %id, to = %edited.id, "shoot moved to edited");
        Ok(edited)
    }

    /// Lists edited shoots in storage order.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError`] if the store fails.
    pub async fn list_edited(&self) -> Result<Vec<EditedShoot>, TrackerError> {
        self.store.list_edited().await
    }

    /// Fetches one edited shoot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::EditedShootNotFound`] if the id is absent.
    pub async fn get_edited(&self, id: ShootId) -> Result<EditedShoot, TrackerError> {
        self.store
            .get_edited(id)
            .await?
            .ok_or_else(|| TrackerError::EditedShootNotFound(id.to_string()))
    }

    /// Replaces the fields of an edited shoot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::EditedShootNotFound`] if the id is absent.
    pub async fn update_edited(
        &self,
        id: ShootId,
        fields: ShootFields,
    ) -> Result<EditedShoot, TrackerError> {
        let edited = self
            .store
            .update_edited(id, fields)
            .await?
            .ok_or_else(|| TrackerError::EditedShootNotFound(id.to_string()))?;
        tracing::info!(%id, "edited shoot updated");
        Ok(edited)
    }

    /// Moves an edited shoot back into the pending bucket.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::EditedShootNotFound`] if the id is absent.
    pub async fn move_back_to_pending(&self, id: ShootId) -> Result<Shoot, TrackerError> {
        let shoot = self
            .store
            .move_back_to_pending(id)
            .await?
            .ok_or_else(|| TrackerError::EditedShootNotFound(id.to_string()))?;
        tracing::info!(from = %id, to = %shoot.id, "edited shoot moved back to pending");
        Ok(shoot)
    }

    /// Deletes an edited shoot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::EditedShootNotFound`] if the id is absent.
    pub async fn delete_edited(&self, id: ShootId) -> Result<(), TrackerError> {
        if !self.store.delete_edited(id).await? {
            return Err(TrackerError::EditedShootNotFound(id.to_string()));
        }
        tracing::info!(%id, "edited shoot deleted");
        Ok(())
    }

    /// Aggregates earnings per calendar month over the selected buckets,
    /// newest month first.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError`] if the store fails.
    pub async fn monthly_stats(&self, scope: StatsScope) -> Result<Vec<MonthlyStats>, TrackerError> {
        let pending = if scope.includes_pending() {
            self.store.list_pending().await?
        } else {
            Vec::new()
        };
        let edited = if scope.includes_edited() {
            self.store.list_edited().await?
        } else {
            Vec::new()
        };

        let entries = pending
            .iter()
            .map(|s| (s.date.as_str(), s.price))
            .chain(edited.iter().map(|s| (s.date.as_str(), s.price)));
        Ok(monthly_stats(entries))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryStore;

    fn make_service() -> ShootService {
        ShootService::new(Arc::new(InMemoryStore::new()))
    }

    fn fields(date: &str, price: f64) -> ShootFields {
        ShootFields {
            model_name: "Ava".to_string(),
            salon_name: "Luxe".to_string(),
            date: date.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn absent_pending_ids_map_to_shoot_not_found() {
        let service = make_service();
        let ghost = ShootId::new();

        assert!(matches!(
            service.get_shoot(ghost).await,
            Err(TrackerError::ShootNotFound(_))
        ));
        assert!(matches!(
            service.delete_shoot(ghost).await,
            Err(TrackerError::ShootNotFound(_))
        ));
        assert!(matches!(
            service.move_to_edited(ghost).await,
            Err(TrackerError::ShootNotFound(_))
        ));
    }

    #[tokio::test]
    async fn absent_edited_ids_map_to_edited_not_found() {
        let service = make_service();
        let ghost = ShootId::new();

        assert!(matches!(
            service.get_edited(ghost).await,
            Err(TrackerError::EditedShootNotFound(_))
        ));
        assert!(matches!(
            service.delete_edited(ghost).await,
            Err(TrackerError::EditedShootNotFound(_))
        ));
        assert!(matches!(
            service.move_back_to_pending(ghost).await,
            Err(TrackerError::EditedShootNotFound(_))
        ));
        assert!(matches!(
            service.update_edited(ghost, fields("2024-01-01", 1.0)).await,
            Err(TrackerError::EditedShootNotFound(_))
        ));
    }

    #[tokio::test]
    async fn moved_id_is_gone_from_pending() {
        let service = make_service();
        let Ok(shoot) = service.create_shoot(fields("2024-03-01", 150.0)).await else {
            panic!("create failed");
        };
        let Ok(edited) = service.move_to_edited(shoot.id).await else {
            panic!("move failed");
        };

        assert_ne!(edited.id, shoot.id);
        assert!(matches!(
            service.get_shoot(shoot.id).await,
            Err(TrackerError::ShootNotFound(_))
        ));
        assert!(service.get_edited(edited.id).await.is_ok());
    }

    #[tokio::test]
    async fn stats_respect_scope() {
        let service = make_service();
        let _ = service.create_shoot(fields("2024-01-10", 100.0)).await;
        let _ = service.create_shoot(fields("2024-01-20", 50.0)).await;
        let Ok(moved) = service.create_shoot(fields("2024-02-05", 70.0)).await else {
            panic!("create failed");
        };
        let _ = service.move_to_edited(moved.id).await;

        let Ok(pending) = service.monthly_stats(StatsScope::Pending).await else {
            panic!("stats failed");
        };
        assert_eq!(pending.len(), 1);
        assert_eq!(pending.first().map(|m| (m.shoot_count, m.total_earnings)), Some((2, 150.0)));

        let Ok(all) = service.monthly_stats(StatsScope::All).await else {
            panic!("stats failed");
        };
        let months: Vec<u32> = all.iter().map(|m| m.month).collect();
        assert_eq!(months, vec![2, 1]);

        let Ok(edited) = service.monthly_stats(StatsScope::Edited).await else {
            panic!("stats failed");
        };
        assert_eq!(edited.len(), 1);
        assert_eq!(edited.first().map(|m| m.total_earnings), Some(70.0));
    }
}
