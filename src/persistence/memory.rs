//! In-process document backend.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DocumentBackend, ShootDocument};
use crate::error::TrackerError;

/// Keeps the document in memory. Nothing survives a restart.
///
/// Transitions run under the write lock, so concurrent mutations are
/// serialized and readers never observe a half-applied move.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: RwLock<ShootDocument>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing document.
    #[must_use]
    pub fn with_document(document: ShootDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

#[async_trait]
impl DocumentBackend for InMemoryStore {
    async fn load(&self) -> Result<ShootDocument, TrackerError> {
        Ok(self.document.read().await.clone())
    }

    async fn mutate<T, F>(&self, op: F) -> Result<Option<T>, TrackerError>
    where
        T: Send + 'static,
        F: FnOnce(&mut ShootDocument) -> Option<T> + Send + 'static,
    {
        let mut document = self.document.write().await;
        Ok(op(&mut *document))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ShootFields, ShootId};
    use crate::persistence::ShootStore;

    fn fields() -> ShootFields {
        ShootFields {
            model_name: "Ava".to_string(),
            salon_name: "Luxe".to_string(),
            date: "2024-03-01".to_string(),
            price: 150.0,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_content() {
        let store = InMemoryStore::new();
        let Ok(created) = store.create_pending(fields()).await else {
            panic!("create failed");
        };
        assert_eq!(created.created_at, created.updated_at);

        let Ok(Some(fetched)) = store.get_pending(created.id).await else {
            panic!("created shoot should be readable");
        };
        assert_eq!(fetched.fields(), fields());
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn move_to_edited_removes_from_pending() {
        let store = InMemoryStore::new();
        let Ok(shoot) = store.create_pending(fields()).await else {
            panic!("create failed");
        };

        let Ok(Some(edited)) = store.move_to_edited(shoot.id).await else {
            panic!("move failed");
        };
        assert_ne!(edited.id, shoot.id);
        assert_eq!(edited.original_shoot_id, shoot.id);
        assert_eq!(edited.fields(), shoot.fields());
        assert_eq!(edited.created_at, shoot.created_at);

        assert!(matches!(store.get_pending(shoot.id).await, Ok(None)));
        assert_eq!(store.list_edited().await.map(|v| v.len()).ok(), Some(1));
        assert_eq!(store.list_pending().await.map(|v| v.len()).ok(), Some(0));
    }

    #[tokio::test]
    async fn move_back_is_the_inverse_with_a_new_id() {
        let store = InMemoryStore::new();
        let Ok(shoot) = store.create_pending(fields()).await else {
            panic!("create failed");
        };
        let Ok(Some(edited)) = store.move_to_edited(shoot.id).await else {
            panic!("move failed");
        };
        let Ok(Some(back)) = store.move_back_to_pending(edited.id).await else {
            panic!("move back failed");
        };

        assert_ne!(back.id, shoot.id);
        assert_eq!(back.fields(), shoot.fields());
        assert_eq!(back.created_at, shoot.created_at);
        assert!(back.updated_at > edited.edited_at);
        assert!(matches!(store.get_edited(edited.id).await, Ok(None)));
    }

    #[tokio::test]
    async fn updates_refresh_timestamps() {
        let store = InMemoryStore::new();
        let Ok(shoot) = store.create_pending(fields()).await else {
            panic!("create failed");
        };
        let mut changed = fields();
        changed.salon_name = "Glow".to_string();

        let Ok(Some(updated)) = store.update_pending(shoot.id, changed).await else {
            panic!("update failed");
        };
        assert!(updated.updated_at > shoot.updated_at);
        assert_eq!(updated.created_at, shoot.created_at);
        assert_eq!(updated.salon_name, "Glow");

        let Ok(Some(edited)) = store.move_to_edited(shoot.id).await else {
            panic!("move failed");
        };
        let Ok(Some(reedited)) = store.update_edited(edited.id, fields()).await else {
            panic!("edited update failed");
        };
        assert!(reedited.edited_at > edited.edited_at);
        assert_eq!(reedited.salon_name, "Luxe");
    }

    #[tokio::test]
    async fn absent_ids_are_not_errors() {
        let store = InMemoryStore::new();
        let ghost = ShootId::new();

        assert!(matches!(store.delete_pending(ghost).await, Ok(false)));
        assert!(matches!(store.delete_edited(ghost).await, Ok(false)));
        assert!(matches!(store.move_to_edited(ghost).await, Ok(None)));
        assert!(matches!(store.move_back_to_pending(ghost).await, Ok(None)));
        assert!(matches!(store.update_pending(ghost, fields()).await, Ok(None)));
        assert!(matches!(store.update_edited(ghost, fields()).await, Ok(None)));
    }

    #[tokio::test]
    async fn seeded_document_is_visible() {
        let mut document = ShootDocument::default();
        let shoot = document.create_pending(fields(), chrono::Utc::now());
        let store = InMemoryStore::with_document(document);

        let Ok(list) = store.list_pending().await else {
            panic!("list failed");
        };
        assert_eq!(list, vec![shoot]);
    }
}
