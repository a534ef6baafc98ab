//! The persisted two-bucket document and its state transitions.
//!
//! Every store operation is a pure function over [`ShootDocument`]: the
//! backend loads the document, applies one transition, and writes the
//! whole result back. Moves remove from one bucket and insert into the
//! other on the same in-memory value, so a single write makes them durable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{EditedShoot, Shoot, ShootFields, ShootId};

/// Full persisted state: `{"shoots": [...], "editedShoots": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootDocument {
    /// Pending bucket, in storage order.
    #[serde(default)]
    pub shoots: Vec<Shoot>,
    /// Edited bucket, in storage order.
    #[serde(default)]
    pub edited_shoots: Vec<EditedShoot>,
}

impl ShootDocument {
    /// Looks up a pending shoot.
    #[must_use]
    pub fn pending(&self, id: ShootId) -> Option<&Shoot> {
        self.shoots.iter().find(|s| s.id == id)
    }

    /// Looks up an edited shoot.
    #[must_use]
    pub fn edited(&self, id: ShootId) -> Option<&EditedShoot> {
        self.edited_shoots.iter().find(|s| s.id == id)
    }

    /// Appends a new pending shoot under a freshly minted id.
    pub fn create_pending(&mut self, fields: ShootFields, now: DateTime<Utc>) -> Shoot {
        let shoot = Shoot::new(self.mint_pending_id(), fields, now);
        self.shoots.push(shoot.clone());
        shoot
    }

    /// Replaces the fields of a pending shoot.
    pub fn update_pending(
        &mut self,
        id: ShootId,
        fields: ShootFields,
        now: DateTime<Utc>,
    ) -> Option<Shoot> {
        let shoot = self.shoots.iter_mut().find(|s| s.id == id)?;
        shoot.apply(fields, now);
        Some(shoot.clone())
    }

    /// Removes a pending shoot. Returns `false` if it was absent.
    pub fn delete_pending(&mut self, id: ShootId) -> bool {
        self.take_pending(id).is_some()
    }

    /// Moves a pending shoot into the edited bucket under a new id.
    pub fn move_to_edited(&mut self, id: ShootId, now: DateTime<Utc>) -> Option<EditedShoot> {
        let shoot = self.take_pending(id)?;
        let edited = EditedShoot::from_pending(self.mint_edited_id(), shoot, now);
        self.edited_shoots.push(edited.clone());
        Some(edited)
    }

    /// Replaces the fields of an edited shoot.
    pub fn update_edited(
        &mut self,
        id: ShootId,
        fields: ShootFields,
        now: DateTime<Utc>,
    ) -> Option<EditedShoot> {
        let edited = self.edited_shoots.iter_mut().find(|s| s.id == id)?;
        edited.apply(fields, now);
        Some(edited.clone())
    }

    /// Moves an edited shoot back into the pending bucket under a new id.
    pub fn move_back_to_pending(&mut self, id: ShootId, now: DateTime<Utc>) -> Option<Shoot> {
        let edited = self.take_edited(id)?;
        let shoot = edited.into_pending(self.mint_pending_id(), now);
        self.shoots.push(shoot.clone());
        Some(shoot)
    }

    /// Removes an edited shoot. Returns `false` if it was absent.
    pub fn delete_edited(&mut self, id: ShootId) -> bool {
        self.take_edited(id).is_some()
    }

    fn take_pending(&mut self, id: ShootId) -> Option<Shoot> {
        let index = self.shoots.iter().position(|s| s.id == id)?;
        Some(self.shoots.remove(index))
    }

    fn take_edited(&mut self, id: ShootId) -> Option<EditedShoot> {
        let index = self.edited_shoots.iter().position(|s| s.id == id)?;
        Some(self.edited_shoots.remove(index))
    }

    fn mint_pending_id(&self) -> ShootId {
        loop {
            let id = ShootId::new();
            if self.pending(id).is_none() {
                return id;
            }
        }
    }

    fn mint_edited_id(&self) -> ShootId {
        loop {
            let id = ShootId::new();
            if self.edited(id).is_none() {
                return id;
            }
        }
    }
}
