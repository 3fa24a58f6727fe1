//! Body/entity reconciliation
//!
//! After every physics step the body list is swept for bodies whose owner
//! no longer exists. A body owned by an entity is kept only while the
//! store still holds that exact entity (same id and serial) under its id.

use crate::ecs::{Entity, EntityStore};
use crate::physics::{Body, PhysicsEngine};

/// Why a body was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrphanReason {
    /// No entity lives under the owner's id
    Missing,
    /// The id was recycled by a different entity
    Stale,
    /// The body has no owner and unowned bodies are being purged
    Unowned,
}

/// Outcome of one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Bodies inspected
    pub inspected: usize,
    /// Removed because their owner is gone
    pub missing: usize,
    /// Removed because their owner's id now belongs to another entity
    pub stale: usize,
    /// Removed because they had no owner
    pub unowned: usize,
}

impl ReconcileReport {
    /// Total bodies removed
    pub fn removed(&self) -> usize {
        self.missing + self.stale + self.unowned
    }

    fn record(&mut self, reason: OrphanReason) {
        match reason {
            OrphanReason::Missing => self.missing += 1,
            OrphanReason::Stale => self.stale += 1,
            OrphanReason::Unowned => self.unowned += 1,
        }
    }
}

/// Classify a body against the store; `None` means the body stays
pub fn orphan_reason(body: &Body, entities: &EntityStore, purge_unowned: bool) -> Option<OrphanReason> {
    match body.owner() {
        None if purge_unowned => Some(OrphanReason::Unowned),
        None => None,
        Some(owner) => owner_reason(owner, entities),
    }
}

fn owner_reason(owner: Entity, entities: &EntityStore) -> Option<OrphanReason> {
    match entities.get_entity(owner.id()) {
        None => Some(OrphanReason::Missing),
        Some(live) if live != owner => Some(OrphanReason::Stale),
        Some(_) => None,
    }
}

/// Remove every orphaned body, preserving the order of the survivors
pub fn purge_orphaned_bodies(
    physics: &mut PhysicsEngine,
    entities: &EntityStore,
    purge_unowned: bool,
) -> ReconcileReport {
    let mut report = ReconcileReport {
        inspected: physics.body_count(),
        ..Default::default()
    };

    physics.retain_bodies(|body| match orphan_reason(body, entities, purge_unowned) {
        Some(reason) => {
            log::debug!(
                "Removing orphaned body {} ({:?}, owner {:?})",
                body.handle().raw(),
                reason,
                body.owner()
            );
            report.record(reason);
            false
        }
        None => true,
    });

    if report.removed() > 0 {
        log::debug!("Reconciliation removed {} of {} bodies", report.removed(), report.inspected);
    }
    report
}
