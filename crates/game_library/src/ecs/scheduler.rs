//! System scheduling
//!
//! Provides deterministic execution order for registered systems: within a
//! phase systems run by ascending priority, ties broken by registration
//! order. Everything runs synchronously on the caller's thread.

use super::system::{ExecutionPhase, System, SystemKey};
use crate::content::ContentSource;
use crate::world::{Scene, WorldError};
use std::collections::{BTreeMap, HashMap};

/// Where a registered system sits in the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemHandle {
    key: SystemKey,
    phase: ExecutionPhase,
    priority: i32,
    sequence: u64,
}

impl SystemHandle {
    /// Slot key
    pub fn key(&self) -> SystemKey {
        self.key
    }

    /// Phase the system runs in
    pub fn phase(&self) -> ExecutionPhase {
        self.phase
    }

    /// Priority within the phase (lower runs first)
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Registration sequence number
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManagerState {
    Registering,
    Initialized,
    Poisoned,
}

struct Registration {
    handle: SystemHandle,
    system: Box<dyn System>,
}

/// Ordered collection of systems split by execution phase
pub struct SystemManager {
    systems: HashMap<SystemKey, Registration>,
    schedule: BTreeMap<(ExecutionPhase, i32, u64), SystemKey>,
    next_sequence: u64,
    state: ManagerState,
}

impl SystemManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            systems: HashMap::new(),
            schedule: BTreeMap::new(),
            next_sequence: 0,
            state: ManagerState::Registering,
        }
    }

    /// Register a system, replacing any system already holding its key
    ///
    /// The replacement takes a fresh registration sequence, so it runs after
    /// systems of equal priority that were registered before it.
    pub fn set_system<S: System + 'static>(
        &mut self,
        system: S,
        phase: ExecutionPhase,
        priority: i32,
    ) -> Result<SystemHandle, WorldError> {
        self.ensure_registering()?;
        let key = system.key();
        if let Some(previous) = self.unschedule(key) {
            log::debug!(
                "Replacing system '{}' ({:?}, priority {})",
                key,
                previous.handle.phase,
                previous.handle.priority
            );
        }
        Ok(self.schedule_system(Box::new(system), phase, priority))
    }

    /// Register a system, failing if its key is already taken
    pub fn add_system<S: System + 'static>(
        &mut self,
        system: S,
        phase: ExecutionPhase,
        priority: i32,
    ) -> Result<SystemHandle, WorldError> {
        self.ensure_registering()?;
        let key = system.key();
        if self.systems.contains_key(&key) {
            return Err(WorldError::DuplicateSystem(key));
        }
        Ok(self.schedule_system(Box::new(system), phase, priority))
    }

    /// Run every system's one-time setup in registration order
    ///
    /// May be called exactly once. A failing setup poisons the manager.
    pub fn initialize_all(&mut self, scene: &mut Scene) -> Result<(), WorldError> {
        self.ensure_registering()?;

        let mut registrations: Vec<&mut Registration> = self.systems.values_mut().collect();
        registrations.sort_by_key(|registration| registration.handle.sequence);

        for registration in registrations {
            if let Err(error) = registration.system.initialize(scene) {
                self.state = ManagerState::Poisoned;
                log::error!("Initialization aborted: {}", error);
                return Err(error.into());
            }
        }

        self.state = ManagerState::Initialized;
        log::info!("Initialized {} system(s)", self.systems.len());
        Ok(())
    }

    /// Run all systems of `phase` in priority order
    pub fn run_phase(&mut self, phase: ExecutionPhase, scene: &mut Scene) -> Result<(), WorldError> {
        if self.state != ManagerState::Initialized {
            return Err(WorldError::InvalidState(format!(
                "cannot run {:?} phase before systems are initialized",
                phase
            )));
        }

        let range = (phase, i32::MIN, 0)..=(phase, i32::MAX, u64::MAX);
        for key in self.schedule.range(range).map(|(_, key)| key) {
            if let Some(registration) = self.systems.get_mut(key) {
                log::trace!("Running system '{}'", key);
                registration.system.process(scene)?;
            }
        }
        Ok(())
    }

    /// Let one system load its content; `Ok(false)` if no such system exists
    pub fn load_content(
        &mut self,
        key: SystemKey,
        content: &mut dyn ContentSource,
    ) -> Result<bool, WorldError> {
        match self.systems.get_mut(&key) {
            Some(registration) => {
                registration.system.load_content(content)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Dispose one system's resources; `false` if no such system exists
    pub fn dispose(&mut self, key: SystemKey) -> bool {
        match self.systems.get_mut(&key) {
            Some(registration) => {
                registration.system.dispose();
                true
            }
            None => false,
        }
    }

    /// Whether a system holds `key`
    pub fn contains(&self, key: SystemKey) -> bool {
        self.systems.contains_key(&key)
    }

    /// Handle of the system holding `key`
    pub fn handle(&self, key: SystemKey) -> Option<SystemHandle> {
        self.systems.get(&key).map(|registration| registration.handle)
    }

    /// Keys of the systems in `phase`, in execution order
    pub fn order(&self, phase: ExecutionPhase) -> Vec<SystemKey> {
        self.schedule
            .iter()
            .filter(|((entry_phase, _, _), _)| *entry_phase == phase)
            .map(|(_, key)| *key)
            .collect()
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no systems are registered
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Whether `initialize_all` has completed successfully
    pub fn is_initialized(&self) -> bool {
        self.state == ManagerState::Initialized
    }

    fn ensure_registering(&self) -> Result<(), WorldError> {
        match self.state {
            ManagerState::Registering => Ok(()),
            ManagerState::Initialized => Err(WorldError::InvalidState(
                "systems are already initialized".to_string(),
            )),
            ManagerState::Poisoned => Err(WorldError::InvalidState(
                "system initialization previously failed".to_string(),
            )),
        }
    }

    fn unschedule(&mut self, key: SystemKey) -> Option<Registration> {
        let registration = self.systems.remove(&key)?;
        let handle = registration.handle;
        self.schedule
            .remove(&(handle.phase, handle.priority, handle.sequence));
        Some(registration)
    }

    fn schedule_system(
        &mut self,
        system: Box<dyn System>,
        phase: ExecutionPhase,
        priority: i32,
    ) -> SystemHandle {
        let key = system.key();
        let handle = SystemHandle {
            key,
            phase,
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        self.schedule.insert((phase, priority, handle.sequence), key);
        self.systems.insert(key, Registration { handle, system });
        log::debug!("Registered system '{}' ({:?}, priority {})", key, phase, priority);
        handle
    }
}

impl Default for SystemManager {
    fn default() -> Self {
        Self::new()
    }
}
