use std::sync::atomic::{AtomicU16, Ordering};

use shared::{
    domain::{LiftPosition, Snapshot},
    error::StateError,
};

/// Holds the actuator's current and target lift positions.
///
/// Each field has exactly one writer (`current`: the convergence engine,
/// `target`: the command interface), so a plain atomic word per field is
/// enough; no lock and no multi-field transaction. Readers never block
/// beyond a single atomic load.
#[derive(Debug)]
pub struct PositionStore {
    current: AtomicU16,
    target: AtomicU16,
}

impl PositionStore {
    /// Initializes the store at `initial`, with the target equal to the
    /// current position so no motion occurs until a command arrives.
    ///
    /// Unlike runtime writes, an out-of-range initial value is not clamped:
    /// it is the one fatal condition and aborts startup.
    pub fn new(initial: u32) -> Result<Self, StateError> {
        if initial > u32::from(LiftPosition::MAX_RAW) {
            return Err(StateError::InitialPositionOutOfRange(initial));
        }
        let initial = initial as u16;
        Ok(Self {
            current: AtomicU16::new(initial),
            target: AtomicU16::new(initial),
        })
    }

    pub fn current(&self) -> LiftPosition {
        LiftPosition::clamped(self.current.load(Ordering::Acquire))
    }

    pub fn target(&self) -> LiftPosition {
        LiftPosition::clamped(self.target.load(Ordering::Acquire))
    }

    /// Commits a new target, visible to the next engine tick. A `set_target`
    /// that returns before a tick reads the target is observed by that tick;
    /// overlapping writes within one tick interval are last-write-wins.
    pub fn set_target(&self, value: LiftPosition) {
        self.target.store(value.raw(), Ordering::Release);
    }

    /// Commits a new current position. Called only by the convergence engine.
    pub fn set_current(&self, value: LiftPosition) {
        self.current.store(value.raw(), Ordering::Release);
    }

    /// Immutable read of the current position for external observers. Safe
    /// at any frequency concurrently with engine ticks; a call racing a tick
    /// sees either the pre- or post-tick value, never a partial one.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current(),
        }
    }
}
