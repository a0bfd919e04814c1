use std::sync::Arc;

use shared::{domain::LiftPosition, protocol::CoveringCommand};
use tracing::debug;

use crate::store::PositionStore;

/// Maps discrete motion intents onto target-position writes.
///
/// Each call takes effect on the next convergence tick, never synchronously;
/// rapid successive calls within one tick interval resolve last-write-wins.
#[derive(Clone)]
pub struct CommandInterface {
    store: Arc<PositionStore>,
}

impl CommandInterface {
    pub fn new(store: Arc<PositionStore>) -> Self {
        Self { store }
    }

    pub fn go_to_lift_percentage(&self, position: LiftPosition) {
        debug!(target_position = position.raw(), "go_to_lift_percentage");
        self.store.set_target(position);
    }

    pub fn up_or_open(&self) {
        debug!("up_or_open");
        self.store.set_target(LiftPosition::OPEN);
    }

    pub fn down_or_close(&self) {
        debug!("down_or_close");
        self.store.set_target(LiftPosition::CLOSED);
    }

    /// Freezes motion by targeting wherever the actuator currently is, so
    /// the next tick computes a zero delta.
    pub fn stop_motion(&self) {
        let current = self.store.current();
        debug!(target_position = current.raw(), "stop_motion");
        self.store.set_target(current);
    }

    /// Dispatches a wire-level command from an external command source.
    pub fn apply(&self, command: CoveringCommand) {
        match command {
            CoveringCommand::UpOrOpen => self.up_or_open(),
            CoveringCommand::DownOrClose => self.down_or_close(),
            CoveringCommand::StopMotion => self.stop_motion(),
            CoveringCommand::GoToLiftPercentage { lift_percent_100ths } => {
                self.go_to_lift_percentage(LiftPosition::clamped(lift_percent_100ths))
            }
        }
    }
}
