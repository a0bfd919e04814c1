use std::{sync::Arc, time::Duration};

use shared::domain::LiftPosition;
use tokio::{sync::watch, task::JoinHandle, time};
use tracing::debug;

use crate::store::PositionStore;

/// Maximum distance the actuator travels in one tick.
pub const STEP: u16 = 1_000;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_millis(1_000);

/// One convergence step: moves `current` toward `target` by at most [`STEP`],
/// snapping onto the target once the remaining delta fits in a single step.
/// The snap is what prevents oscillation around targets the step size does
/// not evenly divide.
pub fn step_toward(current: LiftPosition, target: LiftPosition) -> LiftPosition {
    let (cur, tgt) = (current.raw(), target.raw());
    if tgt > cur {
        LiftPosition::clamped(if tgt - cur > STEP { cur + STEP } else { tgt })
    } else {
        LiftPosition::clamped(if cur - tgt > STEP { cur - STEP } else { tgt })
    }
}

/// Executes one tick against the store. A no-op while current equals target;
/// otherwise commits one bounded step. Each tick reads its inputs fresh, so
/// a target changed between ticks is picked up with no special handling.
pub fn tick(store: &PositionStore) {
    let current = store.current();
    let target = store.target();
    if current == target {
        return;
    }
    let next = step_toward(current, target);
    store.set_current(next);
    debug!(
        current_position = next.raw(),
        target_position = target.raw(),
        "converging"
    );
}

/// Handle to the running convergence task. Owned by whichever component
/// manages process shutdown; dropping it without calling [`EngineHandle::stop`]
/// leaves the task ticking.
pub struct EngineHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl EngineHandle {
    /// Stops scheduling further ticks and waits for the task to exit. An
    /// in-flight tick is allowed to complete.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// Spawns the periodic convergence task with the given tick period.
pub fn start(store: Arc<PositionStore>, period: Duration) -> EngineHandle {
    let (shutdown, mut stopped) = watch::channel(false);
    let task = tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = ticker.tick() => tick(&store),
                _ = stopped.changed() => break,
            }
        }
        debug!("convergence engine stopped");
    });
    EngineHandle { shutdown, task }
}
