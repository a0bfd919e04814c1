use thiserror::Error;

/// Errors that abort actuator startup.
///
/// Runtime position writes are clamped rather than rejected, so the only
/// failure mode left is a corrupt initial state at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("initial lift position {0} is outside 0..=10000")]
    InitialPositionOutOfRange(u32),
}
