use serde::Serialize;

/// Lift position of a window covering, in hundredths of a percent closed.
///
/// 0 is fully open, 10_000 is fully closed. Values are in range by
/// construction; every constructor clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LiftPosition(u16);

impl LiftPosition {
    pub const OPEN: LiftPosition = LiftPosition(0);
    pub const CLOSED: LiftPosition = LiftPosition(Self::MAX_RAW);
    pub const MAX_RAW: u16 = 10_000;

    /// Builds a position from a raw value, clamping into `0..=10_000`.
    pub fn clamped(raw: u16) -> Self {
        Self(raw.min(Self::MAX_RAW))
    }

    pub fn raw(self) -> u16 {
        self.0
    }
}

/// Immutable read of the current position at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub current: LiftPosition,
}
