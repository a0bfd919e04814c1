use serde::{Deserialize, Serialize};

use crate::domain::Snapshot;

/// Body of `GET /position`. The field name follows the Matter window
/// covering attribute this simulator mirrors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionResponse {
    #[serde(rename = "currentPositionLiftPercent100ths")]
    pub current_position_lift_percent_100ths: u16,
}

impl From<Snapshot> for PositionResponse {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            current_position_lift_percent_100ths: snapshot.current.raw(),
        }
    }
}

/// Inbound motion intents, named after the Matter window covering commands.
///
/// `lift_percent_100ths` is carried raw; the position store clamps it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CoveringCommand {
    UpOrOpen,
    DownOrClose,
    StopMotion,
    GoToLiftPercentage { lift_percent_100ths: u16 },
}
