//! Game state snapshots
//!
//! Uses postcard for compact binary serialization

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::{Ball, Config, ControlToggle, Events, GameRng, GameState, Player};

/// Everything needed to resume a match, apart from the RNG stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub players: [Player; 2],
    pub ball: Ball,
    pub running: bool,
    pub control_toggle: ControlToggle,
}

impl Snapshot {
    /// Serialize snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(to_allocvec(self)?)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(from_bytes(bytes)?)
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            players: self.players,
            ball: self.ball,
            running: self.running,
            control_toggle: self.control_toggle,
        }
    }

    /// Rebuild a match from a snapshot. `rng` picks up the random stream
    /// where the snapshotted game left it.
    pub fn restore(snapshot: Snapshot, config: Config, rng: GameRng) -> Self {
        Self {
            players: snapshot.players,
            ball: snapshot.ball,
            config,
            rng,
            events: Events::new(),
            running: snapshot.running,
            control_toggle: snapshot.control_toggle,
            tick: snapshot.tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ControlMode, Side};

    #[test]
    fn test_snapshot_serialization() {
        let mut state = GameState::new(Config::new(), GameRng::new(3));
        state.player_mut(Side::Right).score = 4;
        state.player_mut(Side::Left).control = ControlMode::Human;
        state.control_toggle.arm(17);
        state.tick = 99;

        let snapshot = state.snapshot();
        let bytes = snapshot.to_bytes().expect("Serialization should succeed");
        let decoded = Snapshot::from_bytes(&bytes).expect("Deserialization should succeed");

        assert_eq!(decoded, snapshot);
        assert_eq!(decoded.players[1].score, 4);
        assert_eq!(decoded.control_toggle, ControlToggle::Armed { since_tick: 17 });
    }

    #[test]
    fn test_truncated_snapshot_is_an_error() {
        let state = GameState::new(Config::new(), GameRng::new(3));
        let bytes = state.snapshot().to_bytes().expect("Serialization should succeed");
        assert!(Snapshot::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }
}
