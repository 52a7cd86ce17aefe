use crate::{Ball, Config, ControlMode, ControlToggle, Events, GameRng, Player, Side};

/// Everything one match owns: both players, the ball and the loop flags
#[derive(Debug, Clone)]
pub struct GameState {
    pub players: [Player; 2],
    pub ball: Ball,
    pub config: Config,
    pub rng: GameRng,
    pub events: Events,
    pub running: bool,
    pub control_toggle: ControlToggle,
    pub tick: u64,
}

impl GameState {
    /// A new match: two computer players, ball launched from the center
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let players = [
            Player::new(Side::Left, ControlMode::BasicAi, &config),
            Player::new(Side::Right, ControlMode::BasicAi, &config),
        ];
        let ball = Ball::launch(&config, &mut rng);

        Self {
            players,
            ball,
            config,
            rng,
            events: Events::new(),
            running: true,
            control_toggle: ControlToggle::new(),
            tick: 0,
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// (left, right)
    pub fn scores(&self) -> (u32, u32) {
        (
            self.player(Side::Left).score,
            self.player(Side::Right).score,
        )
    }

    /// Flip a player between keyboard and computer control
    pub fn toggle_control(&mut self, side: Side) -> ControlMode {
        let player = self.player_mut(side);
        player.control = player.control.toggled();
        player.control
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}
