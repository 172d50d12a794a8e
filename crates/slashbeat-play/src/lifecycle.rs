use log::{debug, info};
use serde::Serialize;

/// Lifecycle of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GameStatus {
    /// Waiting for the input source.
    #[default]
    Loading,
    Idle,
    Playing,
    Paused,
    Victory,
    GameOver,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Victory | GameStatus::GameOver)
    }
}

/// Guards lifecycle transitions. Requests that do not apply to the current
/// status are ignored and return `false`.
#[derive(Debug, Clone, Default)]
pub struct GameplayStateMachine {
    status: GameStatus,
}

impl GameplayStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Loading -> Idle once input is available.
    pub fn input_ready(&mut self) -> bool {
        self.transition(&[GameStatus::Loading], GameStatus::Idle, "input ready")
    }

    /// Idle -> Playing.
    pub fn start(&mut self) -> bool {
        self.transition(&[GameStatus::Idle], GameStatus::Playing, "start")
    }

    /// Playing <-> Paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => self.set(GameStatus::Paused),
            GameStatus::Paused => self.set(GameStatus::Playing),
            other => {
                debug!("Ignoring pause toggle in {:?}", other);
                return false;
            }
        }
        true
    }

    /// Playing -> Victory.
    pub fn win(&mut self) -> bool {
        self.transition(&[GameStatus::Playing], GameStatus::Victory, "victory")
    }

    /// Playing -> GameOver.
    pub fn lose(&mut self) -> bool {
        self.transition(&[GameStatus::Playing], GameStatus::GameOver, "game over")
    }

    /// Back to Idle from a finished or paused session.
    pub fn return_to_menu(&mut self) -> bool {
        self.transition(
            &[GameStatus::Paused, GameStatus::Victory, GameStatus::GameOver],
            GameStatus::Idle,
            "return to menu",
        )
    }

    fn transition(&mut self, from: &[GameStatus], to: GameStatus, request: &str) -> bool {
        if from.contains(&self.status) {
            self.set(to);
            true
        } else {
            debug!("Ignoring {} in {:?}", request, self.status);
            false
        }
    }

    fn set(&mut self, to: GameStatus) {
        info!("Game status {:?} -> {:?}", self.status, to);
        self.status = to;
    }
}
