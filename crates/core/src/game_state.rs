//! Game state module - the world and its rules
//!
//! Ties together the grid, the two entities and the running/terminated state
//! machine. Player commands and the enemy's pursuit step are applied here;
//! scheduling and I/O live in the engine crate.

use crate::entity::Entity;
use crate::frame::Frame;
use crate::grid::Grid;
use crate::pursuit;
use crate::types::{Command, Direction, Position};
use crate::{GameConfig, SetupError};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player typed the quit command.
    Quit,
    /// No more input is available.
    EndOfInput,
    /// The enemy landed on the player.
    Caught,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated(EndReason),
}

/// Result of feeding one read to [`GameState::apply_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Moved(Position),
    Blocked,
    UnknownCommand,
    Ended(EndReason),
}

/// One-line advisory shown on the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Blocked,
    UnknownCommand,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Blocked => "You hit a wall!",
            Notice::UnknownCommand => "Unknown command.",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    player: Entity,
    enemy: Entity,
    status: Status,
    notice: Option<Notice>,
}

impl GameState {
    /// Build a session. Both start positions must be interior floor cells.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let grid = Grid::new(config.width, config.height)?;
        for pos in [config.player_start, config.enemy_start] {
            if !grid.is_interior(pos) {
                return Err(SetupError::StartOutsideInterior { x: pos.x, y: pos.y });
            }
        }

        Ok(Self {
            grid,
            player: Entity::player(config.player_start),
            enemy: Entity::enemy(config.enemy_start),
            status: Status::Running,
            notice: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn enemy(&self) -> &Entity {
        &self.enemy
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.status {
            Status::Running => None,
            Status::Terminated(reason) => Some(reason),
        }
    }

    /// Advisory left by the most recent input, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Compose the grid with both entities for rendering.
    pub fn frame(&self) -> Frame {
        Frame::compose(&self.grid, &self.player, &self.enemy)
    }

    /// Apply one read from the input source. `None` means input is exhausted.
    ///
    /// Replaces the pending notice. Once terminated this is a no-op.
    pub fn apply_input(&mut self, input: Option<Command>) -> InputOutcome {
        if let Status::Terminated(reason) = self.status {
            return InputOutcome::Ended(reason);
        }
        self.notice = None;

        let Some(cmd) = input else {
            return self.terminate(EndReason::EndOfInput);
        };

        if let Some(dir) = cmd.direction() {
            return self.move_player(dir);
        }
        match cmd {
            Command::Quit => self.terminate(EndReason::Quit),
            _ => {
                self.notice = Some(Notice::UnknownCommand);
                InputOutcome::UnknownCommand
            }
        }
    }

    /// Try to move the player one cell. Walls reject the move.
    pub fn move_player(&mut self, dir: Direction) -> InputOutcome {
        let candidate = self.player.pos.offset(dir);
        if self.grid.is_wall(candidate.x, candidate.y) {
            self.notice = Some(Notice::Blocked);
            return InputOutcome::Blocked;
        }
        self.player.pos = candidate;
        InputOutcome::Moved(candidate)
    }

    /// Advance the enemy one pursuit step and check for a catch.
    ///
    /// Returns true when this step ended the game.
    pub fn update(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.enemy.pos = pursuit::step(self.enemy.pos, self.player.pos);
        if self.enemy.pos == self.player.pos {
            self.status = Status::Terminated(EndReason::Caught);
            return true;
        }
        false
    }

    fn terminate(&mut self, reason: EndReason) -> InputOutcome {
        self.status = Status::Terminated(reason);
        InputOutcome::Ended(reason)
    }

    /// Place both entities directly (for testing)
    #[doc(hidden)]
    pub fn set_positions(&mut self, player: Position, enemy: Position) {
        self.player.pos = player;
        self.enemy.pos = enemy;
    }
}
