//! Round controller driving the engine from player intents.

use crate::intent::{Intent, KeyLayout, move_cursor};
use derive_getters::Getters;
use tictactoe_engine::{Cell, GameEngine, GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Where the session is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Players are placing marks.
    Playing,
    /// The round ended; waiting for a rematch answer.
    RoundOver(GameStatus),
}

/// Whether the control loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading intents.
    Continue,
    /// Leave the game.
    Exit,
}

/// Round outcomes tallied over the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct Scoreboard {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Records a finished round. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// A hot-seat game between two players at one keyboard.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    cursor: Cell,
    phase: Phase,
    scoreboard: Scoreboard,
    message: Option<String>,
    layout: KeyLayout,
}

impl Session {
    /// Creates a session with a fresh round.
    #[instrument]
    pub fn new(layout: KeyLayout) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Cell::Center,
            phase: Phase::Playing,
            scoreboard: Scoreboard::default(),
            message: None,
            layout,
        }
    }

    /// Applies one intent and reports whether to keep going.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn handle(&mut self, intent: Intent) -> Flow {
        if intent == Intent::Quit {
            info!("Player quit");
            return Flow::Exit;
        }

        match self.phase {
            Phase::Playing => {
                match intent {
                    Intent::SelectCell(cell) => self.play(cell),
                    Intent::Confirm => self.play(self.cursor),
                    Intent::MoveCursor(direction) => {
                        self.cursor = move_cursor(self.cursor, direction);
                    }
                    Intent::Decline | Intent::Quit => {}
                }
                Flow::Continue
            }
            Phase::RoundOver(_) => match intent {
                Intent::Confirm => {
                    self.start_round();
                    Flow::Continue
                }
                Intent::Decline => {
                    info!("Rematch declined");
                    Flow::Exit
                }
                _ => Flow::Continue,
            },
        }
    }

    /// Places the active player's mark on `cell` and settles the outcome.
    fn play(&mut self, cell: Cell) {
        let player = self.engine.turn();
        if let Err(e) = self.engine.place_cell(cell) {
            warn!(error = %e, %cell, %player, "Move rejected");
            self.message = Some(e.to_string());
            return;
        }
        self.cursor = cell;
        self.message = Some(format!("{} played {}", player, cell.label()));

        let status = self.engine.evaluate();
        if status.is_over() {
            info!(%status, "Round over");
            self.scoreboard.record(status);
            self.phase = Phase::RoundOver(status);
        } else {
            self.engine.end_turn();
        }
    }

    fn start_round(&mut self) {
        debug!(rounds = self.scoreboard.rounds(), "Starting new round");
        self.engine.reset();
        self.cursor = Cell::Center;
        self.phase = Phase::Playing;
        self.message = None;
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the cursor cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the score tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the latest status message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the key layout.
    pub fn layout(&self) -> KeyLayout {
        self.layout
    }
}
