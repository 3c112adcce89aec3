//! Session state machine - ties the engine, spawner and detector together
//!
//! A session owns the board, the running score, the seeded RNG and the
//! injected best-score store. Every move runs the same cycle: transform the
//! board, spawn a tile if anything changed, then evaluate. Won is checked
//! before Over, so a move that both wins and fills the board reports Won.

use crate::board::Board;
use crate::engine::{self, MoveOutcome};
use crate::evaluate::evaluate;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::spawn::spawn_tile;
use crate::store::BestScoreStore;
use crate::types::{Direction, SessionStatus, START_TILES};

/// Result of one move command against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the board changed (and a new tile was spawned).
    pub moved: bool,
    /// Points earned from merges in this move.
    pub score_delta: u32,
    /// Session status after the move.
    pub status: SessionStatus,
}

/// A complete 2048 session.
pub struct GameSession {
    board: Board,
    score: u32,
    best: u32,
    status: SessionStatus,
    rng: SimpleRng,
    store: Option<Box<dyn BestScoreStore>>,
}

impl GameSession {
    /// Start a session with the given seed and no persistence.
    pub fn new(seed: u32) -> Self {
        Self::build(seed, None)
    }

    /// Start a session with an injected best-score store.
    ///
    /// The stored best is loaded once, up front.
    pub fn with_store(seed: u32, store: Box<dyn BestScoreStore>) -> Self {
        Self::build(seed, Some(store))
    }

    fn build(seed: u32, mut store: Option<Box<dyn BestScoreStore>>) -> Self {
        let best = store.as_mut().map(|s| s.load()).unwrap_or(0);
        let mut session = Self {
            board: Board::new(),
            score: 0,
            best,
            status: SessionStatus::Playing,
            rng: SimpleRng::new(seed),
            store,
        };
        session.deal_start_tiles();
        session
    }

    /// Re-enter Playing with a fresh two-tile board. Best score survives.
    pub fn reset(&mut self, seed: u32) {
        self.board = Board::new();
        self.score = 0;
        self.status = SessionStatus::Playing;
        self.rng = SimpleRng::new(seed);
        self.deal_start_tiles();
    }

    fn deal_start_tiles(&mut self) {
        for _ in 0..START_TILES {
            spawn_tile(&mut self.board, &mut self.rng);
        }
    }

    /// Apply one directional move: transform, spawn, evaluate.
    ///
    /// Terminal sessions ignore moves and report themselves unmoved.
    pub fn apply(&mut self, direction: Direction) -> StepOutcome {
        if self.status.is_terminal() {
            return StepOutcome {
                moved: false,
                score_delta: 0,
                status: self.status,
            };
        }

        let MoveOutcome {
            board,
            score_delta,
            moved,
        } = engine::apply_move(&self.board, direction);

        if !moved {
            return StepOutcome {
                moved: false,
                score_delta: 0,
                status: self.status,
            };
        }

        self.board = board;
        self.score += score_delta;
        spawn_tile(&mut self.board, &mut self.rng);

        let verdict = evaluate(&self.board);
        if verdict.won {
            // Win takes precedence over a simultaneous dead board.
            self.status = SessionStatus::Won;
        } else if !verdict.can_move {
            self.status = SessionStatus::Over;
            self.record_best();
        }

        StepOutcome {
            moved: true,
            score_delta,
            status: self.status,
        }
    }

    /// Persist the score as the new best if it beats the stored one.
    /// Runs only on the transition into Over.
    fn record_best(&mut self) {
        if self.score > self.best {
            self.best = self.score;
            if let Some(store) = self.store.as_mut() {
                store.save(self.best);
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Fill a snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.cells();
        out.score = self.score;
        out.best = self.best;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
