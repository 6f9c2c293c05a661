//! Static Evaluation Functions.
//!
//! Scores are absolute: White is the maxing player and Black the minning player,
//! so a score of +10.0 is winning for White while -10.0 is winning for Black.
//!
//! A non-terminal position is scored by summing, per side, a base value and a
//! rank bonus for every piece. Some bonuses only apply while the board is
//! crowded, while it is sparse, or during the first turns of the game.

use crate::coretypes::{File, Piece, Score};
use crate::coretypes::{Color::*, PieceKind::*};
use crate::error::{self, ErrorKind};
use crate::position::{Board, GameState};

/// Anything that can statically score a position of type `S`.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> Score;
}

/// Closures over a position are evaluators.
impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> Score,
{
    fn evaluate(&self, state: &S) -> Score {
        self(state)
    }
}

/// Tunable parameters of the heuristic evaluation.
///
/// Default values:
///
/// * `check_penalty`: 2.0
/// * `mate_score`: 1000.0
/// * `count_material`: false
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EvalConfig {
    /// Subtracted from the total of a player who is in check.
    pub check_penalty: Score,
    /// Magnitude of a checkmate score.
    pub mate_score: Score,
    /// When set, White's total is seeded with the difference in piece counts.
    pub count_material: bool,
}

impl EvalConfig {
    pub const DEFAULT_CHECK_PENALTY: Score = 2.0;
    pub const DEFAULT_MATE_SCORE: Score = 1000.0;

    /// Returns Err if a parameter is negative, infinite or NaN.
    pub fn validate(&self) -> error::Result<()> {
        for (name, value) in [
            ("check_penalty", self.check_penalty),
            ("mate_score", self.mate_score),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err((ErrorKind::EvalConfigInvalid, format!("{name} = {value}")).into());
            }
        }
        Ok(())
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            check_penalty: Self::DEFAULT_CHECK_PENALTY,
            mate_score: Self::DEFAULT_MATE_SCORE,
            count_material: false,
        }
    }
}

/// The hand-crafted piece table evaluation, as an [`Evaluator`] for any [`GameState`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Heuristic {
    config: EvalConfig,
}

impl Heuristic {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn evaluate(&self, state: &S) -> Score {
        evaluate_with(state, &self.config)
    }
}

// Evaluation Functions

/// Primary evaluate function, using the default configuration.
pub fn evaluate_abs<S: GameState>(state: &S) -> Score {
    evaluate_with(state, &EvalConfig::default())
}

/// Statically evaluate any position, terminal or not.
pub fn evaluate_with<S: GameState>(state: &S, config: &EvalConfig) -> Score {
    if state.is_over() {
        return terminal_abs(state, config.mate_score);
    }

    let board = state.board();
    let mut w_total: Score = 0.0;
    let mut b_total: Score = 0.0;

    if config.count_material {
        w_total += board.count_pieces_of(White) as Score - board.count_pieces_of(Black) as Score;
    }

    if state.is_check() {
        match state.player() {
            White => w_total -= config.check_penalty,
            Black => b_total -= config.check_penalty,
        }
    }

    let count = board.count_pieces();
    let turn = state.turn();
    for piece in board.pieces() {
        match piece.color() {
            White => add_piece(&mut w_total, &piece, count, turn),
            Black => add_piece(&mut b_total, &piece, count, turn),
        }
    }

    w_total - b_total
}

/// Given a terminal position, return a score representing a checkmate for
/// White or Black, or a draw.
pub fn terminal_abs<S: GameState>(state: &S, mate_score: Score) -> Score {
    if state.is_check() {
        match state.player() {
            White => -mate_score,
            Black => mate_score,
        }
    } else {
        0.0
    }
}

/// Value of a single piece on a board holding `count` pieces, at game turn `turn`.
/// Always positive, regardless of the piece's color.
pub fn piece_score(piece: &Piece, count: usize, turn: u32) -> Score {
    let mut total = 0.0;
    add_piece(&mut total, piece, count, turn);
    total
}

// Adds each applicable bonus of a piece to its side's total, one bonus at a time.
fn add_piece(total: &mut Score, piece: &Piece, count: usize, turn: u32) {
    let rows = match piece.color() {
        White => &WHITE_BONUSES,
        Black => &BLACK_BONUSES,
    };
    for bonus in rows[piece.piece_kind() as usize] {
        if bonus.gate.is_open(piece, count, turn) {
            *total += bonus.value(piece);
        }
    }
}

// Piece Bonus Tables

/// When a bonus applies.
#[derive(Debug, Copy, Clone)]
enum Gate {
    Always,
    /// More than this many pieces on the board.
    CountAbove(usize),
    /// This many pieces or fewer on the board.
    CountAtMost(usize),
    /// Early turns, and only on the opening files.
    Opening,
}

/// Which rank a bonus scales with.
#[derive(Debug, Copy, Clone)]
enum Measure {
    /// Rank index as is, 0 for rank 1.
    Rank,
    /// Rank index seen from the top of the board, 0 for rank 8.
    Flipped,
}

/// `base + measured_rank * per_rank`, added when `gate` is open.
#[derive(Debug, Copy, Clone)]
struct Bonus {
    gate: Gate,
    base: Score,
    per_rank: Score,
    measure: Measure,
}

const OPENING_TURNS: u32 = 3;
const OPENING_FILES: [File; 3] = [File::C, File::E, File::F];

impl Gate {
    fn is_open(&self, piece: &Piece, count: usize, turn: u32) -> bool {
        match *self {
            Gate::Always => true,
            Gate::CountAbove(threshold) => count > threshold,
            Gate::CountAtMost(threshold) => count <= threshold,
            Gate::Opening => turn < OPENING_TURNS && OPENING_FILES.contains(&piece.file()),
        }
    }
}

impl Bonus {
    fn value(&self, piece: &Piece) -> Score {
        let rank = match self.measure {
            Measure::Rank => piece.rank_u8(),
            Measure::Flipped => piece.rank().flip() as u8,
        };
        self.base + rank as Score * self.per_rank
    }
}

const fn bonus(gate: Gate, base: Score, per_rank: Score, measure: Measure) -> Bonus {
    Bonus {
        gate,
        base,
        per_rank,
        measure,
    }
}

const NUM_PIECE_KINDS: usize = 6;

// Indexed by PieceKind discriminant. Kings are never scored.
// Black rows are not mirror images of White rows: the queen scales differently,
// the unconditional rook bonus uses the raw rank for both sides, and the sparse
// board knight bonus starts at 12 pieces for White but at 18 for Black.

/// White piece bonuses.
#[rustfmt::skip]
static WHITE_BONUSES: [&[Bonus]; NUM_PIECE_KINDS] = [
    // Pawn
    &[bonus(Gate::Opening, 4.0, 0.05, Measure::Rank),
      bonus(Gate::Always, 1.0, 0.05, Measure::Rank)],
    // Knight
    &[bonus(Gate::CountAtMost(12), 3.5, 0.0, Measure::Rank),
      bonus(Gate::Always, 4.0, 0.2, Measure::Rank)],
    // Bishop
    &[bonus(Gate::CountAbove(18), 4.0, 0.0, Measure::Rank),
      bonus(Gate::Always, 4.0, 0.04, Measure::Rank)],
    // Rook
    &[bonus(Gate::CountAbove(20), 5.0, 0.03, Measure::Rank),
      bonus(Gate::Always, 5.5, 0.05, Measure::Rank)],
    // Queen
    &[bonus(Gate::CountAbove(20), 9.0, 0.08, Measure::Rank),
      bonus(Gate::Always, 10.0, 0.01, Measure::Rank)],
    // King
    &[],
];

/// Black piece bonuses.
#[rustfmt::skip]
static BLACK_BONUSES: [&[Bonus]; NUM_PIECE_KINDS] = [
    // Pawn
    &[bonus(Gate::Opening, 4.0, 0.05, Measure::Flipped),
      bonus(Gate::Always, 1.0, 0.05, Measure::Flipped)],
    // Knight
    &[bonus(Gate::CountAtMost(18), 3.5, 0.0, Measure::Flipped),
      bonus(Gate::Always, 4.0, 0.2, Measure::Flipped)],
    // Bishop
    &[bonus(Gate::CountAbove(18), 4.0, 0.0, Measure::Flipped),
      bonus(Gate::Always, 4.0, 0.04, Measure::Flipped)],
    // Rook
    &[bonus(Gate::CountAbove(20), 5.0, 0.03, Measure::Flipped),
      bonus(Gate::Always, 5.5, 0.05, Measure::Rank)],
    // Queen
    &[bonus(Gate::CountAbove(20), 9.0, 0.24, Measure::Flipped),
      bonus(Gate::Always, 10.0, 0.1, Measure::Flipped)],
    // King
    &[],
];

// Keeps table rows aligned with PieceKind discriminants.
const _: () = assert!(Pawn as usize == 0 && King as usize == NUM_PIECE_KINDS - 1);
