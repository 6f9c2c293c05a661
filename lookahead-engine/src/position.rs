//! Interface between the engine and the game state it searches.
//!
//! The engine does not generate moves, detect check, or track turns itself.
//! Whatever owns the rules of the game implements [`GameState`] and [`Board`],
//! and the search only ever reads through these traits.

use crate::coretypes::{Color, Piece};

/// Read-only view of the pieces on a board.
pub trait Board {
    type Pieces<'a>: Iterator<Item = Piece>
    where
        Self: 'a;

    /// Iterate over every piece on the board, of both colors.
    fn pieces(&self) -> Self::Pieces<'_>;

    /// Total number of pieces on the board, of both colors.
    fn count_pieces(&self) -> usize {
        self.pieces().count()
    }

    /// Number of pieces on the board owned by `color`.
    fn count_pieces_of(&self, color: Color) -> usize {
        self.pieces().filter(|piece| piece.color() == color).count()
    }
}

/// A node of the game tree.
///
/// Nodes are immutable once produced. Each node other than the search root
/// links back to the node it was produced from through [`GameState::previous`],
/// and that chain is acyclic. Equality must hold exactly when two values denote
/// the same node, since it is used to locate the root's child on a path.
pub trait GameState: Clone + PartialEq {
    type Board: Board;
    type Successors: Iterator<Item = Self>;

    fn board(&self) -> &Self::Board;

    /// Player to move in this position.
    fn player(&self) -> Color;

    /// True if the game has concluded, by checkmate or by a draw.
    fn is_over(&self) -> bool;

    /// True if the player to move is in check.
    fn is_check(&self) -> bool;

    /// True if the player to move has been checkmated.
    fn is_checkmate(&self) -> bool {
        self.is_over() && self.is_check()
    }

    /// Number of turns played to reach this position.
    fn turn(&self) -> u32;

    /// The position this one was produced from, or None for the first position of a game.
    fn previous(&self) -> Option<&Self>;

    /// Positions reachable by one legal move, in a stable order.
    fn successors(&self) -> Self::Successors;
}
