//! A piece-centric list of every piece on a board.

use std::fmt::{self, Display};
use std::iter::Copied;
use std::slice;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::coretypes::{Color, File, Piece, PieceKind, Rank, MAX_PIECES, NUM_FILES, NUM_RANKS};
use crate::error::{self, ErrorKind};
use crate::position::Board;

/// Fixed capacity list of pieces, in the order they were placed.
/// Holds at most `MAX_PIECES` pieces and never allocates.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PieceList {
    pieces: ArrayVec<Piece, MAX_PIECES>,
}

impl PieceList {
    pub const START_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates an empty PieceList.
    pub fn new() -> Self {
        Self {
            pieces: ArrayVec::new(),
        }
    }

    /// Create PieceList with pieces arranged in starting chess position.
    pub fn start_position() -> Self {
        use Color::*;
        use PieceKind::*;
        const BACK_RANK: [PieceKind; NUM_FILES] =
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut list = Self::new();
        for (color, back, front) in [(White, Rank::R1, Rank::R2), (Black, Rank::R8, Rank::R7)] {
            for (file, piece_kind) in File::ALL.into_iter().zip(BACK_RANK) {
                list.pieces.push(Piece::new(color, piece_kind, file, back));
                list.pieces.push(Piece::new(color, Pawn, file, front));
            }
        }
        list
    }

    /// Parse the piece placement field of a FEN string, such as
    /// `"4k3/8/8/8/8/8/8/3QK3"`. The first group describes rank 8.
    pub fn from_placement(placement: &str) -> error::Result<Self> {
        let mut list = Self::new();
        let groups: Vec<&str> = placement.split('/').collect();
        if groups.len() != NUM_RANKS {
            return Err((
                ErrorKind::PlacementMalformed,
                format!("expected {NUM_RANKS} ranks, found {}", groups.len()),
            )
                .into());
        }

        for (group, rank) in groups.into_iter().zip(Rank::ALL.into_iter().rev()) {
            let mut file_idx: usize = 0;

            for ch in group.chars() {
                if let Some(empty) = ch.to_digit(10) {
                    file_idx += empty as usize;
                    continue;
                }
                let file = File::ALL
                    .get(file_idx)
                    .copied()
                    .ok_or((ErrorKind::PlacementMalformed, format!("rank {rank} overflows")))?;
                let color = match ch.is_ascii_uppercase() {
                    true => Color::White,
                    false => Color::Black,
                };
                let piece_kind = PieceKind::try_from(ch)?;
                list.push(Piece::new(color, piece_kind, file, rank))?;
                file_idx += 1;
            }

            if file_idx != NUM_FILES {
                return Err((
                    ErrorKind::PlacementMalformed,
                    format!("rank {rank} covers {file_idx} files"),
                )
                    .into());
            }
        }

        Ok(list)
    }

    /// Add a piece to the list. Fails if the list is already full.
    pub fn push(&mut self, piece: Piece) -> error::Result<()> {
        self.pieces
            .try_push(piece)
            .map_err(|_| ErrorKind::PlacementTooManyPieces.into())
    }

    /// Returns the piece standing on a square, if any.
    pub fn get(&self, file: File, rank: Rank) -> Option<Piece> {
        self.pieces
            .iter()
            .copied()
            .find(|piece| piece.file() == file && piece.rank() == rank)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns the FEN piece placement field of this board.
    pub fn placement(&self) -> String {
        let mut placement = String::with_capacity(NUM_RANKS * (NUM_FILES + 1));

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0;
            for file in File::ALL {
                match self.get(file, rank) {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank != Rank::R1 {
                placement.push('/');
            }
        }
        placement
    }

    /// Returns pretty-printed chess board representation of Self.
    /// The chess board has borders and file/rank indicators.
    pub fn pretty(&self) -> String {
        const RANK_SEP: &str = "+---+---+---+---+---+---+---+---+\n";
        let mut pretty = String::with_capacity(626);

        pretty.push_str(RANK_SEP);
        for rank in Rank::ALL.into_iter().rev() {
            pretty.push_str("| ");

            for file in File::ALL {
                pretty.push(self.get(file, rank).map_or(' ', |piece| piece.to_char()));
                pretty.push_str(" | ");
            }
            pretty.push(rank.to_char());
            pretty.push('\n');
            pretty.push_str(RANK_SEP);
        }
        pretty.push_str("  a   b   c   d   e   f   g   h\n");

        pretty
    }
}

impl Board for PieceList {
    type Pieces<'a> = Copied<slice::Iter<'a, Piece>>;

    fn pieces(&self) -> Self::Pieces<'_> {
        self.pieces.iter().copied()
    }

    fn count_pieces(&self) -> usize {
        self.pieces.len()
    }
}

impl FromStr for PieceList {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        Self::from_placement(s)
    }
}

impl Display for PieceList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
