//! The fundamental and simple types of `lookahead_engine`.

use std::fmt::{self, Display};
use std::ops::Not;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_FILES: usize = 8;
pub const NUM_RANKS: usize = 8;

// 16 White and 16 Black pieces at most.
pub const MAX_PIECES: usize = 32;

// The greatest depth accepted by the engine for a fixed depth search.
pub const MAX_DEPTH: PlyKind = 40;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Depth of a search in plies (half moves).
pub type PlyKind = u8;

/// Heuristic score of a position. Positive values favor White, negative values favor Black.
pub type Score = f64;

/// The two players. White always maximizes the score and Black always minimizes it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

/// Discriminants index the evaluation bonus tables, so order matters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Board columns, `A` is index 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum File {
    A, B, C, D, E, F, G, H,
}

/// Board rows, `R1` is index 0 and White's back rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Rank {
    R1, R2, R3, R4, R5, R6, R7, R8,
}

/// A piece standing on a board square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) piece_kind: PieceKind,
    pub(crate) file: File,
    pub(crate) rank: Rank,
}

//////////////////////
/// Implementations //
//////////////////////

impl Color {
    /// +1.0 for White and -1.0 for Black.
    /// Multiplying an absolute score by the sign of a player gives the score from their side.
    pub const fn sign(&self) -> Score {
        match self {
            Color::White => 1.0,
            Color::Black => -1.0,
        }
    }

    pub const fn is_maximizing(&self) -> bool {
        matches!(self, Color::White)
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Color::White => "White",
            Color::Black => "Black",
        };
        f.write_str(name)
    }
}

impl PieceKind {
    /// Uppercase FEN letter.
    pub const fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Accepts either case, as the case of a FEN piece letter only encodes its color.
impl TryFrom<char> for PieceKind {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
        .find(|kind| kind.to_char() == ch.to_ascii_uppercase())
        .ok_or_else(|| (ErrorKind::ParsePieceMalformed, format!("'{ch}' is not a piece")).into())
    }
}

impl File {
    /// Files from `A` to `H`.
    #[rustfmt::skip]
    pub const ALL: [File; NUM_FILES] = [
        File::A, File::B, File::C, File::D, File::E, File::F, File::G, File::H,
    ];

    /// Lowercase letter of the file.
    pub const fn to_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl Rank {
    /// Ranks from `R1` to `R8`.
    #[rustfmt::skip]
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::R1, Rank::R2, Rank::R3, Rank::R4, Rank::R5, Rank::R6, Rank::R7, Rank::R8,
    ];

    /// Digit of the rank, `'1'` for `R1`.
    pub const fn to_char(&self) -> char {
        (b'1' + *self as u8) as char
    }

    /// The same rank seen from Black's side of the board.
    pub const fn flip(&self) -> Self {
        Self::ALL[NUM_RANKS - 1 - *self as usize]
    }
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Piece {
    pub const fn new(color: Color, piece_kind: PieceKind, file: File, rank: Rank) -> Self {
        Piece {
            color,
            piece_kind,
            file,
            rank,
        }
    }

    pub const fn color(&self) -> Color {
        self.color
    }
    pub const fn piece_kind(&self) -> PieceKind {
        self.piece_kind
    }
    pub const fn file(&self) -> File {
        self.file
    }
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Rank as an index from 0 to 7.
    pub const fn rank_u8(&self) -> u8 {
        self.rank as u8
    }

    /// FEN letter of this piece, uppercase for White and lowercase for Black.
    pub const fn to_char(&self) -> char {
        match self.color {
            Color::White => self.piece_kind.to_char(),
            Color::Black => self.piece_kind.to_char().to_ascii_lowercase(),
        }
    }
}

/// Letter then square, such as `qd8` for a Black queen on d8.
impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.to_char(), self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_not_color() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert!(Color::White.is_maximizing());
        assert!(!Color::Black.is_maximizing());
        assert_eq!(Color::Black.to_string(), "Black");
    }

    #[test]
    fn piece_kind_from_either_case() {
        assert_eq!(PieceKind::try_from('q').unwrap(), PieceKind::Queen);
        assert_eq!(PieceKind::try_from('N').unwrap(), PieceKind::Knight);
        assert!(PieceKind::try_from('x').is_err());
        assert!(PieceKind::try_from('1').is_err());
    }

    #[test]
    fn files_and_ranks_in_order() {
        for (idx, (file, rank)) in File::ALL.into_iter().zip(Rank::ALL).enumerate() {
            assert_eq!(file as usize, idx);
            assert_eq!(rank as usize, idx);
        }
        assert_eq!(File::H.to_char(), 'h');
        assert_eq!(Rank::R1.to_char(), '1');
        assert_eq!(Rank::R2.flip(), Rank::R7);
        assert_eq!(Rank::R8.flip(), Rank::R1);
    }

    #[test]
    fn piece_display() {
        let piece = Piece::new(Color::Black, PieceKind::Queen, File::D, Rank::R8);
        assert_eq!(piece.to_string(), "qd8");
        assert_eq!(piece.rank_u8(), 7);

        let piece = Piece::new(Color::White, PieceKind::Pawn, File::E, Rank::R4);
        assert_eq!(piece.to_string(), "Pe4");
    }
}
