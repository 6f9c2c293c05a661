//! Chess board piece placement representations.
mod piece_list;

pub use piece_list::PieceList;
