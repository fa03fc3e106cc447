//! Converts evaluation-annotated PGN games into bitboard training samples.
//!
//! Positions are encoded as 12 piece occupancy masks (White then Black, pawn to
//! king, bit `i` = square `i` with a1 = 0), which can be decoded back into FEN
//! strings or expanded into 8x8 planes.

pub mod encoding;
pub mod error;
pub mod extract;
pub mod planes;
pub mod sample;
pub mod visitor;

pub use encoding::{
    decode, decode_board, decode_many_to_fens, decode_to_fen, encode, encode_position,
    BitboardSet, NUM_BITBOARDS,
};
pub use error::Error;
pub use extract::{extract, extract_reader, EvalGames};
pub use planes::{from_array_plane, from_array_planes, to_array_plane, to_array_planes};
pub use planes::{ArrayPlane, ArrayPlanes};
pub use sample::Sample;
