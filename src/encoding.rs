use crate::error::Error;
use shakmaty::{fen::Fen, Bitboard, Board, Color, Piece, Position, Role, Setup};

/// Number of bitboards needed to describe a board: one per color and role
pub const NUM_BITBOARDS: usize = 12;

/// Piece occupancy masks of a board.
/// Slot `color * 6 + role`, White first, roles from pawn to king
pub type BitboardSet = [u64; NUM_BITBOARDS];

/// Returns the slot of a piece in a [`BitboardSet`]
pub fn slot(piece: Piece) -> usize {
    let color = match piece.color {
        Color::White => 0,
        Color::Black => 1,
    };
    let role = match piece.role {
        Role::Pawn => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Rook => 3,
        Role::Queen => 4,
        Role::King => 5,
    };

    color * 6 + role
}

/// Returns the piece stored in a slot of a [`BitboardSet`]
pub fn piece_at_slot(slot: usize) -> Piece {
    debug_assert!(slot < NUM_BITBOARDS);

    Piece {
        color: Color::ALL[slot / 6],
        role: Role::ALL[slot % 6],
    }
}

/// Encodes the piece placement of a board into 12 bitboards
pub fn encode(board: &Board) -> BitboardSet {
    let mut bitboards = [0u64; NUM_BITBOARDS];

    for color in Color::ALL {
        for role in Role::ALL {
            let piece = Piece { color, role };
            bitboards[slot(piece)] = board.by_piece(piece).0;
        }
    }

    bitboards
}

/// Encodes the board of a position, ignoring turn, castling rights and clocks
pub fn encode_position<P: Position>(position: &P) -> BitboardSet {
    encode(position.board())
}

/// Rebuilds the piece placement from 12 bitboards.
///
/// Slots are applied in order and squares in increasing order, so if two masks
/// share a square the piece of the later slot wins. The input is not checked
/// for overlaps.
pub fn decode_board(bitboards: &[u64]) -> Result<Board, Error> {
    if bitboards.len() != NUM_BITBOARDS {
        return Err(Error::InvalidInput {
            len: bitboards.len(),
        });
    }

    let mut board = Board::empty();

    for (slot, &mask) in bitboards.iter().enumerate() {
        let piece = piece_at_slot(slot);
        for square in Bitboard(mask) {
            board.set_piece_at(square, piece);
        }
    }

    Ok(board)
}

/// Rebuilds a setup from 12 bitboards.
///
/// Bitboards only carry piece placement: the setup has White to move, no
/// castling rights, no en passant square and fresh move counters. The result
/// may describe an illegal position (no kings, pawns on the back rank...).
pub fn decode(bitboards: &[u64]) -> Result<Setup, Error> {
    let mut setup = Setup::empty();
    setup.board = decode_board(bitboards)?;
    Ok(setup)
}

/// Decodes 12 bitboards into a FEN string
pub fn decode_to_fen(bitboards: &[u64]) -> Result<String, Error> {
    Ok(Fen::from_setup(decode(bitboards)?).to_string())
}

/// Decodes many bitboard sets into FEN strings, stopping at the first invalid one
pub fn decode_many_to_fens<I, B>(sets: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u64]>,
{
    sets.into_iter()
        .map(|bitboards| decode_to_fen(bitboards.as_ref()))
        .collect()
}
