use crate::encoding::{BitboardSet, NUM_BITBOARDS};

/// 8x8 binary plane of a single bitboard, indexed `[square / 8][square % 8]`
pub type ArrayPlane = [[i8; 8]; 8];

/// One plane per bitboard of a [`BitboardSet`], in slot order
pub type ArrayPlanes = [ArrayPlane; NUM_BITBOARDS];

/// Expands a bitboard into an 8x8 plane of zeros and ones
pub fn to_array_plane(bitboard: u64) -> ArrayPlane {
    let mut plane = [[0i8; 8]; 8];

    for square in 0..64 {
        if bitboard & (1 << square) != 0 {
            plane[square / 8][square % 8] = 1;
        }
    }

    plane
}

/// Expands all bitboards of a set into planes
pub fn to_array_planes(bitboards: &BitboardSet) -> ArrayPlanes {
    bitboards.map(to_array_plane)
}

/// Packs a plane back into a bitboard.
/// Only cells equal to exactly 1 are occupied, any other value is ignored
pub fn from_array_plane(plane: &ArrayPlane) -> u64 {
    let mut bitboard = 0u64;

    for (row, cells) in plane.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == 1 {
                bitboard |= 1 << (row * 8 + col);
            }
        }
    }

    bitboard
}

/// Packs all planes back into a bitboard set
pub fn from_array_planes(planes: &ArrayPlanes) -> BitboardSet {
    planes.map(|plane| from_array_plane(&plane))
}
