use evalboards::encoding::piece_at_slot;
use evalboards::{
    decode_board, decode_to_fen, encode, encode_position, from_array_plane, to_array_plane,
    to_array_planes, Error, NUM_BITBOARDS,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shakmaty::{fen::Fen, Board, Chess, Position, Square};

fn random_board(rng: &mut StdRng, density: f64) -> Board {
    let mut board = Board::empty();

    for square in Square::ALL {
        if rng.gen_bool(density) {
            board.set_piece_at(square, piece_at_slot(rng.gen_range(0..NUM_BITBOARDS)));
        }
    }

    board
}

#[test]
fn roundtrip_random_placements() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for density in [0.0, 0.1, 0.5, 0.9, 1.0] {
        for _ in 0..50 {
            let board = random_board(&mut rng, density);
            assert_eq!(decode_board(&encode(&board)).unwrap(), board);
        }
    }
}

#[test]
fn roundtrip_played_games() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let mut position = Chess::default();

        for _ in 0..80 {
            let moves = position.legal_moves();
            let Some(mov) = moves.choose(&mut rng) else {
                break;
            };
            position.play_unchecked(mov);

            let board = decode_board(&encode_position(&position)).unwrap();
            assert_eq!(&board, position.board());
        }
    }
}

#[test]
fn fen_keeps_placement_only() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";
    let position: Chess = fen
        .parse::<Fen>()
        .unwrap()
        .into_position(shakmaty::CastlingMode::Standard)
        .unwrap();

    assert_eq!(
        decode_to_fen(&encode_position(&position)).unwrap(),
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w - - 0 1"
    );
}

#[test]
fn decode_rejects_wrong_lengths() {
    let bitboards = encode_position(&Chess::default());

    assert!(matches!(
        decode_board(&bitboards[..11]),
        Err(Error::InvalidInput { len: 11 })
    ));

    let mut longer = bitboards.to_vec();
    longer.push(0);
    assert!(matches!(
        decode_board(&longer),
        Err(Error::InvalidInput { len: 13 })
    ));
}

#[test]
fn array_plane_roundtrip() {
    let mut rng = StdRng::seed_from_u64(7);

    let fixed = [0, 1, u64::MAX, 1 << 63, 0xaaaa_aaaa_aaaa_aaaa, 0x0123_4567_89ab_cdef];
    let random = (0..1000).map(|_| rng.gen::<u64>());

    for value in fixed.into_iter().chain(random) {
        assert_eq!(from_array_plane(&to_array_plane(value)), value);
    }
}

#[test]
fn array_planes_shape_and_popcount() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let bitboards: [u64; NUM_BITBOARDS] = std::array::from_fn(|_| rng.gen());
        let planes = to_array_planes(&bitboards);

        assert_eq!(planes.len(), NUM_BITBOARDS);
        for (plane, bitboard) in planes.iter().zip(bitboards) {
            let cells: Vec<i8> = plane.iter().flatten().copied().collect();

            assert_eq!(cells.len(), 64);
            assert!(cells.iter().all(|&c| c == 0 || c == 1));
            assert_eq!(
                cells.iter().map(|&c| c as u32).sum::<u32>(),
                bitboard.count_ones()
            );
        }
    }
}
