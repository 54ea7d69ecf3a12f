//! Board tests - placement, counting and flood reveal over generated boards

use std::collections::{HashSet, VecDeque};

use tui_minesweeper::core::{Board, BoardConfig, CellKind, SimpleRng};
use tui_minesweeper::types::Position;

fn mines_of(board: &Board) -> Vec<Position> {
    board
        .positions()
        .filter(|&p| board.get(p).unwrap().kind.is_mine())
        .collect()
}

fn generated(seed: u32) -> Board {
    let mut rng = SimpleRng::new(seed);
    Board::generate(BoardConfig::default(), &mut rng).unwrap()
}

#[test]
fn test_generate_places_exactly_m_distinct_mines() {
    for seed in 1..50 {
        let board = generated(seed);
        let mines = mines_of(&board);
        let unique: HashSet<_> = mines.iter().copied().collect();
        assert_eq!(mines.len(), 25, "seed {}", seed);
        assert_eq!(unique.len(), 25, "seed {}", seed);
    }
}

#[test]
fn test_generate_is_deterministic_per_seed() {
    assert_eq!(generated(77), generated(77));
    assert_ne!(mines_of(&generated(77)), mines_of(&generated(78)));
}

#[test]
fn test_counts_match_moore_neighbourhood() {
    for seed in [3, 11, 2024] {
        let board = generated(seed);
        for pos in board.positions() {
            let cell = board.get(pos).unwrap();
            if cell.kind.is_mine() {
                continue;
            }

            let mut expected = 0u8;
            for dy in -1i16..=1 {
                for dx in -1i16..=1 {
                    let (x, y) = (pos.x as i16 + dx, pos.y as i16 + dy);
                    if (dx, dy) == (0, 0) || x < 0 || y < 0 || x >= 15 || y >= 15 {
                        continue;
                    }
                    if board.get(Position::new(x as u8, y as u8)).unwrap().kind.is_mine() {
                        expected += 1;
                    }
                }
            }

            match cell.kind {
                CellKind::Empty => assert_eq!(expected, 0, "{:?}", pos),
                CellKind::Numbered(n) => {
                    assert_eq!(n, expected, "{:?}", pos);
                    assert!((1..=8).contains(&n));
                }
                CellKind::Mine => unreachable!(),
            }
        }
    }
}

/// Zero-count component around `start` plus its numbered fringe.
fn expected_flood(board: &Board, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start]);
    seen.insert(start);

    while let Some(pos) = queue.pop_front() {
        if board.get(pos).unwrap().kind != CellKind::Empty {
            continue;
        }
        for n in board.neighbors(pos) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

#[test]
fn test_flood_reveals_region_and_fringe_only() {
    let mut checked = 0;
    for seed in 1..30 {
        let board = generated(seed);
        let Some(start) = board
            .positions()
            .find(|&p| board.get(p).unwrap().kind == CellKind::Empty)
        else {
            continue;
        };

        let expected = expected_flood(&board, start);
        let mut flooded = board.clone();
        let opened = flooded.flood_reveal(start);

        let revealed: HashSet<_> = flooded
            .positions()
            .filter(|&p| flooded.get(p).unwrap().revealed)
            .collect();
        assert_eq!(revealed, expected, "seed {}", seed);
        assert_eq!(opened, expected.len(), "each cell revealed once");
        assert!(revealed
            .iter()
            .all(|&p| !flooded.get(p).unwrap().kind.is_mine()));
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_flood_twice_reveals_nothing_new() {
    let mut board = Board::with_mines(5, 5, &[Position::new(4, 4)]).unwrap();
    let first = board.flood_reveal(Position::new(0, 0));
    assert_eq!(first, 24);
    assert_eq!(board.flood_reveal(Position::new(0, 0)), 0);
    assert!(board.is_cleared());
}

#[test]
fn test_with_mines_rejects_full_board() {
    let all: Vec<_> = (0..2)
        .flat_map(|y| (0..2).map(move |x| Position::new(x, y)))
        .collect();
    assert!(Board::with_mines(2, 2, &all).is_err());
}
