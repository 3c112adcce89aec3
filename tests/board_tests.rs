//! Board construction and inspection through the public facade.

use tui_2048::core::Board;
use tui_2048::types::{BoardError, CELL_COUNT};

#[test]
fn test_from_rows_accepts_powers_of_two() {
    let board = Board::from_rows([
        [0, 2, 4, 8],
        [16, 32, 64, 128],
        [256, 512, 1024, 2048],
        [4096, 0, 0, 0],
    ])
    .unwrap();

    assert_eq!(board.get(0, 1), Some(2));
    assert_eq!(board.get(2, 3), Some(2048));
    assert_eq!(board.max_tile(), 4096);
}

#[test]
fn test_from_rows_rejects_invalid_values() {
    let err = Board::from_rows([[0, 0, 3, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
    match err {
        BoardError::InvalidTile { row, col, value } => {
            assert_eq!((row, col, value), (0, 2, 3));
        }
    }

    assert!(Board::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    assert!(Board::from_rows([[0, 6, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.empty_count(), CELL_COUNT);
    assert!(!board.is_full());
    assert_eq!(board.max_tile(), 0);
}

#[test]
fn test_out_of_bounds_get_is_none() {
    let board = Board::new();
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 4), None);
}

#[test]
fn test_contains_and_empty_cells() {
    let board =
        Board::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 2048, 0], [0, 0, 0, 0]]).unwrap();

    assert!(board.contains(2048));
    assert!(!board.contains(1024));
    assert_eq!(board.empty_count(), CELL_COUNT - 2);
    assert!(!board.empty_cells().contains(&0));
    assert!(board.empty_cells().contains(&1));
}

#[test]
fn test_display_renders_grid() {
    let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let text = board.to_string();
    assert!(text.contains('2'));
    assert!(text.contains('+'));
}
