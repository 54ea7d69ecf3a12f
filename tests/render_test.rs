//! Text surface layout tests

use tui_minesweeper::core::{Board, BoardConfig, Minesweeper};
use tui_minesweeper::types::{Command, Position};

#[test]
fn test_fresh_default_board_layout() {
    let mut game = Minesweeper::new(BoardConfig::default(), 1).unwrap();
    game.start_game();
    let screen = game.render();
    let lines: Vec<&str> = screen.lines().collect();

    assert_eq!(lines[0], "Total Mines: 25");
    assert_eq!(lines[1], "Flags Remaining: 25");
    assert_eq!(lines[2], "WASD to Select | Space to select | F to flag");
    assert_eq!(lines.len(), 3 + 15);

    assert_eq!(lines[3], format!("> {}", "- ".repeat(14)));
    for row in &lines[4..] {
        assert_eq!(*row, "- ".repeat(15));
    }
    assert!(screen.ends_with("- \n"));
}

#[test]
fn test_revealed_cells_show_counts_and_blanks() {
    // Row: [ ][ ][1][mine]
    let board = Board::with_mines(4, 1, &[Position::new(3, 0)]).unwrap();
    let mut game = Minesweeper::with_board(board, 1).unwrap();
    game.handle_input(Command::MoveRight);
    game.handle_input(Command::Activate);

    let screen = game.render();
    assert_eq!(screen.lines().nth(3), Some("  > 1 - "));
    assert!(screen.ends_with("  > 1 - \n\nYou Win! Press R to Restart."));
}

#[test]
fn test_game_over_banner_and_mines() {
    // Each revealed mine shows the mines in its 3x3 block, itself included.
    let mines = [Position::new(0, 0), Position::new(2, 0), Position::new(3, 0)];
    let board = Board::with_mines(4, 1, &mines).unwrap();
    let mut game = Minesweeper::with_board(board, 1).unwrap();
    game.handle_input(Command::Activate);
    // Ignored once the game is lost.
    game.handle_input(Command::MoveRight);

    let screen = game.render();
    assert_eq!(screen.lines().nth(3), Some("> - 2 2 "));
    assert!(screen.ends_with("\n\nGame Over! Press R to Restart."));
}

#[test]
fn test_flags_remaining_counts_flags() {
    let mut game = Minesweeper::new(BoardConfig::default(), 2).unwrap();
    game.start_game();
    game.render();
    game.handle_input(Command::MoveDown);
    game.handle_input(Command::ToggleFlag);
    game.handle_input(Command::MoveRight);
    game.handle_input(Command::ToggleFlag);

    let screen = game.render();
    assert!(screen.contains("\nFlags Remaining: 23\n"));
    assert_eq!(screen.lines().nth(4).unwrap().get(..4), Some("F > "));
}
