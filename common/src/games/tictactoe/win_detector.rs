use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Outcome, Position, WinningLine};

const LINE_COUNT: usize = BOARD_SIZE * 2 + 2;

/// Rows first, then columns, then the main and anti diagonal.
fn lines() -> [[Position; BOARD_SIZE]; LINE_COUNT] {
    let mut lines = [[Position::new(0, 0); BOARD_SIZE]; LINE_COUNT];
    for i in 0..BOARD_SIZE {
        for j in 0..BOARD_SIZE {
            lines[i][j] = Position::new(i, j);
            lines[BOARD_SIZE + i][j] = Position::new(j, i);
        }
        lines[BOARD_SIZE * 2][i] = Position::new(i, i);
        lines[BOARD_SIZE * 2 + 1][i] = Position::new(i, BOARD_SIZE - 1 - i);
    }
    lines
}

fn complete_line_mark(board: &Board, line: &[Position; BOARD_SIZE]) -> Option<Mark> {
    let first = board.get(line[0])?;
    if first == Mark::Empty {
        return None;
    }
    if line.iter().all(|&pos| board.get(pos) == Some(first)) {
        Some(first)
    } else {
        None
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    lines().iter().find_map(|line| {
        complete_line_mark(board, line)
            .map(|mark| WinningLine::new(mark, line[0], line[BOARD_SIZE - 1]))
    })
}

/// Classifies a board. Legality of the mark counts is not checked.
pub fn evaluate(board: &Board) -> Outcome {
    match check_win(board) {
        Some(Mark::X) => Outcome::XWins,
        Some(Mark::O) => Outcome::OWins,
        _ if board.is_full() => Outcome::Draw,
        _ => Outcome::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_top_row_of_x_wins() {
        let board = Board::from_rows([[X, X, X], [E, E, E], [E, E, E]]);
        assert_eq!(evaluate(&board), Outcome::XWins);

        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(evaluate(&board), Outcome::XWins);
    }

    #[test]
    fn test_main_diagonal_of_o_wins() {
        let board = Board::from_rows([[O, E, E], [E, O, E], [E, E, O]]);
        assert_eq!(evaluate(&board), Outcome::OWins);

        let board = Board::from_rows([[O, X, E], [X, O, E], [X, E, O]]);
        assert_eq!(evaluate(&board), Outcome::OWins);
    }

    #[test]
    fn test_column_and_anti_diagonal() {
        let board = Board::from_rows([[E, O, X], [E, O, X], [E, O, E]]);
        assert_eq!(evaluate(&board), Outcome::OWins);

        let board = Board::from_rows([[O, O, X], [E, X, E], [X, E, E]]);
        assert_eq!(evaluate(&board), Outcome::XWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, X]]);
        assert_eq!(evaluate(&board), Outcome::XWins);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]);
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_winning_line_endpoints() {
        let board = Board::from_rows([[E, E, O], [X, O, X], [O, X, E]]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, O);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));

        let board = Board::from_rows([[O, X, E], [O, X, E], [E, X, E]]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, X);
        assert_eq!(line.start, Position::new(0, 1));
        assert_eq!(line.end, Position::new(2, 1));
    }

    #[test]
    fn test_evaluate_does_not_change_board() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let snapshot = board;
        assert_eq!(evaluate(&board), evaluate(&board));
        assert_eq!(board, snapshot);
    }
}
