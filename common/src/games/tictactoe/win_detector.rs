use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Outcome, Position, WinningLine};

type Line = [(usize, usize); BOARD_SIZE];

const LINES: [Line; 8] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_owned_by(board: &Board, line: &Line, mark: Mark) -> bool {
    line.iter()
        .all(|&(row, col)| board.get(row, col) == Some(mark))
}

pub fn check_win(mark: Mark, board: &Board) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES.iter().any(|line| line_owned_by(board, line, mark))
}

pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for mark in [Mark::Human, Mark::Ai] {
        if let Some(line) = LINES.iter().find(|line| line_owned_by(board, line, mark)) {
            let (start_row, start_col) = line[0];
            let (end_row, end_col) = line[BOARD_SIZE - 1];
            return Some(WinningLine::new(
                mark,
                Position::new(start_row, start_col),
                Position::new(end_row, end_col),
            ));
        }
    }
    None
}

pub fn outcome(board: &Board) -> Option<Outcome> {
    if check_win(Mark::Human, board) {
        Some(Outcome::HumanWin)
    } else if check_win(Mark::Ai, board) {
        Some(Outcome::AiWin)
    } else if is_board_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(codes: [[u8; 3]; 3]) -> Board {
        Board::from_codes(codes).unwrap()
    }

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for mark in [Mark::Human, Mark::Ai] {
            for line in &LINES {
                let mut b = Board::new();
                for &(row, col) in line {
                    b.place(row, col, mark);
                }
                assert!(check_win(mark, &b), "line {:?} not detected", line);
                assert!(!check_win(mark.opponent().unwrap(), &b));
                let winning = check_win_with_line(&b).unwrap();
                assert_eq!(winning.mark, mark);
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let b = board([[1, 1, 0], [2, 2, 0], [0, 0, 0]]);
        assert!(!check_win(Mark::Human, &b));
        assert!(!check_win(Mark::Ai, &b));
        assert_eq!(outcome(&b), None);
    }

    #[test]
    fn test_human_completes_top_row() {
        let mut b = board([[1, 1, 0], [2, 2, 0], [0, 0, 0]]);
        b.mark(Position::new(0, 2), Mark::Human).unwrap();
        assert!(check_win(Mark::Human, &b));
        assert_eq!(outcome(&b), Some(Outcome::HumanWin));
        let line = check_win_with_line(&b).unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let b = board([[1, 2, 1], [0, 0, 0], [0, 0, 0]]);
        assert!(!check_win(Mark::Human, &b));
        assert!(!check_win(Mark::Ai, &b));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert!(!check_win(Mark::Empty, &Board::new()));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board([[1, 2, 1], [1, 2, 2], [2, 1, 1]]);
        assert!(is_board_full(&b));
        assert!(!check_win(Mark::Human, &b));
        assert!(!check_win(Mark::Ai, &b));
        assert_eq!(outcome(&b), Some(Outcome::Draw));
        assert!(check_win_with_line(&b).is_none());
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let b = board([[2, 2, 2], [1, 1, 2], [2, 1, 1]]);
        assert!(is_board_full(&b));
        assert_eq!(outcome(&b), Some(Outcome::AiWin));
    }

    #[test]
    fn test_full_detection_ignores_win_state() {
        let b = board([[1, 1, 1], [2, 2, 0], [0, 0, 0]]);
        assert!(!is_board_full(&b));
        assert!(check_win(Mark::Human, &b));
    }

    #[test]
    fn test_check_win_matches_brute_force_over_all_boards() {
        // Every assignment of the 3 marks to 9 cells.
        for index in 0..3u32.pow(9) {
            let mut codes = [[0u8; 3]; 3];
            let mut rest = index;
            for cell in 0..9 {
                codes[cell / 3][cell % 3] = (rest % 3) as u8;
                rest /= 3;
            }
            let b = board(codes);
            for mark in [Mark::Human, Mark::Ai] {
                let code = mark.code();
                let rows = (0..3).any(|r| (0..3).all(|c| codes[r][c] == code));
                let cols = (0..3).any(|c| (0..3).all(|r| codes[r][c] == code));
                let diag = (0..3).all(|i| codes[i][i] == code);
                let anti = (0..3).all(|i| codes[i][2 - i] == code);
                assert_eq!(check_win(mark, &b), rows || cols || diag || anti);
            }
            let has_empty = codes.iter().flatten().any(|&c| c == 0);
            assert_eq!(is_board_full(&b), !has_empty);
        }
    }
}
