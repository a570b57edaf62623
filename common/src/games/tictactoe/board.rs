use std::fmt;

use super::error::GameError;
use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes(codes: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (row, code_row) in codes.iter().enumerate() {
            for (col, &code) in code_row.iter().enumerate() {
                board.cells[row][col] = Mark::from_code(code)?;
            }
        }
        Some(board)
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn mark(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        if !pos.is_on_board() {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if mark == Mark::Empty {
            return Err(GameError::EmptyMark);
        }
        if !self.is_available(pos.row, pos.col) {
            return Err(GameError::InvalidCell(pos));
        }
        self.cells[pos.row][pos.col] = mark;
        Ok(())
    }

    pub fn is_available(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn occupied_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.count(Mark::Empty)
    }

    pub(crate) fn place(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Mark::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                let symbol = match cell {
                    Mark::Empty => '.',
                    Mark::Human => 'O',
                    Mark::Ai => 'X',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert!(board.is_available(row, col));
            }
        }
        assert!(!board.is_full());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_mark_sets_cell() {
        let mut board = Board::new();
        board.mark(Position::new(1, 2), Mark::Human).unwrap();
        assert_eq!(board.get(1, 2), Some(Mark::Human));
        assert!(!board.is_available(1, 2));
    }

    #[test]
    fn test_mark_occupied_cell_is_rejected() {
        let mut board = Board::new();
        board.mark(Position::new(0, 0), Mark::Human).unwrap();
        let result = board.mark(Position::new(0, 0), Mark::Ai);
        assert_eq!(result, Err(GameError::InvalidCell(Position::new(0, 0))));
        assert_eq!(board.get(0, 0), Some(Mark::Human));
    }

    #[test]
    fn test_mark_out_of_bounds_is_rejected() {
        let mut board = Board::new();
        let result = board.mark(Position::new(3, 0), Mark::Human);
        assert_eq!(result, Err(GameError::OutOfBounds { row: 3, col: 0 }));
        assert!(!board.is_available(0, 3));
    }

    #[test]
    fn test_mark_empty_is_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.mark(Position::new(0, 0), Mark::Empty),
            Err(GameError::EmptyMark)
        );
    }

    #[test]
    fn test_each_mark_adds_exactly_one_occupied_cell() {
        let mut board = Board::new();
        let mut mark = Mark::Human;
        for (i, pos) in Board::new().available_moves().into_iter().enumerate() {
            assert_eq!(board.occupied_count(), i);
            board.mark(pos, mark).unwrap();
            assert_eq!(board.occupied_count(), i + 1);
            mark = mark.opponent().unwrap();
        }
        assert_eq!(board.occupied_count(), 9);
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board = Board::from_codes([[1, 2, 1], [2, 1, 2], [2, 1, 2]]).unwrap();
        assert!(board.is_full());
        board.reset();
        assert_eq!(board, Board::new());
        assert!(!board.is_full());
        board.reset();
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board = Board::from_codes([[1, 0, 0], [0, 2, 0], [0, 0, 1]]).unwrap();
        let moves = board.available_moves();
        assert_eq!(
            moves,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 0),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_from_codes_rejects_unknown_code() {
        assert!(Board::from_codes([[0, 0, 0], [0, 3, 0], [0, 0, 0]]).is_none());
    }

    #[test]
    fn test_display() {
        let board = Board::from_codes([[1, 2, 0], [0, 1, 0], [0, 0, 2]]).unwrap();
        assert_eq!(board.to_string(), "OX./.O./..X");
    }
}
