/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! The board the robot cleans.

use crate::direction::{Direction, Position};
use crate::error::RobotError;

/// Grid of cleaned flags. Dimensions are fixed at creation and a cleaned cell never becomes
/// uncleaned again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

// 'X' for cleaned cells, '.' otherwise, rows separated by newlines.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            s.push_str(&self.row_text(row));
            if row < self.rows - 1 {
                s.push('\n');
            }
        }
        write!(f, "{}", s)
    }
}

impl Board {
    /// Create an all-uncleaned board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, RobotError> {
        if rows == 0 || cols == 0 {
            return Err(RobotError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, position: Position) -> Option<usize> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Whether `position` is on the board.
    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Cleaned flag of a cell, `None` when off the board.
    pub fn is_cleaned(&self, position: Position) -> Option<bool> {
        self.index(position).map(|i| self.cells[i])
    }

    /// OR `cleaned` into the cell at `position`. Cells off the board are skipped. Returns whether
    /// the position was on the board.
    pub fn clean_if(&mut self, position: Position, cleaned: bool) -> bool {
        match self.index(position) {
            Some(i) => {
                self.cells[i] |= cleaned;
                true
            }
            None => false,
        }
    }

    /// Mark a cell cleaned. Same as `clean_if(position, true)`.
    pub fn clean(&mut self, position: Position) -> bool {
        self.clean_if(position, true)
    }

    /// Number of cleaned cells.
    pub fn cleaned_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Positions of all cleaned cells in row-major order.
    pub fn cleaned_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(i, _)| Position::new((i / self.cols) as i64, (i % self.cols) as i64))
            .collect()
    }

    /// One rendered row.
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|&c| if c { 'X' } else { '.' })
            .collect()
    }

    /// All rendered rows, top to bottom.
    pub fn rows_text(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.row_text(row)).collect()
    }

    /// Fewest steps from `from` towards `direction` that land on the board, or `None` if the
    /// ray never crosses it. Zero when `from` is already on the board.
    pub fn entry_distance(&self, from: Position, direction: Direction) -> Option<u64> {
        let (d_row, d_col) = direction.delta();
        let (row_lo, row_hi) = axis_window(from.row, d_row, self.rows)?;
        let (col_lo, col_hi) = axis_window(from.col, d_col, self.cols)?;
        let lo = row_lo.max(col_lo);
        let hi = row_hi.min(col_hi);
        (lo <= hi).then(|| u64::try_from(lo).unwrap_or(u64::MAX))
    }
}

/// Inclusive range of step counts `k >= 0` for which `start + k * delta` lies in `0..size`.
fn axis_window(start: i64, delta: i64, size: usize) -> Option<(i128, i128)> {
    let start = i128::from(start);
    let size = size as i128;
    let (lo, hi) = match delta {
        0 if (0..size).contains(&start) => (0, i128::MAX),
        0 => return None,
        1 => (-start, size - 1 - start),
        _ => (start - size + 1, start),
    };
    let lo = lo.max(0);
    (lo <= hi).then_some((lo, hi))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_board_starts_uncleaned() {
        let board = Board::new(5, 5).expect("new failed");
        assert_eq!(board.cleaned_count(), 0);
        assert_eq!(board.to_string(), ".....\n.....\n.....\n.....\n.....");
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            Board::new(0, 5),
            Err(RobotError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Board::new(5, 0),
            Err(RobotError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_clean_marks_one_cell() {
        let mut board = Board::new(2, 3).expect("new failed");
        assert!(board.clean(Position::new(1, 2)));
        assert_eq!(board.to_string(), "...\n..X");
        assert_eq!(board.cleaned_cells(), vec![Position::new(1, 2)]);
    }

    #[test]
    fn test_clean_off_board_is_skipped() {
        let mut board = Board::new(2, 2).expect("new failed");
        assert!(!board.clean(Position::new(-1, 0)));
        assert!(!board.clean(Position::new(0, 2)));
        assert!(!board.clean(Position::new(2, 0)));
        assert_eq!(board.cleaned_count(), 0);
        assert_eq!(board.is_cleaned(Position::new(5, 5)), None);
    }

    #[test]
    fn test_clean_if_false_never_uncleans() {
        let mut board = Board::new(1, 1).expect("new failed");
        board.clean(Position::new(0, 0));
        board.clean_if(Position::new(0, 0), false);
        assert_eq!(board.is_cleaned(Position::new(0, 0)), Some(true));
    }

    #[test]
    fn test_entry_distance() {
        let board = Board::new(5, 5).expect("new failed");
        assert_eq!(
            board.entry_distance(Position::new(0, 0), Direction::Right),
            Some(0)
        );
        assert_eq!(
            board.entry_distance(Position::new(0, -3), Direction::Right),
            Some(3)
        );
        assert_eq!(
            board.entry_distance(Position::new(0, 7), Direction::Right),
            None
        );
        assert_eq!(
            board.entry_distance(Position::new(0, 7), Direction::Left),
            Some(3)
        );
        assert_eq!(
            board.entry_distance(Position::new(-1, 7), Direction::Left),
            None
        );
        assert_eq!(
            board.entry_distance(Position::new(9, 2), Direction::Up),
            Some(5)
        );
        assert_eq!(
            board.entry_distance(Position::new(i64::MIN, 2), Direction::Down),
            Some(1 << 63)
        );
    }

    proptest! {
        #[test]
        fn test_render_shape(
            rows in 1..12usize,
            cols in 1..12usize,
            cells in prop::collection::vec((0..12i64, 0..12i64), 0..40),
        ) {
            let mut board = Board::new(rows, cols).expect("new failed");
            for (row, col) in cells {
                board.clean(Position::new(row, col));
            }
            let rendered = board.to_string();
            let lines: Vec<&str> = rendered.split('\n').collect();
            prop_assert_eq!(lines.len(), rows);
            for line in lines {
                prop_assert_eq!(line.len(), cols);
                prop_assert!(line.chars().all(|c| c == 'X' || c == '.'));
            }
            prop_assert_eq!(rendered.matches('X').count(), board.cleaned_count());
        }

        #[test]
        fn test_entry_distance_lands_on_board(
            row in -20..20i64,
            col in -20..20i64,
            direction in prop_oneof![
                Just(Direction::Up),
                Just(Direction::Down),
                Just(Direction::Left),
                Just(Direction::Right),
            ],
        ) {
            let board = Board::new(5, 5).expect("new failed");
            let start = Position::new(row, col);
            match board.entry_distance(start, direction) {
                Some(k) => {
                    prop_assert!(board.contains(start.offset(direction, k)));
                    for earlier in 0..k {
                        prop_assert!(!board.contains(start.offset(direction, earlier)));
                    }
                }
                None => {
                    for k in 0..50 {
                        prop_assert!(!board.contains(start.offset(direction, k)));
                    }
                }
            }
        }
    }
}
