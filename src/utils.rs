//! Utility helpers for reading boards from text.
use thiserror::Error;

use crate::engine::{Board, BoardError, BOARD_CELLS};

/// Errors raised while parsing a board from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The input did not contain exactly nine cells.
    #[error("expected 9 cells, found {0}")]
    WrongCellCount(usize),
    /// A token was not a number.
    #[error("unrecognized cell symbol '{0}'")]
    BadSymbol(String),
    /// The cells were numeric but not a permutation of 0-8.
    #[error(transparent)]
    Invalid(#[from] BoardError),
}

/// Parses a board from a line of text.
///
/// Two layouts are accepted, both row-major with `0` for the blank:
/// - nine contiguous digits: `"123456780"`;
/// - nine numbers separated by whitespace and/or commas:
///   `"1 2 3, 4 5 6, 7 8 0"`.
///
/// # Returns
/// * `Ok(Board)` when the text names a permutation of `0..=8`.
/// * `Err(ParseBoardError)` describing the first problem found.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("123456780").unwrap();
/// assert!(board.is_goal());
/// assert_eq!(board_from_str("1 2 3 4 5 6 7 8 0"), Ok(board));
/// assert!(board_from_str("12345678").is_err());
/// assert!(board_from_str("112345678").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, ParseBoardError> {
    let trimmed = s.trim();
    let is_separator = |c: char| c.is_whitespace() || c == ',';

    let tokens: Vec<String> = if trimmed.contains(is_separator) {
        trimmed
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect()
    } else {
        trimmed.chars().map(String::from).collect()
    };

    if tokens.len() != BOARD_CELLS {
        return Err(ParseBoardError::WrongCellCount(tokens.len()));
    }

    let mut cells = [0u8; BOARD_CELLS];
    for (i, token) in tokens.iter().enumerate() {
        cells[i] = token
            .parse::<u8>()
            .map_err(|_| ParseBoardError::BadSymbol(token.clone()))?;
    }

    // Range and duplicate checks live with the Board invariant itself.
    Ok(Board::from_cells(cells)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contiguous_digits() {
        let board = board_from_str("123456780").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_parse_separated_numbers() {
        let spaced = board_from_str("1 2 3 4 5 6 7 0 8").unwrap();
        assert_eq!(spaced.blank_index(), 7);

        let commas = board_from_str("1,2,3,4,5,6,7,0,8").unwrap();
        assert_eq!(spaced, commas);

        let mixed = board_from_str("  1, 2 3\t4 5 6, 7 0 8 ").unwrap();
        assert_eq!(spaced, mixed);
    }

    #[test]
    fn test_parse_wrong_cell_count() {
        assert_eq!(
            board_from_str("12345678"),
            Err(ParseBoardError::WrongCellCount(8))
        );
        assert_eq!(
            board_from_str("1 2 3"),
            Err(ParseBoardError::WrongCellCount(3))
        );
    }

    #[test]
    fn test_parse_bad_symbol() {
        assert_eq!(
            board_from_str("12345678x"),
            Err(ParseBoardError::BadSymbol("x".to_owned()))
        );
    }

    #[test]
    fn test_parse_rejects_non_permutations() {
        assert_eq!(
            board_from_str("112345678"),
            Err(ParseBoardError::Invalid(BoardError::DuplicateTile(1)))
        );
        assert_eq!(
            board_from_str("1 2 3 4 5 6 7 8 9"),
            Err(ParseBoardError::Invalid(BoardError::ValueOutOfRange(9)))
        );
    }
}
