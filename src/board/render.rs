//! Text rendering of a board.

use std::fmt;

/// Marker for a square holding a queen.
pub const QUEEN: &str = "Q ";
/// Marker for an empty square.
pub const EMPTY: &str = ". ";

/// [`Display`](fmt::Display) adapter that draws a board as an `N x N` grid.
///
/// Row `r` is one line; column `c` shows [`QUEEN`] when `board[c] == r`.
/// Lines are separated by `\n` with no trailing newline.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::BoardDisplay;
///
/// let text = BoardDisplay(&[1, 0]).to_string();
/// assert_eq!(text, ". Q \nQ . ");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardDisplay<'a>(pub &'a [usize]);

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.len();
        for row in 0..n {
            if row > 0 {
                f.write_str("\n")?;
            }
            for &queen_row in self.0 {
                f.write_str(if queen_row == row { QUEEN } else { EMPTY })?;
            }
        }
        Ok(())
    }
}

/// Renders a board to a string. See [`BoardDisplay`].
pub fn render(board: &[usize]) -> String {
    BoardDisplay(board).to_string()
}
