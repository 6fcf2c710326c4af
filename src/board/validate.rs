//! Boundary checks for caller-supplied boards.
//!
//! The engines assume well-formed input and only check it in debug builds.
//! Callers that accept boards from outside (user input, files) should run
//! these first.

/// Checks that every row index lies in `[0, N)`, where `N = board.len()`.
///
/// # Examples
///
/// ```
/// use u_nqueens::board::validate_assignment;
///
/// assert!(validate_assignment(&[0, 0, 3, 1]).is_ok());
/// assert!(validate_assignment(&[0, 4, 1, 2]).is_err());
/// ```
pub fn validate_assignment(board: &[usize]) -> Result<(), String> {
    let n = board.len();
    match board.iter().position(|&row| row >= n) {
        Some(col) => Err(format!(
            "row {} in column {col} is out of range for a board of size {n}",
            board[col]
        )),
        None => Ok(()),
    }
}

/// Checks that the board is a permutation of `0..N`.
///
/// Required by hill climbing, whose swap neighborhood only preserves the
/// one-queen-per-row property if the start already has it.
pub fn validate_permutation(board: &[usize]) -> Result<(), String> {
    validate_assignment(board)?;

    let mut seen = vec![false; board.len()];
    for (col, &row) in board.iter().enumerate() {
        if seen[row] {
            return Err(format!("row {row} is used more than once (column {col})"));
        }
        seen[row] = true;
    }
    Ok(())
}
