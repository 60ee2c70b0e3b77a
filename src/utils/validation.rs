//! Centralized validation helpers.

/// Maximum ciphertext size accepted from a file or stdin (DOS protection)
pub const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Check that an input of `len` bytes is within [`MAX_INPUT_BYTES`].
///
/// Returns an error message if the input is too large, None if it is safe to
/// analyze.
///
/// # Examples
///
/// ```
/// use freq_solver::utils::validation::{check_input_size, MAX_INPUT_BYTES};
///
/// assert!(check_input_size(1024).is_none());
/// assert!(check_input_size(MAX_INPUT_BYTES + 1).is_some());
/// ```
#[must_use]
pub fn check_input_size(len: usize) -> Option<String> {
    if len > MAX_INPUT_BYTES {
        Some(format!(
            "Input too large: {len} bytes exceeds maximum of {MAX_INPUT_BYTES}"
        ))
    } else {
        None
    }
}
