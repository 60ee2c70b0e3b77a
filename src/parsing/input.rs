use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utils::validation::{check_input_size, MAX_INPUT_BYTES};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    TooLarge(String),

    #[error("Input is not valid UTF-8")]
    InvalidEncoding,
}

/// Where the ciphertext comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Ciphertext given directly
    Text(String),
    /// Read all of standard input
    Stdin,
    /// Read a file
    File(PathBuf),
    /// Ask for one line interactively
    Prompt,
}

impl InputSource {
    /// Pick a source from the optional positional argument and `--text`.
    ///
    /// `-` selects stdin; no argument at all selects the interactive prompt.
    #[must_use]
    pub fn from_args(path: Option<&Path>, text: Option<&str>) -> Self {
        match (text, path) {
            (Some(text), _) => Self::Text(text.to_string()),
            (None, Some(path)) if path.as_os_str() == "-" => Self::Stdin,
            (None, Some(path)) => Self::File(path.to_path_buf()),
            (None, None) => Self::Prompt,
        }
    }
}

/// Prompt shown when reading ciphertext interactively
pub const PROMPT: &str = "Enter the ciphertext: ";

/// Read the ciphertext from `source`
///
/// # Errors
///
/// Returns `InputError::Io` if reading fails, `InputError::TooLarge` if the
/// input exceeds the size limit, or `InputError::InvalidEncoding` for
/// non-UTF-8 data.
pub fn read_input(source: &InputSource) -> Result<String, InputError> {
    match source {
        InputSource::Text(text) => {
            ensure_size(text.len())?;
            Ok(text.clone())
        }
        InputSource::Stdin => read_limited(std::io::stdin().lock()),
        InputSource::File(path) => {
            let size = std::fs::metadata(path)?.len();
            ensure_size(usize::try_from(size).unwrap_or(usize::MAX))?;
            read_limited(std::fs::File::open(path)?)
        }
        InputSource::Prompt => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            prompt_line(&mut stdin.lock(), &mut stdout.lock(), PROMPT)
        }
    }
}

/// Write `prompt` and read a single line, without its line terminator
///
/// # Errors
///
/// Returns `InputError::Io` if writing the prompt or reading the line fails,
/// `InputError::TooLarge` if the line exceeds the size limit, or
/// `InputError::InvalidEncoding` for non-UTF-8 data.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String, InputError> {
    write!(writer, "{prompt}")?;
    writer.flush()?;
    read_line_limited(reader, MAX_INPUT_BYTES)
}

/// Read one line of at most `limit` bytes, without its line terminator
fn read_line_limited<R: BufRead>(reader: &mut R, limit: usize) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader
        .by_ref()
        .take(limit as u64 + 1)
        .read_until(b'\n', &mut bytes)?;

    let content = bytes.strip_suffix(b"\n").unwrap_or(&bytes);
    let content = content.strip_suffix(b"\r").unwrap_or(content);
    if content.len() > limit {
        return Err(InputError::TooLarge(format!(
            "Input too large: line exceeds maximum of {limit} bytes"
        )));
    }

    String::from_utf8(content.to_vec()).map_err(|_| InputError::InvalidEncoding)
}

fn read_limited<R: Read>(reader: R) -> Result<String, InputError> {
    let limit = MAX_INPUT_BYTES as u64 + 1;
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;
    ensure_size(bytes.len())?;
    String::from_utf8(bytes).map_err(|_| InputError::InvalidEncoding)
}

fn ensure_size(len: usize) -> Result<(), InputError> {
    match check_input_size(len) {
        Some(message) => Err(InputError::TooLarge(message)),
        None => Ok(()),
    }
}
