use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Reasons a `.ls8` program file failed to load.
#[derive(Debug)]
pub enum LoadError {
    /// The path did not end in `.ls8`.
    BadExtension,
    /// The file could not be opened or read.
    Io(io::Error),
    /// A non-blank, non-comment line was not an up-to-8-digit binary literal.
    Parse { line: usize, text: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::BadExtension => f.write_str("program file must have a .ls8 extension"),
            LoadError::Io(err) => write!(f, "could not read program file: {}", err),
            LoadError::Parse { line, text } => {
                write!(f, "line {}: not a binary literal: {:?}", line, text)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}

/// Reads a `.ls8` program from disk, parses it, and appends the implicit
/// `HLT` safety terminator.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    if path.extension().and_then(|ext| ext.to_str()) != Some("ls8") {
        return Err(LoadError::BadExtension);
    }

    let source = fs::read_to_string(path)?;
    parse_source(&source)
}

/// Strips comments and whitespace from each line, parses the remainder as a
/// binary literal, and appends the implicit `HLT` terminator.
///
/// Each line may carry a `#` comment running to end-of-line; everything
/// from the first `#` onward is discarded before the remaining text is
/// trimmed and parsed. The remainder must be at most 8 binary digits;
/// anything longer is a parse error regardless of its numeric value.
pub fn parse_source(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let stripped = match raw_line.find('#') {
            Some(hash) => &raw_line[..hash],
            None => raw_line,
        };
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.len() > 8 {
            return Err(LoadError::Parse {
                line: index + 1,
                text: trimmed.to_string(),
            });
        }

        let byte = u8::from_str_radix(trimmed, 2).map_err(|_| LoadError::Parse {
            line: index + 1,
            text: trimmed.to_string(),
        })?;
        program.push(byte);
    }

    program.push(ls8::OpCode::Hlt as u8);
    Ok(program)
}
