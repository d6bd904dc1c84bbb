//! Loading the text a pattern runs against.
//!
//! Files are memory mapped; stdin and inline text are read into memory.

use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is required: use FILE, `-` for stdin, or -t/--text")]
    Missing,

    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Input bytes, either mapped from a file or owned.
pub enum Input {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Input::Mapped(map) => map,
            Input::Owned(bytes) => bytes,
        }
    }
}

impl AsRef<[u8]> for Input {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

/// Inline text wins over a path; `-` reads stdin.
pub fn load_input(path: Option<&Path>, text: Option<&str>) -> Result<Input, InputError> {
    if let Some(text) = text {
        return Ok(Input::Owned(text.as_bytes().to_vec()));
    }

    let Some(path) = path else {
        return Err(InputError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(InputError::Stdin)?;
        return Ok(Input::Owned(buf));
    }

    map_file(path).map_err(|source| InputError::Read {
        path: path.to_owned(),
        source,
    })
}

fn map_file(path: &Path) -> io::Result<Input> {
    let file = File::open(path)?;
    // Zero-length mappings are rejected on some platforms.
    if file.metadata()?.len() == 0 {
        return Ok(Input::Owned(Vec::new()));
    }
    // SAFETY: the map is read-only and lives no longer than one command.
    // Truncating the file underneath it is outside what the CLI guards.
    let map = unsafe { Mmap::map(&file)? };
    Ok(Input::Mapped(map))
}

pub fn load_input_or_exit(path: Option<&Path>, text: Option<&str>) -> Input {
    load_input(path, text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
