//! File-level seal/open operations
//!
//! This module provides the high-level operations behind the CLI: sealing a
//! plaintext file into a JSON submission payload and opening a payload back
//! into plaintext. The payload file is exactly the JSON body a storage
//! endpoint would receive.

use crate::error::{ErrorCategory, ErrorKind, Result, StashError};
use crate::password::PasswordReader;
use crate::stash::{self, Submission};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Seal a content file into a submission payload
///
/// Reads text from `input_path`, obtains an optional password from
/// `password_reader` (empty means no protection), and writes the JSON
/// payload to `output_path`.
///
/// The output file is created with mode 0o600 (read/write for owner only) on Unix systems.
pub fn seal_file(
    input_path: &Path,
    output_path: &Path,
    password_reader: &mut dyn PasswordReader,
) -> Result<()> {
    let content = read_text(input_path)?;
    let password = password_reader.read_password()?;
    let submission = stash::seal_submission(&content, &password)
        .map_err(|e| e.with_context("failed to seal content"))?;
    let payload = serde_json::to_string(&submission).map_err(|e| {
        StashError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::PayloadEncoding,
            "failed to serialize submission payload",
            e,
        )
    })?;
    write_file_secure(output_path, payload.as_bytes())
        .map_err(|e| e.with_context(format!("failed to write to {}", output_path.display())))?;

    Ok(())
}

/// Open a submission payload file into plaintext
///
/// Reads the JSON payload from `input_path` and writes the content to
/// `output_path`. The password reader is only consulted when the payload is
/// protected; an unprotected payload never touches the crypto path.
///
/// The output file is created with mode 0o600 (read/write for owner only) on Unix systems.
pub fn open_file(
    input_path: &Path,
    output_path: &Path,
    password_reader: &mut dyn PasswordReader,
) -> Result<()> {
    let payload = read_text(input_path)?;
    let submission: Submission = serde_json::from_str(&payload).map_err(|e| {
        StashError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::PayloadEncoding,
            "input is not a valid submission payload",
            e,
        )
    })?;

    let content = if submission.protected {
        let password = password_reader.read_password()?;
        stash::open_record(&submission.content, true, &password)
            .map_err(|e| e.with_context("failed to open protected content"))?
    } else {
        submission.content
    };

    write_file_secure(output_path, content.as_bytes())
        .map_err(|e| e.with_context(format!("failed to write to {}", output_path.display())))?;
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        StashError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::Io,
            "input file is not valid UTF-8",
            e,
        )
    })
}

/// Write file with secure permissions (0o600 on Unix)
fn write_file_secure(path: &Path, contents: &[u8]) -> Result<()> {
    #[cfg(unix)]
    {
        use std::fs::OpenOptions;
        use std::os::unix::fs::OpenOptionsExt;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
            .map_err(|e| {
                StashError::with_kind_and_source(
                    ErrorCategory::User,
                    ErrorKind::Io,
                    format!("failed to open {}", path.display()),
                    e,
                )
            })?;

        file.write_all(contents).map_err(|e| {
            StashError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to write {}", path.display()),
                e,
            )
        })?;
        Ok(())
    }

    #[cfg(not(unix))]
    {
        fs::write(path, contents).map_err(|e| {
            StashError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::Io,
                format!("failed to write {}", path.display()),
                e,
            )
        })?;
        Ok(())
    }
}

fn read_error(path: &Path, err: io::Error) -> StashError {
    let category = if err.kind() == io::ErrorKind::NotFound {
        ErrorCategory::User
    } else {
        ErrorCategory::Internal
    };
    StashError::with_kind_and_source(
        category,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        err,
    )
}
