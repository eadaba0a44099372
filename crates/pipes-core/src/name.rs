//! Project names and pipenv environment names.
//!
//! pipenv names each environment folder `<project>-<hash>`, where `<hash>` is
//! eight characters of URL-safe base64 derived from the project's `Pipfile`
//! path. These helpers go in both directions: folder name to project name, and
//! project directory to folder name.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use sha2::{Digest, Sha256};

/// Length of the hash suffix pipenv appends to environment folder names.
pub const HASH_LEN: usize = 8;

/// Number of digest bytes kept before encoding. Six bytes encode to exactly
/// [`HASH_LEN`] base64 characters with no padding.
const HASH_BYTES: usize = 6;

/// pipenv truncates the sanitized project name to this many characters.
const MAX_NAME_LEN: usize = 42;

fn is_hash_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Derive the project name from an environment folder name.
///
/// Returns `None` unless the name ends in `-` followed by exactly
/// [`HASH_LEN`] URL-safe base64 characters with a non-empty project part.
pub fn get_project_name(folder_name: &str) -> Option<&str> {
    let split = folder_name.len().checked_sub(HASH_LEN + 1)?;
    let project = folder_name.get(..split)?;
    let suffix = folder_name.get(split..)?.strip_prefix('-')?;

    match (project.is_empty(), suffix.bytes().all(is_hash_byte)) {
        (false, true) => Some(project),
        _ => None,
    }
}

/// Compute pipenv's 8-character hash for a project directory.
///
/// The hash covers the string form of `<project_dir>/Pipfile`, joined
/// lexically. Callers wanting a stable key should canonicalize `project_dir`
/// first.
pub fn resolve_envname_hash(project_dir: &Path) -> String {
    let pipfile = project_dir.join("Pipfile");
    let digest = Sha256::digest(pipfile.to_string_lossy().as_bytes());
    let mut encoded = URL_SAFE.encode(digest.get(..HASH_BYTES).unwrap_or_default());
    encoded.truncate(HASH_LEN);
    encoded
}

/// Compute the full environment folder name pipenv would create for a
/// project directory.
pub fn resolve_envname(project_dir: &Path) -> String {
    let base = project_dir
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let sanitized: String = base
        .chars()
        .map(|c| match c {
            ' ' | '&' | '$' | '`' | '!' | '*' | '@' | '"' | '(' | ')' | '[' | ']' | '\\'
            | '\r' | '\n' | '\t' => '_',
            c => c,
        })
        .take(MAX_NAME_LEN)
        .collect();

    format!("{sanitized}-{}", resolve_envname_hash(project_dir))
}
