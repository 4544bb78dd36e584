// SPDX-License-Identifier: MPL-2.0
//! Translation-key maintenance for JSON locale files.
//!
//! Every locale file must carry the `voice.actions.*` keys the voice screen
//! shows in its toasts. [`patch_directory`] walks a directory of `*.json`
//! catalogs, inserts the missing keys with their English text and rewrites
//! only the files that changed. A file that cannot be read, parsed or
//! patched is logged and counted; the rest of the batch still runs.

use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Keys required under `voice.actions`, with the text inserted when absent.
pub const REQUIRED_ACTION_KEYS: [(&str, &str); 3] = [
    ("success", "Voice updated successfully"),
    ("voiceSelected", "Voice selected"),
    ("errorSelectingVoice", "Error selecting voice"),
];

const VOICE_KEY: &str = "voice";
const ACTIONS_KEY: &str = "actions";
const LOCALE_EXTENSION: &str = "json";

/// Where in the document a non-object value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    RootNotObject,
    VoiceNotObject,
    ActionsNotObject,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotObject => write!(f, "document root is not an object"),
            Self::VoiceNotObject => write!(f, "\"voice\" is not an object"),
            Self::ActionsNotObject => write!(f, "\"voice.actions\" is not an object"),
        }
    }
}

/// Errors raised while patching a locale file or listing its directory.
#[derive(Debug)]
pub enum PatchError {
    /// Reading, writing or listing failed.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The JSON is valid but cannot hold `voice.actions`.
    Shape { path: PathBuf, error: ShapeError },
}

impl PatchError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Shape { path, .. } => path,
        }
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "invalid JSON in {}: {source}", path.display())
            }
            Self::Shape { path, error } => write!(f, "unexpected layout in {}: {error}", path.display()),
        }
    }
}

impl std::error::Error for PatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Shape { .. } => None,
        }
    }
}

/// Result of patching one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// All keys were already present; the file was not touched.
    Unchanged,
    /// Keys were inserted (and written unless running dry).
    Updated { added: Vec<&'static str> },
}

/// Totals for a directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub scanned: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub dry_run: bool,
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "would update" } else { "updated" };
        write!(
            f,
            "{} file(s) scanned, {} {verb}, {} unchanged, {} failed",
            self.scanned, self.updated, self.unchanged, self.failed
        )
    }
}

/// Inserts missing `voice.actions` keys into a parsed document.
///
/// Existing values are never overwritten. Returns the inserted key names in
/// insertion order.
pub fn ensure_voice_action_keys(document: &mut Value) -> Result<Vec<&'static str>, ShapeError> {
    let root = document.as_object_mut().ok_or(ShapeError::RootNotObject)?;
    let voice = object_entry(root, VOICE_KEY).ok_or(ShapeError::VoiceNotObject)?;
    let actions = object_entry(voice, ACTIONS_KEY).ok_or(ShapeError::ActionsNotObject)?;

    let mut added = Vec::new();
    for (key, default_text) in REQUIRED_ACTION_KEYS {
        if !actions.contains_key(key) {
            actions.insert(key.to_string(), Value::String(default_text.to_string()));
            added.push(key);
        }
    }
    Ok(added)
}

fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    map.entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
}

/// Patches a single locale file.
///
/// The file is rewritten only when keys were added, as 2-space pretty JSON
/// with a trailing newline. With `dry_run` nothing is written.
pub fn patch_file(path: &Path, dry_run: bool) -> Result<FileOutcome, PatchError> {
    let content = fs::read_to_string(path).map_err(|source| PatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut document: Value = serde_json::from_str(&content).map_err(|source| PatchError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let added = ensure_voice_action_keys(&mut document).map_err(|error| PatchError::Shape {
        path: path.to_path_buf(),
        error,
    })?;
    if added.is_empty() {
        return Ok(FileOutcome::Unchanged);
    }

    if !dry_run {
        let mut output = serde_json::to_string_pretty(&document).map_err(|source| PatchError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        output.push('\n');
        write_atomic(path, &output).map_err(|source| PatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(FileOutcome::Updated { added })
}

/// Patches every `*.json` file directly inside `dir`, in sorted order.
///
/// Per-file failures are logged and counted in [`PatchReport::failed`].
///
/// # Errors
///
/// Returns [`PatchError::Io`] if the directory itself cannot be listed.
pub fn patch_directory(dir: &Path, dry_run: bool) -> Result<PatchReport, PatchError> {
    let mut report = PatchReport {
        dry_run,
        ..PatchReport::default()
    };

    for path in locale_files(dir)? {
        report.scanned += 1;
        match patch_file(&path, dry_run) {
            Ok(FileOutcome::Updated { added }) => {
                report.updated += 1;
                tracing::info!(path = %path.display(), ?added, dry_run, "added missing translation keys");
            }
            Ok(FileOutcome::Unchanged) => {
                report.unchanged += 1;
                tracing::debug!(path = %path.display(), "all translation keys present");
            }
            Err(err) => {
                report.failed += 1;
                tracing::error!(path = %err.path().display(), %err, "skipping locale file");
            }
        }
    }

    tracing::info!(dir = %dir.display(), %report, "locale patch finished");
    Ok(report)
}

fn locale_files(dir: &Path) -> Result<Vec<PathBuf>, PatchError> {
    let to_error = |source| PatchError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(to_error)? {
        let path = entry.map_err(to_error)?.path();
        let is_locale = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(LOCALE_EXTENSION));
        if is_locale && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Writes `content` to a sibling temp file, then renames it over `path`.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}
