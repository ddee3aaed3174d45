//! Image files and the preview handles that stand in for them.
//!
//! The feed never holds image bytes. Selecting a file acquires a
//! [`PreviewRef`] from an [`ImageResolver`]; renderers resolve the handle
//! back to the file when they need to show something for it. Handles stay
//! live until released, so the owner of a handle must release it once
//! nothing references it any more.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

const PREVIEW_SCHEME: &str = "preview://";

#[derive(Debug, Error)]
pub enum ImageFileError {
    #[error("ファイルパスが入力されていません")]
    Empty,

    #[error("ファイルが見つかりません: {path}")]
    NotFound { path: PathBuf },

    #[error("ファイルではありません: {path}")]
    NotAFile { path: PathBuf },

    #[error("ファイルを読み込めません: {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file the user picked. Any file type is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    path: PathBuf,
    size_bytes: u64,
}

impl ImageFile {
    /// Open a file from user input.
    ///
    /// Surrounding whitespace and one pair of matching quotes are stripped
    /// (terminals quote paths dropped onto them) and a leading `~/` expands
    /// to the home directory.
    pub fn open(input: &str) -> Result<Self, ImageFileError> {
        let normalized = normalize_path_input(input);
        if normalized.is_empty() {
            return Err(ImageFileError::Empty);
        }
        let path = expand_home(normalized);
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ImageFileError::NotFound { path });
            }
            Err(source) => return Err(ImageFileError::Unreadable { path, source }),
        };
        if !metadata.is_file() {
            return Err(ImageFileError::NotAFile { path });
        }
        Ok(Self {
            path,
            size_bytes: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

fn normalize_path_input(input: &str) -> &str {
    let trimmed = input.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].trim();
        }
    }
    trimmed
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Renderable reference to a selected image (`preview://<uuid>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewRef(String);

impl PreviewRef {
    fn fresh() -> Self {
        Self(format!("{}{}", PREVIEW_SCHEME, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns picked files into preview handles and back.
pub trait ImageResolver: Send {
    /// Acquire a new handle for `file`. Every call yields a distinct handle.
    fn acquire(&mut self, file: &ImageFile) -> PreviewRef;

    /// Release a handle. Returns false if it was not live.
    fn release(&mut self, preview: &PreviewRef) -> bool;

    fn resolve(&self, preview: &PreviewRef) -> Option<&ImageFile>;

    /// Number of handles acquired and not yet released.
    fn live_handles(&self) -> usize;
}

/// In-process resolver backed by a map of live handles.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: HashMap<PreviewRef, ImageFile>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageResolver for PreviewRegistry {
    fn acquire(&mut self, file: &ImageFile) -> PreviewRef {
        let preview = PreviewRef::fresh();
        self.live.insert(preview.clone(), file.clone());
        preview
    }

    fn release(&mut self, preview: &PreviewRef) -> bool {
        self.live.remove(preview).is_some()
    }

    fn resolve(&self, preview: &PreviewRef) -> Option<&ImageFile> {
        self.live.get(preview)
    }

    fn live_handles(&self) -> usize {
        self.live.len()
    }
}
