// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input and output files.
//!
//! Reads the benchmark report and owns the output directory. Every output is written to a
//! temporary sibling first and renamed over the target, so a failed render never leaves a
//! truncated image behind.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::render::RenderError;

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Render {
        path: PathBuf,
        source: Box<RenderError>,
    },
    InvalidFileName {
        value: String,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::Render { path, source } => write!(f, "cannot render {path:?}: {source}"),
            Self::InvalidFileName { value } => {
                write!(f, "invalid output file name {value:?} (expected a single path segment)")
            }
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Render { source, .. } => Some(source),
            Self::InvalidFileName { .. } | Self::SymlinkRefused { .. } => None,
        }
    }
}

pub fn load_report_text(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Directory that receives the rendered charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFolder {
    dir: PathBuf,
}

impl OutputFolder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })
    }

    pub fn image_path(&self, file_name: &str) -> Result<PathBuf, StoreError> {
        validate_file_name(file_name)?;
        Ok(self.dir.join(file_name))
    }

    /// Lets `draw` render into a temporary file, then moves it to `<dir>/<file_name>`.
    pub fn write_image(
        &self,
        file_name: &str,
        draw: impl FnOnce(&Path) -> Result<(), RenderError>,
    ) -> Result<PathBuf, StoreError> {
        let target = self.image_path(file_name)?;
        self.ensure_dir()?;
        write_atomic(&target, |tmp| {
            draw(tmp).map_err(|source| StoreError::Render {
                path: target.clone(),
                source: Box::new(source),
            })
        })?;
        Ok(target)
    }
}

/// Writes `value` as pretty-printed JSON with a trailing newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut contents = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    contents.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    write_atomic(path, |tmp| {
        fs::write(tmp, contents.as_bytes()).map_err(|source| StoreError::Io {
            path: tmp.to_path_buf(),
            source,
        })
    })
}

fn validate_file_name(file_name: &str) -> Result<(), StoreError> {
    let invalid = || StoreError::InvalidFileName {
        value: file_name.to_owned(),
    };

    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

fn temp_sibling(path: &Path) -> Result<PathBuf, StoreError> {
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    // Keep the target name last so the extension still selects the image encoder.
    Ok(parent.join(format!(
        ".bitpart-plots.tmp.{}.{nanos}.{}",
        std::process::id(),
        file_name.to_string_lossy()
    )))
}

fn write_atomic(
    path: &Path,
    write: impl FnOnce(&Path) -> Result<(), StoreError>,
) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let tmp_path = temp_sibling(path)?;
    if let Err(err) = write(&tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    rename_overwrite(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}
