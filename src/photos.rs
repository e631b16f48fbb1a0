//! Session-only photo library behind the Photos windows.
//!
//! Uploads are paths handed over by the terminal (bracketed paste or a file
//! dropped onto the window) or given on the command line. Only the file name
//! and the upload date are kept; nothing is read from or written to disk.
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::NaiveDate;

use crate::error::PhotoError;

/// Extensions accepted as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "apng", "avif", "bmp", "gif", "heic", "heif", "ico", "jpeg", "jpg", "png", "svg", "tif",
    "tiff", "webp",
];

const SAMPLES: [(&str, u32); 4] = [
    ("Kitchen renovation", 15),
    ("Living room before", 16),
    ("Bathroom tiles", 17),
    ("Exterior paint", 18),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    Sample,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: u64,
    name: String,
    source: PhotoSource,
    uploaded_on: NaiveDate,
}

impl Photo {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &PhotoSource {
        &self.source
    }

    pub fn uploaded_on(&self) -> NaiveDate {
        self.uploaded_on
    }

    /// Month/day/year without padding, e.g. `1/15/2024`.
    pub fn date_label(&self) -> String {
        self.uploaded_on.format("%-m/%-d/%Y").to_string()
    }
}

#[derive(Debug, Default, Clone)]
pub struct PhotoLibrary {
    photos: Vec<Photo>,
    next_id: u64,
}

/// Library shared by every open Photos window.
pub type SharedLibrary = Rc<RefCell<PhotoLibrary>>;

impl PhotoLibrary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The four sample photos dated 2024-01-15 through 2024-01-18.
    pub fn with_samples() -> Self {
        let mut library = Self::empty();
        for (name, day) in SAMPLES {
            if let Some(date) = NaiveDate::from_ymd_opt(2024, 1, day) {
                library.push(name.to_string(), PhotoSource::Sample, date);
            }
        }
        library
    }

    pub fn shared(self) -> SharedLibrary {
        Rc::new(RefCell::new(self))
    }

    fn push(&mut self, name: String, source: PhotoSource, uploaded_on: NaiveDate) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.photos.push(Photo {
            id,
            name,
            source,
            uploaded_on,
        });
        id
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn get(&self, id: u64) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Accept one image file, named after the file itself.
    pub fn upload(&mut self, path: &Path, today: NaiveDate) -> Result<u64, PhotoError> {
        if path.as_os_str().is_empty() {
            return Err(PhotoError::EmptyPath);
        }
        if !is_image_path(path) {
            return Err(PhotoError::NotAnImage(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let id = self.push(name, PhotoSource::File(path.to_path_buf()), today);
        tracing::info!(photo_id = id, path = %path.display(), "photo uploaded");
        Ok(id)
    }

    /// Upload every path in a pasted or dropped blob. Accepted ids and
    /// per-path rejections are returned separately.
    pub fn upload_dropped(&mut self, text: &str, today: NaiveDate) -> (Vec<u64>, Vec<PhotoError>) {
        let paths = match parse_dropped_paths(text) {
            Ok(paths) => paths,
            Err(err) => return (Vec::new(), vec![err]),
        };
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for path in paths {
            match self.upload(&path, today) {
                Ok(id) => accepted.push(id),
                Err(err) => {
                    tracing::warn!(error = %err, "photo rejected");
                    rejected.push(err);
                }
            }
        }
        (accepted, rejected)
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != id);
        let removed = self.photos.len() != before;
        if removed {
            tracing::info!(photo_id = id, "photo deleted");
        }
        removed
    }
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Split pasted text into paths using shell quoting rules. `file://` URIs,
/// as some terminals produce for dropped files, are reduced to their path.
pub fn parse_dropped_paths(text: &str) -> Result<Vec<PathBuf>, PhotoError> {
    let words = shell_words::split(text.trim())
        .map_err(|err| PhotoError::Unparsable(err.to_string()))?;
    if words.is_empty() {
        return Err(PhotoError::EmptyPath);
    }
    Ok(words
        .into_iter()
        .map(|word| {
            let path = word.strip_prefix("file://").unwrap_or(&word);
            PathBuf::from(path)
        })
        .collect())
}
