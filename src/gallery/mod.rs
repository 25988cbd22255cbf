// SPDX-License-Identifier: MPL-2.0
//! Gallery model: the ordered image collection and the directory scan that
//! produces it.
//!
//! The collection is immutable once built and non-empty by construction;
//! the lightbox can therefore assume at least one image without a recovery
//! path. Index bookkeeping (current position, wrap-around) belongs to the
//! lightbox state, not here; this module only supplies the arithmetic.

pub mod cache;
pub mod loader;

use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File extensions the gallery accepts, lowercase.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// A single gallery entry. Owned by the collection; the lightbox only reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub path: PathBuf,
    /// Short description derived from the file stem, used for titles.
    pub alt_text: Option<String>,
}

impl ImageItem {
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let alt_text = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem.replace(['-', '_'], " "));
        Self { path, alt_text }
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or_else(|| self.path.display().to_string(), ToString::to_string)
    }
}

/// Ordered, non-empty list of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCollection {
    items: Vec<ImageItem>,
}

impl ImageCollection {
    /// Builds a collection, refusing an empty list.
    #[must_use]
    pub fn new(items: Vec<ImageItem>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    // is_empty is deliberately absent: the collection holds at least one item.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    /// Clamps an arbitrary index into the valid range.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.items.len() - 1)
    }

    /// Steps an in-range index by `delta`, wrapping around both ends.
    #[must_use]
    pub fn wrap_step(&self, index: usize, delta: isize) -> usize {
        let len = self.items.len() as isize;
        (index as isize + delta).rem_euclid(len) as usize
    }

    /// Position of the given path within the collection, if present.
    #[must_use]
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.items.iter().position(|item| item.path == path)
    }
}

/// Scans a directory for supported image files and sorts them.
///
/// Returns the (possibly empty) item list; deciding whether an empty scan
/// is acceptable is the caller's business.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be read.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<ImageItem>> {
    if !directory.is_dir() {
        return Err(Error::Io(format!(
            "not a directory: {}",
            directory.display()
        )));
    }

    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);

    Ok(image_files.into_iter().map(ImageItem::from_path).collect())
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Sorts image file paths according to the configured sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Directory scan
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn scan_filters_unsupported_extensions() {
        let dir = tempdir().expect("create temp dir");
        create_test_image(dir.path(), "a.jpg");
        create_test_image(dir.path(), "b.webp");
        create_test_image(dir.path(), "notes.txt");
        create_test_image(dir.path(), "video.mp4");

        let items = scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");
        let names: Vec<String> = items.iter().map(ImageItem::file_name).collect();
        assert_eq!(names, vec!["a.jpg", "b.webp"]);
    }

    #[test]
    fn scan_accepts_uppercase_extensions() {
        let dir = tempdir().expect("create temp dir");
        create_test_image(dir.path(), "photo.JPG");

        let items = scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn scan_sorts_alphabetically_by_file_name() {
        let dir = tempdir().expect("create temp dir");
        create_test_image(dir.path(), "charlie.png");
        create_test_image(dir.path(), "alpha.png");
        create_test_image(dir.path(), "bravo.png");

        let items = scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");
        let names: Vec<String> = items.iter().map(ImageItem::file_name).collect();
        assert_eq!(names, vec!["alpha.png", "bravo.png", "charlie.png"]);
    }

    #[test]
    fn scan_of_missing_directory_errors() {
        let dir = tempdir().expect("create temp dir");
        let missing = dir.path().join("nope");
        assert!(scan_directory(&missing, SortOrder::Alphabetical).is_err());
    }

    #[test]
    fn scan_ignores_subdirectories() {
        let dir = tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join("nested.png")).expect("create dir");
        create_test_image(dir.path(), "real.png");

        let items = scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].file_name(), "real.png");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // ImageItem
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn alt_text_is_derived_from_file_stem() {
        let item = ImageItem::from_path(PathBuf::from("/pics/winter-market_2024.jpg"));
        assert_eq!(item.alt_text.as_deref(), Some("winter market 2024"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // ImageCollection
    // ─────────────────────────────────────────────────────────────────────────

    fn collection_of(names: &[&str]) -> ImageCollection {
        let items = names
            .iter()
            .map(|name| ImageItem::from_path(PathBuf::from(format!("/pics/{name}"))))
            .collect();
        ImageCollection::new(items).expect("non-empty collection")
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(ImageCollection::new(Vec::new()).is_none());
    }

    #[test]
    fn single_item_collection_is_accepted() {
        let collection = collection_of(&["only.png"]);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn clamp_index_caps_out_of_range_values() {
        let collection = collection_of(&["a.png", "b.png", "c.png"]);
        assert_eq!(collection.clamp_index(0), 0);
        assert_eq!(collection.clamp_index(2), 2);
        assert_eq!(collection.clamp_index(3), 2);
        assert_eq!(collection.clamp_index(usize::MAX), 2);
    }

    #[test]
    fn wrap_step_wraps_both_ends() {
        let collection = collection_of(&["a.png", "b.png", "c.png"]);
        assert_eq!(collection.wrap_step(2, 1), 0);
        assert_eq!(collection.wrap_step(0, -1), 2);
        assert_eq!(collection.wrap_step(1, 1), 2);
        assert_eq!(collection.wrap_step(1, -1), 0);
    }

    #[test]
    fn wrap_step_on_single_item_stays_put() {
        let collection = collection_of(&["only.png"]);
        assert_eq!(collection.wrap_step(0, 1), 0);
        assert_eq!(collection.wrap_step(0, -1), 0);
    }

    #[test]
    fn position_of_finds_existing_path() {
        let collection = collection_of(&["a.png", "b.png"]);
        assert_eq!(collection.position_of(Path::new("/pics/b.png")), Some(1));
        assert_eq!(collection.position_of(Path::new("/pics/zz.png")), None);
    }
}
