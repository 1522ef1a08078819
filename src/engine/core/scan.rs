use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Image file extensions recognized by the scanner. The set is lowercase
/// only and matching is exact, so `DIVE.ARW` is not picked up.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp", "cr2", "nef", "arw", "raf", "rw2",
];

/// Check if a path has a recognized image extension.
/// Matching is case-sensitive; uppercase suffixes are skipped. Hidden names
/// with a leading dot, such as AppleDouble `._reef.jpg` sidecars, are never
/// candidates.
pub fn is_image_file(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.starts_with('.') {
            return false;
        }
    }
    if let Some(ext) = path.extension() {
        if let Some(ext_str) = ext.to_str() {
            return IMAGE_EXTENSIONS.contains(&ext_str);
        }
    }
    false
}

/// List the image files directly inside `dir`, sorted lexicographically by
/// full path. Subdirectories are not descended into, and directory entries
/// whose names merely look like images are ignored, as are hidden files.
pub fn scan(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_image_file(path) {
            files.push(path.to_path_buf());
        }
    }
    // Sort so selection order never depends on filesystem return order
    files.sort();
    files
}
