//! Generated-site validators (HTML5 structure, coverage, links).

pub mod coverage;
pub mod html;
pub mod links;

use std::path::Path;

use walkdir::WalkDir;

/// Returns every `.html` file under `artifacts` as `(relative path, content)`.
///
/// Relative paths use `/` separators. Unreadable files are reported in the
/// second vector instead.
pub(crate) fn html_pages(artifacts: &Path) -> (Vec<(String, String)>, Vec<String>) {
    let mut pages = Vec::new();
    let mut unreadable = Vec::new();

    for entry in WalkDir::new(artifacts)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "html"))
    {
        let path = entry.path();
        let rel_path = relative(artifacts, path);
        match std::fs::read_to_string(path) {
            Ok(content) => pages.push((rel_path, content)),
            Err(e) => unreadable.push(format!("Cannot read {rel_path}: {e}")),
        }
    }

    (pages, unreadable)
}

/// `path` relative to `root`, with `/` separators.
pub(crate) fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
