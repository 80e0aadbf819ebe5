//! Collects card images from disk and resolves their display references.

use std::fs;
use std::path::Path;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, info};

use crate::card::Card;
use crate::error::AppError;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

const IMAGE_PROXY: &str = "https://wsrv.nl/";

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Lists the image files in `dir`, sorted by path, one card per file. An
/// empty directory yields no cards; a missing one is an error.
pub fn collect(dir: &Path, cdn_base: Option<&str>) -> Result<Vec<Card>, AppError> {
    let read_err = |source: std::io::Error| AppError::Assets {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if is_image && path.is_file() {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-image entry");
        }
    }
    paths.sort();

    let cards: Vec<Card> = paths
        .iter()
        .map(|path| {
            let id = path.to_string_lossy().into_owned();
            let image = match cdn_base {
                Some(base) => optimize_image_url(&id, base),
                None => id.clone(),
            };
            Card::new(id, image)
        })
        .collect();

    info!(dir = %dir.display(), count = cards.len(), "card assets collected");
    Ok(cards)
}

/// Routes an image through the resizing proxy as lossless webp at q=20.
/// Relative references are made absolute against `base` first.
pub fn optimize_image_url(url: &str, base: &str) -> String {
    let absolute = if url.starts_with("http") {
        url.to_string()
    } else {
        let base = base.trim_end_matches('/');
        let path = url.trim_start_matches("./");
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    };

    format!(
        "{IMAGE_PROXY}?url={}&output=webp&ll&q=20",
        utf8_percent_encode(&absolute, URI_COMPONENT)
    )
}
