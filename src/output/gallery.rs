//! Showcase image grid.

use crate::error::{Error, Result};
use crate::output::escape_html;
use crate::photo::is_supported_image;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Supported images directly inside `dir`, sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::GalleryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| Error::GalleryRead {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} image(s) in {}", images.len(), dir.display());
    Ok(images)
}

/// Absolute `file://` URL for `path`, so the page works wherever it is saved.
pub fn file_url(path: &Path) -> Result<String> {
    let absolute = fs::canonicalize(path).map_err(|source| Error::GalleryRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut url = String::from("file://");
    for component in absolute.components() {
        match component {
            Component::Prefix(prefix) => {
                let drive = prefix.as_os_str().to_string_lossy();
                url.push('/');
                url.push_str(drive.trim_start_matches(r"\\?\"));
            }
            Component::Normal(part) => {
                if !url.ends_with('/') {
                    url.push('/');
                }
                url.push_str(&urlencoding::encode(&part.to_string_lossy()));
            }
            Component::RootDir => url.push('/'),
            Component::CurDir | Component::ParentDir => {}
        }
    }
    Ok(url)
}

/// Render the gallery page for the images in `dir`.
///
/// Images are laid out `columns` per row, each captioned with its file name.
pub fn render_gallery(dir: &Path, columns: usize) -> Result<String> {
    let images = list_images(dir)?;
    let columns = columns.max(1);

    let mut rows = String::new();
    for chunk in images.chunks(columns) {
        rows.push_str("<div class=\"row\">\n");
        for image in chunk {
            let name = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let src = escape_html(&file_url(image)?);
            let caption = escape_html(&name);
            rows.push_str(&format!(
                "<figure><img src=\"{src}\" alt=\"{caption}\"><figcaption>{caption}</figcaption></figure>\n"
            ));
        }
        rows.push_str("</div>\n");
    }

    let empty = if images.is_empty() {
        "<p>No images to show.</p>\n"
    } else {
        ""
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Fish Detection</title>
<style>
body {{ font-family: sans-serif; margin: 1em; }}
.row {{ display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 1em; margin-bottom: 1em; }}
figure {{ margin: 0; }}
img {{ width: 100%; height: auto; }}
figcaption {{ text-align: center; font-size: 0.9em; }}
</style>
</head>
<body>
<h1>Welcome to the Fish Detection App!</h1>
{empty}{rows}</body>
</html>
"#
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn folder(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        dir
    }

    #[test]
    fn test_lists_only_supported_images_sorted() {
        let dir = folder(&["c.png", "a.JPG", "notes.txt", "b.bmp", "clip.mp4"]);
        fs::create_dir(dir.path().join("sub.png")).unwrap();

        let names: Vec<String> = list_images(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.JPG", "b.bmp", "c.png"]);
    }

    #[test]
    fn test_grid_rows_follow_column_count() {
        let dir = folder(&["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]);
        let html = render_gallery(dir.path(), 2).unwrap();
        assert_eq!(html.matches("<div class=\"row\">").count(), 3);
        assert_eq!(html.matches("<figure>").count(), 5);
        assert!(html.contains("<figcaption>5.jpg</figcaption>"));
        assert!(html.contains("repeat(2, 1fr)"));
    }

    #[test]
    fn test_sources_are_absolute_encoded_urls() {
        let dir = folder(&["fish #1.png"]);
        let url = file_url(&dir.path().join("fish #1.png")).unwrap();
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("/fish%20%231.png"));

        let html = render_gallery(dir.path(), 3).unwrap();
        assert!(html.contains(&format!("src=\"{url}\"")));
        assert!(html.contains("<figcaption>fish #1.png</figcaption>"));
    }

    #[test]
    fn test_empty_folder() {
        let dir = folder(&[]);
        let html = render_gallery(dir.path(), 3).unwrap();
        assert!(html.contains("No images to show."));
        assert!(!html.contains("<figure>"));
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = render_gallery(&dir.path().join("missing"), 3);
        assert!(matches!(result, Err(Error::GalleryRead { .. })));
    }
}
