//! Saving a text file for the user.
//!
//! - **Web** (WASM): a `Blob` behind an object URL, clicked through a
//!   temporary `<a download>`; the browser decides where it lands.
//! - **Desktop** (native): written into the downloads directory.

use thiserror::Error;

pub const SHOPPING_LIST_FILE: &str = "shopping_list.txt";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("browser refused the download: {0}")]
    Browser(String),
    #[error("no downloads directory")]
    NoDirectory,
    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Save `contents` as `filename`. Returns where it went.
#[cfg(target_arch = "wasm32")]
pub fn save_text(filename: &str, contents: &str) -> Result<String, DownloadError> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let browser = |e: JsValue| DownloadError::Browser(format!("{e:?}"));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::Browser("no document".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(browser)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into()
        .map_err(|_| DownloadError::Browser("not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url).map_err(browser)?;

    Ok(filename.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_text(filename: &str, contents: &str) -> Result<String, DownloadError> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or(DownloadError::NoDirectory)?;
    save_text_in(&dir, filename, contents)
}

#[cfg(not(target_arch = "wasm32"))]
fn save_text_in(
    dir: &std::path::Path,
    filename: &str,
    contents: &str,
) -> Result<String, DownloadError> {
    let path = dir.join(filename);
    std::fs::write(&path, contents).map_err(|source| DownloadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path.display().to_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_save_text_in_writes_file() {
        let dir = std::env::temp_dir().join(format!("foodgram-download-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let location = save_text_in(&dir, SHOPPING_LIST_FILE, "egg, pcs - 2\n").unwrap();
        assert!(location.ends_with(SHOPPING_LIST_FILE));
        assert_eq!(
            std::fs::read_to_string(dir.join(SHOPPING_LIST_FILE)).unwrap(),
            "egg, pcs - 2\n"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = std::env::temp_dir().join("foodgram-download-missing").join("nested");
        let err = save_text_in(&dir, SHOPPING_LIST_FILE, "").unwrap_err();
        assert!(matches!(err, DownloadError::Io { .. }));
    }
}
