//! Persistence of the auth token between runs.
//!
//! - **Web** (WASM): `localStorage["token"]`
//! - **Desktop** (native): `<data_dir>/foodgram/token`

const TOKEN_KEY: &str = "token";

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The token saved by the last sign-in, if any.
#[cfg(target_arch = "wasm32")]
pub fn load_token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

#[cfg(target_arch = "wasm32")]
pub fn save_token(token: &str) {
    match storage() {
        Some(storage) => {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                tracing::error!("localStorage refused the auth token");
            }
        }
        None => tracing::error!("localStorage unavailable, token not saved"),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn token_path() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("foodgram")
        .join(TOKEN_KEY)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_token() -> Option<String> {
    let token = std::fs::read_to_string(token_path()).ok()?;
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_token(token: &str) {
    let path = token_path();
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::error!("Failed to create {}: {}", parent.display(), e);
            return;
        }
    }
    if let Err(e) = std::fs::write(&path, token) {
        tracing::error!("Failed to save token to {}: {}", path.display(), e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_token() {
    let path = token_path();
    if let Err(e) = std::fs::remove_file(&path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::error!("Failed to remove {}: {}", path.display(), e);
        }
    }
}
