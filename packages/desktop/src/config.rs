use std::path::{Path, PathBuf};

use store::FoodgramConfig;

pub const API_URL_VAR: &str = "FOODGRAM_API_URL";

/// `foodgram.toml` from the user config directory, then `FOODGRAM_API_URL`
/// from the environment (or a `.env` file) on top.
pub fn load() -> FoodgramConfig {
    dotenvy::dotenv().ok();
    let config = match config_path() {
        Some(path) => read(&path),
        None => FoodgramConfig::default(),
    };
    apply_env(config, std::env::var(API_URL_VAR).ok())
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("foodgram").join(FoodgramConfig::filename()))
}

fn read(path: &Path) -> FoodgramConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return FoodgramConfig::default(),
        Err(e) => {
            tracing::error!("could not read {}: {}", path.display(), e);
            return FoodgramConfig::default();
        }
    };
    FoodgramConfig::from_toml(&text).unwrap_or_else(|e| {
        tracing::error!("invalid {}, using defaults: {}", path.display(), e);
        FoodgramConfig::default()
    })
}

fn apply_env(config: FoodgramConfig, url: Option<String>) -> FoodgramConfig {
    match url {
        Some(url) if !url.trim().is_empty() => {
            tracing::info!("{} overrides the API address", API_URL_VAR);
            config.with_base_url(url.trim())
        }
        _ => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("foodgram-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("foodgram-config-absent").join("foodgram.toml");
        assert_eq!(read(&path), FoodgramConfig::default());
    }

    #[test]
    fn test_reads_file() {
        let path = temp_file("valid.toml", "[pages]\nrecipes_page_size = 9\n");
        assert_eq!(read(&path).pages.recipes_page_size, 9);
    }

    #[test]
    fn test_invalid_file_is_default() {
        let path = temp_file("invalid.toml", "[api\n");
        assert_eq!(read(&path), FoodgramConfig::default());
    }

    #[test]
    fn test_env_overrides_base_url() {
        let config = apply_env(
            FoodgramConfig::default(),
            Some("https://foodgram.example/api/".to_string()),
        );
        assert_eq!(config.api.base_url, "https://foodgram.example/api");

        let config = apply_env(FoodgramConfig::default(), Some("  ".to_string()));
        assert_eq!(config, FoodgramConfig::default());
    }
}
