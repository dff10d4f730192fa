use store::FoodgramConfig;

const EMBEDDED: &str = include_str!("../foodgram.toml");

/// The bundled `foodgram.toml`, with `FOODGRAM_API_URL` from the build
/// environment taking precedence over its `base_url`.
pub fn load() -> FoodgramConfig {
    let config = parse(EMBEDDED);
    match option_env!("FOODGRAM_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}

fn parse(text: &str) -> FoodgramConfig {
    FoodgramConfig::from_toml(text).unwrap_or_else(|e| {
        tracing::error!("invalid {}, using defaults: {}", FoodgramConfig::filename(), e);
        FoodgramConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        assert!(FoodgramConfig::from_toml(EMBEDDED).is_ok());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        assert_eq!(parse("[pages\n"), FoodgramConfig::default());
    }
}
