//! Frontend Configuration
//!
//! Build-time settings, read with `option_env!` since a browser has no
//! process environment.

use tracing::Level;

/// Log level from `STOREFRONT_LOG`, defaulting to info
pub fn log_level() -> Level {
    parse_level(option_env!("STOREFRONT_LOG"))
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some(" WARN ")), Level::WARN);
        assert_eq!(parse_level(Some("chatty")), Level::INFO);
        assert_eq!(parse_level(None), Level::INFO);
    }
}
