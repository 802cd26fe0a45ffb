//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/yatzy` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router; `None` when the app is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Location of the clip played when a Yatzy is entered.
#[must_use]
pub fn celebration_audio() -> String {
    asset_path("static/audio/seven-nation-army.mp3")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, celebration_audio, router_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("static/audio/a.mp3"), "/static/audio/a.mp3");
        assert_eq!(asset_path("/static/audio/a.mp3"), "/static/audio/a.mp3");
        assert!(celebration_audio().ends_with("/seven-nation-army.mp3"));
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("static/audio/a.mp3", "/yatzy"),
            "/yatzy/static/audio/a.mp3"
        );
        assert_eq!(
            super::asset_path_with_base("/static/audio/a.mp3", "/yatzy/"),
            "/yatzy/static/audio/a.mp3"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/yatzy/"),
            Some(String::from("/yatzy"))
        );
    }
}
