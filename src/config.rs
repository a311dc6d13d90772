//! Runtime Configuration
//!
//! Read once from `<meta>` tags in `index.html`.

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOAST_MS: u32 = 5000;

const API_BASE_META: &str = "mutil-api-base";
const TOAST_MS_META: &str = "mutil-toast-ms";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every endpoint path is joined onto
    pub api_base: String,
    /// How long a toast stays up before removing itself
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            toast_duration_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl AppConfig {
    /// Build from the current document, falling back to defaults
    pub fn from_document() -> Self {
        Self::resolve(meta_content(API_BASE_META), meta_content(TOAST_MS_META))
    }

    fn resolve(api_base: Option<String>, toast_ms: Option<String>) -> Self {
        let api_base = api_base
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let toast_duration_ms = toast_ms
            .and_then(|ms| ms.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TOAST_MS);
        Self { api_base, toast_duration_ms }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!(r#"meta[name="{}"]"#, name);
    document.query_selector(&selector).ok()??.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_meta() {
        assert_eq!(AppConfig::resolve(None, None), AppConfig::default());
    }

    #[test]
    fn test_api_base_trims_trailing_slash() {
        let config = AppConfig::resolve(Some("https://example.org/api/ ".into()), None);
        assert_eq!(config.api_base, "https://example.org/api");
    }

    #[test]
    fn test_blank_api_base_falls_back() {
        assert_eq!(AppConfig::resolve(Some("  ".into()), None).api_base, DEFAULT_API_BASE);
        assert_eq!(AppConfig::resolve(Some("/".into()), None).api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_toast_duration() {
        assert_eq!(AppConfig::resolve(None, Some("2500".into())).toast_duration_ms, 2500);
        assert_eq!(AppConfig::resolve(None, Some("0".into())).toast_duration_ms, DEFAULT_TOAST_MS);
        assert_eq!(AppConfig::resolve(None, Some("soon".into())).toast_duration_ms, DEFAULT_TOAST_MS);
    }
}
