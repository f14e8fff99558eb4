//! Effect configuration
//!
//! Defaults reproduce the stock page. A page can override any field with a
//! JSON block: `<script type="application/json" id="fx-config">`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::FxError;

/// Element id of the optional JSON override
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Tunables for every effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    // === Particle populations ===
    pub bubble_count: usize,
    pub orb_count: usize,
    pub star_count: usize,
    /// Upper bound on live sparkles
    pub sparkle_cap: usize,
    /// Sparkles shed per pointer move
    pub sparkle_burst: usize,

    // === Timers ===
    pub idle_interval_ms: u32,
    /// Idle intervals before the sparkle trickle stops
    pub idle_limit: u32,
    pub counter_interval_ms: u32,
    pub typing_interval_ms: u32,

    // === Misc ===
    /// Fixed RNG seed (otherwise the page load time)
    pub seed: Option<u64>,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            bubble_count: BUBBLE_COUNT,
            orb_count: ORB_COUNT,
            star_count: STAR_COUNT,
            sparkle_cap: SPARKLE_CAP,
            sparkle_burst: SPARKLE_BURST,

            idle_interval_ms: IDLE_INTERVAL_MS,
            idle_limit: IDLE_LIMIT,
            counter_interval_ms: COUNTER_INTERVAL_MS,
            typing_interval_ms: TYPING_INTERVAL_MS,

            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl FxConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Log level, falling back to `Info` for unknown names
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Apply an optional JSON override. Bad JSON is logged and the defaults
    /// are used instead, so the logger must be up before this runs.
    pub fn from_override(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded effect config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Text of the page's `#fx-config` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn page_json() -> Option<String> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
    }

    /// Load the override from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::from_override(Self::page_json().as_deref())
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let c = FxConfig::default();
        assert_eq!(c.bubble_count, 40);
        assert_eq!(c.orb_count, 8);
        assert_eq!(c.star_count, 120);
        assert_eq!(c.sparkle_cap, 140);
        assert_eq!(c.counter_interval_ms, 14);
        assert_eq!(c.level(), log::Level::Info);
    }

    #[test]
    fn test_partial_override() {
        let c = FxConfig::from_json(r#"{ "star_count": 60, "seed": 7, "log_level": "debug" }"#)
            .unwrap();
        assert_eq!(c.star_count, 60);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.level(), log::Level::Debug);
        assert_eq!(c.bubble_count, BUBBLE_COUNT);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            FxConfig::from_json("{ star_count: }"),
            Err(FxError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let c = FxConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(c.level(), log::Level::Info);
    }

    /// Captures warnings so the bad-override path can be checked
    struct WarnLog;

    static WARNINGS: std::sync::Mutex<Vec<String>> = std::sync::Mutex::new(Vec::new());
    static WARN_LOG: WarnLog = WarnLog;

    impl log::Log for WarnLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_override_falls_back_and_warns() {
        let _ = log::set_logger(&WARN_LOG);
        log::set_max_level(log::LevelFilter::Warn);

        assert_eq!(FxConfig::from_override(None), FxConfig::default());
        let c = FxConfig::from_override(Some(r#"{ "orb_count": 3 }"#));
        assert_eq!(c.orb_count, 3);

        let c = FxConfig::from_override(Some("{ orb_count: }"));
        assert_eq!(c, FxConfig::default());
        assert!(
            WARNINGS
                .lock()
                .unwrap()
                .iter()
                .any(|w| w.ends_with("using defaults"))
        );
    }
}
