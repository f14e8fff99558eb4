//! Error types for page effects.
//!
//! Every effect needs some part of the page. When that part is missing the
//! effect is skipped and the rest of the page keeps working, so these errors
//! are logged by the boot sequence and never shown to the user.

use std::fmt;

#[derive(Debug)]
pub enum FxError {
    /// No element with this id or selector.
    MissingElement(String),
    /// The element exists but is not the expected kind (e.g. not a canvas).
    WrongElementType(String),
    /// A canvas did not hand out a 2D context.
    ContextUnavailable(String),
    /// The config override could not be parsed.
    Config(serde_json::Error),
    /// A browser API call threw.
    Js(String),
}

impl FxError {
    /// Whether this just means the page does not use a feature
    pub fn is_missing_feature(&self) -> bool {
        matches!(self, FxError::MissingElement(_))
    }
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FxError::MissingElement(what) => write!(f, "Element not found: {}", what),
            FxError::WrongElementType(what) => write!(f, "Element has the wrong type: {}", what),
            FxError::ContextUnavailable(what) => write!(f, "No 2D context for canvas: {}", what),
            FxError::Config(e) => write!(f, "Invalid effect config: {}", e),
            FxError::Js(msg) => write!(f, "Browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for FxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FxError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FxError {
    fn from(e: serde_json::Error) -> Self {
        FxError::Config(e)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = FxError::MissingElement("#sparkle-canvas".into());
        assert_eq!(e.to_string(), "Element not found: #sparkle-canvas");
        assert!(e.is_missing_feature());
    }

    #[test]
    fn test_config_source() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: FxError = bad.into();
        assert!(std::error::Error::source(&e).is_some());
        assert!(!e.is_missing_feature());
    }
}
