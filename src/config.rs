//! Player configuration from the page
//!
//! A host page may define `window.__MINIREEL_CONFIG__` with any subset of the
//! `PlayerConfig` fields. Missing global means defaults; an invalid one is
//! logged and replaced by defaults.

use minireel_core::{PlayerConfig, PlayerError};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__MINIREEL_CONFIG__";

fn read_config() -> Result<Option<PlayerConfig>, PlayerError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| PlayerError::Config(format!("{:?}", e)))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(None);
    }

    let config: PlayerConfig =
        serde_wasm_bindgen::from_value(raw).map_err(|e| PlayerError::Config(e.to_string()))?;
    config.validate()?;
    Ok(Some(config))
}

pub fn load_config() -> PlayerConfig {
    match read_config() {
        Ok(Some(config)) => {
            tracing::info!(?config, "config: using page overrides");
            config
        }
        Ok(None) => PlayerConfig::default(),
        Err(e) => {
            tracing::warn!(error = %e, "config: ignoring page overrides");
            PlayerConfig::default()
        }
    }
}
