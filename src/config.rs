use crate::constants::{CONFIG_ATTR_PREFIX, CONFIG_KEYS};
use aether_core::SceneConfig;
use web_sys as web;

/// Scene configuration with any `data-*` overrides found on the canvas.
/// Rejected values are logged and the default is kept.
pub fn read_config(canvas: &web::Element) -> SceneConfig {
    let mut config = SceneConfig::default();
    for key in CONFIG_KEYS {
        let attr = format!("{}{}", CONFIG_ATTR_PREFIX, key);
        let Some(value) = canvas.get_attribute(&attr) else {
            continue;
        };
        match config.apply_override(key, &value) {
            Ok(()) => log::info!("[config] {}={}", key, value),
            Err(e) => log::warn!("[config] ignoring {}: {}", attr, e),
        }
    }
    config
}
