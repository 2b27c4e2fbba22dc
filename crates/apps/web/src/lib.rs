//! Browser front end: binds the hero scene, the card stack and content-page
//! reveals to the DOM.
//!
//! Each `mount_*` call returns a handle. Calling `unmount()` on it (or
//! letting JS `free()` it) releases the animation frame and every listener
//! the mount registered.

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;

mod cards;
mod dom;
mod hero;
mod logging;
mod reveal;

pub use cards::{CardStackHandle, mount_card_stack};
pub use hero::{HeroHandle, mount_hero};
pub use reveal::{RevealHandle, mount_reveal_sections};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingRoot(String),
    #[error("required element `{0}` not found")]
    MissingElement(String),
    #[error("invalid selector `{0}`")]
    Selector(String),
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Orbit(#[from] orbit::ConfigError),
    #[error(transparent)]
    Choreo(#[from] choreo::ConfigError),
    #[error(transparent)]
    Content(#[from] content::ContentError),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        tracing::warn!(%err, "mount failed");
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Module init can run twice under hot reload.
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    logging::init(level);
    Ok(())
}
