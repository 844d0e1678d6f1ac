//! Page bootstrap: the one-shot `Loading -> Loaded` gate in front of the main
//! content tree.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use shared::domain::LoadState;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Dark,
    Light,
}

/// Style applied once by the render entry point before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRoot {
    pub body_font: FontFamily,
    pub color_scheme: ColorScheme,
}

impl Default for StyleRoot {
    fn default() -> Self {
        Self {
            body_font: FontFamily::Sans,
            color_scheme: ColorScheme::Dark,
        }
    }
}

/// Which tree is mounted. Derived from [`LoadState`], so exactly one is
/// present at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Preload,
    Main,
}

impl From<LoadState> for PageView {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Loading => Self::Preload,
            LoadState::Loaded => Self::Main,
        }
    }
}

/// Zero-argument completion capability handed to the preload view.
#[derive(Debug, Clone)]
pub struct CompletionCallback {
    loaded: Arc<AtomicBool>,
}

impl CompletionCallback {
    /// Returns `true` only for the call that performed the transition.
    pub fn complete(&self) -> bool {
        let transitioned = !self.loaded.swap(true, Ordering::AcqRel);
        if transitioned {
            info!("preload sequence complete; mounting main content");
        } else {
            debug!("ignoring repeated preload completion signal");
        }
        transitioned
    }
}

#[derive(Debug)]
pub struct BootstrapController {
    loaded: Arc<AtomicBool>,
    style_root: Option<StyleRoot>,
}

impl BootstrapController {
    pub fn new(style_root: StyleRoot) -> Self {
        Self {
            loaded: Arc::new(AtomicBool::new(false)),
            style_root: Some(style_root),
        }
    }

    pub fn completion_callback(&self) -> CompletionCallback {
        CompletionCallback {
            loaded: Arc::clone(&self.loaded),
        }
    }

    pub fn state(&self) -> LoadState {
        if self.loaded.load(Ordering::Acquire) {
            LoadState::Loaded
        } else {
            LoadState::Loading
        }
    }

    pub fn view(&self) -> PageView {
        self.state().into()
    }

    pub fn is_loaded(&self) -> bool {
        self.state() == LoadState::Loaded
    }

    /// Hands out the style root on the first call only.
    pub fn take_style_root(&mut self) -> Option<StyleRoot> {
        self.style_root.take()
    }
}

impl Default for BootstrapController {
    fn default() -> Self {
        Self::new(StyleRoot::default())
    }
}

#[cfg(test)]
#[path = "tests/bootstrap_tests.rs"]
mod tests;
