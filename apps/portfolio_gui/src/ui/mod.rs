//! UI layer: app shell, page sections, effect host, toasts, and theme.

pub mod app;
pub mod effects;
pub mod sections;
pub mod theme;
pub mod toasts;

pub use app::PortfolioApp;
