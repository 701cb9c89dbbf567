//! eggsample library
//!
//! Cooks a plate of eggs and spam, shuffles it with an injectable RNG, and
//! serves it alongside a condiments tray that keeps growing.

pub mod cli;
pub mod condiments;
pub mod config;
pub mod cook;
pub mod error;
pub mod kitchen;
pub mod reporter;
pub mod types;

// Re-export main types for convenience
pub use condiments::{CondimentsTray, SharedTray, prep_condiments};
pub use config::KitchenConfig;
pub use cook::{Cook, FAVORITE_INGREDIENTS};
pub use error::EggsampleError;
pub use kitchen::{run, serve_meal, shuffle_rng};
pub use reporter::{format_serving, serve, serve_cook};
pub use types::{Spam, Spice};
