//! Typed ingredient names
//!
//! The fixed extras a cook adds are enums rather than loose strings, so the
//! ingredient list can't drift through a typo.

use strum::{Display, EnumIter, EnumString};

/// Seasoning added ahead of the extra eggs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Spice {
    Salt,
    Pepper,
}

/// Spam, in its various moods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Spam {
    #[strum(serialize = "lovely spam")]
    Lovely,
    #[strum(serialize = "wonderous spam")]
    Wonderous,
    #[strum(serialize = "splendiferous spam")]
    Splendiferous,
    #[strum(serialize = "magnificent spam")]
    Magnificent,
}

impl Spam {
    /// The pair every cook reaches for first
    pub const FIRST_BATCH: [Spam; 2] = [Spam::Lovely, Spam::Wonderous];

    /// The pair that follows
    pub const SECOND_BATCH: [Spam; 2] = [Spam::Splendiferous, Spam::Magnificent];
}
