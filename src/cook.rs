//! Ingredient assembly
//!
//! A [`Cook`] starts with no ingredients. [`Cook::add_ingredients`] fills in
//! the favorites plus a fixed batch of extras, and [`Cook::prepare`] shuffles
//! them with a caller-supplied RNG so tests can pin the order with a seed.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{EggsampleError, Result};
use crate::types::{Spam, Spice};

/// The cook's favorites, always served first before shuffling
pub const FAVORITE_INGREDIENTS: [&str; 3] = ["egg", "egg", "egg"];

/// Number of ingredients on a fully assembled plate
pub const PLATE_SIZE: usize = FAVORITE_INGREDIENTS.len() + 8;

/// Owns the ingredient list for one meal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cook {
    ingredients: Option<Vec<String>>,
}

impl Cook {
    /// Create a cook with no ingredients set
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ingredients, or an uninitialized error if none were added yet
    pub fn ingredients(&self) -> Result<&[String]> {
        self.ingredients
            .as_deref()
            .ok_or_else(|| EggsampleError::uninitialized("cook has no ingredients yet"))
    }

    /// Whether `add_ingredients` has run
    pub fn has_ingredients(&self) -> bool {
        self.ingredients.is_some()
    }

    /// Replace the ingredient list with the favorites followed by the extras.
    ///
    /// Any previous list is discarded, so calling this twice yields the same
    /// 11 items in their unshuffled order.
    pub fn add_ingredients(&mut self) {
        let extras = extra_ingredients(&FAVORITE_INGREDIENTS);
        let ingredients: Vec<String> = FAVORITE_INGREDIENTS
            .iter()
            .map(|s| s.to_string())
            .chain(extras)
            .collect();
        debug!("Assembled {} ingredients", ingredients.len());
        self.ingredients = Some(ingredients);
    }

    /// Shuffle the ingredients in place.
    ///
    /// Fails with [`EggsampleError::Uninitialized`] if nothing was added.
    pub fn prepare<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let ingredients = self.ingredients.as_mut().ok_or_else(|| {
            EggsampleError::uninitialized("cannot prepare before ingredients are added")
        })?;
        ingredients.shuffle(rng);
        debug!("Shuffled ingredients: {:?}", ingredients);
        Ok(())
    }
}

/// The eight extras every plate gets.
///
/// Quirk: `_ingredients` is accepted and never read. The extras are the same
/// no matter what is passed in, and callers rely on that fixed output.
fn extra_ingredients(_ingredients: &[&str]) -> Vec<String> {
    let mut extras = Vec::with_capacity(8);
    extras.extend([Spice::Salt, Spice::Pepper].iter().map(|s| s.to_string()));
    extras.extend(["egg", "egg"].iter().map(|s| s.to_string()));
    extras.extend(Spam::FIRST_BATCH.iter().map(|s| s.to_string()));
    extras.extend(Spam::SECOND_BATCH.iter().map(|s| s.to_string()));
    extras
}
