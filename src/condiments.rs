//! The condiments tray.
//!
//! A tray is an ordered list of condiment names that grows by one
//! `"mint sauce"` every time a meal is served from it. Entries are never
//! de-duplicated; serving twice from one tray lists mint sauce twice.
//!
//! [`CondimentsTray`] is a plain owned value. Callers that reuse one tray
//! across threads go through [`SharedTray`], which serializes access.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EggsampleError, Result};

/// What a fresh tray holds before anything is served
pub const DEFAULT_CONDIMENTS: [&str; 3] = ["pickled walnuts", "steak sauce", "mushy peas"];

/// Appended to the tray on every serving
pub const MINT_SAUCE: &str = "mint sauce";

/// Printed after the tray once it has been topped up
pub const TRAY_COMMENTARY: &str = "Now this is what I call a condiments tray!";

/// Ordered, append-only list of condiments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CondimentsTray {
    items: Vec<String>,
}

impl Default for CondimentsTray {
    fn default() -> Self {
        Self::new(DEFAULT_CONDIMENTS)
    }
}

impl CondimentsTray {
    /// Create a tray holding `items` in the given order
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many times `name` appears on the tray
    pub fn count(&self, name: &str) -> usize {
        self.items.iter().filter(|item| *item == name).count()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }
}

impl fmt::Display for CondimentsTray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items.join(", "))
    }
}

/// Top up the tray with mint sauce and return the commentary to print.
///
/// Mutates `tray` cumulatively: every call adds another entry.
pub fn prep_condiments(tray: &mut CondimentsTray) -> Vec<String> {
    tray.push(MINT_SAUCE);
    debug!(
        "Added {} to the tray ({} on it now)",
        MINT_SAUCE,
        tray.count(MINT_SAUCE)
    );
    vec![TRAY_COMMENTARY.to_string()]
}

/// A tray that can be handed to several threads.
///
/// Each access holds the lock for the whole closure, so a full serving
/// (top-up plus listing) is never interleaved with another.
#[derive(Debug, Clone, Default)]
pub struct SharedTray {
    inner: Arc<Mutex<CondimentsTray>>,
}

impl SharedTray {
    pub fn new(tray: CondimentsTray) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tray)),
        }
    }

    /// Run `f` with exclusive access to the tray
    pub fn with<T>(&self, f: impl FnOnce(&mut CondimentsTray) -> T) -> Result<T> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| EggsampleError::state("condiments tray lock poisoned"))?;
        Ok(f(&mut *guard))
    }

    /// Copy of the tray as it stands now
    pub fn snapshot(&self) -> Result<CondimentsTray> {
        self.with(|tray| tray.clone())
    }
}
