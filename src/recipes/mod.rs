//! Build recipe existence checks
//!
//! A recipe for a (track, flavour) pair is published at a fixed URL on the
//! build farm. A 200 response means the recipe exists; any other status means
//! it does not. Only an unreachable endpoint is an error.

pub mod client;

pub use client::{HttpRecipeProbe, RecipeProbe};

use crate::cache::ExistenceCache;
use crate::error::CheckResult;

/// URL of the recipe page for `track` and `flavour`.
pub fn recipe_url(base: &str, track: &str, flavour: &str) -> String {
    format!("{base}-{track}-{flavour}")
}

/// Memoized recipe lookups keyed by (track, flavour).
#[derive(Debug, Default)]
pub struct Recipes {
    cache: ExistenceCache<(String, String)>,
}

impl Recipes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the recipe for `track` and `flavour` is published.
    pub fn exists(
        &self,
        probe: &dyn RecipeProbe,
        base: &str,
        track: &str,
        flavour: &str,
    ) -> CheckResult<bool> {
        let key = (track.to_string(), flavour.to_string());
        self.cache.get_or_probe(&key, || -> CheckResult<bool> {
            let url = recipe_url(base, track, flavour);
            let status = probe.status(&url)?;
            tracing::debug!(%url, status, "recipe lookup");
            Ok(status == 200)
        })
    }

    /// Number of distinct (track, flavour) pairs queried so far.
    pub fn queried(&self) -> usize {
        self.cache.len()
    }
}
