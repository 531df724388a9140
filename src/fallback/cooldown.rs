//! Model cooldown tracking
//!
//! Tracks recently rate-limited models and reports availability based on a
//! fixed cooldown window. State is kept in-memory per instance; nothing
//! survives a restart.
//!
//! Per model the state machine is: available -> (failure reported) ->
//! cooling down -> (window elapses) -> available. A new failure report
//! while cooling down resets the clock. Expired entries are evicted lazily
//! by whichever read discovers them; there is no background sweep.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// Default cooldown window for a rate-limited model
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(300);

/// Tracks cooldowns for rate-limited models
pub struct CooldownTracker {
    failed: RwLock<HashMap<String, Instant>>,
    cooldown: Duration,
}

impl CooldownTracker {
    /// Create a tracker with the default cooldown window
    pub fn new() -> Self {
        Self::with_cooldown(DEFAULT_COOLDOWN)
    }

    /// Create a tracker with a custom cooldown window
    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            failed: RwLock::new(HashMap::new()),
            cooldown,
        }
    }

    /// Check if a model is available (not in cooldown)
    ///
    /// A model whose cooldown window has elapsed is evicted here and
    /// reported available.
    pub fn is_model_available(&self, model: &str) -> bool {
        {
            let failed = self.failed.read().unwrap();
            match failed.get(model) {
                None => return true,
                Some(failed_at) if failed_at.elapsed() <= self.cooldown => return false,
                Some(_) => {}
            }
        }

        // Entry looked expired under the read lock; re-check under the write
        // lock since a concurrent failure report may have refreshed it.
        let mut failed = self.failed.write().unwrap();
        match failed.get(model) {
            None => true,
            Some(failed_at) if failed_at.elapsed() > self.cooldown => {
                failed.remove(model);
                debug!(model = %model, "Cooldown elapsed, model available again");
                true
            }
            Some(_) => false,
        }
    }

    /// Mark a model as rate limited, starting (or restarting) its cooldown
    pub fn mark_model_failed(&self, model: &str) {
        let mut failed = self.failed.write().unwrap();
        failed.insert(model.to_string(), Instant::now());

        warn!(
            model = %model,
            cooldown_secs = self.cooldown.as_secs(),
            "Marked GitHub model as rate limited"
        );
    }

    /// Get remaining cooldown time for a model
    ///
    /// Returns `None` for available models; an expired entry is evicted.
    pub fn cooldown_remaining(&self, model: &str) -> Option<Duration> {
        let mut failed = self.failed.write().unwrap();
        let failed_at = failed.get(model)?;

        let elapsed = failed_at.elapsed();
        if elapsed > self.cooldown {
            failed.remove(model);
            return None;
        }
        Some(self.cooldown - elapsed)
    }

    /// List models currently cooling down, for diagnostics
    ///
    /// Expired entries are evicted before answering.
    pub fn cooling_down(&self) -> Vec<String> {
        let mut failed = self.failed.write().unwrap();
        failed.retain(|_, failed_at| failed_at.elapsed() <= self.cooldown);
        failed.keys().cloned().collect()
    }
}

impl Default for CooldownTracker {
    fn default() -> Self {
        Self::new()
    }
}
