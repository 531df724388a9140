//! Rate limit fallback module
//!
//! Cooldown tracking for rate-limited models and selection of the next
//! viable same-tier fallback.

pub mod cooldown;
pub mod router;

pub use cooldown::{CooldownTracker, DEFAULT_COOLDOWN};
pub use router::FallbackRouter;
