use crate::{constants::FLAGS_JSON, readiness::ReadySetter, Error};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Remote switches for optional parts of the interface. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub charts: bool,
    pub analytics: bool,
    pub background_animation: bool,
    pub popups: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            charts: true,
            analytics: false,
            background_animation: true,
            popups: true,
        }
    }
}

#[async_trait(?Send)]
pub trait FlagSource {
    async fn load(&self) -> Result<FeatureFlags, Error>;
}

/// Flags compiled into the binary for the selected network.
#[derive(Clone, Copy, Debug)]
pub struct StaticFlags(&'static str);

impl StaticFlags {
    pub const fn new(json: &'static str) -> Self {
        Self(json)
    }
}

impl Default for StaticFlags {
    fn default() -> Self {
        Self(FLAGS_JSON)
    }
}

#[async_trait(?Send)]
impl FlagSource for StaticFlags {
    async fn load(&self) -> Result<FeatureFlags, Error> {
        serde_json::from_str(self.0).map_err(Error::from)
    }
}

/// Loads flags from `source`, hands them to `apply`, then opens the readiness gate.
///
/// A failed load still opens the gate with default flags. A source that never completes keeps the
/// gate closed; there is no timeout at this level.
pub async fn load_flags<S>(source: &S, setter: ReadySetter, apply: impl FnOnce(FeatureFlags))
where
    S: FlagSource + ?Sized,
{
    let flags = match source.load().await {
        Ok(flags) => {
            debug!(?flags, "feature flags loaded");
            flags
        }
        Err(error) => {
            warn!(%error, "feature flags failed to load, using defaults");
            FeatureFlags::default()
        }
    };

    apply(flags);
    setter.mark_ready();
}
