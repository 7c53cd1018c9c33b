pub mod constants;
mod error;
pub mod flags;
pub mod readiness;
pub mod routing;
pub mod state;

pub use constants::{BASE_URL, DEFAULT_INPUT, DEFAULT_OUTPUT, NETWORK};
pub use error::Error;
pub use flags::{load_flags, FeatureFlags, FlagSource, StaticFlags};
pub use readiness::{readiness, ReadinessGate, ReadySetter};
pub use routing::{Location, NavigationIntent, Page, PathParams, Query, Resolver};
pub use state::{
    navigation_intent, Flags, ModalContent, ModalSlot, Popup, PopupKind, PopupQueue, Popups,
    Readiness, Theme,
};
