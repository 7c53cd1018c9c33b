mod background;
mod footer;
mod header;
mod loader;
mod modal;
mod popups;
mod powered_by;

pub use background::BackgroundAnimation;
pub use footer::Footer;
pub use header::{Header, Nav};
pub use loader::Loader;
pub use modal::TopLevelModals;
pub use popups::PopupStack;
pub use powered_by::PoweredBy;
