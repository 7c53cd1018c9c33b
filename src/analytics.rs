use interface_core::state::Flags;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use tracing::info;

/// Emits a page view for every distinct path while the `analytics` flag is on.
///
/// Listens to the location directly and never looks at how the path resolved, so it cannot hold up
/// routing.
pub fn use_analytics_reporter() {
    let flags = use_context::<Flags>().expect("flags context missing!");
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if flags.with(|flags| flags.analytics) {
            info!(target: "analytics", page_path = %path, "page view");
        }
    });
}
