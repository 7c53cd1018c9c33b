use codee::string::FromToStringCodec;
use interface_core::{
    constants::{query_keys::THEME, THEME_STORAGE_KEY},
    state::{PopupKind, Popups, Theme},
};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use leptos_use::storage::use_local_storage;
use tracing::{debug, warn};

/// Persisted color theme. A `?theme=dark|light` query parameter overrides and saves it.
pub fn use_theme() -> Signal<Theme> {
    let query = use_query_map();
    let popups = use_context::<Popups>();
    let (theme, set_theme, _) = use_local_storage::<Theme, FromToStringCodec>(THEME_STORAGE_KEY);

    Effect::new(move |_| {
        let Some(requested) = query.with(|query| query.get(THEME)) else {
            return;
        };

        match requested.parse::<Theme>() {
            Ok(requested) if requested != theme.get_untracked() => {
                debug!(%requested, "theme set from query string");
                set_theme.set(requested);
            }
            Ok(_) => {}
            Err(error) => {
                warn!(%error, "ignoring theme query parameter");
                if let Some(popups) = popups {
                    popups.push(PopupKind::Error, error.to_string());
                }
            }
        }
    });

    theme
}
