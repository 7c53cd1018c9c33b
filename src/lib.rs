use interface_components::{
    BackgroundAnimation, Footer, Header, Loader, PopupStack, PoweredBy, TopLevelModals,
};
use interface_core::{
    load_flags, navigation_intent, readiness,
    routing::{NavigationIntent, Resolver},
    state::{Flags, ModalSlot, Popups, Readiness, Theme},
    StaticFlags, BASE_URL, NETWORK,
};
use leptos::{error::ErrorBoundary, prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::{
    components::Router,
    hooks::{use_location, use_navigate},
    NavigateOptions,
};
use tracing::{debug, info};

mod analytics;
mod routes;
mod theme;

use analytics::use_analytics_reporter;
use theme::use_theme;

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    debug!("network: {NETWORK}");

    // Global Contexts

    let (setter, gate) = readiness();
    let flags = Flags::default();

    provide_context(flags);
    provide_context(Readiness::new(gate));
    provide_context(Resolver::default());
    provide_context(Popups::default());
    provide_context(ModalSlot::default());

    spawn_local(async move {
        load_flags(&StaticFlags::default(), setter, move |loaded| flags.set(loaded)).await;
    });

    on_cleanup(move || {
        info!("cleaning up <App/>");
    });

    view! {
        <Router>
            <ErrorBoundary fallback=|errors| {
                view! {
                    <div class="min-h-screen flex flex-col items-center justify-center gap-2 p-8">
                        <div class="text-xl font-semibold">"Something went wrong"</div>
                        <ul class="text-sm text-muted-foreground">
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, error)| view! { <li>{error.to_string()}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                }
            }>
                <Shell />
            </ErrorBoundary>
        </Router>
    }
}

/// Static chrome around the routed body. Needs to live inside the `<Router>`.
#[component]
fn Shell() -> impl IntoView {
    info!("rendering <Shell/>");

    let flags = use_context::<Flags>().expect("flags context missing!");
    let location = use_location();

    let theme = use_theme();
    use_analytics_reporter();

    // `pathname` is a memo, so this runs once per distinct path
    Effect::new(move |_| {
        location.pathname.track();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    let animate_background = Signal::derive(move || flags.with(|flags| flags.background_animation));
    let show_popups = move || flags.with(|flags| flags.popups);

    view! {
        <div
            class="flex flex-col items-start min-h-screen bg-background text-foreground"
            class:dark=move || theme.get() == Theme::Dark
        >
            <header class="w-full fixed top-0 z-20 flex flex-col">
                <Header />
            </header>
            <main class="w-full flex flex-1 flex-col items-center z-10 pt-32 px-2 sm:px-4">
                <Show when=show_popups>
                    <PopupStack />
                </Show>
                <TopLevelModals />
                <Body />
            </main>
            <footer class="w-full flex justify-center z-30">
                <Footer />
            </footer>
            <PoweredBy />
            <BackgroundAnimation when=animate_background />
        </div>
    }
}

/// Resolves the current URL and shows the page it names, or the loader while flags load.
#[component]
fn Body() -> impl IntoView {
    let readiness = use_context::<Readiness>().expect("readiness context missing!");
    let resolver = use_context::<Resolver>().expect("resolver context missing!");
    let location = use_location();
    let navigate = use_navigate();

    // No matching happens until the gate opens.
    let intent = navigation_intent(
        readiness,
        resolver,
        location.pathname.into(),
        location.search.into(),
        BASE_URL,
    );

    Effect::new(move |_| {
        if let Some(NavigationIntent::Redirect { to, replace }) = intent.get() {
            let href = to.href(BASE_URL);
            debug!(%href, "redirecting to canonical url");
            navigate(
                &href,
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            );
        }
    });

    move || match intent.get() {
        None => view! { <Loader /> }.into_any(),
        // the effect above replaces the url; render nothing in between
        Some(NavigationIntent::Redirect { .. }) => ().into_any(),
        Some(NavigationIntent::Render { page, params }) => routes::page_view(page, params),
    }
}
