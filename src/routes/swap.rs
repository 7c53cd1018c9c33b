use interface_core::{
    constants::query_keys::{INPUT_CURRENCY, OUTPUT_CURRENCY},
    routing::Page,
};
use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_router::{hooks::query_signal_with_options, NavigateOptions};
use lucide_leptos::ArrowUpDown;
use tracing::{debug, info};

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    // prevents scrolling to the top of the page each time a query param changes
    let nav_options = NavigateOptions {
        scroll: false,
        ..Default::default()
    };

    let (input, set_input) = query_signal_with_options::<String>(INPUT_CURRENCY, nav_options.clone());
    let (output, set_output) = query_signal_with_options::<String>(OUTPUT_CURRENCY, nav_options);

    let flip = move |_: ev::MouseEvent| {
        let (from, to) = (input.get_untracked(), output.get_untracked());
        debug!(?from, ?to, "flipping swap direction");
        set_input.set(to);
        set_output.set(from);
    };

    let label = |asset: Option<String>| asset.unwrap_or_else(|| "Select a token".to_string());

    view! {
        <Title text=Page::Swap.title() />
        <div class="w-full max-w-md flex flex-col gap-2 p-4 rounded-lg border bg-card">
            <div class="text-xl font-semibold">{Page::Swap.title()}</div>
            <div class="flex justify-between p-3 rounded-md bg-muted">
                <span class="text-muted-foreground">"From"</span>
                <span class="font-mono">{move || label(input.get())}</span>
            </div>
            <button
                on:click=flip
                class="self-center p-1 rounded-md border-none bg-secondary text-secondary-foreground"
            >
                <ArrowUpDown size=16 />
            </button>
            <div class="flex justify-between p-3 rounded-md bg-muted">
                <span class="text-muted-foreground">"To"</span>
                <span class="font-mono">{move || label(output.get())}</span>
            </div>
        </div>
    }
}
