use interface_core::{routing::Page, state::Flags};
use leptos::prelude::*;
use leptos_meta::Title;
use tracing::info;

#[component]
pub fn Chart() -> impl IntoView {
    info!("rendering <Chart/>");

    let flags = use_context::<Flags>().expect("flags context missing!");
    let enabled = move || flags.with(|flags| flags.charts);

    view! {
        <Title text=Page::Chart.title() />
        <div class="w-full max-w-2xl flex flex-col gap-4 p-4">
            <div class="text-xl font-semibold">{Page::Chart.title()}</div>
            <Show
                when=enabled
                fallback=|| view! { <p class="text-muted-foreground">"Charts are currently disabled."</p> }
            >
                <div class="h-64 rounded-lg border bg-card"></div>
            </Show>
        </div>
    }
}
