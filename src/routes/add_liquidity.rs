use interface_core::{routing::Page, BASE_URL};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use lucide_leptos::ArrowLeft;
use tracing::info;

#[component]
pub fn AddLiquidity(coin_id_a: Option<String>, coin_id_b: Option<String>) -> impl IntoView {
    info!("rendering <AddLiquidity/>");

    on_cleanup(move || {
        info!("cleaning up <AddLiquidity/>");
    });

    let label = |coin_id: Option<String>| coin_id.unwrap_or_else(|| "Select a token".to_string());

    view! {
        <Title text=Page::AddLiquidity.title() />
        <div class="w-full max-w-md flex flex-col gap-2 p-4 rounded-lg border bg-card">
            <div class="flex items-center gap-2">
                <A href=format!("{BASE_URL}/{}", Page::Pool.slug()) attr:class="inline-flex">
                    <ArrowLeft size=16 />
                </A>
                <div class="text-xl font-semibold">{Page::AddLiquidity.title()}</div>
            </div>
            <div class="flex justify-between p-3 rounded-md bg-muted">
                <span class="text-muted-foreground">"Token A"</span>
                <span class="font-mono">{label(coin_id_a)}</span>
            </div>
            <div class="flex justify-between p-3 rounded-md bg-muted">
                <span class="text-muted-foreground">"Token B"</span>
                <span class="font-mono">{label(coin_id_b)}</span>
            </div>
        </div>
    }
}
