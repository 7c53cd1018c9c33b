use interface_core::{routing::Page, BASE_URL};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use lucide_leptos::ArrowLeft;
use tracing::info;

#[component]
pub fn RemoveLiquidity(coin_id_a: String, coin_id_b: String) -> impl IntoView {
    info!("rendering <RemoveLiquidity/>");

    on_cleanup(move || {
        info!("cleaning up <RemoveLiquidity/>");
    });

    view! {
        <Title text=Page::RemoveLiquidity.title() />
        <div class="w-full max-w-md flex flex-col gap-2 p-4 rounded-lg border bg-card">
            <div class="flex items-center gap-2">
                <A href=format!("{BASE_URL}/{}", Page::Pool.slug()) attr:class="inline-flex">
                    <ArrowLeft size=16 />
                </A>
                <div class="text-xl font-semibold">{Page::RemoveLiquidity.title()}</div>
            </div>
            <div class="p-3 rounded-md bg-muted font-mono">{coin_id_a}" / "{coin_id_b}</div>
        </div>
    }
}
