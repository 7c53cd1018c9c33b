use interface_core::{routing::Page, BASE_URL};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use lucide_leptos::Plus;
use tracing::info;

#[component]
pub fn Pool() -> impl IntoView {
    info!("rendering <Pool/>");

    on_cleanup(move || {
        info!("cleaning up <Pool/>");
    });

    view! {
        <Title text=Page::Pool.title() />
        <div class="w-full max-w-2xl flex flex-col gap-4 p-4">
            <div class="flex justify-between items-center">
                <div class="text-xl font-semibold">"Your liquidity"</div>
                // bare `add` is normalized to the default pair before anything renders
                <A
                    href=format!("{BASE_URL}/{}", Page::AddLiquidity.slug())
                    attr:class="inline-flex items-center gap-2 text-sm font-medium py-2 px-4 no-underline bg-primary text-primary-foreground rounded-md"
                >
                    <Plus size=16 />
                    "Add Liquidity"
                </A>
            </div>
            <p class="text-muted-foreground">"Connect a wallet to view your liquidity positions."</p>
        </div>
    }
}
