use interface_core::{
    routing::Page,
    state::{ModalContent, ModalSlot},
    BASE_URL, DEFAULT_INPUT, DEFAULT_OUTPUT, NETWORK,
};
use leptos::prelude::*;
use leptos_router::components::A;
use lucide_leptos::{ArrowUpDown, Gauge, Waves};
use tracing::info;

#[component]
pub fn Header() -> impl IntoView {
    info!("rendering <Header/>");

    let modal = use_context::<ModalSlot>().expect("modal slot context missing!");
    let show_network = move |_| {
        modal.open(ModalContent::new(
            format!("Connected to {NETWORK}"),
            format!("Default pair: {DEFAULT_INPUT} / {DEFAULT_OUTPUT}"),
        ))
    };

    view! {
        <div class="w-full p-4 flex justify-between items-center border-b bg-background">
            <div class="flex flex-row items-center gap-4">
                <a
                    href=format!("{BASE_URL}/{}", Page::Swap.slug())
                    class="font-bold text-2xl no-underline hover:rotate-3 transition-transform duration-300"
                >
                    "movement"
                </a>
                <div class="hidden sm:inline-flex">
                    <Nav />
                </div>
            </div>
            <button
                on:click=show_network
                class="px-2 py-1 rounded-md border text-xs uppercase text-muted-foreground"
            >
                {NETWORK}
            </button>
        </div>
        <div class="sm:hidden block w-full px-1 py-0.5 border-b">
            <Nav />
        </div>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let href = |page: Page| format!("{BASE_URL}/{}", page.slug());

    view! {
        <nav class="leading-tight flex flex-row items-center">
            <A
                href=href(Page::Swap)
                attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none inline-flex items-center gap-1"
            >
                <ArrowUpDown size=14 />
                "Swap"
            </A>
            <A
                href=href(Page::Pool)
                attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none inline-flex items-center gap-1"
            >
                <Waves size=14 />
                "Pool"
            </A>
            <A
                href=href(Page::Chart)
                attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none inline-flex items-center gap-1"
            >
                <Gauge size=14 />
                "Charts"
            </A>
        </nav>
    }
}
