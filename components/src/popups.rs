use interface_core::state::{Popup, PopupKind, Popups};
use leptos::prelude::*;
use lucide_leptos::X;
use tracing::info;

#[component]
pub fn PopupStack() -> impl IntoView {
    info!("rendering <PopupStack/>");

    let popups = use_context::<Popups>().expect("popups context missing!");

    view! {
        <div class="fixed top-24 right-4 z-40 flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]">
            <For
                each=move || popups.with(|queue| queue.iter().cloned().collect::<Vec<_>>())
                key=|popup| popup.id
                children=move |popup: Popup| {
                    let id = popup.id;
                    view! {
                        <div
                            role="status"
                            class="flex items-start justify-between gap-2 p-3 rounded border bg-background text-sm"
                            class=("border-red-500", popup.kind == PopupKind::Error)
                        >
                            <span>{popup.message}</span>
                            <button
                                on:click=move |_| popups.dismiss(id)
                                class="text-muted-foreground hover:text-foreground"
                            >
                                <X size=14 />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
