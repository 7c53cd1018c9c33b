use interface_core::state::ModalSlot;
use leptos::{html::Dialog, prelude::*};
use lucide_leptos::X;
use tracing::info;

/// Renders whatever the [`ModalSlot`] context holds as a modal dialog.
#[component]
pub fn TopLevelModals() -> impl IntoView {
    info!("rendering <TopLevelModals/>");

    let slot = use_context::<ModalSlot>().expect("modal slot context missing!");
    let dialog_ref = NodeRef::<Dialog>::new();

    Effect::new(move |_| match dialog_ref.get() {
        Some(dialog) => match slot.with(Option::is_some) {
            true => {
                let _ = dialog.show_modal();
            }
            false => dialog.close(),
        },
        None => (),
    });

    let title = move || slot.with(|content| content.as_ref().map(|content| content.title.clone()));
    let body = move || slot.with(|content| content.as_ref().map(|content| content.body.clone()));

    view! {
        // escape closes the dialog natively, so keep the slot in sync
        <dialog
            node_ref=dialog_ref
            on:close=move |_| slot.close()
            class="inset-0 w-80 rounded border p-4 bg-background text-foreground"
        >
            <div class="flex items-center justify-between gap-4 mb-2">
                <h2 class="font-bold">{title}</h2>
                <button on:click=move |_| slot.close() class="text-muted-foreground">
                    <X size=16 />
                </button>
            </div>
            <p class="text-sm">{body}</p>
        </dialog>
    }
}
