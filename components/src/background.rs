use leptos::prelude::*;
use tracing::info;

const BLOCKS: usize = 12;

/// Decorative zooming blocks behind the page content. Purely visual; never blocks input.
#[component]
pub fn BackgroundAnimation(#[prop(into)] when: Signal<bool>) -> impl IntoView {
    info!("rendering <BackgroundAnimation/>");

    view! {
        <Show when=move || when.get()>
            <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none" aria-hidden="true">
                {(0..BLOCKS)
                    .map(|index| {
                        let style = format!(
                            "left: {}%; top: {}%; animation-delay: {}ms;",
                            (index * 37) % 100,
                            (index * 61) % 100,
                            index * 250,
                        );
                        view! { <div class="absolute h-6 w-6 rounded-sm bg-primary/10 animate-block-zoom" style=style></div> }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
