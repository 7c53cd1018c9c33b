use interface_core::BASE_URL;
use leptos::prelude::*;

/// Fixed badge in the bottom-right corner. Centered above the footer on small screens.
#[component]
pub fn PoweredBy() -> impl IntoView {
    view! {
        <div class="fixed z-50 w-80 bottom-40 left-1/2 -translate-x-1/2 md:left-auto md:translate-x-0 md:right-5 md:bottom-10">
            <div class="flex justify-between items-center">
                <span class="pt-1">"Powered by"</span>
                <a href="https://movementlabs.xyz/" target="_blank" rel="noopener noreferrer">
                    <img
                        src=format!("{BASE_URL}/images/movement-text-logo.svg")
                        alt="Movement"
                        class="h-6 dark:invert"
                    />
                </a>
            </div>
        </div>
    }
}
