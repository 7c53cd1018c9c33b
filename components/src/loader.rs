use leptos::prelude::*;
use tracing::info;

/// Placeholder shown while the shell waits on the feature flags.
#[component]
pub fn Loader(#[prop(into, default = "h-8 w-8".into())] size: String) -> impl IntoView {
    info!("rendering <Loader/>");

    view! {
        <div class="flex flex-1 w-full items-center justify-center py-24" role="status">
            <svg
                class=format!("animate-spin text-foreground {size}")
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
            >
                <circle
                    class="opacity-25"
                    cx="12"
                    cy="12"
                    r="10"
                    stroke="currentColor"
                    stroke-width="4"
                ></circle>
                <path
                    class="opacity-75"
                    fill="currentColor"
                    d="M4 12a8 8 0 0 1 8-8V0C5.373 0 0 5.373 0 12h4z"
                ></path>
            </svg>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
