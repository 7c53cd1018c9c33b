use leptos::prelude::*;
use lucide_leptos::ExternalLink;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="w-full flex flex-row justify-center gap-6 pt-16 pb-24 text-sm text-muted-foreground">
            <a
                href="https://docs.movementnetwork.xyz/"
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-1 no-underline"
            >
                "Docs"
                <ExternalLink size=12 />
            </a>
            <a
                href="https://github.com/movementlabsxyz"
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-1 no-underline"
            >
                "GitHub"
                <ExternalLink size=12 />
            </a>
        </div>
    }
}
