use std::sync::Arc;

use leptos::prelude::*;

use super::dom::scroll_to;
use crate::content::SiteContent;
use crate::scroll::Section;
use crate::view_state::ViewState;

#[component]
pub fn Navbar() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let state = expect_context::<RwSignal<ViewState>>();
    // only re-render when the flag flips, not on every state change
    let solid = Memo::new(move |_| state.with(|s| s.navbar_solid()));

    view! {
        <header class=move || {
            if solid.get() {
                "fixed top-0 left-0 w-full z-50 transition-colors bg-black/60 backdrop-blur border-b border-slate-800"
            } else {
                "fixed top-0 left-0 w-full z-50 transition-colors bg-transparent"
            }
        }>
            <div class="max-w-6xl mx-auto flex items-center justify-between px-6 py-4">
                <h1 class="font-bold text-lg">{content.profile.name.clone()}</h1>
                <nav class="flex gap-6 text-sm text-slate-300">
                    {Section::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="hover:text-white"
                                    on:click=move |_| scroll_to(section.id())
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
