use std::sync::Arc;

use leptos::prelude::*;

use crate::content::SiteContent;
use crate::view_state::{Modal, ViewState};

#[component]
fn ModalFrame(children: Children) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    view! {
        <div class="fixed inset-0 bg-black/90 backdrop-blur-lg flex flex-col items-center justify-center z-[999] fade-in">
            <button
                class="absolute top-6 right-6 text-white hover:text-red-400 text-2xl font-bold"
                aria-label="Close"
                on:click=move |_| state.update(ViewState::close_modal)
            >
                "✕"
            </button>
            {children()}
        </div>
    }
}

/// One gallery image at a time, with wrapping prev/next controls.
#[component]
pub fn Lightbox() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let state = expect_context::<RwSignal<ViewState>>();
    let image = Memo::new({
        let content = content.clone();
        move |_| state.with(|s| s.lightbox_image(&content).map(str::to_string))
    });

    move || {
        image.get().map(|src| {
            let prev_content = content.clone();
            let next_content = content.clone();
            view! {
                <ModalFrame>
                    <div class="relative w-full max-w-5xl flex items-center justify-center">
                        <button
                            class="absolute left-0 p-4 text-white text-4xl hover:text-blue-400"
                            aria-label="Previous image"
                            on:click=move |_| state.update(|s| s.prev_image(&prev_content))
                        >
                            "‹"
                        </button>
                        // re-created per image, so the slide-in replays
                        <div class="w-full flex justify-center slide-in">
                            <img
                                src=src
                                alt="showcase"
                                width="1000"
                                height="600"
                                class="object-contain max-h-[80vh] w-auto rounded-lg shadow-lg"
                            />
                        </div>
                        <button
                            class="absolute right-0 p-4 text-white text-4xl hover:text-blue-400"
                            aria-label="Next image"
                            on:click=move |_| state.update(|s| s.next_image(&next_content))
                        >
                            "›"
                        </button>
                    </div>
                </ModalFrame>
            }
        })
    }
}

#[component]
pub fn CvModal() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let state = expect_context::<RwSignal<ViewState>>();
    let open = Memo::new(move |_| state.with(|s| s.modal() == Modal::Cv));
    let src = content.profile.cv_image.clone();
    let alt = format!("CV - {}", content.profile.name);

    move || {
        open.get().then(|| {
            view! {
                <ModalFrame>
                    <div class="relative w-full max-w-4xl flex justify-center p-4">
                        <div class="w-full flex justify-center rise-in">
                            <img
                                src=src.clone()
                                alt=alt.clone()
                                width="1000"
                                height="1400"
                                class="object-contain max-h-[90vh] w-auto rounded-lg shadow-lg"
                            />
                        </div>
                    </div>
                </ModalFrame>
            }
        })
    }
}
