use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::listeners::{use_navbar_observer, use_parallax_observer};
use super::modal::{CvModal, Lightbox};
use super::navbar::Navbar;
use super::sections::{About, Contact, CvSection, Footer, Hero, Projects};
use crate::content::{self, SiteContent, Variant};
use crate::view_state::ViewState;

fn page_class(variant: Variant) -> &'static str {
    match variant {
        Variant::Dark => {
            "relative min-h-screen bg-slate-950 text-slate-200 selection:bg-blue-500/30 overflow-hidden"
        }
        Variant::Light => {
            "relative min-h-screen bg-slate-900 text-slate-100 selection:bg-sky-400/30 overflow-hidden"
        }
        Variant::Classic => {
            "relative min-h-screen bg-neutral-950 text-neutral-200 selection:bg-blue-500/30 overflow-hidden"
        }
    }
}

/// Renders one version of the portfolio, or a notice if its content is broken.
#[component]
pub fn PortfolioPage(variant: Variant) -> impl IntoView {
    match content::load(variant) {
        Ok(content) => Either::Left(view! { <Portfolio variant content /> }),
        Err(e) => {
            log::error!("couldn't load {:?} content: {}", variant, e);
            Either::Right(view! {
                <Title text="Unavailable" />
                <div class="min-h-screen flex items-center justify-center bg-slate-950 text-slate-400">
                    <p>"This page is temporarily unavailable."</p>
                </div>
            })
        }
    }
}

#[component]
fn Portfolio(variant: Variant, content: Arc<SiteContent>) -> impl IntoView {
    let state = RwSignal::new(ViewState::new());
    let name = content.profile.name.clone();
    provide_context(content);
    provide_context(state);
    provide_context(variant);

    use_navbar_observer(state);
    let parallax = use_parallax_observer();

    view! {
        <Title text=name />
        <div class=page_class(variant)>
            <div
                id="bg-grid"
                class="absolute inset-0 bg-grid opacity-30 transition-transform duration-200"
                style:transform=move || parallax.get().transform()
            />
            <Navbar />
            <Hero />
            <About />
            <Projects />
            <CvSection />
            <Contact />
            <Footer />
            <Lightbox />
            <CvModal />
        </div>
    }
}
