use std::sync::Arc;

use leptos::{either::Either, ev::MouseEvent, prelude::*};

use super::dom::{open_external, scroll_to};
use super::reveal::{Reveal, REVEAL_AMOUNT_TALL};
use crate::content::{Project, SiteContent, Variant};
use crate::scroll::Section;
use crate::view_state::{Activation, ViewState};

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let profile = &content.profile;
    let portfolio_link = profile.portfolio_link.clone();

    view! {
        <section
            id=Section::Hero.id()
            class="flex flex-col justify-center items-center text-center h-screen px-6 relative z-10"
        >
            <div class="w-40 h-40 mb-6 rounded-full overflow-hidden border-4 border-blue-500 shadow-lg cursor-pointer transition-transform hover:scale-105 hover:shadow-blue-500/50 pop-in">
                <img
                    src=profile.photo.clone()
                    alt=profile.name.clone()
                    width="160"
                    height="160"
                    class="object-cover"
                />
            </div>
            <Reveal delay=0.2>
                <h2 class="text-5xl font-bold mb-4">
                    "Hi, I'm " <span class="text-blue-400">{profile.name.clone()}</span>
                </h2>
            </Reveal>
            <Reveal delay=0.4>
                <p class="text-slate-400 max-w-xl mb-6">{profile.description.clone()}</p>
            </Reveal>
            <Reveal delay=0.6 class="flex gap-4">
                <button
                    class="px-4 py-2 rounded-md bg-blue-500 hover:bg-blue-600 hover:shadow-lg hover:shadow-blue-500/50 transition"
                    on:click=move |_| open_external(&portfolio_link)
                >
                    "Portfolio →"
                </button>
                <button
                    class="px-4 py-2 rounded-md border border-slate-700 hover:bg-slate-800 hover:shadow-lg hover:shadow-blue-500/30 transition"
                    on:click=move |_| scroll_to(Section::Contact.id())
                >
                    "Contact Me"
                </button>
            </Reveal>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let profile = &content.profile;

    view! {
        <section id=Section::About.id() class="px-8 py-20 max-w-5xl mx-auto relative z-10">
            <Reveal>
                <h3 class="text-3xl font-bold mb-8">"About Me"</h3>
                <p class="text-slate-400 leading-relaxed">
                    {format!("{} - {}", profile.role, profile.description)}
                </p>
                <div class="flex flex-wrap gap-4 mt-6">
                    {content
                        .tools
                        .iter()
                        .map(|tool| {
                            view! {
                                <div class="w-12 h-12 flex items-center justify-center p-2 rounded bg-slate-800 shadow transition-transform hover:scale-125 hover:shadow-blue-500/50">
                                    <img
                                        src=tool.icon.clone()
                                        alt=tool.name.clone()
                                        title=tool.name.clone()
                                        width="40"
                                        height="40"
                                        class="object-contain"
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let cards = content
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| view! { <ProjectCard index project=project.clone() /> })
        .collect_view();

    view! {
        <section id=Section::Projects.id() class="px-8 py-20 bg-slate-900 relative z-10">
            <Reveal amount=REVEAL_AMOUNT_TALL>
                <h3 class="text-3xl font-bold mb-8">"Projects"</h3>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
            </Reveal>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let variant = expect_context::<Variant>();
    let state = expect_context::<RwSignal<ViewState>>();
    let label = variant.button_label(&project.target);

    let activate = move |_: MouseEvent| {
        let res = state.try_update(|s| s.activate(&content, index)).flatten();
        if let Some(Activation::OpenLink(url)) = res {
            open_external(&url);
        }
    };

    let image = view! {
        <img src=project.image.clone() alt=project.title.clone() class="w-full h-full object-cover" />
    };
    let image = if variant.image_is_link() {
        Either::Left(view! {
            <button class="relative block w-full h-40 cursor-pointer" on:click=activate.clone()>
                {image}
            </button>
        })
    } else {
        Either::Right(view! { <div class="relative w-full h-40">{image}</div> })
    };

    view! {
        <div class="rounded-xl overflow-hidden bg-slate-900 border border-slate-800 transition hover:-translate-y-2 hover:shadow-[0_0_20px_rgba(59,130,246,0.5)]">
            {image}
            <div class="p-6">
                <h4 class="text-xl font-semibold text-blue-400 mb-2">{project.title.clone()}</h4>
                <p class="text-slate-400 mb-4">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-0.5 rounded-md text-xs bg-slate-800 text-slate-300">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                {label
                    .map(|label| {
                        view! {
                            <button
                                class="px-3 py-1.5 rounded-md text-sm border border-slate-700 hover:shadow hover:shadow-blue-500/50"
                                on:click=activate
                            >
                                {label}
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
pub fn CvSection() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    view! {
        <section id=Section::Cv.id() class="px-8 py-20 max-w-5xl mx-auto relative z-10">
            <Reveal class="text-center">
                <h3 class="text-3xl font-bold mb-8">"My CV"</h3>
                <p class="text-slate-400 mb-6">"Click the button below to view my CV."</p>
                <button
                    class="px-4 py-2 rounded-md bg-blue-500 hover:bg-blue-600 hover:shadow-lg hover:shadow-blue-500/50"
                    on:click=move |_| state.update(ViewState::open_cv)
                >
                    "View CV"
                </button>
            </Reveal>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();
    let profile = &content.profile;

    view! {
        <section id=Section::Contact.id() class="px-8 py-20 max-w-4xl mx-auto relative z-10">
            <Reveal>
                <h3 class="text-3xl font-bold mb-8">"CONTACT ME"</h3>
                <p class="text-slate-400 mb-6">"You can reach me through the following platforms:"</p>
                <div class="flex gap-6 flex-wrap">
                    <a
                        href=format!("mailto:{}", profile.email)
                        class="flex items-center gap-2 transition-transform hover:scale-110 hover:-rotate-6 hover:text-blue-400"
                    >
                        "✉ "
                        {profile.email.clone()}
                    </a>
                    <a
                        href=profile.instagram.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 transition-transform hover:scale-110 hover:rotate-6 hover:text-pink-400"
                    >
                        "Instagram"
                    </a>
                    <a
                        href=format!("tel:{}", profile.phone)
                        class="flex items-center gap-2 transition-transform hover:scale-110 hover:rotate-3 hover:text-blue-400"
                    >
                        "☎ "
                        {profile.phone.clone()}
                    </a>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<Arc<SiteContent>>();

    view! {
        <footer class="text-center py-6 border-t border-slate-800 text-slate-500 text-sm relative z-10">
            {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), content.profile.name)}
            <div class="mt-4">
                <button
                    class="inline-flex items-center gap-2 hover:text-white"
                    on:click=move |_| scroll_to(Section::Hero.id())
                >
                    "↑ Back to top"
                </button>
            </div>
        </footer>
    }
}
