use leptos::prelude::*;

use super::{homepage::SectionHeader, reveal::Reveal};
use crate::content::{Project, PROJECTS};

#[component]
fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm"
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-panel relative w-full max-w-2xl max-h-[85vh] overflow-y-auto bg-black rounded-3xl border border-white/10 p-8"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    on:click=move |_| on_close.run(())
                    class="absolute top-4 right-4 p-2 rounded-full bg-white/5 hover:bg-white/10 text-muted hover:text-white transition-colors"
                    aria-label="Close"
                >
                    "✕"
                </button>

                <div class=format!("inline-flex p-3 rounded-2xl bg-gradient-to-br {} mb-6", project.gradient)>
                    <i class=format!("{} text-3xl text-white", project.icon) />
                </div>

                <h3 class="text-3xl font-bold text-white mb-2">{project.title}</h3>
                <p class="text-brightBlue font-medium mb-2">{project.subtitle}</p>
                <p class="text-muted text-sm mb-6">{project.period}</p>
                <p class="text-foreground leading-relaxed mb-6">{project.full_description}</p>

                <h4 class="text-white font-semibold mb-3">"Key Achievements"</h4>
                <ul class="space-y-2 mb-8 text-muted">
                    {project.highlights.iter().map(|h| view! { <li class="bullet">{*h}</li> }).collect_view()}
                </ul>

                <h4 class="text-white font-semibold mb-3">"Technologies"</h4>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-3 py-1.5 text-sm bg-blue/10 text-brightBlue rounded-full border border-blue/20">
                                    {*t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: Callback<()>) -> impl IntoView {
    let hidden = project.hidden_tech();
    view! {
        <div
            on:click=move |_| on_open.run(())
            class=format!(
                "group cursor-pointer h-full p-6 rounded-3xl card hover:-translate-y-2 hover:scale-[1.02] transition-all duration-500 {}",
                project.border,
            )
        >
            <div class="flex items-start justify-between mb-5">
                <div class=format!(
                    "inline-flex p-3 rounded-2xl bg-gradient-to-br {} group-hover:scale-110 transition-transform duration-300",
                    project.gradient,
                )>
                    <i class=format!("{} text-2xl text-white", project.icon) />
                </div>
                <a
                    href=project.github_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=format!("{} on GitHub", project.title)
                    on:click=|ev| ev.stop_propagation()
                    class="p-2 rounded-lg bg-white/5 border border-white/10 hover:bg-white/10 hover:border-blue/50 text-muted hover:text-brightBlue transition-all duration-300"
                >
                    <i class="devicon-github-plain" />
                </a>
            </div>

            <h3 class="text-xl font-bold text-white mb-1 group-hover:text-brightBlue transition-colors">
                {project.title}
            </h3>
            <p class="text-muted text-sm font-medium mb-3">{project.subtitle}</p>
            <p class="text-muted text-xs mb-4">{project.period}</p>
            <p class="text-muted text-sm leading-relaxed mb-5">{project.description}</p>

            <div class="flex flex-wrap gap-2">
                {project
                    .card_tech()
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-2.5 py-1 text-xs bg-white/5 text-muted rounded-full border border-white/10">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
                {(hidden > 0)
                    .then(|| {
                        view! {
                            <span class="px-2.5 py-1 text-xs bg-blue/10 text-brightBlue rounded-full">
                                "+" {hidden}
                            </span>
                        }
                    })}
            </div>

            <div class="mt-5 pt-5 border-t border-white/5 flex items-center text-brightBlue text-sm font-medium opacity-0 group-hover:opacity-100 transition-opacity">
                "View Details ↗"
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (selected, set_selected) = signal(None::<usize>);
    let close = Callback::new(move |()| set_selected.set(None));

    view! {
        <section id="projects" class="py-32 px-6 relative">
            <div class="glow absolute bottom-0 right-0 w-96 h-96 bg-blue/10" />
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeader eyebrow="Portfolio" title="Featured" highlight="Projects" />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let on_open = Callback::new(move |()| set_selected.set(Some(i)));
                            view! {
                                <Reveal delay={100 * i as u32}>
                                    <ProjectCard project on_open />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|i| view! { <ProjectModal project={&PROJECTS[i]} on_close=close /> })
            }}
        </section>
    }
}
