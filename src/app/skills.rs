use leptos::prelude::*;

use super::{homepage::SectionHeader, reveal::Reveal};
use crate::content::{CERTIFICATIONS, SKILL_CATEGORIES};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (category, set_category) = signal(0usize);

    let tabs = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let selected = move || category.get() == i;
            view! {
                <button
                    on:click=move |_| set_category.set(i)
                    class=move || {
                        if selected() {
                            "flex items-center gap-2 px-5 py-2.5 rounded-full text-sm font-medium transition-all duration-300 bg-blue text-white shadow-lg"
                        } else {
                            "flex items-center gap-2 px-5 py-2.5 rounded-full text-sm font-medium transition-all duration-300 bg-white/5 text-muted hover:bg-white/10 hover:text-white border border-white/10"
                        }
                    }
                    aria-pressed=move || selected().to_string()
                >
                    <i class=c.icon />
                    {c.title}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="py-32 px-6 relative overflow-hidden">
            <div class="glow absolute top-1/2 left-0 w-96 h-96 bg-blue/10" />
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeader eyebrow="Technical Expertise" title="Skills &" highlight="Technologies" />

                <Reveal class="flex flex-wrap justify-center gap-3 mb-12" delay=100>
                    {tabs}
                </Reveal>

                // keyed on the category so the bars animate again on every switch
                {move || {
                    let skills = &SKILL_CATEGORIES[category.get()].skills;
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4 mb-16">
                            {skills
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <div
                                            class="skill-card card card-lift p-5 rounded-2xl hover:border-blue/30"
                                            style=format!("animation-delay: {}ms", i * 50)
                                        >
                                            <div class="flex justify-between items-center mb-3">
                                                <span class="text-white font-medium">{skill.name}</span>
                                                <span class="text-brightBlue text-sm font-semibold">
                                                    {skill.level} "%"
                                                </span>
                                            </div>
                                            <div class="h-2 bg-white/10 rounded-full overflow-hidden">
                                                <div
                                                    class="skill-bar h-full rounded-full"
                                                    style=format!(
                                                        "--level: {}%; animation-delay: {}ms",
                                                        skill.level,
                                                        i * 50 + 200,
                                                    )
                                                />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }}

                <Reveal class="max-w-2xl mx-auto">
                    <div class="flex items-center justify-center gap-2 mb-6">
                        <i class="extra-award text-brightBlue" />
                        <h3 class="text-xl font-semibold text-white">"Certifications"</h3>
                    </div>
                    <div class="grid sm:grid-cols-2 gap-4">
                        {CERTIFICATIONS
                            .iter()
                            .map(|cert| {
                                let (status, color) = if cert.completed {
                                    ("Completed", "text-green")
                                } else {
                                    ("Pursuing", "text-brightBlue")
                                };
                                view! {
                                    <div class="card p-5 rounded-2xl hover:border-blue/30 hover:scale-[1.02] transition-all duration-300">
                                        <p class="text-white font-medium text-sm">{cert.name}</p>
                                        <p class=format!("text-xs mt-1 {color}")>{status}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
