use leptos::{ev::MouseEvent, html, prelude::*};
use wasm_bindgen::JsCast;

use super::{
    homepage::SectionHeader,
    reveal::{use_revealed, Reveal},
};
use crate::content::{Achievement, Stat, ACHIEVEMENTS, STATS};

#[component]
fn StatCard(stat: &'static Stat, delay: u32) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let in_view = use_revealed(node_ref);
    view! {
        <div node_ref=node_ref class="p-6 rounded-3xl bg-white/5 border border-white/10 backdrop-blur-sm">
            <div
                class=move || {
                    if in_view.get() {
                        "reveal reveal-visible flex items-end gap-2"
                    } else {
                        "reveal flex items-end gap-2"
                    }
                }
                style=format!("transition-delay: {delay}ms")
            >
                <span class="text-4xl md:text-5xl font-bold tracking-tight text-white">
                    {move || if in_view.get() { stat.value } else { 0 }}
                </span>
                <span class="text-xl font-semibold text-brightBlue">{stat.suffix}</span>
            </div>
            <p class="text-muted mt-2">{stat.label}</p>
        </div>
    }
}

/// Card with a soft highlight that follows the cursor.
#[component]
fn SpotlightCard(achievement: &'static Achievement) -> impl IntoView {
    let (pos, set_pos) = signal((0.0, 0.0));
    let (hovered, set_hovered) = signal(false);

    let track = move |ev: MouseEvent| {
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_pos.set((
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
        ));
    };

    view! {
        <div
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:mousemove=track
            class="relative overflow-hidden p-7 rounded-3xl card card-lift hover:border-blue/30"
        >
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-0 transition-opacity duration-300"
                style=move || {
                    let (x, y) = pos.get();
                    let opacity = if hovered.get() { 1 } else { 0 };
                    format!(
                        "opacity: {opacity}; background: radial-gradient(260px circle at {x}px {y}px, rgba(59,130,246,0.18), transparent 60%)",
                    )
                }
            />
            <div class="relative">
                <div class="flex items-start justify-between gap-4">
                    <div class="flex items-start gap-4">
                        <div class="p-3 rounded-2xl bg-white/10 text-white">
                            <i class=achievement.icon />
                        </div>
                        <div>
                            <h3 class="text-white text-lg md:text-xl font-semibold">
                                {achievement.title}
                            </h3>
                            <p class="text-muted mt-1">{achievement.subtitle}</p>
                        </div>
                    </div>
                    {achievement
                        .tag
                        .map(|tag| {
                            view! {
                                <span class="text-xs px-3 py-1 rounded-full bg-blue/10 text-brightBlue border border-blue/20 whitespace-nowrap">
                                    {tag}
                                </span>
                            }
                        })}
                </div>
                <ul class="mt-5 space-y-2 text-foreground">
                    {achievement
                        .bullets
                        .iter()
                        .map(|b| view! { <li class="bullet leading-relaxed">{*b}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <section id="achievements" class="py-32 px-6 relative">
            <div class="glow absolute top-1/2 left-1/3 w-[650px] h-[650px] bg-blue/10" />
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeader
                    eyebrow="Highlights"
                    title="Achievements"
                    highlight="& Momentum"
                    blurb="A few milestones that reflect impact, leadership, and technical growth, with a focus on building real, polished software."
                />

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-5 mb-10">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| view! { <StatCard stat delay={50 + 70 * i as u32} /> })
                        .collect_view()}
                    <div class="p-6 rounded-3xl bg-white/5 border border-white/10 backdrop-blur-sm">
                        <div class="flex items-center gap-3">
                            <div class="p-3 rounded-2xl bg-white/10 text-white">
                                <i class="extra-sparkles" />
                            </div>
                            <div>
                                <p class="text-white font-semibold">"Certifications"</p>
                                <p class="text-muted">"AWS CCP + SA (pursuing)"</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="grid lg:grid-cols-2 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(i, achievement)| {
                            view! {
                                <Reveal delay={80 * i as u32}>
                                    <SpotlightCard achievement />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
