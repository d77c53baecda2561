use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    achievements::AchievementsSection, contact::ContactSection, projects::ProjectsSection,
    reveal::Reveal, skills::SkillsSection,
};
use crate::content::{Link, BIO, PROFILE, SOCIAL_LINKS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <AboutSection />
        <SkillsSection />
        <AchievementsSection />
        <ProjectsSection />
        <ContactSection />
    }
}

/// Eyebrow label plus a two-tone heading, shared by every section.
#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    highlight: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <span class="text-blue text-sm font-medium tracking-widest uppercase mb-4 block">
                {eyebrow}
            </span>
            <h2 class="text-4xl md:text-5xl font-bold text-white mb-4">
                {title} " " <span class="text-gradient">{highlight}</span>
            </h2>
            {blurb.map(|b| view! { <p class="text-muted max-w-2xl mx-auto">{b}</p> })}
        </Reveal>
    }
}

#[component]
pub fn SocialIcon(link: Link, #[prop(optional)] small: bool) -> impl IntoView {
    let size = if small { "p-2.5 text-base" } else { "p-3 text-xl" };
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=link.label
            class=format!(
                "rounded-full bg-white/5 border border-white/10 text-muted hover:text-brightBlue hover:border-blue/50 hover:-translate-y-0.5 transition-all duration-300 {size}",
            )
        >
            <i class=link.icon />
        </a>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex flex-col justify-center items-center relative px-6 pt-20">
            <div class="glow absolute top-1/4 left-1/4 w-96 h-96 bg-blue/20" />
            <div class="glow absolute bottom-1/4 right-1/4 w-80 h-80 bg-blue/10" />

            <div class="hero-enter relative z-10 flex flex-col items-center text-center max-w-4xl">
                <div class="relative mb-8">
                    <div class="w-40 h-40 md:w-48 md:h-48 rounded-full overflow-hidden border-2 border-blue/50 p-1">
                        <img
                            src=PROFILE.photo_url
                            alt=PROFILE.full_name
                            class="w-full h-full object-cover rounded-full"
                        />
                    </div>
                    <div class="absolute -bottom-2 -right-2 w-6 h-6 bg-green rounded-full border-4 border-background" />
                </div>

                <h1 class="text-5xl md:text-7xl font-bold tracking-tight mb-4">
                    <span class="text-white">{PROFILE.first_name} " "</span>
                    <span class="text-gradient">{PROFILE.last_name}</span>
                </h1>
                <p class="text-lg md:text-xl text-muted font-medium mb-6">{PROFILE.title}</p>
                <p class="text-muted text-base md:text-lg max-w-2xl leading-relaxed mb-10">
                    {PROFILE.tagline[0]}
                    <br class="hidden md:block" />
                    {PROFILE.tagline[1]}
                </p>

                <div class="flex items-center gap-4 mb-12">
                    {SOCIAL_LINKS.iter().map(|&link| view! { <SocialIcon link /> }).collect_view()}
                </div>

                <div class="flex flex-col sm:flex-row gap-4">
                    <a
                        href="#projects"
                        class="px-8 py-3.5 bg-blue hover:bg-brightBlue text-white font-medium rounded-full transition-all duration-300 shadow-lg hover:scale-[1.02]"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3.5 bg-white/5 hover:bg-white/10 text-white font-medium rounded-full border border-white/10 hover:border-white/20 transition-all duration-300 hover:scale-[1.02]"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 scroll-hint flex flex-col items-center gap-2 text-muted">
                <span class="text-xs tracking-widest uppercase">"Scroll"</span>
                <span>"⌄"</span>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let stats = [
        ("12+", "Sessions Led"),
        ("20+", "Mentoring Hours"),
        ("15-20", "Students Taught"),
    ];
    view! {
        <section id="about" class="py-32 px-6 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeader eyebrow="About Me" title="Passionate about" highlight="building" />

                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal class="space-y-6">
                        <div class="card p-8 rounded-3xl">
                            <p class="text-foreground leading-relaxed text-lg">{BIO[0]}</p>
                            <p class="text-muted leading-relaxed mt-4">{BIO[1]}</p>
                            <p class="text-muted leading-relaxed mt-4">{BIO[2]}</p>
                        </div>
                    </Reveal>

                    <Reveal class="space-y-6" delay=150>
                        <div class="card card-lift p-6 rounded-2xl border-blue/20 hover:border-blue/40">
                            <div class="flex items-start gap-4">
                                <div class="p-3 rounded-xl bg-blue/20 text-brightBlue">
                                    <i class="extra-graduation" />
                                </div>
                                <div>
                                    <h3 class="text-white font-semibold text-lg mb-1">"Education"</h3>
                                    <p class="text-brightBlue font-medium">"Bachelor's in Computer Science"</p>
                                    <p class="text-muted text-sm mt-1">"The University of Texas at Dallas"</p>
                                    <p class="text-muted text-sm">"Fall 2025 – Spring 2027"</p>
                                </div>
                            </div>
                        </div>

                        <div class="card card-lift p-6 rounded-2xl hover:border-white/20">
                            <div class="flex items-start gap-4">
                                <div class="p-3 rounded-xl bg-white/10 text-white">
                                    <i class="extra-users" />
                                </div>
                                <div>
                                    <h3 class="text-white font-semibold text-lg mb-1">"Leadership Experience"</h3>
                                    <p class="text-foreground font-medium">"C++ Learning Club Co-Founder & Instructor"</p>
                                    <ul class="text-muted text-sm mt-2 space-y-1">
                                        <li class="bullet">"Led 12+ weekly sessions for 15-20 students"</li>
                                        <li class="bullet">"20+ hours of one-on-one mentorship"</li>
                                        <li class="bullet">"Covered variables, loops, functions, OOP"</li>
                                    </ul>
                                </div>
                            </div>
                        </div>

                        <div class="grid grid-cols-3 gap-4">
                            {stats
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="p-4 rounded-2xl bg-white/5 border border-white/10 text-center hover:scale-105 hover:border-blue/50 transition-all">
                                            <div class="text-2xl font-bold text-brightBlue">{value}</div>
                                            <div class="text-xs text-muted mt-1">{label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
