use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::homepage::SocialIcon;
use crate::content::{PROFILE, SOCIAL_LINKS};

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_date() -> Option<String> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.format("%b %-d, %Y").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer class="py-12 px-6 border-t border-white/5">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="flex flex-col items-center md:items-start gap-2">
                    <span class="text-xl font-bold text-white">
                        <span class="text-gradient">{PROFILE.first_name}</span>
                        " "
                        {PROFILE.last_name}
                    </span>
                    <p class="text-muted text-sm">
                        "Built with " <span class="text-red">"♥"</span> " in " {PROFILE.location}
                    </p>
                </div>

                <div class="flex items-center gap-4">
                    {SOCIAL_LINKS.iter().map(|&link| view! { <SocialIcon link small=true /> }).collect_view()}
                </div>

                <div class="text-muted text-sm text-center md:text-right">
                    <p>"© " {year} " All rights reserved."</p>
                    {build_date().map(|d| view! { <p class="text-xs opacity-60">"Last built " {d}</p> })}
                </div>
            </div>
        </footer>
    }
}
