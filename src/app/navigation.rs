use std::sync::{Arc, Mutex};

use leptos::{either::Either, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::{
    content::{section_ids, NAV_ITEMS, PROFILE},
    sections::{
        is_scrolled, SectionId, SectionTracker, SectionVisibility, OBSERVER_ROOT_MARGIN,
        OBSERVER_THRESHOLDS,
    },
};

fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no section #{id} to scroll to");
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn to_visibility(entry: &web_sys::IntersectionObserverEntry) -> SectionVisibility {
    SectionVisibility::new(
        entry.target().id(),
        entry.is_intersecting(),
        entry.intersection_ratio(),
        entry.bounding_client_rect().top(),
    )
}

#[component]
pub fn Navigation() -> impl IntoView {
    let tracker = SectionTracker::new(&section_ids());
    let selectors = tracker.selectors();
    let tracker = Arc::new(Mutex::new(tracker));
    let (active, set_active) = signal::<SectionId>(NAV_ITEMS[0].id);
    let (menu_open, set_menu_open) = signal(false);

    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    Effect::new({
        let tracker = tracker.clone();
        move |_| {
            let doc = document();
            let mut tracker = tracker.lock().expect("should be able to lock tracker");
            let present = tracker
                .watched()
                .filter(|id| doc.get_element_by_id(id).is_some())
                .collect::<Vec<_>>();
            tracker.retain_present(&present);
            set_active.set(tracker.active());
        }
    });

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        selectors,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            let changed = tracker
                .lock()
                .expect("should be able to lock tracker")
                .observe(entries.iter().map(to_visibility));
            if let Some(id) = changed {
                set_active.set(id);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(OBSERVER_THRESHOLDS.to_vec())
            .root_margin(OBSERVER_ROOT_MARGIN.to_string()),
    );
    on_cleanup(stop);

    let go_to = move |id: SectionId| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            set_menu_open.set(false);
            scroll_to_section(id);
        }
    };

    view! {
        <nav class=move || {
            let base = "nav-enter fixed top-0 left-0 right-0 z-50 transition-all duration-300";
            if scrolled.get() {
                format!("{base} bg-background/80 backdrop-blur-xl border-b border-white/5")
            } else {
                format!("{base} bg-transparent")
            }
        }>
            <div class="max-w-6xl mx-auto px-6">
                <div class="flex items-center justify-between h-20">
                    <a
                        href="#"
                        on:click=go_to(NAV_ITEMS[0].id)
                        class="text-xl font-bold text-white hover:scale-105 transition-transform"
                    >
                        <span class="text-gradient">{PROFILE.initials.0}</span>
                        {PROFILE.initials.1}
                    </a>

                    <div class="hidden md:flex items-center gap-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                let is_active = move || active.get() == id;
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        on:click=go_to(id)
                                        class=move || {
                                            if is_active() {
                                                "nav-link relative px-4 py-2 text-sm text-white"
                                            } else {
                                                "nav-link relative px-4 py-2 text-sm text-muted hover:text-white"
                                            }
                                        }
                                        aria-current=move || is_active().then_some("true")
                                    >
                                        {item.label}
                                        <Show when=is_active>
                                            <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-1/2 h-0.5 bg-blue/80" />
                                        </Show>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href="#contact"
                            on:click=go_to("contact")
                            class="ml-4 px-5 py-2.5 bg-blue hover:bg-brightBlue text-white text-sm font-medium rounded-full transition-colors shadow-lg"
                        >
                            "Hire Me"
                        </a>
                    </div>

                    <button
                        class="md:hidden p-2 text-white text-2xl"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || if menu_open.get() { Either::Left("✕") } else { Either::Right("☰") }}
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="menu-enter fixed inset-0 z-40 bg-background/95 backdrop-blur-xl pt-24 px-6 md:hidden">
                <div class="flex flex-col items-center gap-6">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let id = item.id;
                            view! {
                                <a
                                    href=format!("#{id}")
                                    on:click=go_to(id)
                                    style=format!("animation-delay: {}ms", i * 80)
                                    class=move || {
                                        if active.get() == id {
                                            "menu-item text-2xl text-white"
                                        } else {
                                            "menu-item text-2xl text-muted hover:text-white"
                                        }
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        on:click=go_to("contact")
                        class="menu-item mt-4 px-8 py-3 bg-blue hover:bg-brightBlue text-white font-medium rounded-full transition-colors"
                        style="animation-delay: 400ms"
                    >
                        "Hire Me"
                    </a>
                </div>
            </div>
        </Show>
    }
}
