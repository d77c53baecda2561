use leptos::{ev::SubmitEvent, prelude::*};

use super::{homepage::SectionHeader, reveal::Reveal, toast::use_notifier};
use crate::{
    contact::{Field, SubmissionFlow, SubmissionState},
    content::CONTACT_LINKS,
};
#[cfg(feature = "hydrate")]
use crate::contact::{deliver_with_timeout, EmailJs, EmailJsConfig, DELIVERY_TIMEOUT};

#[cfg(feature = "hydrate")]
async fn sleep(duration: std::time::Duration) {
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        duration,
    );
    let _ = rx.await;
}

#[component]
fn FormInput(
    label: &'static str,
    placeholder: &'static str,
    field: Field,
    flow: RwSignal<SubmissionFlow>,
) -> impl IntoView {
    let value = move || flow.with(|f| f.fields().get(field).to_string());
    let set = move |v: String| flow.update(|f| f.edit(field, v));
    let class = "w-full bg-white/5 border border-white/10 text-white placeholder-muted focus:outline-none focus:border-blue/50 focus:ring-2 focus:ring-blue/20 rounded-xl px-4";

    view! {
        <label class="block">
            <span class="text-muted text-sm mb-2 block">{label}</span>
            {match field {
                Field::Message => {
                    view! {
                        <textarea
                            rows=4
                            required
                            placeholder=placeholder
                            class=format!("{class} py-3 resize-none")
                            prop:value=value
                            on:input=move |ev| set(event_target_value(&ev))
                        />
                    }
                        .into_any()
                }
                Field::Name | Field::Email => {
                    view! {
                        <input
                            type={if field == Field::Email { "email" } else { "text" }}
                            required
                            placeholder=placeholder
                            class=format!("{class} h-12")
                            prop:value=value
                            on:input=move |ev| set(event_target_value(&ev))
                        />
                    }
                        .into_any()
                }
            }}
        </label>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let flow = RwSignal::new(SubmissionFlow::new());
    let notifier = use_notifier();
    let pending = Memo::new(move |_| flow.with(|f| f.is_pending()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // a refusal is kept on the flow and rendered below the fields
        let Some(Ok(Some(payload))) = flow.try_update(|f| f.begin()) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let email = EmailJs::new(EmailJsConfig::default());
            let outcome = deliver_with_timeout(&email, payload, sleep(DELIVERY_TIMEOUT)).await;
            if let Some(Some(notice)) = flow.try_update(|f| f.complete(outcome)) {
                notifier.notify(notice);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            // forms only submit once hydrated
            let _ = (payload, notifier);
        }
    };

    view! {
        <form
            on:submit=on_submit
            novalidate
            class="p-8 rounded-3xl card"
        >
            <h3 class="text-xl font-semibold text-white mb-6">"Send a Message"</h3>
            <div class="space-y-5">
                <FormInput label="Your Name" placeholder="John Doe" field=Field::Name flow />
                <FormInput
                    label="Email Address"
                    placeholder="john@example.com"
                    field=Field::Email
                    flow
                />
                <FormInput
                    label="Message"
                    placeholder="Tell me about your project or opportunity..."
                    field=Field::Message
                    flow
                />
                {move || {
                    flow.with(|f| f.rejection().map(|e| e.to_string()))
                        .map(|e| view! { <p class="text-red text-sm" role="alert">{e}</p> })
                }}
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full bg-blue hover:bg-brightBlue disabled:opacity-60 disabled:cursor-not-allowed text-white font-medium py-4 rounded-xl transition-all duration-300 shadow-lg"
                >
                    {move || if pending.get() { "Sending..." } else { "Send Message" }}
                </button>
                <Show when=move || {
                    !pending.get()
                        && flow.with(|f| matches!(f.last_outcome(), Some(SubmissionState::Failed(_))))
                }>
                    <p class="text-muted text-xs text-center">
                        "Your message is still here, so you can send it again."
                    </p>
                </Show>
            </div>
        </form>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-32 px-6 relative">
            <div class="glow absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-blue/10" />
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeader
                    eyebrow="Get In Touch"
                    title="Let's"
                    highlight="Connect"
                    blurb="I'm actively seeking software engineering internships. Feel free to reach out for opportunities, collaborations, or just to say hello!"
                />

                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal class="space-y-4">
                        {CONTACT_LINKS
                            .iter()
                            .map(|c| {
                                let new_tab = c.opens_new_tab();
                                view! {
                                    <a
                                        href=c.link.href
                                        target=new_tab.then_some("_blank")
                                        rel="noopener noreferrer"
                                        class=format!(
                                            "group flex items-center gap-4 p-5 rounded-2xl bg-white/5 border border-white/10 hover:translate-x-2 transition-all duration-300 {}",
                                            c.hover,
                                        )
                                    >
                                        <div class="p-3 rounded-xl bg-white/10 text-white group-hover:scale-110 transition-transform">
                                            <i class=c.link.icon />
                                        </div>
                                        <div class="flex-1">
                                            <p class="text-muted text-xs uppercase tracking-wider">
                                                {c.link.label}
                                            </p>
                                            <p class="text-white font-medium">{c.value}</p>
                                        </div>
                                        <span class="text-muted group-hover:text-white transition-colors">
                                            "↗"
                                        </span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                    <Reveal delay=150>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
