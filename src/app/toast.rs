use std::time::Duration;

use leptos::prelude::*;

use crate::contact::{Notice, NoticeKind, NoticeQueue};

// only the hydrated contact form raises toasts
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Handle for raising toasts, available through context.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
}

impl Notifier {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    pub fn notify(&self, notice: Notice) {
        let Some(id) = self.queue.try_update(|q| q.push(notice)) else {
            return;
        };
        let this = *self;
        set_timeout(move || this.dismiss(id), DISMISS_AFTER);
    }

    fn dismiss(&self, id: u64) {
        // the signal is gone once the page unmounts
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }
}

pub fn provide_toaster() {
    provide_context(Notifier {
        queue: RwSignal::new(NoticeQueue::default()),
    });
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    view! {
        <div
            class="fixed bottom-6 right-6 z-[60] flex flex-col gap-3 max-w-sm"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || notifier.queue.with(|q| q.items().to_vec())
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    let (accent, icon) = match notice.kind {
                        NoticeKind::Success => ("border-green/40 text-green", "✓"),
                        NoticeKind::Error => ("border-red/40 text-red", "✗"),
                    };
                    view! {
                        <button
                            class=format!(
                                "toast flex items-start gap-3 p-4 rounded-xl bg-black/90 border backdrop-blur-xl text-left shadow-2xl {accent}",
                            )
                            on:click=move |_| notifier.dismiss(id)
                        >
                            <span class="font-bold">{icon}</span>
                            <span class="text-sm text-foreground">{notice.message}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}
