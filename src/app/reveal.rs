use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// True from the first time `target` scrolls into view onwards.
pub fn use_revealed(target: NodeRef<html::Div>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let revealed = RwSignal::new(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            revealed.set(true);
        }
    });
    revealed.into()
}

/// Fades its children in once, the first time they become visible.
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    /// Stagger in milliseconds.
    #[prop(optional)]
    delay: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_revealed(node_ref);
    view! {
        <div
            node_ref=node_ref
            class=move || {
                let state = if revealed.get() { "reveal reveal-visible" } else { "reveal" };
                format!("{state} {class}")
            }
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}
