use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Share of a block that must be visible before it reveals.
pub const REVEAL_AMOUNT: f64 = 0.3;
/// Tall blocks such as the project grid reveal earlier.
pub const REVEAL_AMOUNT_TALL: f64 = 0.2;

fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal reveal-shown"
    } else {
        "reveal reveal-hidden"
    }
}

// IntersectionObserver throws a RangeError for thresholds outside [0, 1]
fn reveal_threshold(amount: f64) -> f64 {
    if amount.is_nan() {
        REVEAL_AMOUNT
    } else {
        amount.clamp(0.0, 1.0)
    }
}

/// Fades and slides its children in whenever at least `amount` of it is in view,
/// and back out when it leaves.
#[component]
pub fn Reveal(
    #[prop(default = 0.2)] delay: f64,
    #[prop(default = REVEAL_AMOUNT)] amount: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if let Some(entry) = entries.last() {
                set_visible.set(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![reveal_threshold(amount)]),
    );

    view! {
        <div
            node_ref=target
            class=move || format!("{} {}", reveal_class(visible.get()), class)
            style=format!("transition-delay: {delay}s")
        >
            {children()}
        </div>
    }
}
