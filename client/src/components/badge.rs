//! Pill badges for HTTP methods and status codes.

use leptos::prelude::*;

use crate::util::style::{HttpMethod, Tone, status_tone};

/// Colored pill; `class` is appended to the tone classes.
#[component]
pub fn Badge(tone: Tone, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = if class.is_empty() { tone.badge_class().to_owned() } else { format!("{} {class}", tone.badge_class()) };
    view! { <span class=class>{children()}</span> }
}

#[component]
pub fn MethodBadge(method: HttpMethod) -> impl IntoView {
    view! {
        <Badge tone=method.tone() class="badge--mono">
            {method.as_str()}
        </Badge>
    }
}

#[component]
pub fn StatusBadge(status: &'static str) -> impl IntoView {
    view! { <Badge tone=status_tone(status)>{status}</Badge> }
}
