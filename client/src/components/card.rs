//! Bordered card surfaces and the JSON response block.

use leptos::prelude::*;

/// Rounded, bordered container. Hoverable cards brighten their border.
#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    #[prop(default = true)] hoverable: bool,
    children: Children,
) -> impl IntoView {
    let mut classes = String::from("card");
    if hoverable {
        classes.push_str(" card--hoverable");
    }
    if !class.is_empty() {
        classes.push(' ');
        classes.push_str(&class);
    }
    view! { <div class=classes>{children()}</div> }
}

/// Monospace block holding an example response body.
#[component]
pub fn JsonResponse(body: String) -> impl IntoView {
    view! {
        <Card class="card--flush">
            <pre class="json-response">{body}</pre>
        </Card>
    }
}
