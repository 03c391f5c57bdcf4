//! Collapsible endpoint card with a copy-URL button.
//!
//! ARCHITECTURE
//! ============
//! Each card owns two pieces of local state: its [`PanelState`] and the copy
//! indicator. In the browser the indicator is driven by a [`CopyNotifier`]
//! kept in a local `StoredValue`; the notifier is cancelled on cleanup and
//! dropped with the card's owner, so no revert timer outlives the card.

#[cfg(test)]
#[path = "endpoint_card_test.rs"]
mod endpoint_card_test;

use leptos::prelude::*;

use crate::components::badge::{MethodBadge, StatusBadge};
use crate::components::card::{Card, JsonResponse};
use crate::components::query_params::QueryParams;
use crate::content::Endpoint;
use crate::state::panel::PanelState;
#[cfg(feature = "hydrate")]
use crate::util::copy_notifier::{COPY_FEEDBACK_MS, CopyNotifier};
#[cfg(feature = "hydrate")]
use crate::util::timer::BrowserScheduler;

/// Keys that toggle a focused card header.
fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

fn copy_button_class(copied: bool) -> &'static str {
    if copied { "copy-button copy-button--copied" } else { "copy-button" }
}

fn copy_glyph(copied: bool) -> &'static str {
    if copied { "✓" } else { "⧉" }
}

/// `200` becomes `200 OK`; unknown codes are shown bare.
fn status_label(status: &str) -> String {
    let reason = match status {
        "200" => "OK",
        "201" => "Created",
        "204" => "No Content",
        "400" => "Bad Request",
        "404" => "Not Found",
        "500" => "Internal Server Error",
        _ => return status.to_owned(),
    };
    format!("{status} {reason}")
}

#[component]
pub fn EndpointCard(endpoint: &'static Endpoint) -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());
    let copied = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let notifier = {
        let notifier =
            StoredValue::new_local(CopyNotifier::new(BrowserScheduler, COPY_FEEDBACK_MS, move |on| copied.set(on)));
        on_cleanup(move || {
            notifier.try_with_value(CopyNotifier::cancel);
        });
        notifier
    };

    let body = endpoint.response_body().unwrap_or_else(|err| {
        log::error!("failed to encode {} example body: {err}", endpoint.id);
        String::new()
    });

    let on_toggle = move |_| panel.update(PanelState::toggle);
    let on_header_key = move |ev: leptos::ev::KeyboardEvent| {
        if is_toggle_key(&ev.key()) {
            ev.prevent_default();
            panel.update(PanelState::toggle);
        }
    };

    let on_copy = move |ev: leptos::ev::MouseEvent| {
        // Copying must not expand or collapse the card.
        ev.stop_propagation();
        #[cfg(feature = "hydrate")]
        {
            let text = endpoint.url();
            leptos::task::spawn_local(async move {
                let result = crate::util::clipboard::write_text(&text).await;
                notifier.try_with_value(|n| n.report(result));
            });
        }
    };

    view! {
        <section id=endpoint.id class="endpoint">
            <Card>
                <div
                    class="endpoint__header"
                    role="button"
                    tabindex="0"
                    aria-expanded=move || panel.get().aria_expanded()
                    on:click=on_toggle
                    on:keydown=on_header_key
                >
                    <div class="endpoint__summary">
                        <MethodBadge method=endpoint.method/>
                        <div class="endpoint__meta">
                            <div class="endpoint__path-row">
                                <code class="endpoint__path">{endpoint.path}</code>
                                <button
                                    class=move || copy_button_class(copied.get())
                                    aria-label="Copy endpoint"
                                    title=endpoint.url()
                                    on:click=on_copy
                                    on:keydown=move |ev: leptos::ev::KeyboardEvent| ev.stop_propagation()
                                >
                                    {move || copy_glyph(copied.get())}
                                </button>
                            </div>
                            <p class="endpoint__description">{endpoint.description}</p>
                        </div>
                    </div>
                    <div class="endpoint__status">
                        <StatusBadge status=endpoint.status/>
                        <span class="endpoint__chevron">{move || panel.get().chevron()}</span>
                    </div>
                </div>
                <Show when=move || panel.get().expanded>
                    <div class="endpoint__body">
                        <h4 class="endpoint__response-title">
                            <span class="dot dot--success"></span>
                            {format!("Response ({})", status_label(endpoint.status))}
                        </h4>
                        {(!endpoint.query_params.is_empty())
                            .then(|| view! { <QueryParams params=endpoint.query_params/> })}
                        <JsonResponse body=body.clone()/>
                    </div>
                </Show>
            </Card>
        </section>
    }
}
