//! Terminal line that types endpoint requests one character at a time.
//!
//! The server renders the empty prompt; the browser starts a
//! [`TypingDriver`] on hydration and tears it down with the component.

#[cfg(test)]
#[path = "typing_prompt_test.rs"]
mod typing_prompt_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::typing::{TypingState, TypingTiming};
#[cfg(feature = "hydrate")]
use crate::util::timer::BrowserScheduler;
#[cfg(feature = "hydrate")]
use crate::util::typing_driver::TypingDriver;

/// Width in `ch` of the longest phrase, so the line never reflows mid-type.
fn reserved_width_ch(phrases: &[String]) -> usize {
    phrases.iter().map(|phrase| phrase.chars().count()).max().unwrap_or(0)
}

#[component]
pub fn TypingPrompt(phrases: Vec<String>, #[prop(default = "$ curl -X ")] prefix: &'static str) -> impl IntoView {
    let typed = RwSignal::new(String::new());
    let min_width = format!("min-width: {}ch", reserved_width_ch(&phrases));

    #[cfg(feature = "hydrate")]
    {
        let on_change = move |state: &TypingState| typed.set(state.typed_text().to_owned());
        match TypingDriver::start(phrases, TypingTiming::default(), BrowserScheduler, on_change) {
            Ok(driver) => {
                let driver = StoredValue::new_local(driver);
                on_cleanup(move || {
                    driver.try_with_value(TypingDriver::cancel);
                });
            }
            Err(err) => log::warn!("typing prompt disabled: {err}"),
        }
    }

    view! {
        <div class="typing-prompt">
            <span class="typing-prompt__prefix">{prefix}</span>
            <span class="typing-prompt__typed" style=min_width>{move || typed.get()}</span>
            <span class="typing-prompt__cursor">"|"</span>
        </div>
    }
}
