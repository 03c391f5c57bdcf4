//! Portfolio page: header, terminal prompt, endpoint list and footer.
//!
//! Composition only. Every interactive piece owns its own state, so nothing
//! flows back up into this page.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::endpoint_card::EndpointCard;
use crate::components::typing_prompt::TypingPrompt;
use crate::content::profile::PROFILE;
use crate::content::{API_SUBTITLE, API_TITLE, BASE_URL, ENDPOINTS, RATE_LIMIT_NOTE, typing_phrases};
use crate::util::clock::current_year;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__grid" aria-hidden="true"></div>
            <div class="page__content">
                <PageHeader/>
                <main class="endpoints">
                    <h2 class="endpoints__title">"API Endpoints"</h2>
                    {ENDPOINTS
                        .iter()
                        .map(|endpoint| view! { <EndpointCard endpoint=endpoint/> })
                        .collect_view()}
                </main>
                <PageFooter/>
            </div>
        </div>
    }
}

#[component]
fn PageHeader() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero__frame">
                <div class="hero__panel">
                    <h1 class="hero__title">{API_TITLE}</h1>
                    <p class="hero__subtitle">{API_SUBTITLE}</p>
                </div>
            </div>

            <div class="hero__stack">
                <div class="base-url">
                    <span class="base-url__label">"Base URL:"</span>
                    <code class="base-url__value">{BASE_URL}</code>
                </div>

                <Card class="terminal">
                    <div class="terminal__lights" aria-hidden="true">
                        <span class="dot dot--error"></span>
                        <span class="dot dot--warning"></span>
                        <span class="dot dot--success"></span>
                    </div>
                    <TypingPrompt phrases=typing_phrases()/>
                </Card>

                <Card class="auth-note">
                    <h3 class="auth-note__title">"Authentication"</h3>
                    <p class="auth-note__body">
                        {RATE_LIMIT_NOTE}
                        <span class="auth-note__footnote">"Powered by Cloudflare"</span>
                    </p>
                </Card>
            </div>
        </header>
    }
}

#[component]
fn PageFooter() -> impl IntoView {
    let mailto = format!("mailto:{}", PROFILE.email);
    let copyright = format!("© {} {}. All rights reserved.", current_year(), PROFILE.name);

    view! {
        <footer class="footer">
            <Card class="footer__card">
                <h3 class="footer__title">"Ready to Connect?"</h3>
                <p class="footer__lead">"Let's build something amazing together"</p>
                <div class="footer__links">
                    <a href=mailto class="button button--primary">"Email Me"</a>
                    <a href=PROFILE.github class="button button--dark">"GitHub"</a>
                    <a href="#resume" class="button button--accent">"View Resume"</a>
                </div>
            </Card>
            <p class="footer__copyright">{copyright}</p>
        </footer>
    }
}
