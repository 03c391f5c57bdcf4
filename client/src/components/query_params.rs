//! "Query Parameters" list shown inside an expanded endpoint card.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::content::QueryParam;

#[component]
pub fn QueryParams(params: &'static [QueryParam]) -> impl IntoView {
    view! {
        <div class="query-params">
            <h4 class="query-params__title">"Query Parameters"</h4>
            <div class="query-params__list">
                {params
                    .iter()
                    .map(|param| {
                        view! {
                            <Card class=format!("param param--{}", param.tone.modifier())>
                                <span class="param__name">{param.name}</span>
                                <span class="param__detail">
                                    {format!("{} - {}", param.annotation(), param.description)}
                                </span>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
