use yew::prelude::*;

use crate::components::project_card::render_project;
use crate::content::{find_domain, DOMAINS};

#[function_component(Domains)]
pub fn domains() -> Html {
    let selected = use_state(|| DOMAINS[0].id);

    let domain = find_domain(*selected).unwrap_or(&DOMAINS[0]);

    html! {
        <div class="domains-page">
            <section class="page-header">
                <h2 class="eyebrow">{ "Domains" }</h2>
                <h1>{ "Choose Your " }<span class="accent">{ "Learning Track" }</span></h1>
                <p>{ "Every track combines core topics with real projects you can show." }</p>
            </section>

            <div class="domain-tabs" role="tablist">
                { for DOMAINS.iter().map(|d| {
                    let onclick = {
                        let selected = selected.clone();
                        let id = d.id;
                        Callback::from(move |_: MouseEvent| selected.set(id))
                    };
                    html! {
                        <button
                            key={d.id}
                            role="tab"
                            class={classes!("domain-tab", (d.id == domain.id).then(|| "active"))}
                            onclick={onclick}
                        >
                            { d.name }
                        </button>
                    }
                }) }
            </div>

            <section class="domain-detail">
                <h2>{ domain.name }</h2>
                <p>{ domain.description }</p>
                <h3>{ "Topics Covered" }</h3>
                <ul class="topic-list">
                    { for domain.topics.iter().map(|t| html! { <li>{ *t }</li> }) }
                </ul>
                <h3>{ "Sample Projects" }</h3>
                <div class="card-grid">
                    { for domain.projects.iter().map(render_project) }
                </div>
            </section>
        </div>
    }
}
