use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{METHODOLOGY, SERVICES};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-header">
                <h2 class="eyebrow">{ "Our Services" }</h2>
                <h1>{ "Programs and Solutions Built Around " }<span class="accent">{ "Real Outcomes" }</span></h1>
                <p>{ "Training for students, delivery for businesses, and support for researchers." }</p>
            </section>

            <section class="card-grid">
                { for SERVICES.iter().map(|s| html! {
                    <div class="service-card">
                        <span class="service-icon">{ s.icon }</span>
                        <h3>{ s.title }</h3>
                        <p>{ s.description }</p>
                    </div>
                }) }
            </section>

            <section class="methodology">
                <h2>{ "Our Methodology" }</h2>
                <div class="card-grid">
                    { for METHODOLOGY.iter().map(|step| html! {
                        <div class="methodology-card">
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                        </div>
                    }) }
                </div>
                <div class="ethics-note">
                    <h3>{ "Ethics & Student Safety" }</h3>
                    <p>
                        { "We uphold the highest standards of professional conduct. " }
                        <strong>{ "RANBIDGE Solutions" }</strong>
                        { " is committed to ensuring that no student is exploited, and all processes remain transparent and data-secure." }
                    </p>
                </div>
            </section>

            <section class="motivation">
                <h2>{ "Not sure where to start?" }</h2>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    { "Talk to Us" }
                </Link<Route>>
            </section>
        </div>
    }
}
