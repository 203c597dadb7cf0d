use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::components::project_card::render_project;
use crate::content::{HOME_RESULTS, PRICING_PLANS, PROCESS_STEPS, SERVICES, TECH_STACK};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero" id="home">
                <div class="hero-glow"></div>
                <h1>{ config::COMPANY_NAME }</h1>
                <p class="hero-subtitle">{ config::TAGLINE }</p>
                <div class="hero-buttons">
                    <Link<Route> to={Route::Services} classes="hero-cta">
                        { "Explore Services" }
                    </Link<Route>>
                    <Link<Route> to={Route::Internship} classes="hero-cta secondary">
                        { "Join an Internship" }
                    </Link<Route>>
                </div>
            </section>

            <section class="home-intro">
                <h2>{ "Everything You Need to Build a Powerful Digital Presence" }</h2>
                <p>
                    { "From industry-ready internships and custom software solutions to professional websites and research support, Ranbidge delivers end-to-end digital excellence under one roof." }
                </p>
            </section>

            <section class="home-services">
                <h2>{ "What We Do" }</h2>
                <div class="card-grid">
                    { for SERVICES.iter().take(3).map(|s| html! {
                        <div class="service-card">
                            <span class="service-icon">{ s.icon }</span>
                            <h3>{ s.title }</h3>
                            <p>{ s.description }</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="text-link">
                    { "View all services →" }
                </Link<Route>>
            </section>

            <section class="home-results">
                <h2>{ "Results We Deliver" }</h2>
                <div class="card-grid">
                    { for HOME_RESULTS.iter().map(render_project) }
                </div>
            </section>

            <section class="tech-stack">
                <h2>{ "Our Tech Stack" }</h2>
                <div class="tech-marquee">
                    { for TECH_STACK.iter().map(|name| html! { <span class="tech-pill">{ *name }</span> }) }
                </div>
            </section>

            <section class="process">
                <h2>{ "How We Work" }</h2>
                <ol class="process-steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <li class="process-step">
                            <span class="process-index">{ format!("{:02}", i + 1) }</span>
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="pricing">
                <h2>{ "Website Packages" }</h2>
                <div class="card-grid">
                    { for PRICING_PLANS.iter().map(|plan| html! {
                        <div class={classes!("pricing-card", plan.recommended.then(|| "recommended"))}>
                            if plan.recommended {
                                <span class="pricing-badge">{ "Most Popular" }</span>
                            }
                            <h3>{ plan.title }</h3>
                            <p class="pricing-price">{ plan.price }</p>
                            <p class="pricing-tagline">{ plan.tagline }</p>
                            <ul>
                                { for plan.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                            </ul>
                            <a
                                class="pricing-cta"
                                href={config::whatsapp_chat_url()}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                { "Get Started" }
                            </a>
                        </div>
                    }) }
                </div>
            </section>

            <section class="motivation">
                <h2>{ "Let's Build Something That Matters" }</h2>
                <p>{ "Your idea deserves a world-class digital experience." }</p>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    { "Start Your Project" }
                </Link<Route>>
            </section>
        </div>
    }
}
