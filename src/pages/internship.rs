use yew::prelude::*;

use crate::config;
use crate::content::{Program, INTERNSHIP_PRINCIPLES, PROGRAMS};

fn apply_link(program: &Program) -> String {
    let text = format!("Hello! I'd like to apply for the {} internship.", program.title);
    format!("{}?text={}", config::whatsapp_chat_url(), urlencoding::encode(&text))
}

#[function_component(Internship)]
pub fn internship() -> Html {
    html! {
        <div class="internship-page">
            <section class="page-header">
                <h2 class="eyebrow">{ "Internship Model" }</h2>
                <h1>{ "Structured Learning Experience" }</h1>
                <p>
                    { "Our internship model is carefully crafted to ensure maximum learning with minimum disruption to regular academic schedules. We focus on ethical engagement and practical output." }
                </p>
                <ul class="check-list">
                    { for INTERNSHIP_PRINCIPLES.iter().map(|p| html! { <li>{ *p }</li> }) }
                </ul>
            </section>

            <section class="card-grid">
                { for PROGRAMS.iter().map(|program| html! {
                    <div class="program-card">
                        <div class="program-meta">
                            <span class="tag">{ program.mode }</span>
                            <span class="tag">{ program.duration }</span>
                        </div>
                        <h3>{ program.title }</h3>
                        <p>{ program.description }</p>
                        <div class="tag-list">
                            { for program.skills.iter().map(|s| html! { <span class="tag">{ *s }</span> }) }
                        </div>
                        <ul class="program-perks">
                            <li>{ program.mentorship }</li>
                            <li>{ program.projects }</li>
                        </ul>
                        <a
                            class="hero-cta"
                            href={apply_link(program)}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { "Apply Now" }
                        </a>
                    </div>
                }) }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_link_names_the_program() {
        let link = apply_link(&PROGRAMS[0]);
        assert!(link.starts_with("https://wa.me/918247392437?text="));
        assert!(link.contains("Python%20Full%20Stack%20Development"));
    }
}
