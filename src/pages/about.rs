use yew::prelude::*;

struct Pillar {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        icon: "🎓",
        title: "For Students",
        text: "Live internships, mentorship and project work that turn coursework into job-ready skills.",
    },
    Pillar {
        icon: "🏛",
        title: "For Colleges",
        text: "MoUs, structured training programs and industry exposure aligned with academic calendars.",
    },
    Pillar {
        icon: "🏢",
        title: "For Businesses",
        text: "Custom websites, mobile apps and software built by a team that understands delivery.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-header">
                <h2 class="eyebrow">{ "About Ranbidge" }</h2>
                <h1>{ "Bridging Education with " }<span class="accent">{ "Industry Excellence" }</span></h1>
                <p>
                    <strong>{ "RANBIDGE Solutions Private Limited" }</strong>
                    { " is built with a single purpose: to close the gap between academic learning and real-world industry expectations." }
                </p>
                <p>
                    { "We partner with colleges, students, and organizations to deliver structured programs, live internships, and industry-aligned skill development." }
                </p>
            </section>

            <section class="card-grid">
                { for PILLARS.iter().map(|p| html! {
                    <div class="service-card">
                        <span class="service-icon">{ p.icon }</span>
                        <h3>{ p.title }</h3>
                        <p>{ p.text }</p>
                    </div>
                }) }
            </section>

            <section class="vision">
                <div class="vision-card">
                    <h3>{ "Our Vision" }</h3>
                    <p>{ "A generation of graduates who step into their first job already knowing how real software gets built." }</p>
                </div>
                <div class="vision-card">
                    <h3>{ "Our Mission" }</h3>
                    <p>{ "Deliver ethical, outcome-driven training and dependable digital solutions, with transparency at every step." }</p>
                </div>
            </section>
        </div>
    }
}
