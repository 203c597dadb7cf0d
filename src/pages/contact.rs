use yew::prelude::*;

use crate::config;
use crate::content::FAQ_DATA;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // Only one answer is expanded at a time.
    let active = use_state(|| None::<usize>);

    html! {
        <div class="contact-page">
            <section class="page-header">
                <h2 class="eyebrow">{ "Contact Us" }</h2>
                <h1>{ "Let's Build Something " }<span class="accent">{ "Meaningful Together" }</span></h1>
                <p>{ "Reach out to discuss internships, MoUs, institutional collaborations, or custom digital solutions." }</p>
            </section>

            <section class="contact-grid">
                <div class="contact-cards">
                    <div class="contact-card">
                        <span class="contact-label">{ "Email" }</span>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                    </div>
                    <div class="contact-card">
                        <span class="contact-label">{ "Phone" }</span>
                        <a href={format!("tel:+{}", config::WHATSAPP_NUMBER)}>{ config::CONTACT_PHONE_DISPLAY }</a>
                    </div>
                    <div class="contact-card">
                        <span class="contact-label">{ "Office Address" }</span>
                        <p>{ config::OFFICE_ADDRESS }</p>
                    </div>
                </div>

                <div class="contact-talk">
                    <h3>{ "Let's Talk About Your Idea" }</h3>
                    <p>
                        { "Whether you're planning internships, college collaborations, or a premium website, we're here to help you shape it." }
                    </p>
                    <ul>
                        <li>{ "Looking to sign an MoU with your institution?" }</li>
                        <li>{ "Need industry-aligned internships?" }</li>
                        <li>{ "Want a professional digital presence?" }</li>
                    </ul>
                    <div class="hero-buttons">
                        <a class="hero-cta" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                            { "Start a Conversation" }
                        </a>
                        <a
                            class="hero-cta secondary"
                            href={config::whatsapp_chat_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { "Chat on WhatsApp" }
                        </a>
                    </div>
                    <p class="company-name">{ config::COMPANY_NAME }</p>
                </div>
            </section>

            <section class="faq-section">
                <h2>{ "Frequently Asked Questions" }</h2>
                <p>{ "Common questions about our services and process." }</p>
                { for FAQ_DATA.iter().enumerate().map(|(idx, faq)| {
                    let open = *active == Some(idx);
                    let on_toggle = {
                        let active = active.clone();
                        Callback::from(move |_: ()| active.set(if open { None } else { Some(idx) }))
                    };
                    html! {
                        <FaqItem
                            key={idx}
                            question={faq.question}
                            answer={faq.answer}
                            open={open}
                            on_toggle={on_toggle}
                        />
                    }
                }) }
            </section>
        </div>
    }
}
