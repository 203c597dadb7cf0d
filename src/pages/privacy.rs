use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const SECTIONS: &[(&str, &[&str])] = &[
    (
        "Data Collection",
        &[
            "This assistant does not collect, store, or retain personal data.",
            "Conversations are used only to generate responses in real time.",
            "Users are not required to share personal information.",
            "The assistant does not access external databases or third-party systems.",
        ],
    ),
    (
        "User Information",
        &[
            "If users voluntarily share contact details for business or service inquiries, they are advised to use official RANBIDGE communication channels.",
            "The assistant does not guarantee confidentiality of information shared within the chat.",
            "All guidance provided is informational and advisory in nature.",
        ],
    ),
    (
        "User Agreement",
        &[
            "By using this assistant, users acknowledge and agree to this privacy policy.",
            "Users understand that the AI assistant provides general guidance and should not be considered as professional advice.",
            "Users are responsible for the information they choose to share in conversations.",
        ],
    ),
    (
        "Important Notice",
        &[
            "This privacy policy may be updated periodically to reflect changes in our practices or for other operational, legal, or regulatory reasons.",
            "For official business inquiries, please use our established communication channels listed on our website.",
            "This policy is effective as of the date of last update and applies to all users of the RANBIDGE Assistant.",
        ],
    ),
];

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <Link<Route> to={Route::Home} classes="back-link">
                    { "← Back to Home" }
                </Link<Route>>
                <h1>{ "Privacy Policy for RANBIDGE Assistant" }</h1>

                <section>
                    <h2>{ "Introduction" }</h2>
                    <p>
                        { "RANBIDGE Assistant respects user privacy and is committed to protecting it. This privacy policy outlines how we handle your information when you interact with our AI assistant." }
                    </p>
                </section>

                { for SECTIONS.iter().map(|(title, points)| html! {
                    <section>
                        <h2>{ *title }</h2>
                        <ul>
                            { for points.iter().map(|p| html! { <li>{ *p }</li> }) }
                        </ul>
                    </section>
                }) }

                <section>
                    <h2>{ "Contact Information" }</h2>
                    <p>{ "If you have questions about this Privacy Policy or our data practices, please contact us:" }</p>
                    <p>{ "info@ranbidge.com" }</p>
                    <p>{ config::CONTACT_PHONE_DISPLAY }</p>
                </section>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    padding: 8rem 2rem 4rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .legal-content > div {
                    background: rgba(15, 23, 42, 0.7);
                    border: 1px solid rgba(37, 99, 235, 0.15);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                    backdrop-filter: blur(10px);
                }

                .legal-content h1 {
                    font-size: 2rem;
                    background: linear-gradient(45deg, #fff, #60a5fa);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 2rem;
                }

                .legal-content section {
                    background: rgba(0, 0, 0, 0.2);
                    border-radius: 12px;
                    padding: 1.5rem 2rem;
                    margin: 1.5rem 0;
                }

                .legal-content h2 {
                    color: #60a5fa;
                    font-size: 1.3rem;
                    margin-bottom: 1rem;
                }

                .legal-content p, .legal-content li {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin-bottom: 0.75rem;
                }

                .legal-content .back-link {
                    color: #60a5fa;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
