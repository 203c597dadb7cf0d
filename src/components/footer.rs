use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::SERVICES;
use crate::Route;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/profile.php?id=61578597456959"),
    ("Instagram", "https://www.instagram.com/rspl_academy"),
    ("LinkedIn", "https://www.linkedin.com/in/ranbidge-solutions-private-limited-company-a98983376"),
    ("X", "https://x.com/RanbridgePvtLtd"),
    ("YouTube", "https://www.youtube.com/@RSPL-Academy"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <span class="nav-logo">{ "RANBIDGE" }</span>
                    <p>{ "Bridging the Gap Between Academics and Industry Excellence" }</p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer">{ *label }</a>
                        }) }
                    </div>
                </div>

                <div class="footer-column">
                    <h4>{ "Quick Links" }</h4>
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::About}>{ "About" }</Link<Route>>
                    <Link<Route> to={Route::Services}>{ "Services" }</Link<Route>>
                    <Link<Route> to={Route::Domains}>{ "Domains" }</Link<Route>>
                    <Link<Route> to={Route::Internship}>{ "Internship" }</Link<Route>>
                    <Link<Route> to={Route::Contact}>{ "Contact" }</Link<Route>>
                </div>

                <div class="footer-column">
                    <h4>{ "Services" }</h4>
                    { for SERVICES.iter().take(4).map(|s| html! { <span>{ s.title }</span> }) }
                </div>

                <div class="footer-column">
                    <h4>{ "Contact" }</h4>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                    <a href={format!("tel:+{}", config::WHATSAPP_NUMBER)}>{ config::CONTACT_PHONE_DISPLAY }</a>
                    <span>{ config::OFFICE_ADDRESS }</span>
                </div>
            </div>

            <div class="footer-bottom">
                <span>{ format!("© {} Ranbidge Solutions Pvt Ltd. All rights reserved.", year) }</span>
                <Link<Route> to={Route::Privacy}>{ "Privacy Policy" }</Link<Route>>
            </div>
        </footer>
    }
}
