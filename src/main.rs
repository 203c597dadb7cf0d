use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_window_scroll;
use log::{info, Level};
use web_sys::{window, MouseEvent};

mod config;
mod content;
mod lead {
    pub mod error;
    pub mod validation;
    pub mod inquiry;
    pub mod submission;
}
mod components {
    pub mod chat_widget;
    pub mod footer;
    pub mod project_card;
    pub mod typing_greeting;
    pub mod voice_input;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod domains;
    pub mod internship;
    pub mod contact;
    pub mod privacy;
}

use components::{chat_widget::ChatWidget, footer::Footer};
use pages::{
    home::Home,
    about::About,
    services::Services,
    domains::Domains,
    internship::Internship,
    contact::Contact,
    privacy::PrivacyPolicy,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/domains")]
    Domains,
    #[at("/internship")]
    Internship,
    #[at("/contact")]
    Contact,
    #[at("/privacy-policy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const NAV_ITEMS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("About", Route::About),
    ("Services", Route::Services),
    ("Domains", Route::Domains),
    ("Internship", Route::Internship),
    ("Contact", Route::Contact),
];

fn switch(routes: Route) -> Html {
    // New page, start at the top.
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Domains => {
            info!("Rendering Domains page");
            html! { <Domains /> }
        },
        Route::Internship => {
            info!("Rendering Internship page");
            html! { <Internship /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

/// Header hides while scrolling down and comes back on any upward scroll.
fn header_visible(scroll_y: f64, last_scroll_y: f64) -> bool {
    !(scroll_y > last_scroll_y && scroll_y > 100.0)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let last_scroll_y = use_mut_ref(|| 0.0_f64);

    let visible = {
        let mut last = last_scroll_y.borrow_mut();
        let visible = header_visible(scroll_y, *last);
        *last = scroll_y;
        visible
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!(
            "top-nav",
            (scroll_y > 50.0).then(|| "scrolled"),
            (!visible && !*menu_open).then(|| "hidden"),
        )}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"RANBIDGE"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(label, route)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                { *label }
                            </Link<Route>>
                        </div>
                    }) }
                    <a
                        class="nav-login-button"
                        href={format!("tel:+{}", config::WHATSAPP_NUMBER)}
                    >
                        { config::CONTACT_PHONE_DISPLAY }
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="site-background"></div>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <ChatWidget />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_hides_only_when_scrolling_down_past_threshold() {
        assert!(header_visible(50.0, 0.0));
        assert!(!header_visible(300.0, 200.0));
        assert!(header_visible(200.0, 300.0));
        assert!(header_visible(300.0, 300.0));
    }

    #[test]
    fn nav_routes_match_site_paths() {
        let paths: Vec<String> = NAV_ITEMS.iter().map(|(_, route)| route.to_path()).collect();
        assert_eq!(paths, ["/", "/about", "/services", "/domains", "/internship", "/contact"]);
        assert_eq!(Route::Privacy.to_path(), "/privacy-policy");
    }
}
