pub const COMPANY_NAME: &str = "RANBIDGE SOLUTIONS PVT LTD";
pub const TAGLINE: &str = "Transform Your Dreams Into Reality\u{2014}Learn, Build, and Lead the Future";

pub const CONTACT_EMAIL: &str = "ranbidgesolutionspvtltd@gmail.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+91 82473 92437";
pub const OFFICE_ADDRESS: &str = "Ravindra Nagar, Narasaraopet, Palnadu District, Andhra Pradesh, India 522601";

/// International number (no `+`) used for every wa.me link on the site.
pub const WHATSAPP_NUMBER: &str = "918247392437";

/// Delay before a finished submission wipes the widget and closes it.
pub const RESET_DELAY_MS: u32 = 4_000;

/// Per-character delay of the widget greeting.
pub const TYPING_INTERVAL_MS: u32 = 30;

const DEFAULT_RELAY_URL: &str = "https://formspree.io/f/xwvbgprg";

/// Form relay endpoint. Can be pointed elsewhere at build time with
/// `RANBIDGE_RELAY_URL`.
pub fn get_relay_url() -> &'static str {
    option_env!("RANBIDGE_RELAY_URL").unwrap_or(DEFAULT_RELAY_URL)
}

pub fn whatsapp_chat_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_targets_configured_number() {
        assert_eq!(whatsapp_chat_url(), "https://wa.me/918247392437");
    }
}
