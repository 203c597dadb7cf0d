use thiserror::Error;

/// Everything that can stop an inquiry from reaching the team.
///
/// The `Display` text is what the widget shows; it is written for the
/// visitor, not for the console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address (e.g., example@gmail.com)")]
    InvalidEmail,
    #[error("Please enter a valid phone number (10 digits, e.g., 8247392437)")]
    InvalidPhone,
    #[error("Failed to send. Please try WhatsApp directly.")]
    RelayRejected(u16),
    #[error("Failed to send. Please try WhatsApp directly.")]
    NetworkFailure(String),
}

impl InquiryError {
    /// True for failures that happened after the inquiry left the browser.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, Self::RelayRejected(_) | Self::NetworkFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_failures_share_the_whatsapp_fallback() {
        let rejected = InquiryError::RelayRejected(422).to_string();
        let network = InquiryError::NetworkFailure("dns".into()).to_string();
        assert_eq!(rejected, network);
        assert!(rejected.contains("WhatsApp"));
    }

    #[test]
    fn validation_errors_are_not_delivery_failures() {
        assert!(!InquiryError::MissingField.is_delivery_failure());
        assert!(!InquiryError::InvalidEmail.is_delivery_failure());
        assert!(!InquiryError::InvalidPhone.is_delivery_failure());
        assert!(InquiryError::RelayRejected(500).is_delivery_failure());
    }
}
