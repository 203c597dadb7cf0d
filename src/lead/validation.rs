use once_cell::sync::Lazy;
use regex::Regex;

use super::error::InquiryError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// How the visitor wants to be reached back. The `@` alone decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
}

impl ContactKind {
    pub fn classify(contact: &str) -> Self {
        if contact.contains('@') {
            ContactKind::Email
        } else {
            ContactKind::Phone
        }
    }
}

/// Shape check only, no deliverability lookup.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Drops whitespace, hyphens and plus signs.
pub fn strip_phone_separators(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '+')
        .collect()
}

/// Local (10 digit) or country-prefixed (12 digit) number.
pub fn is_valid_phone(s: &str) -> bool {
    let digits = strip_phone_separators(s);
    (digits.len() == 10 || digits.len() == 12) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Classifies an already trimmed contact and runs the one validator that
/// applies to it.
pub fn validate_contact(contact: &str) -> Result<ContactKind, InquiryError> {
    match ContactKind::classify(contact) {
        ContactKind::Email if is_valid_email(contact) => Ok(ContactKind::Email),
        ContactKind::Email => Err(InquiryError::InvalidEmail),
        ContactKind::Phone if is_valid_phone(contact) => Ok(ContactKind::Phone),
        ContactKind::Phone => Err(InquiryError::InvalidPhone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_a_dot_segment_after_the_at() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("asha.k@college.edu.in"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn phone_accepts_ten_or_twelve_digits_after_stripping() {
        assert!(is_valid_phone("824-739-2437"));
        assert!(is_valid_phone("8247392437"));
        assert!(is_valid_phone("+91 82473 92437"));
        assert!(!is_valid_phone("82473924"));
        assert!(!is_valid_phone("82473924371"));
        assert!(!is_valid_phone("82473a2437"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn at_sign_routes_to_email_validation_only() {
        // Would pass as a phone number if the phone rule were consulted.
        assert_eq!(validate_contact("8247392437@"), Err(InquiryError::InvalidEmail));
        assert_eq!(validate_contact("82473-92437@x"), Err(InquiryError::InvalidEmail));
        assert_eq!(validate_contact("asha@mail.com"), Ok(ContactKind::Email));
    }

    #[test]
    fn contacts_without_at_are_phones() {
        assert_eq!(validate_contact("8247392437"), Ok(ContactKind::Phone));
        assert_eq!(validate_contact("asha.mail.com"), Err(InquiryError::InvalidPhone));
    }
}
