use serde::Serialize;

use super::error::InquiryError;
use super::validation::{strip_phone_separators, validate_contact, ContactKind};

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    pub name: String,
    pub contact: String,
    pub message: String,
}

impl InquiryDraft {
    /// Quick replies replace the message outright.
    pub fn set_quick_reply(&mut self, label: &str) {
        self.message = label.to_string();
    }

    /// Appends dictated text, separated from existing content by one space.
    pub fn append_text(&mut self, segment: &str) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        self.message.push_str(segment);
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.contact.clear();
        self.message.clear();
    }

    pub fn validate(&self) -> Result<ValidInquiry, InquiryError> {
        if self.name.is_empty() || self.contact.is_empty() || self.message.is_empty() {
            return Err(InquiryError::MissingField);
        }

        let contact = self.contact.trim().to_string();
        let kind = validate_contact(&contact)?;

        Ok(ValidInquiry {
            name: self.name.clone(),
            contact,
            message: self.message.clone(),
            kind,
        })
    }
}

/// A draft that passed validation, frozen for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInquiry {
    pub name: String,
    pub contact: String,
    pub message: String,
    pub kind: ContactKind,
}

/// JSON body accepted by the form relay.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RelayPayload {
    pub name: String,
    pub contact: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl ValidInquiry {
    pub fn payload(&self) -> RelayPayload {
        RelayPayload {
            name: self.name.clone(),
            contact: self.contact.clone(),
            message: self.message.clone(),
            subject: format!("New Chatbot Inquiry from {}", self.name),
        }
    }

    fn display_contact(&self) -> String {
        match self.kind {
            ContactKind::Email => self.contact.clone(),
            ContactKind::Phone => strip_phone_separators(&self.contact),
        }
    }

    /// Pre-filled wa.me link handed to the team after a successful relay.
    pub fn whatsapp_link(&self, number: &str) -> String {
        let text = format!(
            "Hello! I received an inquiry from {} ({}): {}",
            self.name,
            self.display_contact(),
            self.message
        );
        format!("https://wa.me/{}?text={}", number, urlencoding::encode(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, contact: &str, message: &str) -> InquiryDraft {
        InquiryDraft {
            name: name.into(),
            contact: contact.into(),
            message: message.into(),
        }
    }

    #[test]
    fn any_empty_field_is_missing() {
        assert_eq!(draft("", "8247392437", "Hi").validate(), Err(InquiryError::MissingField));
        assert_eq!(draft("Asha", "", "Hi").validate(), Err(InquiryError::MissingField));
        assert_eq!(draft("Asha", "8247392437", "").validate(), Err(InquiryError::MissingField));
    }

    #[test]
    fn contact_is_trimmed_before_validation() {
        let inquiry = draft("Asha", "  asha@mail.com ", "Hi").validate().unwrap();
        assert_eq!(inquiry.contact, "asha@mail.com");
        assert_eq!(inquiry.kind, ContactKind::Email);
    }

    #[test]
    fn payload_carries_subject_under_underscore_key() {
        let inquiry = draft("Asha", "8247392437", "Hi").validate().unwrap();
        let json = serde_json::to_value(inquiry.payload()).unwrap();
        assert_eq!(json["_subject"], "New Chatbot Inquiry from Asha");
        assert_eq!(json["contact"], "8247392437");
        assert!(json.get("subject").is_none());
    }

    #[test]
    fn whatsapp_link_strips_phone_separators() {
        let inquiry = draft("Asha", "+91 82473-92437", "Need an internship").validate().unwrap();
        let link = inquiry.whatsapp_link("918247392437");
        assert!(link.starts_with("https://wa.me/918247392437?text="));
        assert!(link.contains("918247392437%29"));
        assert!(link.contains("Need%20an%20internship"));
        assert!(!link.contains('+'));
    }

    #[test]
    fn whatsapp_link_keeps_email_verbatim() {
        let inquiry = draft("Ravi", "ravi@mail.com", "Hello").validate().unwrap();
        let link = inquiry.whatsapp_link("918247392437");
        assert!(link.contains("ravi%40mail.com"));
    }

    #[test]
    fn quick_reply_overwrites_message() {
        let mut d = draft("", "", "something typed");
        d.set_quick_reply("Contact Team");
        assert_eq!(d.message, "Contact Team");
    }

    #[test]
    fn appended_text_is_space_separated() {
        let mut d = InquiryDraft::default();
        d.append_text("hello");
        assert_eq!(d.message, "hello");
        d.append_text("world");
        assert_eq!(d.message, "hello world");
    }
}
