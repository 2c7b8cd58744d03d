//! Contact form validation and link builders
//!
//! The site has no backend for enquiries: a valid form is handed off to the
//! visitor's mail client through a `mailto:` link, which is also what the
//! no-script fallback offers.

use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;

use crate::fixtures::SERVICES;
use crate::model::BusinessInfo;

pub const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Service id the visitor is asking about, empty for general enquiries
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl ContactForm {
    /// Every problem with the form, in field order
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError { field: Field::Name, message: "Please enter your name" });
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError { field: Field::Email, message: "Please enter your email" });
        } else if !looks_like_email(email) {
            errors.push(FieldError { field: Field::Email, message: "Please enter a valid email" });
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !looks_like_phone(phone) {
            errors.push(FieldError { field: Field::Phone, message: "Please enter a valid phone number" });
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError { field: Field::Message, message: "Please tell us about your project" });
        } else if message.chars().count() > MAX_MESSAGE_LEN {
            errors.push(FieldError { field: Field::Message, message: "Message is too long" });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Title of the selected service; unknown ids pass through as typed
    fn service_title(&self) -> Option<&str> {
        let service = self.service.trim();
        if service.is_empty() {
            return None;
        }
        Some(
            SERVICES
                .iter()
                .find(|s| s.id == service)
                .map(|s| s.title)
                .unwrap_or(service),
        )
    }

    fn subject(&self) -> String {
        match self.service_title() {
            Some(title) => format!("{} enquiry from {}", title, self.name.trim()),
            None => format!("Enquiry from {}", self.name.trim()),
        }
    }

    fn body(&self) -> String {
        let mut body = format!("{}\n\n{}\n", self.message.trim(), self.name.trim());
        body.push_str(self.email.trim());
        if !self.phone.trim().is_empty() {
            body.push('\n');
            body.push_str(self.phone.trim());
        }
        body
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && domain.contains('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn looks_like_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'))
}

/// RFC 6068 style encoding: spaces must be `%20`, not `+`
fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect::<String>().replace('+', "%20")
}

/// `mailto:` link pre-filled from the form
pub fn mailto_href(business: &BusinessInfo, form: &ContactForm) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        business.email,
        encode(&form.subject()),
        encode(&form.body())
    )
}

/// Plain `mailto:` link with only a subject
pub fn mailto_plain(business: &BusinessInfo, subject: &str) -> String {
    format!("mailto:{}?subject={}", business.email, encode(subject))
}

pub fn whatsapp_href(business: &BusinessInfo, text: &str) -> String {
    format!("https://wa.me/{}?text={}", business.whatsapp, encode(text))
}

pub fn tel_href(business: &BusinessInfo) -> String {
    let digits: String = business
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BUSINESS;

    fn valid() -> ContactForm {
        ContactForm {
            name: "Amira".to_string(),
            email: "amira@example.com".to_string(),
            phone: "+971 50 123 4567".to_string(),
            service: "led-neon".to_string(),
            message: "Need a neon sign for a café".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn test_invalid_email_and_phone() {
        let mut form = valid();
        form.email = "amira@example".to_string();
        form.phone = "12ab".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[1].field, Field::Phone);
    }

    #[test]
    fn test_phone_is_optional() {
        let mut form = valid();
        form.phone = "  ".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_message_length_limit() {
        let mut form = valid();
        form.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(form.validate().unwrap_err()[0].field, Field::Message);
    }

    #[test]
    fn test_mailto_encoding() {
        let href = mailto_href(&BUSINESS, &valid());
        assert!(href.starts_with("mailto:info@skylinesigns.ae?subject="));
        assert!(href.contains("LED%20%26%20Neon%20Signs%20enquiry%20from%20Amira"));
        assert!(!href.contains('+') || href.contains("%2B971"));
        assert!(!href.contains(' '));
    }

    #[test]
    fn test_subject_uses_service_title() {
        let mut form = valid();
        form.service = "channel-letters".to_string();
        assert_eq!(form.subject(), "3D Channel Letters enquiry from Amira");

        form.service = "signwriting".to_string();
        assert_eq!(form.subject(), "signwriting enquiry from Amira");

        form.service = String::new();
        assert_eq!(form.subject(), "Enquiry from Amira");
    }

    #[test]
    fn test_whatsapp_and_tel() {
        assert_eq!(
            whatsapp_href(&BUSINESS, "Hi there"),
            "https://wa.me/97145550142?text=Hi%20there"
        );
        assert_eq!(tel_href(&BUSINESS), "tel:+97145550142");
    }
}
