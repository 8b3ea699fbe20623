use crate::config;
use crate::error::{Result, SiteError};

pub const MIN_PHONE_LEN: usize = 8;
const NO_DETAILS: &str = "N/A";

/// Raw values read from `#contact-form`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub message: String,
}

/// A submission that passed validation, fields trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SiteError::MissingName);
        }

        let phone = self.phone.trim();
        if phone.chars().count() < MIN_PHONE_LEN {
            return Err(SiteError::InvalidPhone);
        }

        let message = self.message.trim();
        Ok(ContactRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }
}

impl ContactRequest {
    pub fn message_text(&self) -> String {
        format!(
            "Hi, my name is {}.\nPhone: {}\n\nI am interested in carpentry services.\n\nDetails: {}",
            self.name,
            self.phone,
            self.message.as_deref().unwrap_or(NO_DETAILS),
        )
    }

    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            config::WHATSAPP_NUMBER,
            urlencoding::encode(&self.message_text())
        )
    }
}

/// `name` attribute of the field that should take focus after a failed submit.
pub fn invalid_field(err: &SiteError) -> Option<&'static str> {
    match err {
        SiteError::MissingName => Some("name"),
        SiteError::InvalidPhone => Some("phone"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, phone: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    fn text_param(url: &str) -> String {
        let (_, encoded) = url.split_once("?text=").expect("text param");
        urlencoding::decode(encoded).expect("valid encoding").into_owned()
    }

    #[test]
    fn empty_name_is_rejected_first() {
        let err = form("", "123", "").validate().unwrap_err();
        assert_eq!(err, SiteError::MissingName);
        assert_eq!(err.to_string(), "Please enter your name.");
        assert_eq!(invalid_field(&err), Some("name"));

        assert_eq!(form("   ", "9876543210", "").validate().unwrap_err(), SiteError::MissingName);
    }

    #[test]
    fn short_or_blank_phone_is_rejected() {
        for phone in ["", "   ", "123", "1234567", "  1234567  "] {
            let err = form("Sam", phone, "").validate().unwrap_err();
            assert_eq!(err, SiteError::InvalidPhone, "{phone:?}");
            assert_eq!(invalid_field(&err), Some("phone"));
        }
        assert!(form("Sam", "12345678", "").validate().is_ok());
    }

    #[test]
    fn missing_message_becomes_placeholder() {
        let request = form("Sam", "9876543210", "").validate().unwrap();
        let url = request.whatsapp_url();
        assert!(url.starts_with("https://wa.me/918919929327?text="));
        assert!(text_param(&url).contains("Details: N/A"));
    }

    #[test]
    fn message_template_is_trimmed_and_complete() {
        let request = form("  Priya ", " +91 98765 43210 ", "  Need a wardrobe  ").validate().unwrap();
        assert_eq!(
            request.message_text(),
            "Hi, my name is Priya.\nPhone: +91 98765 43210\n\nI am interested in carpentry services.\n\nDetails: Need a wardrobe"
        );
        let url = request.whatsapp_url();
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
        assert_eq!(text_param(&url), request.message_text());
    }

    #[test]
    fn reviews_errors_have_no_form_field() {
        assert_eq!(invalid_field(&SiteError::NoReviews), None);
    }
}
