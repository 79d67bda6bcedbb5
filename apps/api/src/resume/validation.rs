use std::collections::BTreeMap;

use crate::models::resume::Contact;

/// Field name → message. Empty means the contact block is complete.
pub type ContactErrors = BTreeMap<&'static str, &'static str>;

/// Checks the fields the wizard requires before leaving the contact step.
pub fn validate_contact(contact: &Contact) -> ContactErrors {
    let required: [(&'static str, &str, &'static str); 4] = [
        ("name", contact.name.as_str(), "Full name is required"),
        ("email", contact.email.as_str(), "Email is required"),
        ("city", contact.city.as_str(), "City is required"),
        ("state", contact.state.as_str(), "State is required"),
    ];

    required
        .into_iter()
        .filter(|(_, value, _)| value.trim().is_empty())
        .map(|(field, _, message)| (field, message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_contact_passes() {
        let contact = Contact {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: String::new(),
            city: "Austin".into(),
            state: "TX".into(),
        };
        assert!(validate_contact(&contact).is_empty());
    }

    #[test]
    fn test_blank_fields_reported() {
        let contact = Contact {
            name: "  ".into(),
            city: "Austin".into(),
            ..Default::default()
        };
        let errors = validate_contact(&contact);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["name"], "Full name is required");
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("state"));
        assert!(!errors.contains_key("city"));
    }
}
