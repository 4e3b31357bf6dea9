//! Derived contact details for the detail view.
//!
//! None of these values are authoritative: the email address is fabricated
//! from the candidate's name, the phone number is a fixed placeholder, and
//! the resume filename points at a file that does not exist. They exist so
//! the detail view has working-looking actions to offer.

use tracing::debug;

/// Placeholder phone number shown for every candidate.
pub const PLACEHOLDER_PHONE: &str = "+1 (555) 123-4567";

/// Static additional-information block shown on every profile.
pub const PLACEHOLDER_AVAILABILITY: &str = "Available in 2 weeks";
pub const PLACEHOLDER_SALARY: &str = "$90K - $130K";
pub const PLACEHOLDER_AUTHORIZATION: &str = "US Citizen";
pub const PLACEHOLDER_REMOTE: &str = "Open to remote";

/// Fabricates `first.last@example.com` from a candidate name.
pub fn email_address(name: &str) -> String {
    let local: Vec<String> = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    format!("{}@example.com", local.join("."))
}

pub fn mailto_link(name: &str) -> String {
    format!("mailto:{}", email_address(name))
}

pub fn tel_link() -> String {
    format!("tel:{PLACEHOLDER_PHONE}")
}

/// Derives the placeholder resume filename, e.g. `Sarah_Chen_Resume.pdf`.
pub fn resume_filename(name: &str) -> String {
    let stem: Vec<&str> = name.split_whitespace().collect();
    format!("{}_Resume.pdf", stem.join("_"))
}

/// Try to open a link with the platform handler. Best effort: failures are
/// logged and reported to the caller, never fatal.
pub fn open_external(target: &str) -> bool {
    match open::that(target) {
        Ok(()) => {
            debug!(target = %target, "opened external link");
            true
        }
        Err(e) => {
            debug!(target = %target, error = %e, "failed to open external link");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_joins_name_parts_with_dots() {
        assert_eq!(email_address("Sarah Chen"), "sarah.chen@example.com");
        assert_eq!(
            email_address("Mary Jane Watson"),
            "mary.jane.watson@example.com"
        );
    }

    #[test]
    fn test_mailto_link() {
        assert_eq!(mailto_link("Sarah Chen"), "mailto:sarah.chen@example.com");
    }

    #[test]
    fn test_tel_link_uses_placeholder() {
        assert_eq!(tel_link(), "tel:+1 (555) 123-4567");
    }

    #[test]
    fn test_resume_filename() {
        assert_eq!(resume_filename("Sarah Chen"), "Sarah_Chen_Resume.pdf");
        assert_eq!(
            resume_filename("Mary Jane Watson"),
            "Mary_Jane_Watson_Resume.pdf"
        );
    }
}
