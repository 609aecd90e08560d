use std::convert::TryFrom;

use crate::domain::errors::MalformedInput;

/// An address with the basic `local@domain.tld` shape accepted by the
/// subscription provider: one `@`, no whitespace on either side, and at
/// least one interior dot in the domain part.
#[derive(Clone, Debug)]
pub struct SubscriberEmail(String);

impl TryFrom<String> for SubscriberEmail {
    type Error = MalformedInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if has_subscriber_shape(&email) {
            Ok(SubscriberEmail(email))
        } else {
            Err(MalformedInput::InvalidEmail { email })
        }
    }
}

fn has_subscriber_shape(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };

    let local_is_valid = !local.is_empty() && !local.chars().any(char::is_whitespace);
    let domain_is_valid = !domain.contains('@') && !domain.chars().any(char::is_whitespace);
    let domain_has_interior_dot = domain
        .match_indices('.')
        .any(|(position, _)| position > 0 && position + 1 < domain.len());

    local_is_valid && domain_is_valid && domain_has_interior_dot
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
