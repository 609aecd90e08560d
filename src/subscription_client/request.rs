use serde::Serialize;

use crate::domain::PageContext;

/// JSON body of a subscription creation call.
///
/// Tracking parameters are read from the hosting page's query string and
/// default to empty strings when absent. The two policy flags are fixed:
/// the provider sends its welcome email and reactivates a previously
/// unsubscribed address.
#[derive(Debug, Serialize)]
pub struct SubscriptionRequest<'a> {
    pub email: &'a str,
    pub utm_source: &'a str,
    pub utm_medium: &'a str,
    pub utm_campaign: &'a str,
    pub referring_site: &'a str,
    pub send_welcome_email: bool,
    pub reactivate_existing: bool,
}

impl<'a> SubscriptionRequest<'a> {
    pub fn new(email: &'a str, context: &'a PageContext) -> Self {
        Self {
            email,
            utm_source: context.query_param("utm_source").unwrap_or(""),
            utm_medium: context.query_param("utm_medium").unwrap_or(""),
            utm_campaign: context.query_param("utm_campaign").unwrap_or(""),
            referring_site: context.url(),
            send_welcome_email: true,
            reactivate_existing: true,
        }
    }
}
