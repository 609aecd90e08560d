use crate::domain::PageContext;
use crate::subscription_client::{
    FailureReason,
    SubscriptionClient,
    SubscriptionOutcome,
};

const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
const CONNECTIVITY_MESSAGE: &str = "A network error occurred while submitting your email. Please \
                                    check your internet connection and try again.";
const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while submitting your email. Please try again.";

/// UI-facing state of one capture form instance.
///
/// The controller owns the three pieces of widget state (current email text,
/// error message, success flag) and delegates the submission workflow to
/// [`SubscriptionClient`]. It never talks to the network itself.
#[derive(Debug, Default)]
pub struct FormController {
    email: String,
    error: Option<String>,
    success: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Submit the current email text, replacing any previous error or
    /// success state: exactly one of the two is set when this returns.
    pub async fn submit(&mut self, client: &SubscriptionClient, context: &PageContext) {
        self.error = None;
        self.success = false;

        match client.submit(&self.email, context).await {
            SubscriptionOutcome::Success => self.success = true,
            SubscriptionOutcome::InvalidEmail { .. } => {
                self.error = Some(INVALID_EMAIL_MESSAGE.to_string())
            }
            SubscriptionOutcome::Rejected {
                status_code,
                message,
            } => self.error = Some(format!("Error {}: {}", status_code, message)),
            SubscriptionOutcome::NetworkFailure {
                reason: FailureReason::Connectivity,
            } => self.error = Some(CONNECTIVITY_MESSAGE.to_string()),
            SubscriptionOutcome::NetworkFailure {
                reason: FailureReason::Unknown,
            } => self.error = Some(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }
}
