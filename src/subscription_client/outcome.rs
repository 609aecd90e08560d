/// Result of a single subscription attempt.
///
/// Every failure path inside `SubscriptionClient::submit` is normalized into
/// one of these variants: the caller never sees a transport error directly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubscriptionOutcome {
    /// The provider accepted the address with HTTP 200.
    Success,
    /// The address failed validation, no request was sent.
    InvalidEmail { message: String },
    /// The provider was reached and answered with a non-success status.
    Rejected { status_code: u16, message: String },
    /// No response was obtained from the provider.
    NetworkFailure { reason: FailureReason },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureReason {
    /// DNS resolution or connection establishment failed.
    Connectivity,
    /// Any other transport-level failure.
    Unknown,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::Connectivity => "connectivity",
            FailureReason::Unknown => "unknown",
        }
    }
}

impl SubscriptionOutcome {
    pub fn from_transport_error(error: &reqwest::Error) -> Self {
        let reason = if error.is_connect() {
            FailureReason::Connectivity
        } else {
            FailureReason::Unknown
        };
        SubscriptionOutcome::NetworkFailure { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubscriptionOutcome::Success)
    }
}
