pub use client::Credentials;
pub use client::SubscriptionClient;
pub use outcome::FailureReason;
pub use outcome::SubscriptionOutcome;
pub use request::SubscriptionRequest;

mod client;
mod outcome;
mod request;
