use std::convert::TryFrom;

use anyhow::Context;
use derivative::Derivative;
use reqwest::{
    Client,
    Response,
    StatusCode,
    Url,
};

use crate::domain::{
    PageContext,
    SubscriberEmail,
};
use crate::subscription_client::outcome::SubscriptionOutcome;
use crate::subscription_client::request::SubscriptionRequest;

/// Provider credentials supplied by the embedding environment.
///
/// Both values are opaque to the client and never validated locally.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Credentials {
    #[derivative(Debug = "ignore")]
    pub api_key: String,
    pub publication_id: String,
}

#[derive(Debug)]
pub struct SubscriptionClient {
    http_client: Client,
    subscription_url: Url,
    credentials: Credentials,
}

#[derive(serde::Deserialize)]
struct RejectionBody {
    message: String,
}

const UNEXPECTED_RESPONSE_MESSAGE: &str = "unexpected response from the subscription service";

impl SubscriptionClient {
    /// The subscription endpoint is interpolated once here, from the real
    /// publication identifier.
    pub fn new(base_url: Url, credentials: Credentials) -> Result<Self, anyhow::Error> {
        let subscription_url = base_url
            .join(&format!(
                "v2/publications/{}/subscriptions",
                credentials.publication_id
            ))
            .context(format!(
                "error building the subscription endpoint from base url: {}",
                base_url
            ))?;
        Ok(Self {
            http_client: Client::new(),
            subscription_url,
            credentials,
        })
    }

    /// Run one subscription attempt: validate, enrich with the tracking
    /// parameters of `context`, post to the provider and interpret the
    /// response.
    ///
    /// Exactly one outbound request is made per call, and only when
    /// validation passes. Every failure is reported through the returned
    /// [`SubscriptionOutcome`].
    #[tracing::instrument(
        name = "submitting subscription",
        skip(self, context),
        fields(email = %email, referring_site = %context.url())
    )]
    pub async fn submit(&self, email: &str, context: &PageContext) -> SubscriptionOutcome {
        let email = match SubscriberEmail::try_from(email.to_string()) {
            Ok(email) => email,
            Err(e) => {
                tracing::warn!("{}", e);
                return SubscriptionOutcome::InvalidEmail {
                    message: e.to_string(),
                };
            }
        };

        let request_body = SubscriptionRequest::new(email.as_ref(), context);
        let response = self
            .http_client
            .post(self.subscription_url.clone())
            .header("Content-Type", "application/json")
            .header(
                "Authorization",
                format!("Bearer {}", self.credentials.api_key),
            )
            .json(&request_body)
            .send()
            .await;

        match response {
            Ok(response) => interpret_response(response).await,
            Err(e) => {
                tracing::error!("transport error submitting subscription: {}", e);
                SubscriptionOutcome::from_transport_error(&e)
            }
        }
    }
}

async fn interpret_response(response: Response) -> SubscriptionOutcome {
    let status = response.status();
    if status == StatusCode::OK {
        return SubscriptionOutcome::Success;
    }

    // the provider reports the rejection cause in a `message` field; a body
    // that does not parse must not escape as an error
    let message = response
        .json::<RejectionBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| UNEXPECTED_RESPONSE_MESSAGE.to_string());
    tracing::error!("subscription rejected with status {}: {}", status, message);
    SubscriptionOutcome::Rejected {
        status_code: status.as_u16(),
        message,
    }
}
