use std::convert::TryFrom;

use actix_web::{
    web,
    HttpResponse,
};
use serde::Deserialize;

use crate::domain::PageContext;
use crate::routes::RouteError;
use crate::subscription_client::{
    SubscriptionClient,
    SubscriptionOutcome,
};

#[derive(Deserialize)]
pub struct FormData {
    email: String,
    page_url: Option<String>,
}

#[tracing::instrument(
    name = "capturing new subscriber",
    skip(form, subscription_client),
    fields(email = %form.email)
)]
pub async fn capture(
    form: web::Form<FormData>,
    subscription_client: web::Data<SubscriptionClient>,
) -> Result<HttpResponse, RouteError> {
    let context = build_page_context(&form)?;
    let outcome = subscription_client.submit(&form.email, &context).await;
    Ok(respond_with(outcome))
}

fn build_page_context(form: &FormData) -> Result<PageContext, RouteError> {
    match form.page_url.as_deref() {
        Some(raw_url) => Ok(PageContext::try_from(raw_url)?),
        None => Ok(PageContext::unknown()),
    }
}

fn respond_with(outcome: SubscriptionOutcome) -> HttpResponse {
    match outcome {
        SubscriptionOutcome::Success => HttpResponse::Ok().finish(),
        SubscriptionOutcome::InvalidEmail { message } => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
        }
        SubscriptionOutcome::Rejected {
            status_code,
            message,
        } => HttpResponse::BadGateway().json(serde_json::json!({
            "error": format!("Error {}: {}", status_code, message)
        })),
        SubscriptionOutcome::NetworkFailure { reason } => {
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "error": format!("subscription service unreachable: {}", reason.as_str())
            }))
        }
    }
}
