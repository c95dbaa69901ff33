//! Request/response plumbing shared by the HTTP-backed providers.

use crate::classify::{classify_status, classify_transport};
use crate::prompt::fallback_title;
use crate::{GatewayError, HttpRequest, HttpTransport, ProviderId};

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Issues exactly one POST and returns the body of a 200 response.
pub(crate) fn send(
    provider: ProviderId,
    transport: &dyn HttpTransport,
    request: HttpRequest,
) -> Result<String, GatewayError> {
    let response = transport.post(request).map_err(classify_transport)?;
    tracing::debug!(
        provider = %provider,
        status = response.status,
        body_len = response.body.len(),
        "provider response received"
    );

    classify_status(provider, response.status, &response.body)?;
    Ok(response.body)
}

pub(crate) fn title_or_fallback(
    provider: ProviderId,
    first_user_message: &str,
    outcome: Result<String, GatewayError>,
) -> String {
    match outcome {
        Ok(title) if !title.trim().is_empty() => title.trim().to_string(),
        Ok(_) => {
            tracing::warn!(provider = %provider, "provider returned an empty title, using fallback");
            fallback_title(first_user_message)
        }
        Err(error) => {
            tracing::warn!(
                provider = %provider,
                error_code = %error.code,
                retryable = error.retryable,
                error = %error,
                "title generation failed, using fallback"
            );
            fallback_title(first_user_message)
        }
    }
}
