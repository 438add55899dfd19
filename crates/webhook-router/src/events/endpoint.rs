//! Endpoint validation.

use super::payload::UrlValidationPayload;

event_family! {
    /// Events addressed to the webhook endpoint itself.
    EndpointEvent => Endpoint {
        "endpoint.url_validation" => UrlValidation(UrlValidationPayload),
    }
}
