//! AWS Signature Version 4 request signing.
//!
//! Responsibilities:
//! - Compute the SigV4 signing headers for a fully prepared request.
//!
//! Does NOT handle:
//! - Obtaining the credentials (see `sts`).
//! - Applying the headers to the outgoing request (see `client::dispatch`).
//!
//! Invariants:
//! - The signature covers every header already on the request and the exact
//!   body bytes that will be sent.

use std::time::SystemTime;

use aws_credential_types::Credentials;
use aws_sigv4::http_request::{
    SignableBody, SignableRequest, SigningParams, SigningSettings, sign,
};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use reqwest::header::HeaderMap;
use secrecy::ExposeSecret;

use crate::auth::TemporaryCredentials;
use crate::error::{ClientError, Result};

/// Service name the management API is signed for.
pub const SIGNING_SERVICE: &str = "execute-api";

/// Signing input describing the request as it will be sent.
#[derive(Debug)]
pub(crate) struct SigningInput<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub headers: &'a HeaderMap,
    pub body: &'a [u8],
    pub region: &'a str,
    pub time: SystemTime,
}

/// Sign a request and return the headers to add to it.
///
/// The returned list contains `authorization`, `x-amz-date` and, because
/// temporary credentials always carry one, `x-amz-security-token`.
pub(crate) fn sign_request(
    input: &SigningInput<'_>,
    credentials: TemporaryCredentials,
) -> Result<Vec<(String, String)>> {
    let identity: Identity = Credentials::new(
        credentials.access_key_id,
        credentials.secret_access_key.expose_secret(),
        Some(credentials.session_token.expose_secret().to_string()),
        None,
        "cloudngfw-assumed-role",
    )
    .into();

    let params: SigningParams<'_> = v4::SigningParams::builder()
        .identity(&identity)
        .region(input.region)
        .name(SIGNING_SERVICE)
        .time(input.time)
        .settings(SigningSettings::default())
        .build()
        .map_err(|e| ClientError::Signing(e.to_string()))?
        .into();

    let headers = input
        .headers
        .iter()
        .map(|(name, value)| {
            value
                .to_str()
                .map(|value| (name.as_str(), value))
                .map_err(|_| ClientError::Signing(format!("header {name} is not valid text")))
        })
        .collect::<Result<Vec<_>>>()?;

    let signable = SignableRequest::new(
        input.method,
        input.url,
        headers.into_iter(),
        SignableBody::Bytes(input.body),
    )
    .map_err(|e| ClientError::Signing(e.to_string()))?;

    let (instructions, _signature) = sign(signable, &params)
        .map_err(|e| ClientError::Signing(e.to_string()))?
        .into_parts();
    let (signing_headers, _query) = instructions.into_parts();

    Ok(signing_headers
        .into_iter()
        .map(|header| (header.name().to_string(), header.value().to_string()))
        .collect())
}
