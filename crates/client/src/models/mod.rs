//! Response models and the response-decoding contract.

mod auth;
mod common;

pub use auth::{
    TOKEN_EXPIRY_TIME, TOKEN_TENANT, TokenKeyInfo, TokenRequest, TokenResponse,
    TokenResponseDetails,
};
pub use common::{ApiErrorDetails, ApiResponse, ResponseStatus, StatusResponse};
