//! Response decoding.
//!
//! Both entry points take the response by value and read the body to the end
//! before inspecting it, so the connection is released on every path.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::trace;

use aggregator_core::error::{ApiError, DecodeError};
use aggregator_core::Error;

use crate::transport::transport_error;

/// Decode a success response body into `T`.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let body = success_body(response).await?;
    serde_json::from_slice(&body).map_err(|e| Error::from(DecodeError::for_type::<T>(e)))
}

/// Check the status of a response whose body is not needed.
pub(crate) async fn expect_success(response: Response) -> Result<(), Error> {
    success_body(response).await.map(drop)
}

async fn success_body(response: Response) -> Result<Vec<u8>, Error> {
    let status = response.status();
    let body = response.bytes().await.map_err(transport_error)?;
    trace!(%status, len = body.len(), "response body read");

    if status.is_success() {
        Ok(body.to_vec())
    } else {
        Err(ApiError::new(status.as_u16(), String::from_utf8_lossy(&body)).into())
    }
}
