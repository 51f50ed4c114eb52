use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body decoded without looking at `Content-Type`.
///
/// Several routes are GETs carrying a body, and clients rarely label those.
/// Only the first JSON value is read; anything after it is ignored, and a
/// bare `null` yields the default body. Read or decode failures become a
/// 400 with the decoder's message.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        decode_first(&bytes).map(JsonBody)
    }
}

fn decode_first<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Option<T>>()
        .next()
    {
        Some(Ok(value)) => Ok(value.unwrap_or_default()),
        Some(Err(e)) => Err(ApiError::BadRequest(e.to_string())),
        None => Err(ApiError::BadRequest("EOF".into())),
    }
}
