//! Request body decoding shared by the write endpoints.
//!
//! Bodies arrive either as JSON or as `application/x-www-form-urlencoded`
//! (the landing page posts plain HTML forms). Form fields are always text,
//! so numeric fields accept both JSON numbers and numeric strings.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Extractor decoding `T` from a JSON or URL-encoded form body.
///
/// The `Content-Type` header selects the decoder; anything other than a
/// form content type is treated as JSON.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<T> JsonOrForm<T> {
    /// Unwrap the decoded value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonOrForm<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type() == FORM_CONTENT_TYPE {
            let form = web::Form::<T>::from_request(req, payload);
            Box::pin(async move { form.await.map(|form| Self(form.into_inner())) })
        } else {
            let json = web::Json::<T>::from_request(req, payload);
            Box::pin(async move { json.await.map(|json| Self(json.into_inner())) })
        }
    }
}

/// Text field that may also arrive as a bare JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    Number(f64),
    Text(String),
}

/// Treat absent and empty text fields alike.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
