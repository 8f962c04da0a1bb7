use crate::response::api_response::ErrorBody;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    #[error("Cuerpo de la petición inválido")]
    JsonRejection(#[from] JsonRejection),
}

/// Deserializes the JSON body and runs the DTO's `validator` rules before
/// the handler sees it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedRequest<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedRequest<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = RequestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(RequestError::JsonRejection)?;
        value.validate()?;
        Ok(ValidatedRequest(value))
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let message = match &self {
            RequestError::ValidationError(errors) => first_validation_message(errors)
                .unwrap_or_else(|| "Datos de la petición inválidos".to_string()),
            RequestError::JsonRejection(_) => self.to_string(),
        };

        ErrorBody::send(message).with_status(StatusCode::BAD_REQUEST).into_response()
    }
}

/// Outward shape is a single `{"error": ...}` message; the first failed
/// rule wins, matching the original API's flat error bodies.
fn first_validation_message(errors: &validator::ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Dto {
        #[validate(length(min = 1, message = "Email y contraseña son requeridos"))]
        email: String,
    }

    #[test]
    fn test_first_validation_message() {
        let dto = Dto { email: String::new() };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            first_validation_message(&errors).as_deref(),
            Some("Email y contraseña son requeridos")
        );
    }
}
