use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::api_json::{ErrorBody, JSON_CONTENT_TYPE, json_response};

// Cuerpo usado si falla la serialización del propio error
const RENDER_FAILURE_BODY: &str = "{\n  \"error\": \"internal server error\"\n}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// La clave no corresponde a ningún curso del catálogo.
    CourseNotFound(String),
    /// Método HTTP distinto de GET.
    UnsupportedMethod(String),
    Render(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::CourseNotFound(code) => write!(f, "course '{}' not found", code),
            ApiError::UnsupportedMethod(method) => write!(f, "unsupported method '{}'", method),
            ApiError::Render(msg) => write!(f, "failed to render response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CourseNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnsupportedMethod(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(&self.to_string())
    }
}

impl ApiError {
    /// Respuesta JSON del error. `label` identifica la petición (p. ej.
    /// `GET /NOPE`) en el aviso de desconexión del cuerpo.
    pub fn to_response(&self, label: &str) -> HttpResponse {
        let status = self.status_code();
        if let ApiError::Render(msg) = self {
            log::error!("{}", msg);
            return render_failure(status);
        }

        let body = ErrorBody { error: self.to_string() };
        json_response(status, &body, label).unwrap_or_else(|_| render_failure(status))
    }
}

fn render_failure(status: StatusCode) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(JSON_CONTENT_TYPE)
        .body(RENDER_FAILURE_BODY)
}
