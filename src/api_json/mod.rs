use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::delivery::DeliveryBody;
use crate::error::ApiError;

/// Content-Type de todas las respuestas del servidor.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Respuesta de `GET /`
///
/// ```json
/// {
///   "available_codes": ["CP353004", "CP353002", "CP353006"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableCodes {
    pub available_codes: Vec<String>,
}

impl AvailableCodes {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        AvailableCodes {
            available_codes: catalog.codes().into_iter().map(str::to_string).collect(),
        }
    }
}

/// Cuerpo de error: `{"error": "<mensaje>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serializa con indentación de 2 espacios, sin escapar caracteres no ASCII
/// (el texto en tailandés sale tal cual) y sin salto de línea final.
pub fn render_pretty<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Render(e.to_string()))
}

/// Construye la respuesta JSON completa. `label` identifica la petición en los
/// logs si el cliente se desconecta antes de recibir el cuerpo.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T, label: &str) -> Result<HttpResponse, ApiError> {
    let text = render_pretty(value)?;
    Ok(HttpResponse::build(status)
        .content_type(JSON_CONTENT_TYPE)
        .body(DeliveryBody::new(text, label)))
}
