use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api_json::json_response;
use crate::catalog::{Lookup, catalog};
use crate::delivery::{PeerSocket, PendingResponse};
use crate::error::ApiError;
use crate::server::ServerConfig;

/// Extrae la clave de búsqueda del target de la petición: se quitan todas las
/// `/` del inicio y del final. El query string no se separa ni se decodifica,
/// así que `/CP353004?x=1` no coincide con ningún curso.
pub fn lookup_key(target: &str) -> &str {
    target.trim_matches('/')
}

/// Único servicio de la app (default service).
///
/// - `GET /`            -> 200 `{"available_codes": [...]}`
/// - `GET /<código>`    -> 200 con el curso completo
/// - `GET /<otro>`      -> 404 `{"error": "course '<otro>' not found"}`
/// - cualquier otro método -> 501, sin espera
///
/// Si el cliente cierra la conexión durante la espera se registra un `warn!`
/// y se corta la espera; la respuesta se construye igual y actix la descarta.
pub async fn dispatch_handler(req: HttpRequest, config: web::Data<ServerConfig>) -> Result<HttpResponse, ApiError> {
    let target = req.uri().path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let label = format!("{} {}", req.method(), target);

    if *req.method() != Method::GET {
        log::debug!("rejecting {}", label);
        return Ok(ApiError::UnsupportedMethod(req.method().to_string()).to_response(&label));
    }

    let key = lookup_key(target);
    log::info!("course request: code={}", key);

    // Simula un upstream lento
    let pending = PendingResponse::new(&label);
    let disconnected = match req.conn_data::<PeerSocket>() {
        Some(peer) => tokio::select! {
            _ = tokio::time::sleep(config.delay) => false,
            _ = peer.closed() => true,
        },
        None => {
            tokio::time::sleep(config.delay).await;
            false
        }
    };
    pending.complete();
    if disconnected {
        log::warn!("client disconnected while waiting for '{}' (timeout)", label);
    }

    match catalog().resolve(key) {
        Ok(Lookup::Index(codes)) => json_response(StatusCode::OK, &codes, &label),
        Ok(Lookup::Course(course)) => json_response(StatusCode::OK, course, &label),
        Err(e) => {
            log::debug!("{}", e);
            Ok(e.to_response(&label))
        }
    }
}
