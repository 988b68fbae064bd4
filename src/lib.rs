// Biblioteca raíz del crate `mock_course_api`.
// Servidor HTTP de pruebas que devuelve cursos fijos en JSON con una latencia
// artificial, para probar clientes contra una "course API" falsa.
pub mod api_json;
pub mod catalog;
pub mod delivery;
pub mod error;
pub mod models;
pub mod server;
pub mod server_handlers;

/// Reexport para facilitar uso desde `main`
pub use server::{ServerConfig, run_server};
