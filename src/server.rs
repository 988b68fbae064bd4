use actix_web::dev::Server;
use actix_web::{App, HttpServer, middleware, web};
use std::net::TcpListener;
use std::time::Duration;

use crate::catalog::catalog;
use crate::delivery::PeerSocket;
use crate::server_handlers::dispatch_handler;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8888;
/// Latencia simulada de cada GET.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(20);

/// Configuración del servidor. El binario siempre usa `ServerConfig::default()`;
/// los builders existen para los tests y para embeber la app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            delay: DEFAULT_DELAY,
        }
    }
}

impl ServerConfig {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Registra la configuración compartida y el dispatcher como default service:
/// toda petición, sea cual sea la ruta, pasa por `dispatch_handler`.
pub fn configure_app(cfg: &mut web::ServiceConfig, config: ServerConfig) {
    cfg.app_data(web::Data::new(config))
        .default_service(web::to(dispatch_handler));
}

/// Arranca el servidor sobre un listener ya abierto y devuelve el handle sin
/// esperar a que termine.
pub fn serve(listener: TcpListener, config: ServerConfig) -> std::io::Result<Server> {
    listener.set_nonblocking(true)?;
    let server = HttpServer::new(move || {
        let config = config.clone();
        App::new()
            .wrap(middleware::Logger::default())
            .configure(move |cfg| configure_app(cfg, config))
    })
    .on_connect(PeerSocket::register)
    .listen(listener)?
    .run();
    Ok(server)
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let codes = catalog().codes().join(", ");
    log::info!("Mock Course API running at http://{}:{}", config.host, config.port);
    log::info!("Available courses: {}", codes);
    log::info!("Simulated latency per request: {:?}", config.delay);

    let listener = TcpListener::bind(config.bind_addr())?;
    serve(listener, config)?.await
}
