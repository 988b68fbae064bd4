//! Detección de clientes que se desconectan antes de recibir la respuesta.
//!
//! El servidor simula un upstream lento, así que es normal que el cliente se
//! canse de esperar y cierre la conexión. Eso no es un error del servidor:
//! se registra con `warn!` y la petición termina sin más.
//!
//! El dispatcher HTTP/1 de actix no cancela el handler cuando el cliente
//! cierra el socket, así que la desconexión se detecta desde el propio
//! handler: `PeerSocket` guarda un duplicado del socket de la conexión
//! (registrado en `HttpServer::on_connect`) y `PeerSocket::closed` se resuelve
//! cuando el cliente envía FIN o RST.

use actix_web::body::{BodySize, MessageBody};
use actix_web::dev::Extensions;
use actix_web::rt::net::TcpStream;
use actix_web::web::Bytes;
use std::any::Any;
use std::convert::Infallible;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Duplicado del socket de la conexión, guardado como `conn_data`.
#[derive(Debug)]
pub struct PeerSocket(std::net::TcpStream);

impl PeerSocket {
    pub fn from_std(stream: std::net::TcpStream) -> Self {
        PeerSocket(stream)
    }

    /// Callback para `HttpServer::on_connect`. Conexiones que no son TCP
    /// (o cuyo socket no se puede duplicar) simplemente no se vigilan.
    pub fn register(conn: &dyn Any, ext: &mut Extensions) {
        let Some(stream) = conn.downcast_ref::<TcpStream>() else {
            return;
        };
        match duplicate(stream) {
            Ok(dup) => {
                ext.insert(PeerSocket(dup));
            }
            Err(e) => log::debug!("peer socket not watchable: {}", e),
        }
    }

    /// Se resuelve cuando el cliente cierra (lectura EOF) o resetea la
    /// conexión. Si el cliente envía más datos (pipelining) o el socket no se
    /// puede vigilar, no se resuelve nunca.
    pub async fn closed(&self) {
        let watched = match self.watch() {
            Ok(s) => s,
            Err(e) => {
                log::debug!("peer socket not watchable: {}", e);
                return std::future::pending().await;
            }
        };

        // peek no consume nada: los bytes siguen ahí para actix
        let mut buf = [0u8; 1];
        match watched.peek(&mut buf).await {
            Ok(0) | Err(_) => {}
            Ok(_) => std::future::pending().await,
        }
    }

    fn watch(&self) -> io::Result<tokio::net::TcpStream> {
        let dup = self.0.try_clone()?;
        // O_NONBLOCK se comparte con el socket de actix, que ya es no bloqueante
        dup.set_nonblocking(true)?;
        tokio::net::TcpStream::from_std(dup)
    }
}

#[cfg(unix)]
fn duplicate(stream: &TcpStream) -> io::Result<std::net::TcpStream> {
    use std::os::fd::AsFd;
    Ok(stream.as_fd().try_clone_to_owned()?.into())
}

#[cfg(windows)]
fn duplicate(stream: &TcpStream) -> io::Result<std::net::TcpStream> {
    use std::os::windows::io::AsSocket;
    Ok(stream.as_socket().try_clone_to_owned()?.into())
}

/// Cuerpo de respuesta de un único bloque.
///
/// "Entregado" significa que actix tomó el bloque para su buffer de escritura,
/// no que llegó al socket. Si el cuerpo se destruye sin que actix lo haya
/// tomado (la conexión ya estaba rota al empezar a escribir) se registra un
/// `warn!`; una escritura que falla después queda dentro de actix.
pub struct DeliveryBody {
    chunk: Option<Bytes>,
    len: u64,
    label: String,
}

impl DeliveryBody {
    pub fn new(text: String, label: &str) -> Self {
        let chunk = Bytes::from(text);
        DeliveryBody {
            len: chunk.len() as u64,
            chunk: Some(chunk),
            label: label.to_string(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.chunk.is_none()
    }
}

impl MessageBody for DeliveryBody {
    type Error = Infallible;

    fn size(&self) -> BodySize {
        BodySize::Sized(self.len)
    }

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, Self::Error>>> {
        Poll::Ready(self.chunk.take().map(Ok))
    }
}

impl Drop for DeliveryBody {
    fn drop(&mut self) {
        if !self.is_delivered() {
            log::warn!(
                "client disconnected before response for '{}' was written ({} bytes dropped)",
                self.label,
                self.len
            );
        }
    }
}

/// Guarda activa mientras dura la espera artificial. Cubre el caso en que el
/// servidor cancela el handler (p. ej. apagado) antes de `complete()`.
pub struct PendingResponse {
    label: String,
    armed: bool,
}

impl PendingResponse {
    pub fn new(label: &str) -> Self {
        PendingResponse { label: label.to_string(), armed: true }
    }

    pub fn complete(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingResponse {
    fn drop(&mut self) {
        if self.armed {
            log::warn!("request '{}' cancelled while waiting (timeout)", self.label);
        }
    }
}
