// --- Mock Course API - Archivo principal ---

use mock_course_api::{ServerConfig, run_server};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_server(ServerConfig::default()).await
}
