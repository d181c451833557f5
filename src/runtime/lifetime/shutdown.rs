use tokio::signal;
use tracing::warn;

pub async fn listen_for_shutdown() {
    // Esperar Ctrl+C
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    warn!("Senal de apagado recibida, iniciando cierre ordenado...");
}
