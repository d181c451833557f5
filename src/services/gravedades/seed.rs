use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::Result;
use crate::models::gravedades::entities::GRAVEDADES_INICIALES;
use crate::storage::Storage;

/// Siembra los tres niveles canonicos (leve/1, grave/3, muy grave/5) sobre
/// una tabla vacia. Sobre una tabla con filas no hace nada, asi que es
/// seguro ejecutarla en cada arranque.
pub async fn initialize_default_gravedades(storage: &Arc<dyn Storage>) -> Result<()> {
    let existentes = storage.count_gravedades().await?;
    if existentes > 0 {
        debug!(
            "La tabla de gravedades ya tiene {} fila(s), no se siembra",
            existentes
        );
        return Ok(());
    }

    for (nombre, descripcion, puntos) in GRAVEDADES_INICIALES {
        storage.create_gravedad(nombre, descripcion, puntos).await?;
    }

    info!("Niveles de gravedad por defecto creados");
    Ok(())
}
