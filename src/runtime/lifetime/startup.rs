use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::directores::requests::CreateDirectorRequest;
use crate::services::gravedades::initialize_default_gravedades;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// Crea la instancia de cache segun la configuracion
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Creando backend de cache '{}'", cache_type);

    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Backend de cache '{}' creado", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("No se pudo crear el cache '{}': {}", cache_type, e);

                // Si Redis falla se recurre al cache en memoria
                if cache_type == "redis" {
                    warn!("Recurriendo al cache en memoria");
                    if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                        match fallback_constructor().await {
                            Ok(cache) => {
                                warn!("Backend Moka (en memoria) creado como alternativa");
                                return Ok(Arc::from(cache));
                            }
                            Err(fallback_e) => {
                                warn!("No se pudo crear el cache Moka: {}", fallback_e);
                            }
                        }
                    }
                }
            }
        }
    } else {
        warn!("Backend de cache '{}' no registrado", cache_type);

        if cache_type != "moka" {
            warn!("Recurriendo al cache en memoria por defecto");
            if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                match fallback_constructor().await {
                    Ok(cache) => {
                        warn!("Backend Moka (en memoria) creado como alternativa");
                        return Ok(Arc::from(cache));
                    }
                    Err(fallback_e) => {
                        warn!("No se pudo crear el cache Moka: {}", fallback_e);
                    }
                }
            }
        }
    }

    Err(format!("Ningun backend de cache disponible (se intento: {cache_type})").into())
}

/// Genera una contrasena aleatoria
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Siembra los niveles de gravedad canonicos (no-op sobre tabla poblada)
async fn seed_gravedades(storage: &Arc<dyn Storage>) {
    if let Err(e) = initialize_default_gravedades(storage).await {
        warn!("No se pudieron sembrar las gravedades por defecto: {}", e);
    }
}

/// Crea un director inicial si la tabla de directores esta vacia, para que
/// el sistema sea administrable desde el primer arranque
async fn seed_director(storage: &Arc<dyn Storage>) {
    match storage.count_directores().await {
        Ok(count) if count > 0 => {
            debug!("Ya existen {} director(es), no se siembra", count);
            return;
        }
        Ok(_) => {
            info!("No hay directores registrados, creando la cuenta inicial...");
        }
        Err(e) => {
            warn!("No se pudo contar los directores: {}, se omite la semilla", e);
            return;
        }
    }

    // Contrasena del entorno o aleatoria de un solo uso
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN_PASSWORD NO DEFINIDA - SE GENERO UNA CONTRASENA");
        warn!("  Contrasena del director inicial: {}", pwd);
        warn!("  Guardela o defina la variable ADMIN_PASSWORD");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("No se pudo hashear la contrasena inicial: {}, se omite la semilla", e);
            return;
        }
    };

    let request = CreateDirectorRequest {
        nombres: "Administrador".to_string(),
        apellidos: "del Sistema".to_string(),
        usuario: "admin".to_string(),
        password: password_hash,
    };

    match storage.create_director(request).await {
        Ok(director) => {
            info!(
                "Cuenta inicial de director creada (ID: {}, usuario: {})",
                director.id, director.usuario
            );
        }
        Err(e) => {
            warn!("No se pudo crear la cuenta inicial de director: {}", e);
        }
    }
}

/// Prepara el contexto de arranque del servidor: storage con migraciones,
/// semillas idempotentes y cache
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Modo debug: registro de caches habilitado");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage inicializado y migraciones aplicadas");

    // Semillas idempotentes
    seed_gravedades(&storage).await;
    seed_director(&storage).await;

    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Backend de cache inicializado");

    StartupContext { storage, cache }
}
