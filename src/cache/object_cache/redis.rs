use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    ttl: u64, // segundos
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        debug!(
            "RedisObjectCache creado con prefijo '{}' y TTL {}s",
            redis_config.key_prefix, config.cache.default_ttl
        );

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| format!("URL de Redis invalida: {e}"))?;

        // Prueba de conexion con un PING sincrono
        match client.get_connection() {
            Ok(mut conn) => match redis::cmd("PING").query::<String>(&mut conn) {
                Ok(response) => {
                    debug!("Prueba de conexion a Redis exitosa: {}", response);
                }
                Err(e) => {
                    error!(
                        "No se pudo hacer PING a Redis: {}. Revisar el servidor y la URL: {}",
                        e, redis_config.url
                    );
                    return Err(format!("Fallo el PING a Redis: {e}"));
                }
            },
            Err(e) => {
                error!(
                    "No se pudo conectar a Redis: {}. Revisar el servidor y la URL: {}",
                    e, redis_config.url
                );
                return Err(format!("Fallo la conexion a Redis: {e}"));
            }
        }

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            ttl: config.cache.default_ttl,
        })
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let redis_key = self.make_key(key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("No se pudo obtener conexion a Redis: {}", e);
                return CacheResult::ExistsButNoValue;
            }
        };

        let result: redis::RedisResult<Option<String>> = conn.get(redis_key).await;

        match result {
            Ok(Some(data)) => {
                debug!("Clave recuperada del cache: {}", key);
                CacheResult::Found(data)
            }
            Ok(None) => {
                debug!("Clave no encontrada en cache: {}", key);
                CacheResult::NotFound
            }
            Err(e) => {
                error!("Fallo al leer la clave '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let redis_key = self.make_key(&key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("No se pudo obtener conexion a Redis: {}", e);
                return;
            }
        };

        // TTL por entrada; 0 usa el TTL por defecto
        let effective_ttl = if ttl == 0 { self.ttl } else { ttl };

        match conn
            .set_ex::<String, String, ()>(redis_key, value, effective_ttl)
            .await
        {
            Ok(_) => {
                debug!("Clave insertada en cache: {} (TTL: {}s)", key, effective_ttl);
            }
            Err(e) => {
                error!("Fallo al insertar la clave '{}': {}", key, e);
            }
        }
    }

    async fn remove(&self, key: &str) {
        let redis_key = self.make_key(key);

        let mut conn = match self.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("No se pudo obtener conexion a Redis: {}", e);
                return;
            }
        };

        match conn.del::<String, i32>(redis_key).await {
            Ok(deleted_count) => {
                if deleted_count > 0 {
                    debug!("Clave eliminada del cache: {}", key);
                } else {
                    debug!("Clave no encontrada al eliminar: {}", key);
                }
            }
            Err(e) => {
                error!("Fallo al eliminar la clave '{}': {}", key, e);
            }
        }
    }

    async fn invalidate_all(&self) {
        warn!("RedisObjectCache no implementa invalidate_all");
    }
}
