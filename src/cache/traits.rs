use async_trait::async_trait;

/// Resultado de una consulta al cache
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    // La clave puede existir pero el backend no pudo entregar el valor
    ExistsButNoValue,
}

/// Cache de objetos serializados como texto
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}
