//! Capa de cache de objetos
//!
//! Backend conectable (Moka en memoria o Redis) registrado al arrancar el
//! proceso. Aqui viven las sesiones del lado servidor.

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// Declara e inscribe un backend de cache en el registro global.
///
/// El constructor corre de forma perezosa cuando el arranque selecciona el
/// backend configurado.
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__registrar_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(
                        || -> $crate::cache::register::BoxedObjectCacheFuture {
                            Box::pin(async {
                                let cache = $plugin::new()
                                    .map_err($crate::errors::ControlEduError::cache_connection)?;
                                Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                            })
                        },
                    ),
                );
            }
        }
    };
}
