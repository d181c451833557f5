//! Entidades SeaORM
//!
//! Estas entidades se usan para las operaciones de base de datos y estan
//! separadas de los modelos de negocio del modulo `models`. La capa de
//! storage opera sobre estas entidades y luego convierte a los modelos de
//! negocio.

pub mod prelude;

pub mod conductas;
pub mod directores;
pub mod docentes;
pub mod estudiantes;
pub mod observaciones;
pub mod registros_conducta;
pub mod tipos_gravedad;
