//! ControlEdu - Backend de seguimiento de conductas escolares
//!
//! Servicio HTTP sobre Actix Web para el registro y seguimiento de
//! conductas, observaciones y reportes de una institucion educativa, con
//! roles de director, docente y estudiante.
//!
//! # Arquitectura
//! - `cache`: cache de objetos (Moka/Redis); aloja las sesiones
//! - `config`: gestion de configuracion
//! - `entity`: entidades SeaORM
//! - `errors`: manejo unificado de errores
//! - `middlewares`: autenticacion por sesion y control por rol
//! - `models`: modelos de negocio y DTOs
//! - `routes`: capa de rutas (web por rol + API REST)
//! - `runtime`: ciclo de vida del proceso
//! - `services`: logica de negocio
//! - `storage`: capa de persistencia (SeaORM)
//! - `utils`: utilidades (hash, sesiones, validacion)

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
