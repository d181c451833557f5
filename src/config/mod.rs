//! Configuracion de la aplicacion

mod r#impl;
mod structs;

pub use structs::*;
