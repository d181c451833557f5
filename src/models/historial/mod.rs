pub mod entities;

pub use entities::{ElementoHistorial, ordenar_historial};
