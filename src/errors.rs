//! Manejo de errores unificado del backend.
//!
//! El macro genera el enum de errores con codigo y nombre de tipo por
//! variante, mas constructores de conveniencia en snake_case.

use std::fmt;

/// Macro que define los tipos de error del sistema.
///
/// Genera:
/// - la definicion del enum
/// - `code()` - codigo del error
/// - `error_type()` - nombre del tipo de error
/// - `message()` - detalle del error
/// - constructores de conveniencia
macro_rules! define_controledu_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ControlEduError {
            $($variant(String),)*
        }

        impl ControlEduError {
            /// Codigo del error
            pub fn code(&self) -> &'static str {
                match self {
                    $(ControlEduError::$variant(_) => $code,)*
                }
            }

            /// Nombre del tipo de error
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ControlEduError::$variant(_) => $type_name,)*
                }
            }

            /// Detalle del error
            pub fn message(&self) -> &str {
                match self {
                    $(ControlEduError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl ControlEduError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ControlEduError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_controledu_errors! {
    CacheConnection("E001", "Error de conexion de cache"),
    CachePluginNotFound("E002", "Backend de cache no encontrado"),
    DatabaseConfig("E003", "Error de configuracion de base de datos"),
    DatabaseConnection("E004", "Error de conexion a base de datos"),
    DatabaseOperation("E005", "Error de operacion de base de datos"),
    Validation("E006", "Error de validacion"),
    NotFound("E007", "Recurso no encontrado"),
    RelationNotFound("E008", "Relacion no encontrada"),
    Conflict("E009", "Conflicto con registros existentes"),
    Serialization("E010", "Error de serializacion"),
    DateParse("E011", "Error al interpretar fecha"),
    Authentication("E012", "Error de autenticacion"),
    Authorization("E013", "Error de autorizacion"),
}

impl ControlEduError {
    /// Formato simple tipo/detalle
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ControlEduError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ControlEduError {}

impl From<sea_orm::DbErr> for ControlEduError {
    fn from(err: sea_orm::DbErr) -> Self {
        ControlEduError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ControlEduError {
    fn from(err: std::io::Error) -> Self {
        ControlEduError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for ControlEduError {
    fn from(err: serde_json::Error) -> Self {
        ControlEduError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ControlEduError {
    fn from(err: chrono::ParseError) -> Self {
        ControlEduError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ControlEduError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ControlEduError::cache_connection("x").code(), "E001");
        assert_eq!(ControlEduError::database_config("x").code(), "E003");
        assert_eq!(ControlEduError::validation("x").code(), "E006");
        assert_eq!(ControlEduError::relation_not_found("x").code(), "E008");
        assert_eq!(ControlEduError::authentication("x").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ControlEduError::conflict("x").error_type(),
            "Conflicto con registros existentes"
        );
        assert_eq!(
            ControlEduError::validation("x").error_type(),
            "Error de validacion"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ControlEduError::validation("entrada invalida");
        assert_eq!(err.message(), "entrada invalida");
    }

    #[test]
    fn test_format_simple() {
        let err = ControlEduError::not_found("registro 7");
        let formatted = err.format_simple();
        assert!(formatted.contains("Recurso no encontrado"));
        assert!(formatted.contains("registro 7"));
    }
}
