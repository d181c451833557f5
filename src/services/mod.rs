pub mod auth;
pub mod conductas;
pub mod docentes;
pub mod estudiantes;
pub mod gravedades;
pub mod observaciones;
pub mod registros;
pub mod reportes;

pub use auth::AuthService;
pub use conductas::ConductaService;
pub use docentes::DocenteService;
pub use estudiantes::EstudianteService;
pub use gravedades::GravedadService;
pub use observaciones::ObservacionService;
pub use registros::RegistroService;
pub use reportes::ReporteService;
