pub mod api;

pub mod auth;

pub mod director;

pub mod docente;

pub mod estudiante;

pub mod gestion;

pub use api::configure_api_routes;
pub use auth::configure_auth_routes;
pub use director::configure_director_routes;
pub use docente::configure_docente_routes;
pub use estudiante::configure_estudiante_routes;
pub use gestion::configure_gestion_routes;
