pub mod dashboard;
pub mod general;
pub mod historial;
pub mod mis_conductas;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ReporteService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReporteService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // Paneles por rol
    pub async fn dashboard_director(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::handle_dashboard_director(self, request).await
    }

    pub async fn dashboard_docente(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::handle_dashboard_docente(self, request).await
    }

    pub async fn dashboard_estudiante(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::handle_dashboard_estudiante(self, request).await
    }

    // Reporte agregado completo
    pub async fn reporte_general(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        general::handle_reporte_general(self, request).await
    }

    // Linea de tiempo combinada de incidentes y observaciones
    pub async fn historial_docente(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        historial::handle_historial_docente(self, request).await
    }

    pub async fn historial_estudiante(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        historial::handle_historial_estudiante(self, request).await
    }

    // Registros del estudiante agrupados por gravedad
    pub async fn mis_conductas(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        mis_conductas::handle_mis_conductas(self, request).await
    }
}
