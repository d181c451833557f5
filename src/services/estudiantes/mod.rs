pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::estudiantes::requests::{
    CreateEstudianteRequest, EstudianteListQuery, UpdateEstudianteRequest,
};
use crate::storage::Storage;

pub struct EstudianteService {
    storage: Option<Arc<dyn Storage>>,
}

impl EstudianteService {
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

    pub async fn list(
        &self,
        request: &HttpRequest,
        query: EstudianteListQuery,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, request, query).await
    }

    // Grados y secciones distintos para los filtros de la vista
    pub async fn catalogos(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_catalogos(self, request).await
    }

    pub async fn get(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::handle_get(self, request, id).await
    }

    pub async fn create(
        &self,
        request: &HttpRequest,
        data: CreateEstudianteRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, request, data).await
    }

    pub async fn update(
        &self,
        request: &HttpRequest,
        id: i64,
        data: UpdateEstudianteRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, request, id, data).await
    }

    pub async fn delete(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }
}
