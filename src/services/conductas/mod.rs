pub mod create;
pub mod delete;
pub mod list;
pub mod stats;
pub mod toggle;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::conductas::requests::{
    ConductaListQuery, CreateConductaRequest, UpdateConductaRequest,
};
use crate::storage::Storage;

pub struct ConductaService {
    storage: Option<Arc<dyn Storage>>,
}

impl ConductaService {
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
        query: ConductaListQuery,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, request, query).await
    }

    pub async fn create(
        &self,
        request: &HttpRequest,
        data: CreateConductaRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, request, data).await
    }

    pub async fn update(
        &self,
        request: &HttpRequest,
        id: i64,
        data: UpdateConductaRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, request, id, data).await
    }

    pub async fn delete(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }

    // Activacion logica en lugar de borrado
    pub async fn set_activa(
        &self,
        request: &HttpRequest,
        id: i64,
        activo: bool,
    ) -> ActixResult<HttpResponse> {
        toggle::handle_set_activa(self, request, id, activo).await
    }

    // Curaduria del catalogo
    pub async fn mas_utilizadas(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::handle_mas_utilizadas(self, request).await
    }

    pub async fn no_utilizadas(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::handle_no_utilizadas(self, request).await
    }
}
