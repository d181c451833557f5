pub mod create;
pub mod delete;
pub mod detail;
pub mod estado;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::observaciones::requests::{CreateObservacionRequest, ObservacionListQuery};
use crate::storage::Storage;

pub struct ObservacionService {
    storage: Option<Arc<dyn Storage>>,
}

impl ObservacionService {
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

    pub async fn registrar_observacion(
        &self,
        request: &HttpRequest,
        data: CreateObservacionRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_registrar_observacion(self, request, data).await
    }

    pub async fn list(
        &self,
        request: &HttpRequest,
        query: ObservacionListQuery,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, request, query).await
    }

    pub async fn detail(
        &self,
        request: &HttpRequest,
        id: i64,
        auto_marcar: bool,
    ) -> ActixResult<HttpResponse> {
        detail::handle_detail(self, request, id, auto_marcar).await
    }

    pub async fn marcar_leida(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        estado::handle_marcar_leida(self, request, id).await
    }

    pub async fn delete(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }
}
