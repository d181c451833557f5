pub mod create;
pub mod detail;
pub mod estado;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::registros::entities::EstadoRegistro;
use crate::models::registros::requests::{CreateRegistroRequest, RegistroListQuery};
use crate::storage::Storage;

pub struct RegistroService {
    storage: Option<Arc<dyn Storage>>,
}

impl RegistroService {
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

    // Registrar incidente (falta)
    pub async fn registrar_incidente(
        &self,
        request: &HttpRequest,
        data: CreateRegistroRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_registrar_incidente(self, request, data).await
    }

    pub async fn list(
        &self,
        request: &HttpRequest,
        query: RegistroListQuery,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, request, query).await
    }

    // Detalle; `auto_marcar` reproduce la vista del director que marca
    // como leido al abrir
    pub async fn detail(
        &self,
        request: &HttpRequest,
        id: i64,
        auto_marcar: bool,
    ) -> ActixResult<HttpResponse> {
        detail::handle_detail(self, request, id, auto_marcar).await
    }

    pub async fn marcar_leido(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        estado::handle_marcar_leido(self, request, id).await
    }

    pub async fn cambiar_estado(
        &self,
        request: &HttpRequest,
        id: i64,
        estado: EstadoRegistro,
    ) -> ActixResult<HttpResponse> {
        estado::handle_cambiar_estado(self, request, id, estado).await
    }
}
