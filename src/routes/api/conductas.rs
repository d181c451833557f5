use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::middlewares;
use crate::models::conductas::requests::{
    ConductaListQuery, CreateConductaRequest, UpdateConductaRequest,
};
use crate::storage::Storage;
use crate::utils::SafeIdI64;

use super::map_storage_error;

pub async fn get_all(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<ConductaListQuery>,
) -> ActixResult<HttpResponse> {
    match storage.list_conductas(query.into_inner()).await {
        Ok(conductas) => Ok(HttpResponse::Ok().json(conductas)),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_id(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.get_conducta_by_id(id.0).await {
        Ok(Some(conducta)) => Ok(HttpResponse::Ok().json(conducta)),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn create(
    storage: web::Data<Arc<dyn Storage>>,
    data: web::Json<CreateConductaRequest>,
) -> ActixResult<HttpResponse> {
    match storage.create_conducta(data.into_inner()).await {
        Ok(conducta) => Ok(HttpResponse::Created().json(conducta)),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn update(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
    data: web::Json<UpdateConductaRequest>,
) -> ActixResult<HttpResponse> {
    match storage.update_conducta(id.0, data.into_inner()).await {
        Ok(Some(conducta)) => Ok(HttpResponse::Ok().json(conducta)),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn delete(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    // Bloqueado mientras existan registros que referencien la conducta
    match storage.count_registros_by_conducta(id.0).await {
        Ok(0) => {}
        Ok(_) => return Ok(HttpResponse::Conflict().finish()),
        Err(e) => return Ok(map_storage_error(e)),
    }

    match storage.delete_conducta(id.0).await {
        Ok(true) => Ok(HttpResponse::NoContent().finish()),
        Ok(false) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_gravedad(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    let query = ConductaListQuery {
        id_gravedad: Some(id.0),
        ..Default::default()
    };

    match storage.list_conductas(query).await {
        Ok(conductas) => Ok(HttpResponse::Ok().json(conductas)),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/conductas")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(get_all))
            .route("", web::post().to(create))
            .route("/gravedad/{id}", web::get().to(get_by_gravedad))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}
