use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::middlewares;
use crate::models::registros::requests::{
    CreateRegistroRequest, FechaQuery, RangoFechasQuery, RegistroListQuery, UpdateRegistroRequest,
};
use crate::models::registros::responses::RegistroConductaDTO;
use crate::storage::Storage;
use crate::utils::SafeIdI64;

use super::map_storage_error;

pub async fn get_all(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<RegistroListQuery>,
) -> ActixResult<HttpResponse> {
    match storage.list_registros(query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_id(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.get_registro_by_id(id.0).await {
        Ok(Some(registro)) => {
            Ok(HttpResponse::Ok().json(RegistroConductaDTO::from_registro(&registro)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn create(
    storage: web::Data<Arc<dyn Storage>>,
    data: web::Json<CreateRegistroRequest>,
) -> ActixResult<HttpResponse> {
    match storage.create_registro(data.into_inner()).await {
        Ok(registro) => {
            Ok(HttpResponse::Created().json(RegistroConductaDTO::from_registro(&registro)))
        }
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn update(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
    data: web::Json<UpdateRegistroRequest>,
) -> ActixResult<HttpResponse> {
    match storage.update_registro(id.0, data.into_inner()).await {
        Ok(Some(registro)) => {
            Ok(HttpResponse::Ok().json(RegistroConductaDTO::from_registro(&registro)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn delete(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.delete_registro(id.0).await {
        Ok(true) => Ok(HttpResponse::NoContent().finish()),
        Ok(false) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

fn registros_a_dtos(
    registros: Vec<crate::models::registros::entities::RegistroConducta>,
) -> Vec<RegistroConductaDTO> {
    registros.iter().map(RegistroConductaDTO::from_registro).collect()
}

pub async fn get_by_estudiante(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.registros_por_estudiante(id.0).await {
        Ok(registros) => Ok(HttpResponse::Ok().json(registros_a_dtos(registros))),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_docente(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.registros_por_docente(id.0).await {
        Ok(registros) => Ok(HttpResponse::Ok().json(registros_a_dtos(registros))),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_fecha(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<FechaQuery>,
) -> ActixResult<HttpResponse> {
    match storage.registros_por_fecha(query.fecha).await {
        Ok(registros) => Ok(HttpResponse::Ok().json(registros_a_dtos(registros))),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_rango_fechas(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<RangoFechasQuery>,
) -> ActixResult<HttpResponse> {
    match storage.registros_por_rango(query.inicio, query.fin).await {
        Ok(registros) => Ok(HttpResponse::Ok().json(registros_a_dtos(registros))),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn marcar_leido(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.marcar_registro_leido(id.0).await {
        Ok(Some(registro)) => {
            Ok(HttpResponse::Ok().json(RegistroConductaDTO::from_registro(&registro)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/registro-conductas")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(get_all))
            .route("", web::post().to(create))
            .route("/estudiante/{id}", web::get().to(get_by_estudiante))
            .route("/docente/{id}", web::get().to(get_by_docente))
            .route("/fecha", web::get().to(get_by_fecha))
            .route("/rango-fechas", web::get().to(get_by_rango_fechas))
            .route("/{id}/marcar-leido", web::patch().to(marcar_leido))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}
