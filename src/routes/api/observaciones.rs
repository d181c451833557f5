use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::middlewares;
use crate::models::observaciones::requests::{
    CreateObservacionRequest, ObservacionListQuery, UpdateObservacionRequest,
};
use crate::models::observaciones::responses::ObservacionDTO;
use crate::models::registros::requests::{FechaQuery, RangoFechasQuery};
use crate::storage::Storage;
use crate::utils::SafeIdI64;

use super::map_storage_error;

pub async fn get_all(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<ObservacionListQuery>,
) -> ActixResult<HttpResponse> {
    match storage.list_observaciones(query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_id(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.get_observacion_by_id(id.0).await {
        Ok(Some(observacion)) => {
            Ok(HttpResponse::Ok().json(ObservacionDTO::from_observacion(&observacion)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn create(
    storage: web::Data<Arc<dyn Storage>>,
    data: web::Json<CreateObservacionRequest>,
) -> ActixResult<HttpResponse> {
    match storage.create_observacion(data.into_inner()).await {
        Ok(observacion) => {
            Ok(HttpResponse::Created().json(ObservacionDTO::from_observacion(&observacion)))
        }
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn update(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
    data: web::Json<UpdateObservacionRequest>,
) -> ActixResult<HttpResponse> {
    match storage.update_observacion(id.0, data.into_inner()).await {
        Ok(Some(observacion)) => {
            Ok(HttpResponse::Ok().json(ObservacionDTO::from_observacion(&observacion)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn delete(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.delete_observacion(id.0).await {
        Ok(true) => Ok(HttpResponse::NoContent().finish()),
        Ok(false) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

fn observaciones_a_dtos(
    observaciones: Vec<crate::models::observaciones::entities::Observacion>,
) -> Vec<ObservacionDTO> {
    observaciones.iter().map(ObservacionDTO::from_observacion).collect()
}

pub async fn get_by_estudiante(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.observaciones_por_estudiante(id.0).await {
        Ok(observaciones) => Ok(HttpResponse::Ok().json(observaciones_a_dtos(observaciones))),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_docente(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.observaciones_por_docente(id.0).await {
        Ok(observaciones) => Ok(HttpResponse::Ok().json(observaciones_a_dtos(observaciones))),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_fecha(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<FechaQuery>,
) -> ActixResult<HttpResponse> {
    match storage.observaciones_por_fecha(query.fecha).await {
        Ok(observaciones) => Ok(HttpResponse::Ok().json(observaciones_a_dtos(observaciones))),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn get_by_rango_fechas(
    storage: web::Data<Arc<dyn Storage>>,
    query: web::Query<RangoFechasQuery>,
) -> ActixResult<HttpResponse> {
    match storage
        .observaciones_por_rango(query.inicio, query.fin)
        .await
    {
        Ok(observaciones) => Ok(HttpResponse::Ok().json(observaciones_a_dtos(observaciones))),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub async fn marcar_leida(
    storage: web::Data<Arc<dyn Storage>>,
    id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    match storage.marcar_observacion_leida(id.0).await {
        Ok(Some(observacion)) => {
            Ok(HttpResponse::Ok().json(ObservacionDTO::from_observacion(&observacion)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => Ok(map_storage_error(e)),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/observaciones")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(get_all))
            .route("", web::post().to(create))
            .route("/estudiante/{id}", web::get().to(get_by_estudiante))
            .route("/docente/{id}", web::get().to(get_by_docente))
            .route("/fecha", web::get().to(get_by_fecha))
            .route("/rango-fechas", web::get().to(get_by_rango_fechas))
            .route("/{id}/marcar-leida", web::patch().to(marcar_leida))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}
