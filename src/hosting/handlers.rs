use super::*;
use crate::ID;
use crate::gameplay::Move;
use crate::records::Sheet;
use actix_multipart::Multipart;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use futures::StreamExt;

/// Multipart field carrying uploaded move logs.
const FILES_FIELD: &str = "files";

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
pub async fn start(arcade: web::Data<Arcade>) -> impl Responder {
    match arcade.start().await {
        Ok(id) => HttpResponse::Ok().json(StartResponse::from(id)),
        Err(e) => HttpResponse::ServiceUnavailable().body(e.to_string()),
    }
}
pub async fn close(arcade: web::Data<Arcade>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match arcade.close(ID::from(path.into_inner())).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "closed" })),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}
pub async fn play(
    arcade: web::Data<Arcade>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<PlayRequest>,
) -> impl Responder {
    match Move::try_from(req.choice.as_str()) {
        Err(e) => HttpResponse::BadRequest().body(e),
        Ok(player) => match arcade.play(ID::from(path.into_inner()), player).await {
            Err(e) => HttpResponse::NotFound().body(e.to_string()),
            Ok(result) => HttpResponse::Ok().json(PlayResponse::from(result)),
        },
    }
}
/// Imports every `files` part of a multipart form. Each part may be
/// delimited text or an .xlsx workbook; nothing is imported unless all parse.
pub async fn upload(
    arcade: web::Data<Arcade>,
    path: web::Path<uuid::Uuid>,
    mut payload: Multipart,
) -> impl Responder {
    match sheets(&mut payload).await {
        Err(e) => HttpResponse::BadRequest().body(e),
        Ok(sheets) if sheets.is_empty() => {
            HttpResponse::BadRequest().body(format!("no {:?} parts in upload", FILES_FIELD))
        }
        Ok(sheets) => {
            let read = sheets.iter().map(Sheet::len).sum::<usize>();
            let moves = sheets.into_iter().flatten();
            match arcade.import(ID::from(path.into_inner()), moves).await {
                Err(e) => HttpResponse::NotFound().body(e.to_string()),
                Ok(total) => HttpResponse::Ok().json(UploadResponse::from((read, total))),
            }
        }
    }
}
/// Imports a single log sent as the raw request body.
pub async fn import(
    arcade: web::Data<Arcade>,
    path: web::Path<uuid::Uuid>,
    body: web::Bytes,
) -> impl Responder {
    match Sheet::decode(&body) {
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
        Ok(sheet) => {
            let read = sheet.len();
            match arcade.import(ID::from(path.into_inner()), sheet).await {
                Err(e) => HttpResponse::NotFound().body(e.to_string()),
                Ok(total) => HttpResponse::Ok().json(UploadResponse::from((read, total))),
            }
        }
    }
}
pub async fn stats(arcade: web::Data<Arcade>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match arcade.tally(ID::from(path.into_inner())).await {
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
        Ok(tally) => HttpResponse::Ok().json(Stats::from(tally)),
    }
}
pub async fn table(arcade: web::Data<Arcade>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match arcade.table(ID::from(path.into_inner())).await {
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
        Ok(text) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
    }
}

/// Drains the form, decoding each `files` part. Other fields are skipped.
async fn sheets(payload: &mut Multipart) -> Result<Vec<Sheet>, String> {
    let mut sheets = Vec::new();
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| e.to_string())?;
        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk.map_err(|e| e.to_string())?);
        }
        if field.name() == Some(FILES_FIELD) {
            let sheet = Sheet::decode(&bytes)
                .map_err(|e| format!("file {}: {}", sheets.len() + 1, e))?;
            sheets.push(sheet);
        }
    }
    Ok(sheets)
}
