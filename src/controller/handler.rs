use crate::model::response::{DisplayResponse, DrawResponse, StatusResponse};
use crate::service::draw::{display_text, DrawPhase, TriggerOutcome, LOADING_MESSAGE};
use crate::AppState;
use actix_web::web::{Data, Query};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DrawQuery {
    #[serde(default)]
    wait: bool,
}

#[post("/draw")]
async fn trigger_draw_handler(data: Data<AppState>, query: Query<DrawQuery>) -> impl Responder {
    let ticket = match data.draw_service.trigger().await {
        TriggerOutcome::Started(ticket) => ticket,
        TriggerOutcome::Busy => {
            return HttpResponse::Conflict()
                .json(StatusResponse::failed("A draw is already in progress"))
        }
    };

    if !query.wait {
        return HttpResponse::Accepted().json(StatusResponse::success(LOADING_MESSAGE));
    }

    match ticket.resolve().await {
        Ok(numbers) => HttpResponse::Ok().json(DrawResponse {
            status: "Success".to_string(),
            numbers,
            display: display_text(&numbers),
        }),
        Err(e) => HttpResponse::BadGateway().json(StatusResponse::failed(&e.user_message())),
    }
}

#[get("/draw")]
async fn get_display_handler(data: Data<AppState>) -> impl Responder {
    let snapshot = data.draw_service.snapshot().await;
    let numbers = match snapshot.phase {
        DrawPhase::Done(draw) => Some(draw),
        _ => None,
    };

    HttpResponse::Ok().json(DisplayResponse {
        status: "Success".to_string(),
        phase: snapshot.phase.name().to_string(),
        display: snapshot.display,
        numbers,
    })
}

pub fn config(conf: &mut web::ServiceConfig) {
    let scope = web::scope("/api/v1")
        .service(trigger_draw_handler)
        .service(get_display_handler);

    conf.service(scope);
}
