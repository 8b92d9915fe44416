use actix_web::{web, HttpResponse, Responder};

use crate::models::chat::{ChatErrorBody, ChatRequest, ChatResponse};
use crate::services::chat::ChatService;

fn internal_error(details: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ChatErrorBody {
        error: "Internal server error".to_string(),
        details: Some(details),
    })
}

/*
    /chat
    Takes the raw body so a malformed payload is reported like any other failure.
*/
pub async fn chat(chat: web::Data<ChatService>, body: web::Bytes) -> impl Responder {
    let request: ChatRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            log::error!("Error processing chat request: {}", err);
            return internal_error(err.to_string());
        }
    };

    let prompt = match request.prompt {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => {
            return HttpResponse::BadRequest().json(ChatErrorBody {
                error: "No prompt provided".to_string(),
                details: None,
            })
        }
    };

    log::info!("Received prompt: {}", prompt);

    match chat.respond(&prompt).await {
        Ok(response) => {
            log::debug!("Generated chat response with {} backend", chat.backend_name());
            HttpResponse::Ok().json(ChatResponse { response })
        }
        Err(err) => {
            log::error!("Chat backend failed: {}", err);
            internal_error(err.to_string())
        }
    }
}
