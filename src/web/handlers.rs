use actix_web::{web, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::{json, Value};

use crate::model::ModelManager;
use crate::web::models::{
    AnalyzeRequest, AutoReplyRequest, AutoReplyResponse, CompleteRequest, CompleteResponse,
    ErrorResponse, InsightRequest, InsightResponse, SentimentDistribution, SmartSearchRequest,
    SmartSearchResponse, SuggestRequest, SuggestResponse, TranslateRequest, TranslateResponse,
    NO_MESSAGES,
};
use crate::web::persona::Persona;
use crate::web::prompts;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn analyze(
    model: web::Data<ModelManager>,
    req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    info!("Analyze request ({} characters)", req.text.len());

    match model.classifier.classify(&req.text).await {
        Ok(labels) => HttpResponse::Ok().json(labels),
        Err(e) => {
            error!("Classifier error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("AI analyze failed"))
        }
    }
}

pub async fn suggest(
    model: web::Data<ModelManager>,
    req: web::Json<SuggestRequest>,
) -> impl Responder {
    let prompt = prompts::suggest_prompt(req.text.trim());

    match model.generator.generate(&prompt).await {
        Ok(raw) => HttpResponse::Ok().json(SuggestResponse {
            suggestions: prompts::parse_suggestions(&raw),
        }),
        Err(e) => {
            error!("Suggest error: {}", e);
            HttpResponse::InternalServerError().json(SuggestResponse::default())
        }
    }
}

pub async fn complete(
    model: web::Data<ModelManager>,
    req: web::Json<CompleteRequest>,
) -> impl Responder {
    let prompt = prompts::complete_prompt(req.prompt.trim());

    match model.generator.generate(&prompt).await {
        Ok(raw) => HttpResponse::Ok().json(CompleteResponse {
            completed: raw.trim().to_string(),
        }),
        Err(e) => {
            error!("Complete error: {}", e);
            HttpResponse::InternalServerError().json(CompleteResponse::default())
        }
    }
}

pub async fn insight(
    model: web::Data<ModelManager>,
    req: web::Json<InsightRequest>,
) -> impl Responder {
    let messages = match req.into_inner().messages() {
        Ok(messages) => messages,
        Err(reason) => {
            warn!("Insight rejected: {}", reason);
            return HttpResponse::BadRequest().json(ErrorResponse::new(reason));
        }
    };
    if messages.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(NO_MESSAGES));
    }

    info!("Insight request over {} messages", messages.len());
    let prompt = prompts::insight_prompt(&messages);

    match model.generator.generate(&prompt).await {
        Ok(raw) => HttpResponse::Ok().json(InsightResponse {
            summary: raw.trim().to_string(),
            sentiment_distribution: SentimentDistribution::fixed(),
        }),
        Err(e) => {
            error!("Insight error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))
        }
    }
}

pub async fn auto_reply(
    model: web::Data<ModelManager>,
    req: web::Json<AutoReplyRequest>,
) -> impl Responder {
    let persona = Persona::parse(req.persona.as_ref().and_then(Value::as_str));
    info!("Auto-reply request as {}", persona);

    let context = req.context.as_deref().unwrap_or("");
    let prompt = prompts::auto_reply_prompt(persona, &req.message, context);

    match model.generator.generate(&prompt).await {
        Ok(raw) => HttpResponse::Ok().json(AutoReplyResponse {
            reply: raw.trim().to_string(),
        }),
        Err(e) => {
            error!("Auto-reply error: {}", e);
            HttpResponse::InternalServerError().json(AutoReplyResponse::default())
        }
    }
}

pub async fn smart_search(
    model: web::Data<ModelManager>,
    req: web::Json<SmartSearchRequest>,
) -> impl Responder {
    let SmartSearchRequest { query, history } = req.into_inner();
    let query = query.as_deref().map(str::trim).unwrap_or("");
    let history = match history {
        Some(history) if !query.is_empty() => history,
        _ => {
            warn!("Smart search rejected: query and history are required");
            return HttpResponse::BadRequest().json(SmartSearchResponse::default());
        }
    };

    info!("Smart search over {} lines", history.len());
    let prompt = prompts::smart_search_prompt(query, &history);

    match model.generator.generate(&prompt).await {
        Ok(raw) => HttpResponse::Ok().json(SmartSearchResponse {
            results: prompts::parse_lines(&raw),
        }),
        Err(e) => {
            error!("Smart search error: {}", e);
            HttpResponse::InternalServerError().json(SmartSearchResponse::default())
        }
    }
}

pub async fn translate(
    model: web::Data<ModelManager>,
    req: web::Json<TranslateRequest>,
) -> impl Responder {
    let text = req.text.as_deref().unwrap_or("");
    let to = req.to.as_deref().map(str::trim).unwrap_or("");
    if text.is_empty() || to.is_empty() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("Text and target language are required"));
    }

    match model.translator.translate(text, to).await {
        Ok(translated_text) => HttpResponse::Ok().json(TranslateResponse { translated_text }),
        Err(e) => {
            error!("Translation error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Translation failed"))
        }
    }
}
