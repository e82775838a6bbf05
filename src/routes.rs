use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use tracing::{info, warn};

use crate::balance::rounded_balances;
use crate::error::Result;
use crate::exchange::settle;
use crate::schemas::SettleRequest;
use crate::validation::validate;

fn checked(request: web::Json<SettleRequest>) -> Result<SettleRequest> {
    let request = request.into_inner();
    if let Err(err) = validate(&request) {
        warn!(%err, "rejected group snapshot");
        return Err(err);
    }
    Ok(request)
}

#[post("/settlements")]
async fn post_settlements(request: web::Json<SettleRequest>) -> Result<HttpResponse> {
    let request = checked(request)?;
    let settlement = settle(&request.members, &request.expenses);
    info!(
        members = request.members.len(),
        expenses = request.expenses.len(),
        transfers = settlement.transfers.len(),
        "settled group"
    );
    Ok(HttpResponse::Ok().json(settlement))
}

#[post("/balances")]
async fn post_balances(request: web::Json<SettleRequest>) -> Result<HttpResponse> {
    let request = checked(request)?;
    Ok(HttpResponse::Ok().json(rounded_balances(&request.members, &request.expenses)))
}

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "opensplit-settle",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(post_settlements)
        .service(post_balances)
        .service(health);
}
