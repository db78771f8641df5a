//! MCP HTTP handlers for Actix-Web.
//!
//! Stateless HTTP POST: each request is independent and re-parses the
//! daemon document. CORS preflight is answered by the CORS middleware and
//! never reaches the JSON-RPC layer.

use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// MCP state for Actix-Web.
pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp.
///
/// The body is deserialized by hand rather than through an extractor so a
/// malformed envelope maps to the -32603 response instead of a framework
/// rejection. Exactly one envelope is emitted per request.
pub async fn rpc_handler(state: web::Data<Arc<McpState>>, body: web::Bytes) -> impl Responder {
    let request: RpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("malformed rpc envelope: {}", err);
            return HttpResponse::InternalServerError()
                .content_type("application/json")
                .json(OutboundResponse::internal_error());
        }
    };

    log::info!("received mcp request: {}", request.method);

    let response = state.service.handle_request(request);
    let mut builder = match &response.error {
        Some(error) if error.code == -32601 => HttpResponse::BadRequest(),
        Some(_) => HttpResponse::InternalServerError(),
        None => HttpResponse::Ok(),
    };

    builder.content_type("application/json").json(response)
}

/// Configure MCP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));
}
