//! JSON adapter over the completion and hover providers.
//!
//! The editor widget posts a line of text and a cursor column and maps the
//! responses straight onto its completion/hover surfaces; the payloads use
//! the `lsp_types` serialization.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// A cursor position inside one line of editor text.
///
/// `character` is a UTF-16 column, the LSP convention.
#[derive(Debug, Deserialize)]
pub(crate) struct PositionRequest {
    pub line: String,
    pub character: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompletionResponse {
    pub items: Vec<lsp_types::CompletionItem>,
}

pub(crate) async fn completion(
    State(state): State<AppState>,
    Json(request): Json<PositionRequest>,
) -> Json<CompletionResponse> {
    let items = kelp_ide::completions(&state.schema, &request.line, request.character);
    Json(CompletionResponse { items })
}

pub(crate) async fn hover(
    State(state): State<AppState>,
    Json(request): Json<PositionRequest>,
) -> Json<Option<lsp_types::Hover>> {
    Json(kelp_ide::hover(
        &state.schema,
        &request.line,
        request.character,
    ))
}
