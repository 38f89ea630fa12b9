//! Move Commands
//!
//! Persist product and folder relocations made in the organization view.

use super::post_json;
use crate::config::OrganizerConfig;
use crate::error::MoveError;
use crate::models::MoveRequest;

/// Send one move request to its endpoint.
///
/// Returns the server's message on success.
pub async fn submit_move(config: &OrganizerConfig, request: &MoveRequest) -> Result<Option<String>, MoveError> {
    let body = request.to_json()?;
    let url = config.endpoint(request.kind());
    log::debug!("[MOVE] POST {} {}", url, body);

    let reply = post_json(url, &body).await?;
    let message = reply.body.and_then(|b| b.message);
    if !reply.ok {
        return Err(MoveError::Rejected { status: reply.status, message });
    }
    Ok(message)
}
