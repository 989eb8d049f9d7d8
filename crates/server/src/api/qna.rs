use dioxus::prelude::*;
use shared_types::{MessageResponse, QnaEntry};

#[cfg(feature = "server")]
use super::context::{require_community, require_token, ServerResultExt};

#[cfg(feature = "server")]
use crate::upstream::SchoolApi;

/// Questions and answers on the community board, optionally filtered by a
/// search term. Readable without a session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_qna(search: Option<String>) -> Result<Vec<QnaEntry>, ServerFnError> {
    require_community()?;
    let session = crate::session::current_session();
    SchoolApi::global()
        .list_qna(session.as_ref().map(|s| s.access.as_str()), search.as_deref())
        .await
        .into_server_result()
}

/// Ask a question. A non-empty answer is posted against the new question.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_qna(question: String, answer: String) -> Result<QnaEntry, ServerFnError> {
    use shared_types::CreateQuestionRequest;

    require_community()?;
    let token = require_token()?;
    let req = CreateQuestionRequest::new(&question, &answer);
    SchoolApi::global()
        .create_question(&token, &req)
        .await
        .into_server_result()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_question(question_id: i64) -> Result<MessageResponse, ServerFnError> {
    require_community()?;
    let token = require_token()?;
    SchoolApi::global()
        .delete_question(&token, question_id)
        .await
        .into_server_result()
}
