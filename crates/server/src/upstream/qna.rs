use reqwest::Method;
use shared_types::{
    AppError, CreateAnswerRequest, CreateQuestionRequest, MessageResponse, QnaEntry,
    QuestionCreated, ValidateRequest,
};

use super::SchoolApi;

impl SchoolApi {
    /// Questions and answers, optionally narrowed by a search term.
    #[tracing::instrument(skip(self, token))]
    pub async fn list_qna(&self, token: Option<&str>, search: Option<&str>) -> Result<Vec<QnaEntry>, AppError> {
        let mut req = self.request(Method::GET, "/community/getdata/", token);
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            req = req.query(&[("search", term)]);
        }
        self.list(req).await
    }

    /// Post a question, then its answer when one was supplied.
    ///
    /// If the answer post fails the question still exists; the returned entry
    /// then carries an empty answer and the failure is logged.
    #[tracing::instrument(skip_all)]
    pub async fn create_question(&self, token: &str, req: &CreateQuestionRequest) -> Result<QnaEntry, AppError> {
        req.validate_request()?;
        let created: QuestionCreated = self
            .json(
                self.request(Method::POST, "/roles/community/questions/create/", Some(token))
                    .json(req),
            )
            .await?;

        let mut entry = QnaEntry {
            id: created.id,
            question: req.question.clone(),
            answer: String::new(),
        };

        if let Some(answer) = req.answer_to_post() {
            let body = CreateAnswerRequest {
                answer: answer.to_string(),
                question_id: created.id,
            };
            match self
                .message(
                    self.request(Method::POST, "/roles/community/answers/create/", Some(token))
                        .json(&body),
                )
                .await
            {
                Ok(_) => entry.answer = body.answer,
                Err(e) => {
                    tracing::warn!(question_id = created.id, error = %e, "Answer was not saved");
                }
            }
        }
        Ok(entry)
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_question(&self, token: &str, question_id: i64) -> Result<MessageResponse, AppError> {
        self.message(self.request(
            Method::DELETE,
            &format!("/roles/community/questions/delete/{}/", question_id),
            Some(token),
        ))
        .await
    }
}
