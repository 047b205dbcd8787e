use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::quiz::engine::{Advance, QuizPhase, QuizSession, QUESTIONS};
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuizStateResponse {
    pub session_id: Uuid,
    /// 1-based, for display.
    pub question_number: usize,
    pub total_questions: usize,
    pub prompt: &'static str,
    pub score: u32,
    pub phase: QuizPhase,
}

fn state_response(id: Uuid, session: &QuizSession) -> QuizStateResponse {
    QuizStateResponse {
        session_id: id,
        question_number: session.index() + 1,
        total_questions: QUESTIONS.len(),
        prompt: session.question().prompt,
        score: session.score(),
        phase: session.phase(),
    }
}

/// POST /api/v1/quiz/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<QuizStateResponse> {
    let id = Uuid::new_v4();
    let session = QuizSession::new();
    let response = state_response(id, &session);
    state.quiz_sessions.write().await.insert(id, session);
    Json(response)
}

/// GET /api/v1/quiz/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizStateResponse>, AppError> {
    let sessions = state.quiz_sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Quiz session {id} not found")))?;
    Ok(Json(state_response(id, session)))
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub expected_answer: &'static str,
    pub score: u32,
    pub phase: QuizPhase,
}

/// POST /api/v1/quiz/sessions/:id/answer
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    let mut sessions = state.quiz_sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("Quiz session {id} not found")))?;

    let outcome = session
        .submit(&req.answer)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(Json(AnswerResponse {
        correct: outcome.correct,
        expected_answer: outcome.expected,
        score: outcome.score,
        phase: session.phase(),
    }))
}

#[derive(Serialize)]
pub struct AdvanceResponse {
    pub finished: bool,
    /// Set when the quiz just finished; the session has already been reset
    /// for replay.
    pub final_score: Option<u32>,
    pub state: QuizStateResponse,
}

/// POST /api/v1/quiz/sessions/:id/next
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdvanceResponse>, AppError> {
    let mut sessions = state.quiz_sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("Quiz session {id} not found")))?;

    let advance = session
        .advance()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let (finished, final_score) = match advance {
        Advance::Next(_) => (false, None),
        Advance::Finished { final_score, .. } => (true, Some(final_score)),
    };
    Ok(Json(AdvanceResponse {
        finished,
        final_score,
        state: state_response(id, session),
    }))
}
