// src/session.rs
//! Submission state machine: staging events in, settled analysis out

use tracing::{error, info};

use crate::core::{AnalysisClient, AnalysisPayload};
use crate::error::AnalyzeError;
use crate::input::{FileCandidate, InputMode, StagedInput};
use crate::types::analysis::AnalysisResult;

/// Where the current submission stands.
///
/// `Idle` is initial. `Pending` is entered only by a validated submission and
/// is always exited when that submission settles. The settled phases last
/// until the next submission or a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Every mutation the session can undergo. State changes only through
/// [`SessionState::apply`], which keeps all transitions in one place.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    ModeSelected(InputMode),
    FileChosen(FileCandidate),
    TextEdited(String),
    /// Validation failed before any network activity.
    SubmissionRejected(AnalyzeError),
    SubmissionStarted,
    SubmissionSucceeded(AnalysisResult),
    SubmissionFailed(String),
    Reset,
}

/// The single mutable record behind the component.
///
/// `result` is populated only in the `Succeeded` phase; `error` and `result`
/// are never populated at the same time.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub mode: InputMode,
    pub staged: Option<StagedInput>,
    pub phase: RequestPhase,
    pub result: Option<AnalysisResult>,
    pub error: Option<AnalyzeError>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mode: InputMode::File,
            staged: None,
            phase: RequestPhase::Idle,
            result: None,
            error: None,
        }
    }
}

impl SessionState {
    /// Pure reducer.
    ///
    /// Staging events clear the error slot so a stale message never survives
    /// an edit. Events that produce an error clear the result, and the other
    /// way around.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ModeSelected(mode) => {
                self.mode = mode;
                self.staged = None;
                self.error = None;
            }
            SessionEvent::FileChosen(candidate) => {
                if candidate.is_pdf() {
                    self.staged = Some(StagedInput::File(candidate));
                    self.error = None;
                } else {
                    // Rejected file leaves whatever was staged before intact.
                    self.error = Some(AnalyzeError::InvalidInputKind);
                    self.result = None;
                }
            }
            SessionEvent::TextEdited(text) => {
                self.staged = Some(StagedInput::Text(text));
                self.error = None;
            }
            SessionEvent::SubmissionRejected(err) => {
                self.error = Some(err);
                self.result = None;
            }
            SessionEvent::SubmissionStarted => {
                self.phase = RequestPhase::Pending;
                self.result = None;
                self.error = None;
            }
            SessionEvent::SubmissionSucceeded(result) => {
                self.phase = RequestPhase::Succeeded;
                self.result = Some(result);
                self.error = None;
            }
            SessionEvent::SubmissionFailed(message) => {
                self.phase = RequestPhase::Failed;
                self.result = None;
                self.error = Some(AnalyzeError::RequestFailed(message));
            }
            SessionEvent::Reset => {
                // Back to the empty idle state; the active mode is kept.
                self.staged = None;
                self.phase = RequestPhase::Idle;
                self.result = None;
                self.error = None;
            }
        }
    }

    /// Validate the staged input against the active mode, in precondition
    /// order, and build the request payload. Never touches the network.
    fn payload(&self) -> Result<AnalysisPayload, AnalyzeError> {
        match (self.mode, &self.staged) {
            (InputMode::File, Some(StagedInput::File(file))) => {
                Ok(AnalysisPayload::File(file.clone()))
            }
            (InputMode::File, _) => Err(AnalyzeError::MissingFile),
            (InputMode::Text, Some(StagedInput::Text(text))) if !text.trim().is_empty() => {
                Ok(AnalysisPayload::Text(text.clone()))
            }
            (InputMode::Text, _) => Err(AnalyzeError::MissingText),
        }
    }
}

/// Staging, submission and settlement against one analysis service.
///
/// All mutation happens on the caller's thread in response to discrete
/// events; at most one request is in flight because [`Session::submit`]
/// refuses to start another while the previous one is pending.
pub struct Session {
    state: SessionState,
    client: AnalysisClient,
}

impl Session {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            state: SessionState::default(),
            client,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> InputMode {
        self.state.mode
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.state.result.as_ref()
    }

    pub fn error(&self) -> Option<&AnalyzeError> {
        self.state.error.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.state.phase == RequestPhase::Pending
    }

    /// Activate an input mode, discarding any staged input and stale error.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.state.apply(SessionEvent::ModeSelected(mode));
    }

    /// Stage a picked file. Non-PDF candidates are rejected and surface
    /// [`AnalyzeError::InvalidInputKind`] without touching the staged input.
    pub fn stage_file(&mut self, candidate: FileCandidate) {
        self.state.apply(SessionEvent::FileChosen(candidate));
    }

    /// Stage the current text verbatim. Emptiness is checked at submit time,
    /// not while typing.
    pub fn stage_text(&mut self, text: impl Into<String>) {
        self.state.apply(SessionEvent::TextEdited(text.into()));
    }

    /// Validate the staged input and drive one request to settlement.
    ///
    /// A call while a request is pending does nothing. Validation failures
    /// set the error slot and never reach the network. The pending phase is
    /// exited unconditionally, on success and on failure alike.
    pub async fn submit(&mut self) {
        if self.is_pending() {
            info!("Submit ignored, a request is already pending");
            return;
        }

        let payload = match self.state.payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.state.apply(SessionEvent::SubmissionRejected(err));
                return;
            }
        };

        self.state.apply(SessionEvent::SubmissionStarted);

        match self.client.analyze(payload).await {
            Ok(result) => self.state.apply(SessionEvent::SubmissionSucceeded(result)),
            Err(err) => {
                error!("Analysis request failed: {}", err);
                self.state.apply(SessionEvent::SubmissionFailed(err.to_string()));
            }
        }
    }

    /// Unconditionally return to the empty idle state, discarding any staged
    /// input, result and error. Used to start a fresh analysis.
    pub fn reset(&mut self) {
        self.state.apply(SessionEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PDF_MEDIA_TYPE;

    fn test_session() -> Session {
        // Unroutable on purpose; tests below never let a request leave.
        let client = AnalysisClient::new("http://127.0.0.1:9").expect("client builds");
        Session::new(client)
    }

    fn pdf_candidate(name: &str) -> FileCandidate {
        FileCandidate::new(name, PDF_MEDIA_TYPE, b"%PDF-1.4".to_vec())
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            name: Some("Jane Doe".to_string()),
            email: None,
            phone: None,
            skills: vec!["PYTHON".to_string()],
            education: vec![],
            experience_years: 3.0,
            experience_level: "Mid".to_string(),
            classification: "Backend Developer".to_string(),
            confidence: 0.7,
            raw_text: None,
        }
    }

    #[test]
    fn test_mode_switch_clears_staged_input_and_error() {
        let mut session = test_session();
        session.set_mode(InputMode::File);
        session.stage_file(FileCandidate::new("cv.txt", "text/plain", vec![]));
        assert_eq!(session.error(), Some(&AnalyzeError::InvalidInputKind));

        session.set_mode(InputMode::Text);
        assert_eq!(session.state().staged, None);
        assert_eq!(session.error(), None);

        session.stage_text("some resume");
        session.set_mode(InputMode::File);
        assert_eq!(session.state().staged, None);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_staging_clears_previous_error() {
        let mut session = test_session();
        session.stage_file(FileCandidate::new("cv.docx", "application/msword", vec![]));
        assert!(session.error().is_some());

        session.stage_file(pdf_candidate("cv.pdf"));
        assert_eq!(session.error(), None);
        assert_eq!(
            session.state().staged,
            Some(StagedInput::File(pdf_candidate("cv.pdf")))
        );
    }

    #[test]
    fn test_non_pdf_file_is_rejected_without_replacing_staged() {
        let mut session = test_session();
        session.stage_file(pdf_candidate("good.pdf"));

        session.stage_file(FileCandidate::new("bad.txt", "text/plain", vec![]));
        assert_eq!(session.error(), Some(&AnalyzeError::InvalidInputKind));
        assert_eq!(
            session.state().staged,
            Some(StagedInput::File(pdf_candidate("good.pdf")))
        );
    }

    #[tokio::test]
    async fn test_submit_without_file_sets_missing_file() {
        let mut session = test_session();
        session.set_mode(InputMode::File);

        session.submit().await;

        assert_eq!(session.error(), Some(&AnalyzeError::MissingFile));
        assert_eq!(session.state().phase, RequestPhase::Idle);
    }

    #[tokio::test]
    async fn test_submit_with_whitespace_text_sets_missing_text() {
        let mut session = test_session();
        session.set_mode(InputMode::Text);
        session.stage_text("   \n\t  ");

        session.submit().await;

        assert_eq!(session.error(), Some(&AnalyzeError::MissingText));
        assert_eq!(session.state().phase, RequestPhase::Idle);
    }

    #[tokio::test]
    async fn test_submit_with_nothing_staged_in_text_mode_sets_missing_text() {
        let mut session = test_session();
        session.set_mode(InputMode::Text);

        session.submit().await;

        assert_eq!(session.error(), Some(&AnalyzeError::MissingText));
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_a_noop() {
        let mut session = test_session();
        session.set_mode(InputMode::Text);
        session.stage_text("a perfectly fine resume");
        session.state.phase = RequestPhase::Pending;

        session.submit().await;

        // An issued request would have settled the phase one way or the other.
        assert_eq!(session.state().phase, RequestPhase::Pending);
        assert_eq!(session.error(), None);
        assert_eq!(session.result(), None);
    }

    #[test]
    fn test_settled_states_hold_result_xor_error() {
        let mut state = SessionState::default();

        state.apply(SessionEvent::SubmissionStarted);
        assert_eq!(state.phase, RequestPhase::Pending);
        assert!(state.result.is_none() && state.error.is_none());

        state.apply(SessionEvent::SubmissionSucceeded(sample_result()));
        assert_eq!(state.phase, RequestPhase::Succeeded);
        assert!(state.result.is_some());
        assert!(state.error.is_none());

        state.apply(SessionEvent::SubmissionStarted);
        state.apply(SessionEvent::SubmissionFailed("boom".to_string()));
        assert_eq!(state.phase, RequestPhase::Failed);
        assert!(state.result.is_none());
        assert_eq!(
            state.error,
            Some(AnalyzeError::RequestFailed("boom".to_string()))
        );
    }

    #[test]
    fn test_invalid_file_after_success_clears_result() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::SubmissionStarted);
        state.apply(SessionEvent::SubmissionSucceeded(sample_result()));

        state.apply(SessionEvent::FileChosen(FileCandidate::new(
            "notes.txt",
            "text/plain",
            vec![],
        )));

        // The error slot and a displayed result never coexist.
        assert_eq!(state.error, Some(AnalyzeError::InvalidInputKind));
        assert!(state.result.is_none());
    }

    #[test]
    fn test_reset_returns_to_empty_idle() {
        let mut state = SessionState::default();
        state.mode = InputMode::Text;
        state.apply(SessionEvent::TextEdited("resume".to_string()));
        state.apply(SessionEvent::SubmissionStarted);
        state.apply(SessionEvent::SubmissionSucceeded(sample_result()));

        state.apply(SessionEvent::Reset);

        assert_eq!(state.phase, RequestPhase::Idle);
        assert!(state.staged.is_none());
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        // The active mode survives a reset.
        assert_eq!(state.mode, InputMode::Text);
    }

    #[tokio::test]
    async fn test_unreachable_service_settles_as_failed_with_fallback() {
        let mut session = test_session();
        session.set_mode(InputMode::Text);
        session.stage_text("experienced rust developer");

        session.submit().await;

        assert_eq!(session.state().phase, RequestPhase::Failed);
        assert!(session.result().is_none());
        assert_eq!(
            session.error(),
            Some(&AnalyzeError::RequestFailed(
                crate::core::service_client::GENERIC_REQUEST_ERROR.to_string()
            ))
        );
    }
}
