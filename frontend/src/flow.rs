//! Upload/submit state machine.
//!
//! [`UploadState`] is replaced wholesale on every transition
//! (`idle -> loading -> done | failed`). [`submit`] drives one request
//! through an [`AnalysisClient`] and always leaves the loading state, even
//! when the request future is dropped half way.

use leptos::*;

use crate::services::{interpret_reply, AnalysisClient};
use crate::{
    AnalysisMode, AnalysisResult, AppError, AppResult, RequestState, UploadSelection, ERROR_PREFIX,
};

/// Per-page upload state.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadState<F> {
    pub selection: Option<UploadSelection<F>>,
    pub mode: AnalysisMode,
    pub request: RequestState,
    pub result: Option<AnalysisResult>,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selection: None,
            mode: AnalysisMode::default(),
            request: RequestState::Idle,
            result: None,
        }
    }
}

impl<F: Clone> UploadState<F> {
    /// Replace the selected file. The previous result stays on screen.
    pub fn with_selection(self, selection: UploadSelection<F>) -> Self {
        Self {
            selection: Some(selection),
            ..self
        }
    }

    /// Switch analysis mode. The previous result stays on screen.
    pub fn with_mode(self, mode: AnalysisMode) -> Self {
        Self { mode, ..self }
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Loading
    }

    /// What a submission would send, or why it cannot start.
    pub fn submission(&self) -> AppResult<(AnalysisMode, UploadSelection<F>)> {
        let selection = self.selection.clone().ok_or(AppError::NoFileSelected)?;
        Ok((self.mode.clone(), selection))
    }

    /// Enter `loading`, dropping the previous result.
    pub fn begin(self) -> Self {
        Self {
            request: RequestState::Loading,
            result: None,
            ..self
        }
    }

    /// Leave `loading` with the request's outcome.
    pub fn complete(self, outcome: AppResult<AnalysisResult>) -> Self {
        let (request, result) = match outcome {
            Ok(result) => (RequestState::Done, result),
            Err(err) => (
                RequestState::Failed,
                AnalysisResult::text(format!("{}{}", ERROR_PREFIX, err)),
            ),
        };
        Self {
            request,
            result: Some(result),
            ..self
        }
    }
}

/// Somewhere an [`UploadState`] lives between transitions.
pub trait UploadStore<F> {
    /// Copy of the current state.
    fn snapshot(&self) -> UploadState<F>;

    /// Replace the state with `f(current)`.
    fn transition(&self, f: impl FnOnce(UploadState<F>) -> UploadState<F>);
}

impl<F: Clone + 'static> UploadStore<F> for RwSignal<UploadState<F>> {
    fn snapshot(&self) -> UploadState<F> {
        self.try_get_untracked().unwrap_or_default()
    }

    fn transition(&self, f: impl FnOnce(UploadState<F>) -> UploadState<F>) {
        // The signal may already be disposed if the page was left mid-request.
        let _ = self.try_update(|state| *state = f(std::mem::take(state)));
    }
}

/// Holds a store in `loading` until [`LoadingGuard::finish`] runs.
///
/// Dropping an unfinished guard completes the state as interrupted.
struct LoadingGuard<'a, F: Clone, S: UploadStore<F>> {
    store: &'a S,
    pending: bool,
    _file: std::marker::PhantomData<F>,
}

impl<'a, F: Clone, S: UploadStore<F>> LoadingGuard<'a, F, S> {
    fn begin(store: &'a S) -> Self {
        store.transition(UploadState::begin);
        Self {
            store,
            pending: true,
            _file: std::marker::PhantomData,
        }
    }

    fn finish(mut self, outcome: AppResult<AnalysisResult>) {
        self.pending = false;
        self.store.transition(|state| state.complete(outcome));
    }
}

impl<F: Clone, S: UploadStore<F>> Drop for LoadingGuard<'_, F, S> {
    fn drop(&mut self) {
        if self.pending {
            log::warn!("⚠️ Analysis request dropped while loading");
            self.store
                .transition(|state| state.complete(Err(AppError::Interrupted)));
        }
    }
}

/// Upload the selected file and fetch its analysis.
pub async fn request_analysis<C: AnalysisClient>(
    client: &C,
    mode: &AnalysisMode,
    selection: &UploadSelection<C::File>,
) -> AppResult<AnalysisResult> {
    let reply = client.post_document(mode, &selection.file).await?;
    interpret_reply(mode, &reply)
}

/// Run one submission against `store`.
///
/// Returns `Err(AppError::NoFileSelected)` without touching the store or
/// the network when nothing is selected. Every other failure is written
/// to the store as result text and reported as `Ok`.
pub async fn submit<C, S>(client: &C, store: &S) -> AppResult<()>
where
    C: AnalysisClient,
    S: UploadStore<C::File>,
{
    let (mode, selection) = store.snapshot().submission()?;

    log::info!("📤 Uploading {} for {}", selection.name, mode);
    let guard = LoadingGuard::<C::File, S>::begin(store);

    let outcome = request_analysis(client, &mode, &selection).await;
    match &outcome {
        Ok(_) => log::info!("✅ {} analysis ready", mode),
        Err(e) => log::error!("❌ {} analysis failed: {}", mode, e),
    }

    guard.finish(outcome);
    Ok(())
}
