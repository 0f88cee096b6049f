//! The top-level controller.
//!
//! [`Assistant`] owns the [`PromptSession`] and the [`PromptLibrary`] and
//! runs every user action against a [`PromptImprover`]. Form validation
//! happens before anything is sent, so an incomplete form never reaches
//! the network.
//!
//! The session sits behind a mutex that is never held across an await, so
//! refinements of different slots can run concurrently on a shared
//! `&Assistant`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use promptsmith_core::error::CoreError;
use promptsmith_core::history::{NewPromptItem, PromptExport, SavedPromptItem};
use promptsmith_core::relay::{PromptImprover, MISSING_PROMPT_MESSAGE};
use promptsmith_core::session::PromptSession;
use promptsmith_core::types::{HistoryId, ImprovedPrompts, PromptData, PromptKind, PromptSlot};
use promptsmith_store::PromptLibrary;

use crate::error::ClientError;

/// Shown when saving with nothing generated yet.
pub const NOTHING_TO_SAVE_MESSAGE: &str = "No hay ningún prompt mejorado para guardar.";

pub struct Assistant<I: PromptImprover> {
    improver: I,
    library: PromptLibrary,
    session: Mutex<PromptSession>,
}

impl<I: PromptImprover> Assistant<I> {
    pub fn new(improver: I, library: PromptLibrary) -> Self {
        Self {
            improver,
            library,
            session: Mutex::new(PromptSession::new()),
        }
    }

    /// Snapshot of the current session state.
    pub fn session(&self) -> PromptSession {
        self.state().clone()
    }

    pub fn library(&self) -> &PromptLibrary {
        &self.library
    }

    pub fn improver(&self) -> &I {
        &self.improver
    }

    pub fn select_kind(&self, kind: PromptKind) {
        self.state().select_kind(kind);
    }

    pub fn reset(&self) {
        self.state().reset();
    }

    // ---- generation ----

    /// Build the raw prompt from `data`, improve it and record the result
    /// in history.
    ///
    /// `title` names the history entry; a missing or blank title falls
    /// back to the objective (text) or subject (image).
    pub async fn generate(
        &self,
        data: PromptData,
        want_alternatives: bool,
        title: Option<&str>,
    ) -> Result<ImprovedPrompts, ClientError> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| data.title())
            .to_string();
        let kind = data.kind();
        let history_data = data.clone();

        let ticket = self.state().begin_generation(data)?;
        tracing::debug!(kind = kind.as_str(), want_alternatives, "Requesting improvement");

        let result = self
            .improver
            .improve(&ticket.raw_prompt, want_alternatives)
            .await;
        if !self.state().complete_generation(&ticket, result.clone()) {
            tracing::debug!(epoch = ticket.epoch, "Session moved on; generation result not applied");
        }
        let improved = result.inspect_err(|e| {
            tracing::warn!(error = %e, details = e.details(), "Improvement failed");
        })?;

        let entry = self
            .library
            .record_generation(NewPromptItem {
                title,
                prompt: improved.main_prompt.clone(),
                prompt_type: kind,
                data: history_data,
                alternatives: improved.alternative_prompts.clone(),
            })
            .await?;
        tracing::info!(id = entry.id, kind = kind.as_str(), "Generation recorded");

        Ok(improved)
    }

    // ---- refinement ----

    /// Apply `instruction` to the prompt in `slot`.
    ///
    /// On failure the slot keeps its previous value and the session records
    /// the error. A result arriving after the session moved on (new
    /// generation, paste, selection or reset) is returned but not applied.
    pub async fn refine(&self, slot: PromptSlot, instruction: &str) -> Result<String, ClientError> {
        let ticket = self.state().begin_refinement(slot, instruction)?;
        tracing::debug!(slot = %slot, "Requesting refinement");

        let result = self
            .improver
            .refine(&ticket.prompt, &ticket.instruction)
            .await;
        if !self.state().complete_refinement(&ticket, result.clone()) && result.is_ok() {
            tracing::debug!(slot = %slot, epoch = ticket.epoch, "Refinement result not applied");
        }

        result.map_err(|e| {
            tracing::warn!(slot = %slot, error = %e, details = e.details(), "Refinement failed");
            e.into()
        })
    }

    // ---- pasted prompts and stored items ----

    /// Start from a pasted prompt instead of a form.
    pub fn paste(&self, prompt: &str, kind: PromptKind) -> Result<(), ClientError> {
        self.state().start_from_pasted(prompt, kind)?;
        Ok(())
    }

    /// Load a history or saved entry into the session.
    pub fn select(&self, item: &SavedPromptItem) {
        self.state().restore(item);
    }

    /// Save the current main prompt under `title`.
    pub async fn save_current(&self, title: &str) -> Result<SavedPromptItem, ClientError> {
        let item = {
            let session = self.state();
            let (Some(main), Some(data), Some(kind)) =
                (session.main_prompt(), session.data(), session.kind())
            else {
                return Err(CoreError::Validation(NOTHING_TO_SAVE_MESSAGE.to_string()).into());
            };

            let title = match title.trim() {
                "" => data.title().to_string(),
                t => t.to_string(),
            };
            NewPromptItem {
                title,
                prompt: main.to_string(),
                prompt_type: kind,
                data: data.clone(),
                alternatives: session.alternatives().cloned(),
            }
        };

        Ok(self.library.save(item).await?)
    }

    /// Text file contents and name for downloading the prompt in `slot`.
    pub fn export_slot(&self, slot: PromptSlot, title: &str) -> Result<PromptExport, ClientError> {
        let session = self.state();
        let prompt = session
            .slot(slot)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CoreError::Validation(MISSING_PROMPT_MESSAGE.to_string()))?;
        Ok(PromptExport::new(title, prompt))
    }

    pub async fn history(&self) -> Result<Vec<SavedPromptItem>, ClientError> {
        Ok(self.library.history().await?)
    }

    pub async fn saved(&self) -> Result<Vec<SavedPromptItem>, ClientError> {
        Ok(self.library.saved().await?)
    }

    pub async fn delete_history(&self, id: HistoryId) -> Result<bool, ClientError> {
        Ok(self.library.delete_history(id).await?)
    }

    pub async fn clear_history(&self) -> Result<(), ClientError> {
        Ok(self.library.clear_history().await?)
    }

    pub async fn delete_saved(&self, id: HistoryId) -> Result<bool, ClientError> {
        Ok(self.library.delete_saved(id).await?)
    }

    // ---- private helpers ----

    fn state(&self) -> MutexGuard<'_, PromptSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
