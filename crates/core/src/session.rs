//! Per-session prompt state.
//!
//! [`PromptSession`] is the explicit state object owned by the top-level
//! controller: the current form data, the five prompt slots, the loading
//! flag, the last user-facing error and the set of slots with a refinement
//! in flight.
//!
//! Remote round trips are split into `begin_*` / `complete_*` pairs so the
//! caller owns the await point. Slot values are only replaced by a
//! successful completion; a failure records the error and leaves every slot
//! untouched.
//!
//! Refinement per slot: `Idle -> Refining -> Idle`. Different slots may be
//! refining at the same time; the same slot may not.
//!
//! Every action that replaces the session's lineage (a new generation, a
//! pasted prompt, a restored entry, a reset) bumps the session epoch. Tickets
//! carry the epoch they were issued under, and completions from an older
//! epoch are dropped.

use std::collections::HashSet;

use crate::error::{CoreError, RelayError};
use crate::history::SavedPromptItem;
use crate::relay::MISSING_PROMPT_MESSAGE;
use crate::template::build_prompt;
use crate::types::{AlternativePrompts, ImprovedPrompts, PromptData, PromptKind, PromptSlot};
use crate::validation::{is_complete, validate_instruction, validate_pasted_prompt, validate_prompt_data};

/// Shown when a generation is requested while another is in flight.
pub const GENERATION_IN_PROGRESS_MESSAGE: &str = "Ya hay una generación en curso.";

/// Token returned by [`PromptSession::begin_generation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub epoch: u64,
    pub raw_prompt: String,
}

/// Token returned by [`PromptSession::begin_refinement`].
///
/// Carries the slot and the exact text sent for refinement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementTicket {
    pub epoch: u64,
    pub slot: PromptSlot,
    pub prompt: String,
    pub instruction: String,
}

#[derive(Debug, Clone, Default)]
pub struct PromptSession {
    kind: Option<PromptKind>,
    data: Option<PromptData>,
    raw: Option<String>,
    main: Option<String>,
    alternatives: Option<AlternativePrompts>,
    loading: bool,
    error: Option<String>,
    refining: HashSet<PromptSlot>,
    epoch: u64,
}

impl PromptSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -- accessors --

    pub fn kind(&self) -> Option<PromptKind> {
        self.kind
    }

    pub fn data(&self) -> Option<&PromptData> {
        self.data.as_ref()
    }

    pub fn raw_prompt(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn main_prompt(&self) -> Option<&str> {
        self.main.as_deref()
    }

    pub fn alternatives(&self) -> Option<&AlternativePrompts> {
        self.alternatives.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_refining(&self, slot: PromptSlot) -> bool {
        self.refining.contains(&slot)
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Current value of a slot, if it holds one.
    pub fn slot(&self, slot: PromptSlot) -> Option<&str> {
        match slot {
            PromptSlot::Raw => self.raw.as_deref(),
            PromptSlot::Main => self.main.as_deref(),
            PromptSlot::Claridad | PromptSlot::Creatividad | PromptSlot::Precision => {
                self.alternatives.as_ref().and_then(|alts| alts.get(slot))
            }
        }
    }

    /// Select the prompt kind before any form is filled in.
    pub fn select_kind(&mut self, kind: PromptKind) {
        self.kind = Some(kind);
    }

    /// Back to the initial, empty state. In-flight round trips become stale.
    pub fn reset(&mut self) {
        let epoch = self.epoch;
        *self = Self::default();
        self.epoch = epoch + 1;
    }

    /// Start a new lineage: drop pending refinements and invalidate tickets.
    fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.refining.clear();
        self.epoch
    }

    // -- generation --

    /// Validate the form, clear previous outputs and derive the raw prompt.
    ///
    /// The ticket holds the raw prompt to send for improvement. On a
    /// validation failure nothing changes except the recorded error. Fails
    /// with a conflict while another generation is loading.
    pub fn begin_generation(&mut self, data: PromptData) -> Result<GenerationTicket, CoreError> {
        if self.loading {
            return Err(CoreError::Conflict(GENERATION_IN_PROGRESS_MESSAGE.to_string()));
        }
        if let Err(err) = validate_prompt_data(&data) {
            self.error = Some(err.to_string());
            return Err(err);
        }

        let raw = build_prompt(&data);
        let epoch = self.next_epoch();
        self.kind = Some(data.kind());
        self.data = Some(data);
        self.raw = Some(raw.clone());
        self.main = None;
        self.alternatives = None;
        self.error = None;
        self.loading = true;
        Ok(GenerationTicket {
            epoch,
            raw_prompt: raw,
        })
    }

    /// Commit the outcome of the improvement round trip.
    ///
    /// Returns `false` without touching the session when the ticket is from
    /// an older epoch.
    pub fn complete_generation(
        &mut self,
        ticket: &GenerationTicket,
        result: Result<ImprovedPrompts, RelayError>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }

        self.loading = false;
        match result {
            Ok(improved) => {
                self.main = Some(improved.main_prompt);
                self.alternatives = improved.alternative_prompts;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        true
    }

    // -- pasted prompts and stored items --

    /// Start from a prompt the user pasted instead of a form.
    ///
    /// The pasted text becomes the raw prompt; the form data is a partial
    /// reconstruction holding only its first characters.
    pub fn start_from_pasted(&mut self, prompt: &str, kind: PromptKind) -> Result<(), CoreError> {
        validate_pasted_prompt(prompt)?;

        self.next_epoch();
        self.loading = false;
        self.kind = Some(kind);
        self.data = Some(PromptData::partial(kind, prompt));
        self.raw = Some(prompt.to_string());
        self.main = None;
        self.alternatives = None;
        self.error = None;
        Ok(())
    }

    /// Load a history or saved entry.
    ///
    /// The raw prompt is rebuilt only when the stored data is a complete
    /// form; partial data leaves the raw slot empty.
    pub fn restore(&mut self, item: &SavedPromptItem) {
        self.next_epoch();
        self.loading = false;
        self.raw = is_complete(&item.data).then(|| build_prompt(&item.data));
        self.kind = Some(item.prompt_type);
        self.data = Some(item.data.clone());
        self.main = Some(item.prompt.clone());
        self.alternatives = item.alternatives.clone();
        self.error = None;
    }

    // -- refinement --

    /// Mark `slot` as refining and return what to send.
    ///
    /// Fails when the slot is empty, already refining, or the instruction
    /// is blank. The failure is also recorded as the session error.
    pub fn begin_refinement(
        &mut self,
        slot: PromptSlot,
        instruction: &str,
    ) -> Result<RefinementTicket, CoreError> {
        let result = self.check_refinement(slot, instruction);
        match result {
            Ok(prompt) => {
                self.refining.insert(slot);
                self.error = None;
                Ok(RefinementTicket {
                    epoch: self.epoch,
                    slot,
                    prompt,
                    instruction: instruction.to_string(),
                })
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn check_refinement(&self, slot: PromptSlot, instruction: &str) -> Result<String, CoreError> {
        validate_instruction(instruction)?;
        let prompt = self
            .slot(slot)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CoreError::Validation(MISSING_PROMPT_MESSAGE.to_string()))?;
        if self.refining.contains(&slot) {
            return Err(CoreError::Conflict(format!(
                "slot {slot} is already being refined"
            )));
        }
        Ok(prompt.to_string())
    }

    /// Leave the refining state for the ticket's slot, replacing its value
    /// on success.
    ///
    /// Returns whether the value was replaced. A ticket from an older epoch
    /// changes nothing.
    pub fn complete_refinement(
        &mut self,
        ticket: &RefinementTicket,
        result: Result<String, RelayError>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }

        let slot = ticket.slot;
        self.refining.remove(&slot);
        match result {
            Ok(refined) => {
                let replaced = self.replace_slot(slot, refined);
                if replaced {
                    self.error = None;
                }
                replaced
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Replace a slot in place. Alternatives are only replaced when the
    /// structure exists; a lone alternative is never created.
    fn replace_slot(&mut self, slot: PromptSlot, value: String) -> bool {
        match slot {
            PromptSlot::Raw => {
                self.raw = Some(value);
                true
            }
            PromptSlot::Main => {
                self.main = Some(value);
                true
            }
            PromptSlot::Claridad | PromptSlot::Creatividad | PromptSlot::Precision => self
                .alternatives
                .as_mut()
                .is_some_and(|alts| alts.set(slot, value)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
