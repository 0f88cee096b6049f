#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;
use promptsmith_core::error::RelayError;
use promptsmith_core::relay::PromptImprover;
use promptsmith_core::types::{AlternativePrompts, ImprovedPrompts, TextPromptData};

/// Deterministic in-memory improver.
///
/// Echoes its input so tests can assert on exactly what was sent, and can
/// be switched into a failing mode. With `hold_refines` set, refinements
/// wait for [`EchoImprover::release_refine`] before answering.
#[derive(Default)]
pub struct EchoImprover {
    pub fail: AtomicBool,
    pub hold_refines: AtomicBool,
    pub improve_calls: AtomicUsize,
    pub refine_calls: AtomicUsize,
    release: Notify,
}

impl EchoImprover {
    pub fn failing() -> Self {
        let improver = Self::default();
        improver.fail.store(true, Ordering::SeqCst);
        improver
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn holding_refines() -> Self {
        let improver = Self::default();
        improver.hold_refines.store(true, Ordering::SeqCst);
        improver
    }

    pub fn release_refine(&self) {
        self.release.notify_one();
    }

    pub fn calls(&self) -> (usize, usize) {
        (
            self.improve_calls.load(Ordering::SeqCst),
            self.refine_calls.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl PromptImprover for EchoImprover {
    async fn improve(
        &self,
        raw_prompt: &str,
        want_alternatives: bool,
    ) -> Result<ImprovedPrompts, RelayError> {
        self.improve_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(RelayError::Request("servicio caído".into()));
        }
        Ok(ImprovedPrompts {
            main_prompt: format!("Mejorado: {raw_prompt}"),
            alternative_prompts: want_alternatives.then(|| AlternativePrompts {
                claridad: format!("Claro: {raw_prompt}"),
                creatividad: format!("Creativo: {raw_prompt}"),
                precision: format!("Preciso: {raw_prompt}"),
            }),
        })
    }

    async fn refine(&self, prompt: &str, instruction: &str) -> Result<String, RelayError> {
        self.refine_calls.fetch_add(1, Ordering::SeqCst);
        if self.hold_refines.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(RelayError::Request("servicio caído".into()));
        }
        Ok(format!("{prompt} [{instruction}]"))
    }
}

/// A complete text form.
pub fn text_form(objective: &str) -> TextPromptData {
    TextPromptData {
        objective: objective.into(),
        producer_role: "travel blogger".into(),
        tone: "inspiring".into(),
        format: "blog post".into(),
        audience: "university students".into(),
        context: "first in a series".into(),
        ..Default::default()
    }
}
