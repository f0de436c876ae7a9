//! Creation forms
//!
//! Both forms share one state machine:
//!
//! ```text
//! Closed ──open──▶ Open ──submit──▶ Submitting ──ok──▶ Closed
//!                   ▲                    │
//!                   └──────── err ───────┘
//! ```
//!
//! Every `open` starts a new session. A submission result is applied only
//! to the session it was started from, so a form that was cancelled and
//! reopened while a request was in flight is never touched by that request.

mod category;
mod food;

pub use category::{CategoryDraft, CategoryForm};
pub use food::{FoodDraft, FoodField, FoodForm, IMAGE_PLACEHOLDER_LABEL, read_image};

use serde::Serialize;
use shared::Category;

use crate::config::CancelPolicy;
use crate::error::{CatalogError, CatalogResult};
use crate::generation::{Generation, GenerationGate};

pub const SAVE_LABEL: &str = "Save";
pub const SAVING_LABEL: &str = "Saving...";

/// Phase of a creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Submit button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: &'static str,
}

impl SubmitControl {
    pub fn for_phase(phase: FormPhase) -> Self {
        match phase {
            FormPhase::Submitting => Self {
                disabled: true,
                label: SAVING_LABEL,
            },
            _ => Self {
                disabled: false,
                label: SAVE_LABEL,
            },
        }
    }
}

/// Unsaved form contents
pub trait Draft: Default + Clone + std::fmt::Debug {
    /// Creation request built from a valid draft
    type Payload;

    /// Check required/type constraints and build the request payload
    fn validate(&self, categories: &[Category]) -> CatalogResult<Self::Payload>;
}

/// Form state machine around a draft
#[derive(Debug, Default)]
pub struct FormController<D: Draft> {
    phase: FormPhase,
    draft: D,
    last_error: Option<CatalogError>,
    sessions: GenerationGate,
}

impl<D: Draft> FormController<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    pub fn session(&self) -> Generation {
        self.sessions.current()
    }

    pub fn submit_control(&self) -> SubmitControl {
        SubmitControl::for_phase(self.phase)
    }

    pub fn cancel_enabled(&self, policy: CancelPolicy) -> bool {
        match self.phase {
            FormPhase::Closed => false,
            FormPhase::Open => true,
            FormPhase::Submitting => policy == CancelPolicy::Allow,
        }
    }

    /// Show the form with an empty draft
    ///
    /// Opening an already visible form keeps its draft and session.
    pub fn open(&mut self) -> Generation {
        if self.phase == FormPhase::Closed {
            self.draft = D::default();
            self.last_error = None;
            self.phase = FormPhase::Open;
            self.sessions.advance();
        }
        self.sessions.current()
    }

    /// Dismiss the form and discard the draft
    pub fn cancel(&mut self, policy: CancelPolicy) -> CatalogResult<()> {
        if self.phase == FormPhase::Submitting && policy == CancelPolicy::Block {
            return Err(CatalogError::invalid_state(
                "cannot cancel while the submission is in flight",
            ));
        }
        self.close();
        Ok(())
    }

    /// Close and end the current session
    pub(crate) fn close(&mut self) {
        if self.phase != FormPhase::Closed {
            self.phase = FormPhase::Closed;
            self.draft = D::default();
            self.last_error = None;
            self.sessions.advance();
        }
    }

    /// Mutable access to the draft; only while the form is open
    pub fn draft_mut(&mut self) -> CatalogResult<&mut D> {
        match self.phase {
            FormPhase::Open => Ok(&mut self.draft),
            FormPhase::Closed => Err(CatalogError::invalid_state("form is not open")),
            FormPhase::Submitting => Err(CatalogError::invalid_state(
                "draft is locked while submitting",
            )),
        }
    }

    /// Validate the draft and enter `Submitting`
    ///
    /// On a validation failure the form stays open and records the error;
    /// no request must be issued.
    pub fn begin_submit(&mut self, categories: &[Category]) -> CatalogResult<(Generation, D::Payload)> {
        if self.phase != FormPhase::Open {
            return Err(CatalogError::invalid_state("form is not open"));
        }
        match self.draft.validate(categories) {
            Ok(payload) => {
                self.phase = FormPhase::Submitting;
                self.last_error = None;
                Ok((self.sessions.current(), payload))
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Apply the submission result started in `session`
    ///
    /// Returns `false` when the session is gone (cancelled, reopened,
    /// unmounted) and the form was left untouched.
    pub fn complete<T>(&mut self, session: Generation, result: &CatalogResult<T>) -> bool {
        if !self.sessions.is_current(session) || self.phase != FormPhase::Submitting {
            return false;
        }
        match result {
            Ok(_) => self.close(),
            Err(e) => {
                self.phase = FormPhase::Open;
                self.last_error = Some(e.clone());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_form(name: &str) -> CategoryForm {
        let mut form = CategoryForm::new();
        form.open();
        form.draft_mut().unwrap().name = name.into();
        form
    }

    #[test]
    fn test_open_resets_draft() {
        let mut form = open_form("Soups");
        form.cancel(CancelPolicy::Allow).unwrap();
        form.open();
        assert_eq!(form.phase(), FormPhase::Open);
        assert_eq!(form.draft().name, "");
    }

    #[test]
    fn test_open_twice_keeps_draft() {
        let mut form = open_form("Soups");
        let session = form.session();
        assert_eq!(form.open(), session);
        assert_eq!(form.draft().name, "Soups");
    }

    #[test]
    fn test_submit_success_closes_and_resets() {
        let mut form = open_form("Soups");
        let (session, payload) = form.begin_submit(&[]).unwrap();
        assert_eq!(payload.name, "Soups");
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(form.submit_control(), SubmitControl { disabled: true, label: "Saving..." });

        assert!(form.complete(session, &Ok(())));
        assert_eq!(form.phase(), FormPhase::Closed);
        assert_eq!(form.draft().name, "");
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_submit_failure_keeps_draft() {
        let mut form = open_form("Soups");
        let (session, _) = form.begin_submit(&[]).unwrap();
        let err = CatalogError::Rejected {
            status: 500,
            message: "boom".into(),
        };
        assert!(form.complete::<()>(session, &Err(err.clone())));
        assert_eq!(form.phase(), FormPhase::Open);
        assert_eq!(form.draft().name, "Soups");
        assert_eq!(form.last_error(), Some(&err));
        assert_eq!(form.submit_control(), SubmitControl { disabled: false, label: "Save" });
    }

    #[test]
    fn test_validation_failure_stays_open() {
        let mut form = open_form("   ");
        let err = form.begin_submit(&[]).unwrap_err();
        assert!(matches!(err, CatalogError::Validation { field: "name", .. }));
        assert_eq!(form.phase(), FormPhase::Open);
        assert_eq!(form.last_error(), Some(&err));
    }

    #[test]
    fn test_submit_requires_open_form() {
        let mut form = CategoryForm::new();
        assert!(matches!(
            form.begin_submit(&[]),
            Err(CatalogError::InvalidState(_))
        ));
        assert!(form.draft_mut().is_err());
    }

    #[test]
    fn test_cancel_policy_while_submitting() {
        let mut form = open_form("Soups");
        let (session, _) = form.begin_submit(&[]).unwrap();
        assert!(form.draft_mut().is_err());
        assert!(!form.cancel_enabled(CancelPolicy::Block));
        assert!(form.cancel(CancelPolicy::Block).is_err());
        assert_eq!(form.phase(), FormPhase::Submitting);

        assert!(form.cancel_enabled(CancelPolicy::Allow));
        form.cancel(CancelPolicy::Allow).unwrap();
        assert_eq!(form.phase(), FormPhase::Closed);

        // Late result for the dismissed session is dropped
        form.open();
        assert!(!form.complete(session, &Ok(())));
        assert_eq!(form.phase(), FormPhase::Open);
    }
}
