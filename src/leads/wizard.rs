//! The three-step application wizard state machine.
//!
//! `Basics → Social → About → Submitted`. Forward navigation is blocked
//! until the current step's fields validate; backward navigation is
//! always allowed and keeps entered values. The serve layer replays this
//! machine over a full submission so step-local validation gates the
//! final send exactly as it gates client-side progression.

use super::validate::{ApplicationSubmission, FieldError, Step, validate_step};

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Editing(Step),
    Submitted,
}

/// The application wizard: current position plus the draft under edit.
#[derive(Debug, Clone)]
pub struct ApplicationWizard {
    state: WizardState,
    pub draft: ApplicationSubmission,
}

impl ApplicationWizard {
    /// Start a fresh wizard at step 1.
    pub fn new() -> Self {
        Self::with_draft(ApplicationSubmission::default())
    }

    /// Start at step 1 with a pre-filled draft.
    pub fn with_draft(draft: ApplicationSubmission) -> Self {
        Self {
            state: WizardState::Editing(Step::Basics),
            draft,
        }
    }

    pub const fn state(&self) -> WizardState {
        self.state
    }

    /// The 1-based step number shown in the UI; `None` once submitted.
    pub const fn current_step(&self) -> Option<u8> {
        match self.state {
            WizardState::Editing(step) => Some(step.number()),
            WizardState::Submitted => None,
        }
    }

    /// Try to advance. The current step's fields must validate; on
    /// failure the wizard stays put and the errors are returned. The
    /// final advance moves to `Submitted`.
    pub fn advance(&mut self) -> Result<WizardState, Vec<FieldError>> {
        let WizardState::Editing(step) = self.state else {
            return Ok(self.state);
        };

        let errors = validate_step(step, &self.draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        self.state = match step {
            Step::Basics => WizardState::Editing(Step::Social),
            Step::Social => WizardState::Editing(Step::About),
            Step::About => WizardState::Submitted,
        };
        Ok(self.state)
    }

    /// Step back; a no-op on the first step or after submission.
    pub fn back(&mut self) -> WizardState {
        if let WizardState::Editing(step) = self.state {
            self.state = WizardState::Editing(match step {
                Step::Basics => Step::Basics,
                Step::Social => Step::Basics,
                Step::About => Step::Social,
            });
        }
        self.state
    }

    /// Replay the whole machine over the draft: the submission is
    /// acceptable only if every step advances cleanly.
    pub fn replay(draft: ApplicationSubmission) -> Result<(), Vec<FieldError>> {
        let mut wizard = Self::with_draft(draft);
        while wizard.state != WizardState::Submitted {
            wizard.advance()?;
        }
        Ok(())
    }
}

impl Default for ApplicationWizard {
    fn default() -> Self {
        Self::new()
    }
}
