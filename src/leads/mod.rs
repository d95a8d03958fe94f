//! Lead capture: validation, the application wizard, and provider
//! submission. Submissions are ephemeral: validated, forwarded, and
//! never persisted.

pub mod submit;
pub mod validate;
pub mod wizard;

pub use submit::{Mailer, SubmitError};
pub use validate::{ApplicationSubmission, ContactSubmission, FieldError};
pub use wizard::ApplicationWizard;
