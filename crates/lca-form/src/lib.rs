//! Controller logic for the LCA prediction form.
//!
//! Nothing here touches the browser: the DOM is reached through
//! [`form::FormControls`], and the HTTP call is made by the caller with the
//! [`submit::Submission`] this crate prepares.

pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod render;
pub mod submit;

pub use error::{FieldError, SubmitError, ValidationErrors};
pub use form::{FormControls, MemoryForm, gather_payload};
pub use render::{PredictOutcome, ResultView, render_outcome};
pub use submit::{Submission, prepare_submission};
