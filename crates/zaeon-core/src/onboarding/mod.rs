//! Multi-step account creation modal.

mod draft;
mod role;
mod sequencer;
mod step;
mod submit;

pub use draft::{Draft, Ensino};
pub use role::Role;
pub use sequencer::{OnboardingSequencer, Session};
pub use step::{valid_celular, valid_email, valid_id, valid_nome, Step};
pub use submit::{signup_params, signup_url, SIGNUP_PATH};
