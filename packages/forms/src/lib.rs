pub mod config;
pub mod debounce;
pub mod filter;
pub mod form;
pub mod models;
pub mod validate;

pub use config::{ConfigError, FrontendConfig};
pub use debounce::{Cancel, TimerSlots};
pub use filter::filter_input;
pub use form::{FormMode, FormPhase, FormState, PendingValidation, SubmitRejected};
pub use models::{Field, FieldErrors, UnknownField, UserId, UserRecord};
pub use validate::{
    validate_email, validate_field, validate_name, validate_username, EMAIL_PROVIDER_ALLOWLIST,
};
