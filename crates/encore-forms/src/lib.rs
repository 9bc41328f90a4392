// Encore Forms - client form binding for the validation engine
// Wires field events to rule-chain evaluation and renders the outcome

pub mod binder;
pub mod config;
pub mod error;
pub mod field;
pub mod renderer;
pub mod view;

pub use binder::{FieldValue, FormBinder, FormValues, SubmitOutcome};
pub use config::{FormConfiguration, FormsConfig};
pub use error::FormError;
pub use field::{FieldBinding, FieldState};
pub use renderer::Renderer;
pub use view::{FieldDeclaration, FieldElement, FormDocument, FormView};

// Re-export the engine so callers need a single dependency
pub use encore_validation_core as validation;
pub use encore_validation_core::{RuleChain, ValidationResult};
