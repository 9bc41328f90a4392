use thiserror::Error;

/// Misuse of the form binder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no field with id '{0}' is bound to this form")]
    UnknownField(String),

    #[error("field '{0}' is already bound")]
    DuplicateField(String),
}
