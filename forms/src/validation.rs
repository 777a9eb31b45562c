//! Field validation for the form screens.
//!
//! Validators check one value and hand back `Ok(())` or a [`FieldError`] whose
//! `Display` is the Portuguese message shown next to the field. They never fail
//! with [`crate::error::FormsError`]; a bad value is an expected outcome, not an error.
//! [`schema`] binds validators to the fields of each record.

pub mod schema;
pub mod validators;

use thiserror::Error;

pub use schema::{FieldRule, FieldSpec, Schema, ValidationReport};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("O campo é obrigatório.")]
    Required,

    #[error("O e-mail não pode ficar em branco.")]
    EmailBlank,
    #[error("Informe um e-mail válido.")]
    EmailMalformed,

    #[error("A senha não pode ficar em branco.")]
    PasswordBlank,
    #[error("A senha deve ter no mínimo 6 caracteres.")]
    PasswordTooShort,

    #[error("O nome não pode ficar em branco.")]
    NameBlank,
    #[error("O nome não pode conter números.")]
    NameHasDigits,
    #[error("O nome deve ter no mínimo 5 caracteres.")]
    NameTooShort,

    #[error("O CPF não pode ficar em branco.")]
    CpfBlank,
    #[error("O CPF deve ter 11 dígitos.")]
    CpfLength,

    #[error("Confirme a sua senha.")]
    ConfirmPasswordBlank,
    #[error("As senhas não coincidem.")]
    PasswordMismatch,

    #[error("O telefone não pode ficar em branco.")]
    PhoneBlank,
    #[error("O telefone deve ter 11 dígitos.")]
    PhoneLength,

    #[error("Informe uma data válida (DD/MM/AAAA).")]
    DateInvalid,

    #[error("Informe um valor válido.")]
    AmountInvalid,
}

/// Outcome of a single field check.
pub type FieldResult = Result<(), FieldError>;

/// The message to show for a field: empty when the value is valid.
pub fn message(result: &FieldResult) -> String {
    match result {
        Ok(()) => String::new(),
        Err(error) => error.to_string(),
    }
}
