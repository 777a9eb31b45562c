// Declarative form schemas: one list of field rules per record, evaluated by a single
// generic pass instead of per-screen if-chains.
use serde::Serialize;
use serde_json::{Map, Value};

use super::{validators, FieldError, FieldResult};
use crate::error::{FormsError, Result};

/// Names accepted by [`by_name`].
pub const SCHEMA_NAMES: [&str; 7] = ["sign_up", "sign_in", "profile_update", "tenant", "guarantor", "rent", "expense"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Email,
    Password,
    Name,
    Cpf,
    Phone,
    /// Must repeat the value of another field of the same record.
    ConfirmPassword { against: &'static str },
    DisplayDate,
    Amount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: &'static str,
    pub rule: FieldRule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// Failures of one record, in schema order, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(&'static str, FieldError)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[(&'static str, FieldError)] {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|(name, _)| *name == field).map(|(_, error)| error)
    }

    /// The message to display next to `field`, empty when the field passed.
    pub fn message_for(&self, field: &str) -> String {
        self.error_for(field).map(ToString::to_string).unwrap_or_default()
    }
}

impl Schema {
    pub fn new(entity: &'static str) -> Self {
        Self { entity, fields: Vec::new() }
    }

    pub fn field(mut self, field: &'static str, rule: FieldRule) -> Self {
        self.fields.push(FieldSpec { field, rule });
        self
    }

    /// Runs every rule against a form record. Missing and null fields read as empty text.
    pub fn validate(&self, record: &Map<String, Value>) -> ValidationReport {
        let mut report = ValidationReport::default();

        for spec in &self.fields {
            if report.error_for(spec.field).is_some() {
                continue;
            }
            if let Err(error) = check(spec.rule, &field_text(record, spec.field), record) {
                report.errors.push((spec.field, error));
            }
        }

        tracing::debug!(entity = self.entity, failures = report.errors.len(), "Validated form record");
        report
    }

    /// Serializes a typed record and validates the resulting JSON object.
    pub fn validate_record<T: Serialize>(&self, record: &T) -> Result<ValidationReport> {
        match serde_json::to_value(record)? {
            Value::Object(map) => Ok(self.validate(&map)),
            other => Err(FormsError::SchemaError(format!(
                "{} records must serialize to an object, got {}",
                self.entity, other
            ))),
        }
    }
}

fn check(rule: FieldRule, value: &str, record: &Map<String, Value>) -> FieldResult {
    match rule {
        FieldRule::Required => validators::required(value),
        FieldRule::Email => validators::email(value),
        FieldRule::Password => validators::password(value),
        FieldRule::Name => validators::name(value),
        FieldRule::Cpf => validators::cpf(value),
        FieldRule::Phone => validators::phone(value),
        FieldRule::ConfirmPassword { against } => {
            validators::confirm_password(&field_text(record, against), value)
        }
        FieldRule::DisplayDate => validators::display_date(value),
        FieldRule::Amount => validators::amount(value),
    }
}

fn field_text(record: &Map<String, Value>, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn sign_up() -> Schema {
    Schema::new("sign_up")
        .field("name", FieldRule::Name)
        .field("email", FieldRule::Email)
        .field("cpf", FieldRule::Cpf)
        .field("phone", FieldRule::Phone)
        .field("password", FieldRule::Password)
        .field("confirmPassword", FieldRule::ConfirmPassword { against: "password" })
}

pub fn sign_in() -> Schema {
    Schema::new("sign_in")
        .field("email", FieldRule::Email)
        .field("password", FieldRule::Password)
}

pub fn profile_update() -> Schema {
    Schema::new("profile_update")
        .field("name", FieldRule::Name)
        .field("email", FieldRule::Email)
        .field("phone", FieldRule::Phone)
}

pub fn tenant() -> Schema {
    Schema::new("tenant")
        .field("name", FieldRule::Name)
        .field("email", FieldRule::Email)
        .field("cpf", FieldRule::Cpf)
        .field("phone", FieldRule::Phone)
}

pub fn guarantor() -> Schema {
    Schema::new("guarantor")
        .field("name", FieldRule::Name)
        .field("email", FieldRule::Email)
        .field("cpf", FieldRule::Cpf)
        .field("phone", FieldRule::Phone)
}

// Rent and expense forms hold masked text: dates as DD/MM/YYYY, money as "1.234,56".
pub fn rent() -> Schema {
    Schema::new("rent")
        .field("houseId", FieldRule::Required)
        .field("tenantId", FieldRule::Required)
        .field("startDate", FieldRule::DisplayDate)
        .field("endDate", FieldRule::DisplayDate)
        .field("value", FieldRule::Amount)
        .field("dueDay", FieldRule::Required)
}

pub fn expense() -> Schema {
    Schema::new("expense")
        .field("description", FieldRule::Required)
        .field("amount", FieldRule::Amount)
        .field("date", FieldRule::DisplayDate)
}

pub fn by_name(name: &str) -> Option<Schema> {
    match name {
        "sign_up" => Some(sign_up()),
        "sign_in" => Some(sign_in()),
        "profile_update" => Some(profile_update()),
        "tenant" => Some(tenant()),
        "guarantor" => Some(guarantor()),
        "rent" => Some(rent()),
        "expense" => Some(expense()),
        _ => None,
    }
}
