//! Field-level validation for generator requests.
//!
//! Errors carry the field path, an Indonesian message, and a fix suggestion,
//! and are collected so one response reports every problem at once.

use std::fmt;

use crate::text::tanggal::parse_tanggal;

/// One failed field.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} tidak boleh kosong", label)).with_suggestion(format!(
            "Mohon isi {} dengan data yang valid",
            label.to_lowercase()
        ))
    }

    pub fn invalid_date(field: &str, value: &str) -> Self {
        Self::new(field, format!("Format tanggal '{}' tidak valid", value))
            .with_suggestion("Gunakan format dd/mm/yyyy, contoh: 31/10/2025")
    }

    pub fn invalid_month(field: &str, value: u32) -> Self {
        Self::new(field, format!("Bulan {} di luar rentang 1-12", value))
            .with_suggestion("Gunakan angka bulan 1 sampai 12")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Aggregated message listing every failed field.
    pub fn to_message(&self) -> String {
        let mut parts = vec![format!(
            "Validasi gagal: {} kesalahan ditemukan",
            self.errors.len()
        )];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }
        parts.join("\n")
    }

    /// Ok when no field failed, Err with the aggregated message otherwise.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

/// Validate that a string is not empty after trimming.
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate a dd/mm/yyyy date string.
pub fn validate_tanggal(value: &str, field: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, "Tanggal"));
        return;
    }
    if parse_tanggal(value).is_none() {
        errors.add(ValidationError::invalid_date(field, value));
    }
}

/// Validate a 1-based month number.
pub fn validate_bulan(value: u32, field: &str, errors: &mut ValidationErrors) {
    if !(1..=12).contains(&value) {
        errors.add(ValidationError::invalid_month(field, value));
    }
}
