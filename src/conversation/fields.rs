//! The fixed ten-field intake sequence: claimant first, then
//! respondent. Identical for all eleven document types.

use crate::validators::{validate_dni, validate_email, validate_phone};

/// Validation capability attached to a field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidator {
    Dni,
    Phone,
    Email,
}

impl FieldValidator {
    /// Run the validator against a raw answer.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Dni => validate_dni(value),
            Self::Phone => validate_phone(value),
            Self::Email => validate_email(value),
        }
    }

    /// Error message shown when validation fails.
    pub fn error_message(&self) -> &'static str {
        match self {
            Self::Dni => "DNI inválido. Debe tener 8 dígitos.",
            Self::Phone => "Teléfono inválido.",
            Self::Email => "Email inválido.",
        }
    }
}

/// A single field in the intake sequence.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Storage key; upper-cased it becomes the template placeholder.
    pub key: &'static str,
    /// Label used in the collection prompt.
    pub label: &'static str,
    /// Short label used in the confirmation summary.
    pub short_label: &'static str,
    /// Validator applied to answers, if any.
    pub validator: Option<FieldValidator>,
}

/// The ten collected fields, in collection order.
pub const FIELDS: [FieldDescriptor; 10] = [
    FieldDescriptor {
        key: "nombre_demandante",
        label: "Nombre completo del demandante",
        short_label: "Nombre",
        validator: None,
    },
    FieldDescriptor {
        key: "dni_demandante",
        label: "DNI del demandante",
        short_label: "DNI",
        validator: Some(FieldValidator::Dni),
    },
    FieldDescriptor {
        key: "domicilio_demandante",
        label: "Domicilio del demandante",
        short_label: "Domicilio",
        validator: None,
    },
    FieldDescriptor {
        key: "telefono_demandante",
        label: "Teléfono del demandante",
        short_label: "Teléfono",
        validator: Some(FieldValidator::Phone),
    },
    FieldDescriptor {
        key: "email_demandante",
        label: "Email del demandante",
        short_label: "Email",
        validator: Some(FieldValidator::Email),
    },
    FieldDescriptor {
        key: "nombre_demandado",
        label: "Nombre completo del demandado",
        short_label: "Nombre",
        validator: None,
    },
    FieldDescriptor {
        key: "dni_demandado",
        label: "DNI del demandado",
        short_label: "DNI",
        validator: Some(FieldValidator::Dni),
    },
    FieldDescriptor {
        key: "domicilio_demandado",
        label: "Domicilio del demandado",
        short_label: "Domicilio",
        validator: None,
    },
    FieldDescriptor {
        key: "telefono_demandado",
        label: "Teléfono del demandado",
        short_label: "Teléfono",
        validator: Some(FieldValidator::Phone),
    },
    FieldDescriptor {
        key: "email_demandado",
        label: "Email del demandado",
        short_label: "Email",
        validator: Some(FieldValidator::Email),
    },
];
