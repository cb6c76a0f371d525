//! Declarative rule data.
//!
//! Rules are plain data ([`RuleSpec`]) compiled once into [`ValidationRule`]s.
//! [`BUILTIN_RULES`] is the table used by the catalog's three forms.

use super::{FieldValidationResult, FormId};
use crate::error::{CatalogError, Result};
use regex::Regex;

/// Message used when a required field is left blank.
pub const REQUIRED_MESSAGE: &str = "Este campo é obrigatório";

const PERSON_NAME: &str = r"^[A-Za-zÀ-ÿ\s]+$";
const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE: &str = r"^[0-9]{10,11}$";

/// Uncompiled description of one field's rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSpec {
    pub form: FormId,
    pub field: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub message: &'static str,
}

impl RuleSpec {
    pub const fn new(form: FormId, field: &'static str, message: &'static str) -> Self {
        Self {
            form,
            field,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            min: None,
            max: None,
            message,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub const fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub const fn pattern(mut self, re: &'static str) -> Self {
        self.pattern = Some(re);
        self
    }

    pub const fn min(mut self, n: f64) -> Self {
        self.min = Some(n);
        self
    }

    pub const fn max(mut self, n: f64) -> Self {
        self.max = Some(n);
        self
    }
}

pub const BUILTIN_RULES: &[RuleSpec] = &[
    // user
    RuleSpec::new(
        FormId::User,
        "nome",
        "Nome deve conter apenas letras e espaços (2-100 caracteres)",
    )
    .required()
    .min_length(2)
    .max_length(100)
    .pattern(PERSON_NAME),
    RuleSpec::new(FormId::User, "email", "Digite um e-mail válido")
        .required()
        .pattern(EMAIL),
    RuleSpec::new(FormId::User, "idade", "Idade deve ser entre 18 e 120 anos")
        .required()
        .min(18.0)
        .max(120.0),
    RuleSpec::new(FormId::User, "telefone", "Telefone deve conter 10 ou 11 dígitos")
        .required()
        .pattern(PHONE),
    // product
    RuleSpec::new(FormId::Product, "nome", "Nome do produto deve ter 2-100 caracteres")
        .required()
        .min_length(2)
        .max_length(100),
    RuleSpec::new(FormId::Product, "categoria", "Selecione uma categoria").required(),
    RuleSpec::new(FormId::Product, "preco", "Preço deve ser maior que zero")
        .required()
        .min(0.01),
    RuleSpec::new(FormId::Product, "estoque", "Estoque não pode ser negativo")
        .required()
        .min(0.0),
    // contact
    RuleSpec::new(FormId::Contact, "nome", "Nome deve ter 2-100 caracteres")
        .required()
        .min_length(2)
        .max_length(100),
    RuleSpec::new(FormId::Contact, "email", "Digite um e-mail válido")
        .required()
        .pattern(EMAIL),
    RuleSpec::new(FormId::Contact, "assunto", "Selecione um assunto").required(),
    RuleSpec::new(
        FormId::Contact,
        "mensagem",
        "Mensagem deve ter pelo menos 10 caracteres",
    )
    .required()
    .min_length(10),
];

/// A compiled rule for one field.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub message: String,
}

impl ValidationRule {
    pub fn compile(spec: &RuleSpec) -> Result<Self> {
        let pattern = spec
            .pattern
            .map(Regex::new)
            .transpose()
            .map_err(|e| CatalogError::InvalidRule {
                field: spec.field.to_string(),
                reason: e.to_string(),
            })?;

        if let (Some(lo), Some(hi)) = (spec.min_length, spec.max_length) {
            if lo > hi {
                return Err(CatalogError::InvalidRule {
                    field: spec.field.to_string(),
                    reason: format!("min_length {} exceeds max_length {}", lo, hi),
                });
            }
        }

        Ok(Self {
            required: spec.required,
            min_length: spec.min_length,
            max_length: spec.max_length,
            pattern,
            min: spec.min,
            max: spec.max,
            message: spec.message.to_string(),
        })
    }

    /// Checks a raw (untrimmed) value. The first failing check decides the
    /// message; later checks are skipped.
    pub fn check(&self, raw: &str) -> FieldValidationResult {
        let value = raw.trim();

        if self.required && value.is_empty() {
            return FieldValidationResult::fail(REQUIRED_MESSAGE);
        }

        let len = value.chars().count();
        if self.min_length.is_some_and(|min| len < min)
            || self.max_length.is_some_and(|max| len > max)
        {
            return self.fail();
        }

        if let Some(re) = &self.pattern {
            if !re.is_match(value) {
                return self.fail();
            }
        }

        if let Some(min) = self.min {
            if !parse_number(value).is_some_and(|n| n >= min) {
                return self.fail();
            }
        }

        if let Some(max) = self.max {
            if !parse_number(value).is_some_and(|n| n <= max) {
                return self.fail();
            }
        }

        FieldValidationResult::ok()
    }

    fn fail(&self) -> FieldValidationResult {
        FieldValidationResult::fail(&self.message)
    }
}

/// Parses a field as a finite number. Anything else fails numeric bounds.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}
