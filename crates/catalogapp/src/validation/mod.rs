//! # Form Validation
//!
//! The [`ValidationEngine`] decides whether submitted field values satisfy a
//! form's rule set. Rules are data (see [`rules::BUILTIN_RULES`]), compiled
//! once at construction.
//!
//! ## Check Order
//!
//! For a field with a rule, the raw value is trimmed and then checked in this
//! order, stopping at the first failure:
//!
//! 1. `required` and empty → [`rules::REQUIRED_MESSAGE`]
//! 2. `min_length` (characters)
//! 3. `max_length`
//! 4. `pattern`
//! 5. `min` (numeric; unparsable input fails)
//! 6. `max` (numeric; unparsable input fails)
//!
//! Failures 2-6 report the rule's own message. A field without a rule is
//! always valid. Validation never errors on bad input: invalidity is a value.

use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub mod rules;

use rules::{RuleSpec, ValidationRule, BUILTIN_RULES};

/// Raw submitted values keyed by field name.
pub type FieldValues = HashMap<String, String>;

/// Builds [`FieldValues`] from string pairs.
pub fn field_values<'a, I>(pairs: I) -> FieldValues
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormId {
    User,
    Product,
    Contact,
}

impl FormId {
    pub fn as_str(self) -> &'static str {
        match self {
            FormId::User => "user",
            FormId::Product => "product",
            FormId::Contact => "contact",
        }
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormId {
    type Err = CatalogError;

    /// Accepts both the short name (`user`) and the page form id (`user-form`).
    fn from_str(s: &str) -> Result<Self> {
        match s.strip_suffix("-form").unwrap_or(s) {
            "user" => Ok(FormId::User),
            "product" => Ok(FormId::Product),
            "contact" => Ok(FormId::Contact),
            _ => Err(CatalogError::UnknownForm(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationResult {
    pub valid: bool,
    /// Empty when valid.
    pub message: String,
}

impl FieldValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidation {
    pub all_valid: bool,
    pub per_field: BTreeMap<String, FieldValidationResult>,
}

impl FormValidation {
    pub fn get(&self, field: &str) -> Option<&FieldValidationResult> {
        self.per_field.get(field)
    }

    /// `(field, message)` for every failed field.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.per_field
            .iter()
            .filter(|(_, r)| !r.valid)
            .map(|(f, r)| (f.as_str(), r.message.as_str()))
    }
}

/// Ordered field → rule mapping for one form.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(String, ValidationRule)>,
}

impl RuleSet {
    pub fn get(&self, field: &str) -> Option<&ValidationRule> {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn insert(&mut self, field: &str, rule: ValidationRule) {
        match self.rules.iter_mut().find(|(name, _)| name == field) {
            Some(slot) => slot.1 = rule,
            None => self.rules.push((field.to_string(), rule)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationEngine {
    forms: HashMap<FormId, RuleSet>,
    empty: RuleSet,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Engine with the catalog's built-in rule table.
    pub fn new() -> Self {
        Self::from_specs(BUILTIN_RULES).expect("built-in rule table is valid")
    }

    /// Compiles an arbitrary rule table. A later spec for the same
    /// (form, field) replaces an earlier one.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        let mut forms: HashMap<FormId, RuleSet> = HashMap::new();
        for spec in specs {
            let rule = ValidationRule::compile(spec)?;
            forms.entry(spec.form).or_default().insert(spec.field, rule);
        }
        Ok(Self {
            forms,
            empty: RuleSet::default(),
        })
    }

    pub fn rules_for(&self, form: FormId) -> &RuleSet {
        self.forms.get(&form).unwrap_or(&self.empty)
    }

    pub fn validate_field(&self, form: FormId, field: &str, raw: &str) -> FieldValidationResult {
        let Some(rule) = self.rules_for(form).get(field) else {
            return FieldValidationResult::ok();
        };
        let result = rule.check(raw);
        if !result.valid {
            debug!(%form, field, message = %result.message, "field failed validation");
        }
        result
    }

    /// Validates every ruled field of `form`. A ruled field missing from
    /// `values` is checked as an empty string; unruled values are ignored.
    pub fn validate_form(&self, form: FormId, values: &FieldValues) -> FormValidation {
        let mut per_field = BTreeMap::new();
        let mut all_valid = true;

        for (field, _) in self.rules_for(form).iter() {
            let raw = values.get(field).map(String::as_str).unwrap_or("");
            let result = self.validate_field(form, field, raw);
            all_valid &= result.valid;
            per_field.insert(field.to_string(), result);
        }

        FormValidation {
            all_valid,
            per_field,
        }
    }
}
