//! `{{placeholder}}` substitution.
//!
//! [`render`] replaces every `{{key}}` whose key is present in the data map.
//! Unknown placeholders are left as they are, so a partially filled template
//! can be rendered again later.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

pub fn render(template: &str, data: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match data.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
