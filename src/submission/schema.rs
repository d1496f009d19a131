use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::Submission;

/// Local part, `@`, domain containing a dot. Matches what the form script
/// checks in the browser.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLen(usize),
    Email,
}

pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

/// The sign-up form schema. The client-side script mirrors these rules and
/// messages; the server enforces them regardless.
pub const SIGNUP_FIELDS: &[Field] = &[
    Field {
        name: "firstName",
        label: "First name",
        rules: &[Rule::Required, Rule::MinLen(2)],
    },
    Field {
        name: "lastName",
        label: "Last name",
        rules: &[Rule::Required, Rule::MinLen(2)],
    },
    Field {
        name: "email",
        label: "Email",
        rules: &[Rule::Required, Rule::Email],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

/// Validate a raw JSON body against the schema. Values are trimmed before any
/// rule runs; rules are evaluated in order and the first failing rule per
/// field wins. Returns the validated submission or every field's error.
pub fn validate(raw: &Value) -> Result<Submission, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut values = Vec::with_capacity(SIGNUP_FIELDS.len());

    for field in SIGNUP_FIELDS {
        let value = raw
            .get(field.name)
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();

        if let Some((rule, message)) = field
            .rules
            .iter()
            .find_map(|rule| check(*rule, field.label, &value).map(|msg| (*rule, msg)))
        {
            errors.push(FieldError {
                field: field.name,
                rule,
                message,
            });
        }

        values.push(value);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut values = values.into_iter();
    Ok(Submission {
        first_name: values.next().unwrap_or_default(),
        last_name: values.next().unwrap_or_default(),
        email: values.next().unwrap_or_default(),
    })
}

/// True if any error is a missing/empty field rather than a malformed one.
pub fn any_missing(errors: &[FieldError]) -> bool {
    errors.iter().any(|e| e.rule == Rule::Required)
}

fn check(rule: Rule, label: &str, value: &str) -> Option<String> {
    match rule {
        Rule::Required if value.is_empty() => Some(format!("{label} is required")),
        Rule::MinLen(min) if value.chars().count() < min => {
            Some(format!("{label} must be at least {min} characters"))
        }
        Rule::Email if !EMAIL_RE.is_match(value) => {
            Some("Please enter a valid email address".to_string())
        }
        _ => None,
    }
}
