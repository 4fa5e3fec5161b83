// SPDX-License-Identifier: MPL-2.0
//! Mail-client deep links for the contact and quote workflows.
//!
//! Nothing here transmits anything: a composer validates its fields, renders a
//! fixed subject/body template, percent-encodes both, and assembles a
//! `mailto:` URI. Opening that URI is the caller's job; the OS mail handler
//! takes over from there. The templates are product copy addressed to the
//! portfolio owner and are deliberately not localized.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::LazyLock;

/// The one address every composed mail goes to.
pub const RECIPIENT: &str = "jlr083101@outlook.com";

/// Characters spared from percent-encoding in subject and body values:
/// alphanumerics plus `- _ . ! ~ * ' ( )`, the unreserved marks of RFC 2396.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Presence/format check used by the contact form: something before the `@`,
/// something after, and a dot in the domain part, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Percent-encodes a single `mailto:` query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn mailto(subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        RECIPIENT,
        encode_component(subject),
        encode_component(body)
    )
}

/// A quote request from the quote form.
///
/// All five fields are required; [`QuoteRequest::missing_fields`] reports
/// every blank one jointly so the user fixes the form in one pass.
#[derive(Debug, Clone, Default)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub service: String,
    pub timeline: String,
    pub description: String,
}

impl QuoteRequest {
    /// Returns the names of all blank required fields, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("service", &self.service),
            ("timeline", &self.timeline),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        missing
    }

    /// Presence check as a `Result`, for callers that want the error type
    /// rather than the raw field list.
    pub fn validate(&self) -> crate::error::Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(crate::error::Error::Validation(
                missing.iter().map(|field| (*field).to_owned()).collect(),
            ))
        }
    }

    pub fn subject(&self) -> String {
        format!("Website Development Quote Request - {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Hi Leo,\n\
             \n\
             I would like to request a quote for website development.\n\
             \n\
             Client Details:\n\
             - Name: {name}\n\
             - Email: {email}\n\
             \n\
             Project Details:\n\
             - Service Type: {service}\n\
             - Timeline: {timeline}\n\
             \n\
             Project Description:\n\
             {description}\n\
             \n\
             Best regards,\n\
             {name}",
            name = self.name,
            email = self.email,
            service = self.service,
            timeline = self.timeline,
            description = self.description,
        )
    }

    pub fn to_mailto(&self) -> String {
        mailto(&self.subject(), &self.body())
    }
}

/// A general inquiry from the contact form's mail-client affordance.
///
/// Distinct from [`QuoteRequest`] on purpose: the two composers serve
/// different form surfaces with different field sets and templates, and both
/// stay independently invokable.
#[derive(Debug, Clone, Default)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

impl Inquiry {
    pub fn subject(&self) -> String {
        format!("Website Inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        let project = if self.project.trim().is_empty() {
            "Website"
        } else {
            self.project.as_str()
        };
        format!(
            "Hello Leo,\n\
             \n\
             My name is {name} and I'm interested in your website services.\n\
             \n\
             Project Type: {project}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             Best regards,\n\
             {name}\n\
             \n\
             ---\n\
             Email: {email}",
            name = self.name,
            project = project,
            message = self.message,
            email = self.email,
        )
    }

    pub fn to_mailto(&self) -> String {
        mailto(&self.subject(), &self.body())
    }
}
