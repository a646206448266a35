//! Minimal `{variable}` substitution for built-in templates.
//!
//! The package artifacts are rendered from fixed template strings with
//! `{name}`-style placeholders. `{{` and `}}` render literal braces, which
//! the node template uses heavily since the generated Python source is full
//! of dict literals.
//!
//! Rendering is fail-fast: an undefined variable is an error, never a
//! silent empty substitution.

use std::collections::HashMap;
use thiserror::Error;

/// Template rendering failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder referenced a variable that was not provided.
    #[error("undefined template variable '{0}'")]
    UndefinedVariable(String),

    /// A `{` had no matching `}`.
    #[error("unmatched '{{' at byte {0}")]
    UnmatchedBrace(usize),

    /// An empty `{}` placeholder.
    #[error("empty template variable at byte {0}")]
    EmptyVariable(usize),
}

/// Render a template, replacing each `{var}` with its value from `variables`.
///
/// `{{` and `}}` render as literal braces. A lone `}` is passed through
/// unchanged.
pub fn render(
    template: &str,
    variables: &HashMap<&str, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch == '{' {
            if matches!(chars.peek(), Some((_, '{'))) {
                chars.next();
                out.push('{');
                continue;
            }

            let mut var = String::new();
            loop {
                match chars.next() {
                    Some((_, '}')) => break,
                    Some((_, c)) => var.push(c),
                    None => return Err(TemplateError::UnmatchedBrace(pos)),
                }
            }

            if var.is_empty() {
                return Err(TemplateError::EmptyVariable(pos));
            }

            match variables.get(var.as_str()) {
                Some(value) => out.push_str(value),
                None => return Err(TemplateError::UndefinedVariable(var)),
            }
        } else if ch == '}' {
            if matches!(chars.peek(), Some((_, '}'))) {
                chars.next();
            }
            out.push('}');
        } else {
            out.push(ch);
        }
    }

    Ok(out)
}
