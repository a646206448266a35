//! Package request parsing and validation.

use crate::error::{NodesmithError, Result};

/// A validated package-generation request.
///
/// Constructed only through [`PackageRequest::parse`], so every instance
/// satisfies the request invariants: a non-empty trimmed name and at least
/// one non-blank prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    name: String,
    category: String,
    prompts: Vec<String>,
}

impl PackageRequest {
    /// Parse and validate raw request fields.
    ///
    /// `prompts_text` is split on line breaks; each line is trimmed and
    /// blank lines are dropped, preserving the original order. The category
    /// is free-form and may be empty.
    pub fn parse(name: &str, category: &str, prompts_text: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NodesmithError::EmptyName);
        }

        let prompts: Vec<String> = prompts_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if prompts.is_empty() {
            return Err(NodesmithError::EmptyPromptList);
        }

        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            prompts,
        })
    }

    /// The display name, trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The category label, verbatim.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The trimmed, non-blank prompt lines in input order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}
