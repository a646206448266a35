//! The four rendered package artifacts and their templates.
//!
//! A package contains, in render order: the main node source
//! (`<name_lowercase>.py`), the package init (`__init__.py`), `LICENSE.md`,
//! and `README.md`.
//!
//! Every user-supplied string that lands inside generated Python source is
//! embedded through the JSON serializer. JSON string and array syntax is a
//! subset of Python literal syntax, so this doubles as a safe Python literal
//! encoder and keeps quotes, backslashes, and control characters in prompt
//! text from corrupting the generated file.

use super::request::PackageRequest;
use super::sanitize::sanitize_name;
use super::template::{TemplateError, render};
use crate::error::{NodesmithError, Result};
use std::collections::HashMap;

/// A rendered file destined for the staged package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Path relative to the package directory.
    pub relative_path: String,
    /// Full file content.
    pub content: String,
}

/// Template for the main node source.
///
/// Literal Python braces are escaped as `{{`/`}}`. The `category`,
/// `display_name`, and `prompts` placeholders receive pre-serialized
/// literals including their own quoting; `class_name` is the sanitized
/// identifier and `max_select` the highest valid selector value.
///
/// The selection logic is the only runtime behavior in the generated node:
/// sequential mode wraps the selector with `select % len(prompts)`, random
/// mode picks uniformly.
const NODE_TEMPLATE: &str = r#"import random

class {class_name}:
    def __init__(self):
        pass

    @classmethod
    def INPUT_TYPES(s):
        return {{
            "required": {{
                "select": ("INT", {{"default": 0, "min": 0, "max": {max_select}, "step": 1}}),
                "mode": (["sequential", "random"], {{}}),
            }},
        }}

    RETURN_TYPES = ("STRING",)
    FUNCTION = "select_prompt"
    OUTPUT_NODE = True
    CATEGORY = {category}

    def select_prompt(self, select, mode):
        prompts = {prompts}

        if mode == "random":
            selected_prompt = random.choice(prompts)
        else:  # sequential
            index = select % len(prompts)
            selected_prompt = prompts[index]

        return (selected_prompt,)


NODE_CLASS_MAPPINGS = {{
    {display_name}: {class_name}
}}

NODE_DISPLAY_NAME_MAPPINGS = {{
    {display_name}: {display_name}
}}
"#;

/// Template for the package init re-export.
const INIT_TEMPLATE: &str = r#"from .{module} import NODE_CLASS_MAPPINGS, NODE_DISPLAY_NAME_MAPPINGS

__all__ = ['NODE_CLASS_MAPPINGS', 'NODE_DISPLAY_NAME_MAPPINGS']
"#;

/// Static MIT license text.
const LICENSE_TEXT: &str = r#"MIT License

Copyright (c) 2023

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

/// Template for the package readme. Parameterized by the display name only.
const README_TEMPLATE: &str = r#"# {name}

A custom node for ComfyUI that allows selection of prompts from a predefined list.

## Features

- Sequential prompt selection
- Random prompt selection
- Configurable prompt list

## Installation

1. Copy this folder to your ComfyUI `custom_nodes` directory
2. Restart ComfyUI

## Usage

The node provides two modes:
- Sequential: Select prompts by index in order
- Random: Select a random prompt from the list

## License

This project is licensed under the MIT License.
"#;

/// Render the main node source artifact.
///
/// The class identifier uses the sanitized name; display strings keep the
/// raw name.
pub fn render_node_source(request: &PackageRequest) -> Result<String> {
    let variables = HashMap::from([
        ("class_name", sanitize_name(request.name())),
        ("display_name", py_str_literal(request.name())?),
        ("category", py_str_literal(request.category())?),
        ("max_select", (request.prompts().len() - 1).to_string()),
        ("prompts", py_list_literal(request.prompts())?),
    ]);

    render(NODE_TEMPLATE, &variables).map_err(into_template_error)
}

/// Render the package init artifact, re-exporting the node mappings from
/// the lower-cased sanitized module name.
fn render_init_source(request: &PackageRequest) -> Result<String> {
    let variables = HashMap::from([("module", module_name(request))]);
    render(INIT_TEMPLATE, &variables).map_err(into_template_error)
}

/// Render the readme artifact.
fn render_readme(request: &PackageRequest) -> Result<String> {
    let variables = HashMap::from([("name", request.name().to_string())]);
    render(README_TEMPLATE, &variables).map_err(into_template_error)
}

/// The lower-cased sanitized name used for the main source file and the
/// init re-export.
pub(super) fn module_name(request: &PackageRequest) -> String {
    sanitize_name(request.name()).to_lowercase()
}

/// Render all four package artifacts in their fixed order.
pub(super) fn render_all(request: &PackageRequest) -> Result<Vec<RenderedArtifact>> {
    Ok(vec![
        RenderedArtifact {
            relative_path: format!("{}.py", module_name(request)),
            content: render_node_source(request)?,
        },
        RenderedArtifact {
            relative_path: "__init__.py".to_string(),
            content: render_init_source(request)?,
        },
        RenderedArtifact {
            relative_path: "LICENSE.md".to_string(),
            content: LICENSE_TEXT.to_string(),
        },
        RenderedArtifact {
            relative_path: "README.md".to_string(),
            content: render_readme(request)?,
        },
    ])
}

/// Serialize a string as a quoted literal valid in generated Python source.
fn py_str_literal(value: &str) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| NodesmithError::Template(format!("failed to serialize string literal: {}", e)))
}

/// Serialize the prompt list as a list-of-strings literal valid in
/// generated Python source.
fn py_list_literal(values: &[String]) -> Result<String> {
    serde_json::to_string(values)
        .map_err(|e| NodesmithError::Template(format!("failed to serialize prompt list: {}", e)))
}

fn into_template_error(err: TemplateError) -> NodesmithError {
    NodesmithError::Template(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, category: &str, prompts: &str) -> PackageRequest {
        PackageRequest::parse(name, category, prompts).unwrap()
    }

    #[test]
    fn node_source_embeds_class_and_category() {
        let source = render_node_source(&request("PromptSelector", "Custom", "a\nb")).unwrap();
        assert!(source.contains("class PromptSelector:"));
        assert!(source.contains("CATEGORY = \"Custom\""));
        assert!(source.contains("\"max\": 1"));
    }

    #[test]
    fn node_source_uses_sanitized_identifier_and_raw_display_name() {
        let source = render_node_source(&request("My Node! #1", "Custom", "a")).unwrap();
        // Identifier position gets the sanitized form.
        assert!(source.contains("class My_Node___1:"));
        // Display mapping keys keep the raw name.
        assert!(source.contains("\"My Node! #1\": My_Node___1"));
        assert!(source.contains("\"My Node! #1\": \"My Node! #1\""));
    }

    #[test]
    fn node_source_embeds_prompts_as_json_literal() {
        let source = render_node_source(&request("N", "Custom", "first\nsecond")).unwrap();
        assert!(source.contains(r#"prompts = ["first","second"]"#));
    }

    #[test]
    fn node_source_preserves_modulo_selection() {
        let source = render_node_source(&request("N", "Custom", "a\nb\nc")).unwrap();
        assert!(source.contains("index = select % len(prompts)"));
        assert!(source.contains("random.choice(prompts)"));
    }

    #[test]
    fn max_select_is_prompt_count_minus_one() {
        let source = render_node_source(&request("N", "Custom", "a\nb\nc\nd")).unwrap();
        assert!(source.contains("\"max\": 3"));
    }

    #[test]
    fn quotes_in_prompts_are_escaped() {
        let source = render_node_source(&request("N", "Custom", "say \"hi\"\nback\\slash")).unwrap();
        assert!(source.contains(r#"prompts = ["say \"hi\"","back\\slash"]"#));
    }

    #[test]
    fn quotes_in_category_are_escaped() {
        let source = render_node_source(&request("N", "a \"b\"", "x")).unwrap();
        assert!(source.contains(r#"CATEGORY = "a \"b\"""#));
    }

    #[test]
    fn init_source_references_lowercased_module() {
        let artifacts = render_all(&request("My Node", "Custom", "a")).unwrap();
        let init = &artifacts[1];
        assert_eq!(init.relative_path, "__init__.py");
        assert!(init.content.contains("from .my_node import NODE_CLASS_MAPPINGS"));
    }

    #[test]
    fn readme_carries_the_raw_display_name() {
        let artifacts = render_all(&request("My Node! #1", "Custom", "a")).unwrap();
        let readme = &artifacts[3];
        assert_eq!(readme.relative_path, "README.md");
        assert!(readme.content.starts_with("# My Node! #1\n"));
    }

    #[test]
    fn render_all_produces_four_artifacts_in_order() {
        let artifacts = render_all(&request("My Node", "Custom", "a\nb")).unwrap();
        let paths: Vec<&str> = artifacts.iter().map(|a| a.relative_path.as_str()).collect();
        assert_eq!(paths, ["my_node.py", "__init__.py", "LICENSE.md", "README.md"]);
        for artifact in &artifacts {
            assert!(!artifact.content.is_empty(), "{} is empty", artifact.relative_path);
        }
    }

    #[test]
    fn license_is_static() {
        let a = render_all(&request("A", "Custom", "x")).unwrap();
        let b = render_all(&request("B", "Other", "y")).unwrap();
        assert_eq!(a[2].content, b[2].content);
        assert!(a[2].content.starts_with("MIT License"));
    }
}
