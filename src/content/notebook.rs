// src/content/notebook.rs

//! The notebook output-stripping transform.
//!
//! Jupyter notebooks are JSON documents with a top-level `cells` array.
//! Stripping clears every code cell's `outputs` and `execution_count` while
//! preserving cell order and source text, then re-serializes to the
//! canonical pretty-printed form. The transform is idempotent.

use serde_json::Value;

/// Strips execution results from a notebook's JSON text.
///
/// # Errors
/// Returns the `serde_json` parse error when `content` is not valid JSON;
/// the caller falls back to exporting the raw text.
pub fn strip_notebook_outputs(content: &str) -> Result<String, serde_json::Error> {
    let mut notebook: Value = serde_json::from_str(content)?;
    if let Some(cells) = notebook.get_mut("cells").and_then(Value::as_array_mut) {
        for cell in cells {
            if cell.get("cell_type").and_then(Value::as_str) != Some("code") {
                continue;
            }
            if let Some(fields) = cell.as_object_mut() {
                fields.insert("outputs".to_string(), Value::Array(Vec::new()));
                fields.insert("execution_count".to_string(), Value::Null);
            }
        }
    }
    serde_json::to_string_pretty(&notebook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_notebook() -> Value {
        json!({
            "nbformat": 4,
            "cells": [
                {
                    "cell_type": "code",
                    "source": ["print('a')"],
                    "execution_count": 3,
                    "outputs": [{"output_type": "stream", "text": ["a\n"]}]
                },
                {
                    "cell_type": "markdown",
                    "source": ["# heading"]
                },
                {
                    "cell_type": "code",
                    "source": ["1 + 1"],
                    "execution_count": 4,
                    "outputs": [{"output_type": "execute_result", "data": {"text/plain": ["2"]}}]
                }
            ]
        })
    }

    #[test]
    fn test_strip_clears_outputs_and_counts() {
        let stripped = strip_notebook_outputs(&sample_notebook().to_string()).unwrap();
        let nb: Value = serde_json::from_str(&stripped).unwrap();
        let cells = nb["cells"].as_array().unwrap();

        assert_eq!(cells.len(), 3);
        for cell in cells {
            if cell["cell_type"] == "code" {
                assert_eq!(cell["outputs"], json!([]));
                assert_eq!(cell["execution_count"], Value::Null);
            }
        }
        // Source text and cell order survive untouched.
        assert_eq!(cells[0]["source"], json!(["print('a')"]));
        assert_eq!(cells[1]["cell_type"], "markdown");
        assert_eq!(cells[2]["source"], json!(["1 + 1"]));
    }

    #[test]
    fn test_strip_is_idempotent() {
        let once = strip_notebook_outputs(&sample_notebook().to_string()).unwrap();
        let twice = strip_notebook_outputs(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_markdown_cells_untouched() {
        let nb = json!({"cells": [{"cell_type": "markdown", "source": ["hi"]}]});
        let stripped = strip_notebook_outputs(&nb.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&stripped).unwrap();
        let cell = &parsed["cells"][0];
        assert!(cell.get("outputs").is_none());
        assert!(cell.get("execution_count").is_none());
    }

    #[test]
    fn test_document_without_cells_passes_through() {
        let stripped = strip_notebook_outputs(r#"{"metadata": {}}"#).unwrap();
        let parsed: Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(parsed, json!({"metadata": {}}));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(strip_notebook_outputs("{ nope").is_err());
    }
}
