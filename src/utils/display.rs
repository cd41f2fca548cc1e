//! Domain answer rendering
//!
//! Each problem variant has its own text shape: the clique and coloring
//! variants lead with a `True`/`False` verdict line, the independent-set
//! search prints the vertex ids alone (or `False` when the search came up
//! empty).

use crate::config::OutputFormat;
use crate::problems::DomainAnswer;
use anyhow::{Context, Result};
use itertools::Itertools;

/// Formats domain answers for the output stream.
pub struct AnswerFormatter;

impl AnswerFormatter {
    /// Clique variant: `True` followed by the vertex ids, or `False`.
    pub fn format_clique(answer: &DomainAnswer) -> String {
        match answer {
            DomainAnswer::Vertices(vertices) => {
                format!("True\n{}", vertices.iter().join(" "))
            }
            _ => String::from("False"),
        }
    }

    /// Independent-set variant: the vertex ids, or `False` when no set of
    /// size at least 2 exists.
    pub fn format_independent_set(answer: &DomainAnswer) -> String {
        match answer {
            DomainAnswer::Vertices(vertices) => vertices.iter().join(" "),
            _ => String::from("False"),
        }
    }

    /// Coloring variant: `True` followed by one register per variable in
    /// ascending variable order, or `False`.
    pub fn format_coloring(answer: &DomainAnswer) -> String {
        match answer {
            DomainAnswer::Registers(registers) => {
                format!("True\n{}", registers.values().join(" "))
            }
            _ => String::from("False"),
        }
    }

    /// JSON rendering, shared by all variants.
    pub fn format_json(answer: &DomainAnswer) -> Result<String> {
        serde_json::to_string_pretty(answer).context("Failed to serialize answer as JSON")
    }

    /// Render an answer in the configured format using the given text shape.
    pub fn format(
        answer: &DomainAnswer,
        format: OutputFormat,
        text_shape: fn(&DomainAnswer) -> String,
    ) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(text_shape(answer)),
            OutputFormat::Json => Self::format_json(answer),
        }
    }
}
