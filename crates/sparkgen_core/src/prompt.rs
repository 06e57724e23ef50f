//! PySpark prompt catalog and completion-request construction.

use crate::{CompletionRequest, Message};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Identifies the revision of [`SYSTEM_PROMPT`]. Bump on any wording change.
pub const SYSTEM_PROMPT_VERSION: &str = "pyspark-codegen/2025-05-14";

/// Model used when neither config nor flags name one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Output cap applied to every generation.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// System instruction describing the target dialect, the output contract, and
/// a catalog of idiomatic DataFrame patterns.
pub const SYSTEM_PROMPT: &str = r#"You are an expert PySpark code generator. Generate Python code using PySpark DataFrame API for distributed data processing.

CRITICAL OUTPUT REQUIREMENTS:
- Return ONLY executable Python code
- NO markdown code blocks (no ```python or ```)
- NO explanations, comments, or preamble
- NO natural language before or after the code
- Start directly with Python code (e.g., 'df.filter(' or 'from pyspark.sql')

CODE REQUIREMENTS:
- Use PySpark DataFrame API (filter, select, withColumn, groupBy, agg, etc.)
- Always use f.
- Assume SparkSession exists as 'spark'
- Assume input DataFrame exists as 'df'
- Use pyspark.sql.functions for operations (import as f)
- Handle date/time operations with PySpark functions
- Use column expressions properly (f.col() or df.column)
- Include necessary imports only if essential

QUALITY STANDARDS:
- Produce syntactically correct PySpark code
- Use efficient PySpark patterns (avoid collect() unless necessary)
- Handle edge cases (nulls, type conversions)
- Use proper column referencing
- Leverage catalyst optimizer-friendly operations
- Use appropriate data types and casting

COMMON PATTERNS:
- Filtering: df.filter(f.col("age") > 65)
- Selection: df.select("id", "diagnosis")
- Grouping: df.groupBy("diagnosis").count()
- New columns: df.withColumn("new_col", f.col("old_col") * 2)
- Aggregations: df.groupBy("col").agg(F.count("*").alias("count"))
- Joins: df1.join(df2, on="key", how="inner")
- Window functions: f.row_number().over(Window.partitionBy("col").orderBy("date"))"#;

const USER_LEAD_IN: &str = "Generate PySpark code for these instructions:";

const USER_REMINDER: &str = "Remember: Output ONLY raw Python code. No explanations. No markdown. Start with the code itself.";

/// Wraps the user's instructions with the lead-in and the raw-code reminder.
///
/// The instructions are embedded verbatim.
pub fn user_message(instructions: &str) -> String {
    format!("{USER_LEAD_IN}\n\n{instructions}\n\n{USER_REMINDER}")
}

/// Per-request knobs applied when building a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationSettings {
    /// Model override passed to the driver
    #[builder(default)]
    model: Option<String>,
    /// Output cap
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
}

impl GenerationSettings {
    /// Creates a builder for GenerationSettings.
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::default()
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Builds the single completion request sent for `instructions`.
pub fn build_completion_request(
    instructions: &str,
    settings: &GenerationSettings,
) -> CompletionRequest {
    CompletionRequest::new(
        settings.model.clone(),
        settings.max_tokens,
        SYSTEM_PROMPT.to_string(),
        vec![Message::user(user_message(instructions))],
    )
}
