//! Lexical rule table applied to the Verilog source text.
//!
//! Every rule is a raw substring test against the file content:
//!
//! - A rule with a `trigger` only applies when the trigger substring is
//!   present; it then requires a matching declaration substring. This catches
//!   the common failure where generated code references a pipeline register
//!   that was never declared.
//! - A rule without a trigger applies unconditionally and requires a
//!   structural token (the module declaration, the closing `endmodule`).
//!
//! Known limitation, accepted by contract: there is no parsing. A declaration
//! phrased with different whitespace (`reg  [2:0] pipeline_valid`) is reported
//! as missing, and a token inside a comment still satisfies or triggers a
//! rule. These heuristics trade precision for a dependency-free pre-flight
//! check before the real toolchain runs.

/// One lexical rule applied to the raw source text.
pub struct LintRule {
    /// Substring that must be present for the rule to apply at all.
    /// `None` means the rule applies unconditionally.
    pub trigger: Option<&'static str>,
    /// Substring that must appear in the source when the rule applies.
    pub required: &'static str,
    /// Message reported when `required` is absent.
    pub message: &'static str,
}

/// The fixed rule set for the generated HFT module.
pub const RULES: [LintRule; 4] = [
    LintRule {
        trigger: Some("pipeline_valid"),
        required: "reg [2:0] pipeline_valid",
        message: "Missing: reg [2:0] pipeline_valid",
    },
    LintRule {
        trigger: Some("pipeline_counter"),
        required: "reg [2:0] pipeline_counter",
        message: "Missing: reg [2:0] pipeline_counter",
    },
    LintRule {
        trigger: None,
        required: "module hft_zero_plus",
        message: "Missing module declaration",
    },
    LintRule {
        trigger: None,
        required: "endmodule",
        message: "Missing endmodule",
    },
];

/// Apply every rule to `content` and collect the messages of the ones that
/// flagged. An empty result means the source passed.
pub fn check_source(content: &str) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| {
            let applies = rule
                .trigger
                .map(|token| content.contains(token))
                .unwrap_or(true);
            applies && !content.contains(rule.required)
        })
        .map(|rule| rule.message.to_string())
        .collect()
}
