//! Leftmost-derivation trace buffer
//!
//! Display state only: the sentential form is a plain string rewritten by
//! leftmost textual substitution, kept strictly apart from parser control
//! state. Acceptance never depends on this buffer.

use crate::config::constants::compile_time::syntax::INITIAL_STEP_CAPACITY;
use crate::grammar::Nonterminal;

/// Mutable sentential form plus the accumulated derivation steps.
///
/// Seeded with the form `block` and the single step `program`; each
/// rewrite appends the updated form, markers are appended verbatim, and
/// no step is ever removed.
#[derive(Debug, Clone)]
pub struct DerivationTrace {
    form: String,
    steps: Vec<String>,
}

impl DerivationTrace {
    pub fn new() -> Self {
        let mut steps = Vec::with_capacity(INITIAL_STEP_CAPACITY);
        steps.push(Nonterminal::Program.as_str().to_string());
        Self {
            form: Nonterminal::Block.as_str().to_string(),
            steps,
        }
    }

    /// Replace the leftmost occurrence of `nonterminal` in the current
    /// form with `replacement` (empty for ε) and record the new form.
    /// A form without the placeholder is left untouched.
    pub fn rewrite(&mut self, nonterminal: Nonterminal, replacement: &str) {
        let placeholder = nonterminal.as_str();
        if let Some(pos) = self.form.find(placeholder) {
            self.form
                .replace_range(pos..pos + placeholder.len(), replacement);
            self.steps.push(self.form.clone());
        }
    }

    /// Append a marker line verbatim
    pub fn push_marker(&mut self, marker: &str) {
        self.steps.push(marker.to_string());
    }

    /// Current sentential form
    pub fn current_form(&self) -> &str {
        &self.form
    }

    /// Recorded steps so far
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the trace, yielding the step list
    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}

impl Default for DerivationTrace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_program_step_and_block_form() {
        let trace = DerivationTrace::new();
        assert_eq!(trace.steps(), ["program"]);
        assert_eq!(trace.current_form(), "block");
    }

    #[test]
    fn rewrite_replaces_leftmost_and_records() {
        let mut trace = DerivationTrace::new();
        trace.rewrite(Nonterminal::Block, "{stmts}");
        assert_eq!(trace.current_form(), "{stmts}");
        trace.rewrite(Nonterminal::Stmts, "stmt stmts");
        assert_eq!(trace.current_form(), "{stmt stmts}");
        assert_eq!(trace.steps(), ["program", "{stmts}", "{stmt stmts}"]);
    }

    #[test]
    fn leftmost_occurrence_wins() {
        let mut trace = DerivationTrace::new();
        trace.rewrite(Nonterminal::Block, "{stmts}");
        trace.rewrite(Nonterminal::Stmts, "stmt stmts");
        // `stmt` must hit the first occurrence, not the prefix of `stmts`
        trace.rewrite(Nonterminal::Stmt, "break");
        assert_eq!(trace.current_form(), "{break stmts}");
    }

    #[test]
    fn epsilon_rewrite_erases_placeholder() {
        let mut trace = DerivationTrace::new();
        trace.rewrite(Nonterminal::Block, "{stmts}");
        trace.rewrite(Nonterminal::Stmts, "");
        assert_eq!(trace.current_form(), "{}");
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn missing_placeholder_is_a_no_op() {
        let mut trace = DerivationTrace::new();
        trace.rewrite(Nonterminal::Factor, "num");
        assert_eq!(trace.current_form(), "block");
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn markers_are_appended_verbatim() {
        let mut trace = DerivationTrace::new();
        trace.push_marker("syntax analysis failed");
        assert_eq!(trace.steps().last().unwrap(), "syntax analysis failed");
    }

    #[test]
    fn into_steps_preserves_order() {
        let mut trace = DerivationTrace::new();
        trace.rewrite(Nonterminal::Block, "{stmts}");
        trace.push_marker("syntax analysis succeeded");
        let steps = trace.into_steps();
        assert_eq!(steps, ["program", "{stmts}", "syntax analysis succeeded"]);
    }
}
