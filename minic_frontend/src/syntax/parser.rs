//! Predictive recursive-descent parser with derivation tracing
//!
//! One method per nonterminal. Productions are chosen from a single token
//! of lookahead: by lexeme for keywords and punctuation, by kind band for
//! `id` and `num`. The first mismatch appends one failure marker and sets
//! a sticky flag; every method checks the flag immediately after each
//! sub-call and unwinds without consuming tokens or writing trace lines.

use crate::grammar::Nonterminal;
use crate::logging::codes;
use crate::syntax::derivation::DerivationTrace;
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::{log_debug, log_error, log_success};
use serde::{Deserialize, Serialize};

/// Final trace line of an accepted parse
pub const SUCCESS_MARKER: &str = "syntax analysis succeeded";
/// Trace line appended once at the first mismatch; always the final line
/// of a rejected parse
pub const FAILURE_MARKER: &str = "syntax analysis failed";

/// Result of a parse: acceptance flag and the full derivation trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub success: bool,
    pub steps: Vec<String>,
}

/// Recursive-descent parser over a MiniC token sequence
pub struct Parser {
    tokens: TokenStream,
    failed: bool,
    trace: DerivationTrace,
}

impl Parser {
    /// Create a parser positioned at the first token
    pub fn new(tokens: Vec<Token>) -> Self {
        log_debug!("Creating parser", "tokens" => tokens.len());
        Self {
            tokens: TokenStream::new(tokens),
            failed: false,
            trace: DerivationTrace::new(),
        }
    }

    /// Run the single parse pass. Deterministic, no backtracking; always
    /// returns a well-formed outcome, never panics on any token sequence.
    pub fn parse(mut self) -> ParseOutcome {
        if self.tokens.is_empty() {
            log_error!(
                codes::syntax::EMPTY_TOKEN_STREAM,
                "Parser invoked on empty token sequence"
            );
        }

        self.program();

        let success = !self.failed;
        if success {
            self.trace.push_marker(SUCCESS_MARKER);
            log_success!(codes::success::PARSE_COMPLETE,
                "Syntax analysis completed",
                "steps" => self.trace.len(),
                "tokens_consumed" => self.tokens.position()
            );
        } else {
            log_debug!("Syntax analysis rejected input",
                "steps" => self.trace.len(),
                "position" => self.tokens.position()
            );
        }

        ParseOutcome {
            success,
            steps: self.trace.into_steps(),
        }
    }

    // ========================================================================
    // Dispatch helpers
    // ========================================================================

    fn lexeme_is(&self, lexeme: &str) -> bool {
        self.tokens.current_lexeme() == Some(lexeme)
    }

    fn at_identifier(&self) -> bool {
        self.tokens.current_kind() == Some(TokenKind::Id)
    }

    fn at_numeric_literal(&self) -> bool {
        self.tokens
            .current_kind()
            .map_or(false, |kind| kind.is_numeric_literal())
    }

    /// FIRST(stmt): an identifier, or one of `if` `while` `do` `break` `{`
    fn at_stmt_first(&self) -> bool {
        self.at_identifier()
            || self.lexeme_is("if")
            || self.lexeme_is("while")
            || self.lexeme_is("do")
            || self.lexeme_is("break")
            || self.lexeme_is("{")
    }

    /// Record the first mismatch; later mismatches are silent
    fn fail(&mut self) {
        if !self.failed {
            log_error!(codes::syntax::UNEXPECTED_TOKEN,
                "Expected token or production not found",
                "position" => self.tokens.position(),
                "lexeme" => self.tokens.current_lexeme().unwrap_or("<end of input>")
            );
            self.trace.push_marker(FAILURE_MARKER);
            self.failed = true;
        }
    }

    // ========================================================================
    // Grammar productions
    // ========================================================================

    // program -> block
    fn program(&mut self) {
        self.block();
    }

    // block -> { stmts }
    fn block(&mut self) {
        if self.tokens.match_lexeme("{") {
            self.trace.rewrite(Nonterminal::Block, "{stmts}");
            self.stmts();
            if self.failed {
                return;
            }
            if !self.tokens.match_lexeme("}") {
                self.fail();
            }
        } else {
            self.fail();
        }
    }

    // stmts -> stmt stmts | ε
    fn stmts(&mut self) {
        if self.at_stmt_first() {
            self.trace.rewrite(Nonterminal::Stmts, "stmt stmts");
            self.stmt();
            if self.failed {
                return;
            }
            self.stmts();
        } else {
            self.trace.rewrite(Nonterminal::Stmts, "");
        }
    }

    // stmt -> id = expr ; | while ( bool ) stmt | do stmt while ( bool )
    //       | break | block | if ( bool ) stmt stmt1
    fn stmt(&mut self) {
        if self.at_identifier() {
            self.trace.rewrite(Nonterminal::Stmt, "id=expr;");
            self.tokens.advance();
            if !self.tokens.match_lexeme("=") {
                self.fail();
                return;
            }
            self.expr();
            if self.failed {
                return;
            }
            if !self.tokens.match_lexeme(";") {
                self.fail();
            }
        } else if self.lexeme_is("while") {
            self.trace.rewrite(Nonterminal::Stmt, "while(bool)stmt");
            self.tokens.advance();
            if !self.tokens.match_lexeme("(") {
                self.fail();
                return;
            }
            self.bool_expr();
            if self.failed {
                return;
            }
            if !self.tokens.match_lexeme(")") {
                self.fail();
                return;
            }
            self.stmt();
        } else if self.lexeme_is("do") {
            self.trace.rewrite(Nonterminal::Stmt, "do stmt while(bool)");
            self.tokens.advance();
            self.stmt();
            if self.failed {
                return;
            }
            if !self.tokens.match_lexeme("while") {
                self.fail();
                return;
            }
            if !self.tokens.match_lexeme("(") {
                self.fail();
                return;
            }
            self.bool_expr();
            if self.failed {
                return;
            }
            if !self.tokens.match_lexeme(")") {
                self.fail();
            }
        } else if self.lexeme_is("break") {
            self.trace.rewrite(Nonterminal::Stmt, "break");
            self.tokens.advance();
        } else if self.lexeme_is("{") {
            self.trace.rewrite(Nonterminal::Stmt, "block");
            self.block();
        } else if self.lexeme_is("if") {
            // the rewrite is recorded only after the opening paren is seen
            self.tokens.advance();
            if !self.tokens.match_lexeme("(") {
                self.fail();
                return;
            }
            self.trace.rewrite(Nonterminal::Stmt, "if(bool)stmt stmt1");
            self.bool_expr();
            if self.failed {
                return;
            }
            if !self.tokens.match_lexeme(")") {
                self.fail();
                return;
            }
            self.stmt();
            if self.failed {
                return;
            }
            self.stmt1();
        } else {
            self.fail();
        }
    }

    // stmt1 -> else stmt | ε
    fn stmt1(&mut self) {
        if self.lexeme_is("else") {
            self.tokens.advance();
            self.trace.rewrite(Nonterminal::Stmt1, "else stmt");
            self.stmt();
        } else {
            self.trace.rewrite(Nonterminal::Stmt1, "");
        }
    }

    // bool -> expr bool1
    fn bool_expr(&mut self) {
        self.trace.rewrite(Nonterminal::Bool, "expr bool1");
        self.expr();
        if self.failed {
            return;
        }
        self.bool1();
    }

    // bool1 -> relop expr | ε        relop ∈ { < , <= , > , >= }
    fn bool1(&mut self) {
        let relop = match self.tokens.current_lexeme() {
            Some(lexeme @ ("<" | "<=" | ">" | ">=")) => Some(lexeme.to_string()),
            _ => None,
        };

        match relop {
            Some(op) => {
                self.trace
                    .rewrite(Nonterminal::Bool1, &format!("{}expr", op));
                self.tokens.advance();
                self.expr();
            }
            None => self.trace.rewrite(Nonterminal::Bool1, ""),
        }
    }

    // expr -> term expr1
    fn expr(&mut self) {
        self.trace.rewrite(Nonterminal::Expr, "term expr1");
        self.term();
        if self.failed {
            return;
        }
        self.expr1();
    }

    // expr1 -> + term | - term | ε
    // At most one trailing operator application; `a+b+c` is not chained.
    fn expr1(&mut self) {
        if self.lexeme_is("+") {
            self.trace.rewrite(Nonterminal::Expr1, "+term");
            self.tokens.advance();
            self.term();
        } else if self.lexeme_is("-") {
            self.trace.rewrite(Nonterminal::Expr1, "-term");
            self.tokens.advance();
            self.term();
        } else {
            self.trace.rewrite(Nonterminal::Expr1, "");
        }
    }

    // term -> factor term1
    fn term(&mut self) {
        self.trace.rewrite(Nonterminal::Term, "factor term1");
        self.factor();
        if self.failed {
            return;
        }
        self.term1();
    }

    // term1 -> * factor | / factor | ε
    fn term1(&mut self) {
        if self.lexeme_is("*") {
            self.trace.rewrite(Nonterminal::Term1, "*factor");
            self.tokens.advance();
            self.factor();
        } else if self.lexeme_is("/") {
            self.trace.rewrite(Nonterminal::Term1, "/factor");
            self.tokens.advance();
            self.factor();
        } else {
            self.trace.rewrite(Nonterminal::Term1, "");
        }
    }

    // factor -> ( expr ) | id | num
    fn factor(&mut self) {
        if self.lexeme_is("(") {
            self.trace.rewrite(Nonterminal::Factor, "(expr)");
            self.tokens.advance();
            self.expr();
            if self.failed {
                return;
            }
            if !self.tokens.match_lexeme(")") {
                self.fail();
            }
        } else if self.at_identifier() {
            self.trace.rewrite(Nonterminal::Factor, "id");
            self.tokens.advance();
        } else if self.at_numeric_literal() {
            self.trace.rewrite(Nonterminal::Factor, "num");
            self.tokens.advance();
        } else {
            self.fail();
        }
    }
}
