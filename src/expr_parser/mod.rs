pub mod lexer;
pub mod parser;

use anyhow::Result;
use tracing::debug;

use crate::set_algebra::set::Set;

/// Lex, parse and evaluate a set expression such as `({1, 2} + {3}) & {2, 3}`.
pub fn evaluate(input: &str) -> Result<Set> {
    let tokens = lexer::lexer(input)?;
    let expr = parser::Parser::new(tokens).parse()?;
    debug!(?expr, "parsed expression");
    Ok(expr.evaluate())
}
