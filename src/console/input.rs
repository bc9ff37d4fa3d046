use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::set_algebra::set::Set;

use super::tokens::Tokens;

pub const COUNT_PROMPT: &str = "Enter the number of elements of the set:";
pub const ELEMENTS_PROMPT: &str =
    "Enter the (integer) elements, separated by spaces or carriage returns:";

impl Set {
    /// Replace the set with one read from `tokens`: a count, then that many
    /// integers. Prompts go to `prompt`.
    ///
    /// The old members are dropped before anything is read, so on error the
    /// set is left empty.
    pub fn input<R: BufRead, W: Write>(
        &mut self,
        tokens: &mut Tokens<R>,
        prompt: &mut W,
    ) -> Result<()> {
        self.clear();

        writeln!(prompt, "{}", COUNT_PROMPT)?;
        prompt.flush()?;
        let count: usize = tokens.parse_next("element count")?;

        writeln!(prompt, "{}", ELEMENTS_PROMPT)?;
        prompt.flush()?;
        // grown per element read, the typed count is untrusted
        let mut values = Vec::new();
        for _ in 0..count {
            values.push(tokens.parse_next::<i64>("element")?);
        }

        self.replace(values);
        debug!(count, cardinality = self.cardinality(), "read set from input");
        Ok(())
    }
}
