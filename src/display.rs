//! Aligned per-token valence rendering for diagnostics and `--explain`.
//!
//! Tokens are written on one line separated by two spaces; every token with
//! a nonzero valence gets its own line below with a marker spanning the
//! token's display width and the valence after it.

use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::analyzer::Breakdown;

/// Renders the tokens of a scored text with a marker under every token that
/// carries sentiment.
///
/// ```text
/// Not  bad  at  all
///      ╰─╯+1.850
/// ```
pub struct ValenceDisplay<'a> {
    breakdown: &'a Breakdown,
    show_unscaled: bool,
}

impl<'a> fmt::Display for ValenceDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();
        // write opening display text
        let mut opening_line = String::new();
        {
            // for skipping padding at beginning
            let mut is_first = true;
            for token in self.breakdown.document.tokens() {
                if is_first {
                    is_first = false;
                } else {
                    opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
                }

                token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
                opening_line.push_str(token.text());
                token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            }
        }

        f.write_str(&opening_line)?;

        let scored = self
            .breakdown
            .contrasted
            .iter()
            .zip(&self.breakdown.valences)
            .enumerate()
            .filter(|(_, (valence, unscaled))| **valence != 0.0 || **unscaled != 0.0);

        for (idx, (valence, unscaled)) in scored {
            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[idx];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[idx];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            write!(f, "{:+.3}", valence)?;
            if self.show_unscaled && valence != unscaled {
                write!(f, " (before but: {:+.3})", unscaled)?;
            }
        }

        Ok(())
    }
}

impl<'a> ValenceDisplay<'a> {
    pub fn new(breakdown: &'a Breakdown) -> Self {
        ValenceDisplay {
            breakdown,
            show_unscaled: false,
        }
    }

    /// Also print the valence a token had before the "but" reweighting.
    pub fn with_unscaled(mut self) -> Self {
        self.show_unscaled = true;
        self
    }
}
