//! Token listings: one `line:column<TAB>KIND<TAB>text` line per token.

use std::io::{Read, Write};

use crate::error::{ScanError, ScanResult};
use crate::scanner::Scanner;

/// Scan to end of input, writing each token (but not the final `EOF`) to `out`.
///
/// Returns the number of tokens written.
pub fn write_listing<R: Read, W: Write>(
    scanner: &mut Scanner<R>,
    out: &mut W,
) -> ScanResult<usize> {
    let mut count = 0;
    for token in scanner.tokens() {
        writeln!(out, "{}", token?).map_err(ScanError::Write)?;
        count += 1;
    }
    Ok(count)
}
