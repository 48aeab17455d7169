// SPDX-License-Identifier: PMPL-1.0-or-later

//! Inline storage for rendered subtags.

use tinystr::TinyAsciiStr;

/// A rendered subtag of at most four ASCII bytes, kept on the stack.
pub type Code = TinyAsciiStr<4>;

/// Rendered in place of bytes that are not a subtag. Table records never
/// produce it.
const MALFORMED: Code = match Code::try_from_str("????") {
    Ok(c) => c,
    Err(_) => panic!("placeholder code must be ASCII"),
};

/// Builds a [`Code`] from table bytes.
pub(crate) fn code(bytes: &[u8]) -> Code {
    match Code::try_from_utf8(bytes) {
        Ok(c) => c,
        Err(err) => {
            tracing::error!(?bytes, ?err, "table bytes do not form a subtag");
            MALFORMED
        }
    }
}
