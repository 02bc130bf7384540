//! Shared regular expressions for form fields.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Six-digit Indian postal PIN code.
pub const PIN_CODE: &str = r"^\d{6}$";

/// Ten-digit mobile number starting with 6-9.
pub const PHONE: &str = r"^[6-9]\d{9}$";

/// `#rgb` or `#rrggbb` colour code.
pub const HEX_COLOR: &str = r"^#([0-9A-Fa-f]{3}){1,2}$";

/// Letters, spaces and common name punctuation.
pub const PERSON_NAME: &str = r"^[A-Za-z][A-Za-z .'-]*$";

/// Upper-case alphanumeric short code, e.g. `CBC01`.
pub const SHORT_CODE: &str = r"^[A-Z0-9]{2,10}$";

/// Login name: letters, digits, `_` and `.`.
pub const USERNAME: &str = r"^[A-Za-z0-9_.]+$";

/// Every pattern above.
pub const ALL: &[&str] = &[PIN_CODE, PHONE, HEX_COLOR, PERSON_NAME, SHORT_CODE, USERNAME];

static COMPILED: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    ALL.iter()
        .map(|pattern| (*pattern, Regex::new(pattern).expect("valid field pattern")))
        .collect()
});

/// The compiled form of one of the shared patterns.
///
/// Returns `None` for a pattern not listed in [`ALL`].
pub fn compiled(pattern: &str) -> Option<&'static Regex> {
    COMPILED.get(pattern)
}
