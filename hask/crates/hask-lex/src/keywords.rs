//! Reserved words and reserved operators.
//!
//! Membership is an exact, case-sensitive match. The sets are built once on
//! first use and never change.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Reserved identifiers, always classified as keywords.
pub const RESERVED_IDS: [&str; 21] = [
    "case", "class", "data", "deriving", "do", "else", "forall", "if", "import", "in", "infix",
    "infixl", "infixr", "instance", "let", "module", "newtype", "of", "then", "type", "where",
];

/// Identifiers that are keywords only inside an import declaration.
pub const IMPORT_IDS: [&str; 3] = ["hiding", "qualified", "as"];

/// Reserved symbolic operators.
pub const RESERVED_OPS: [&str; 7] = ["->", "<-", "::", "@", "=", "|", "\\"];

static RESERVED_ID_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| RESERVED_IDS.into_iter().collect());

static IMPORT_ID_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| IMPORT_IDS.into_iter().collect());

static RESERVED_OP_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| RESERVED_OPS.into_iter().collect());

/// Returns true if `ident` is a reserved identifier.
///
/// # Example
///
/// ```
/// use hask_lex::keywords::is_reserved_id;
///
/// assert!(is_reserved_id("module"));
/// assert!(!is_reserved_id("Module"));
/// assert!(!is_reserved_id("qualified"));
/// ```
pub fn is_reserved_id(ident: &str) -> bool {
    RESERVED_ID_SET.contains(ident)
}

/// Returns true if `ident` is reserved inside an import declaration.
pub fn is_import_id(ident: &str) -> bool {
    IMPORT_ID_SET.contains(ident)
}

/// Returns true if `op` is a reserved symbolic operator.
///
/// # Example
///
/// ```
/// use hask_lex::keywords::is_reserved_op;
///
/// assert!(is_reserved_op("->"));
/// assert!(is_reserved_op("\\"));
/// assert!(!is_reserved_op("-->"));
/// ```
pub fn is_reserved_op(op: &str) -> bool {
    RESERVED_OP_SET.contains(op)
}
