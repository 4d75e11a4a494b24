pub mod quote;
pub mod renderer;
pub mod theme;

/// Left margin shared by every line the session draws.
pub(crate) const INDENT: &str = "    ";
