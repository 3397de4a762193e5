use serde::{Deserialize, Serialize};

/// How a mutating operation treats a path whose kind differs from the one it
/// expects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Refuse with `TypeMismatch`.
    #[default]
    Strict,
    /// Act on whatever is there.
    Permissive,
}

impl Mode {
    pub fn is_strict(&self) -> bool {
        matches!(self, Mode::Strict)
    }
}
