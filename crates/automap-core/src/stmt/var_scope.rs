use super::ExprVar;
use std::collections::HashSet;

/// Hands out variable names that are unique within one procedure.
#[derive(Debug, Default)]
pub struct VarScope {
    used: HashSet<String>,
}

impl VarScope {
    pub fn new() -> VarScope {
        VarScope::default()
    }

    /// Reserves `name` so it is never handed out by [`declare`](Self::declare).
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.used.insert(name.into());
    }

    /// Declares a fresh variable named after `name`: `name`, then `name_1`,
    /// `name_2`, ... on collision.
    pub fn declare(&mut self, name: &str) -> ExprVar {
        let mut candidate = name.to_string();
        let mut i = 0;

        while self.used.contains(&candidate) {
            i += 1;
            candidate = format!("{name}_{i}");
        }

        self.used.insert(candidate.clone());
        ExprVar::new(candidate)
    }
}
