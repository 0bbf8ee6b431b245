use indexmap::IndexMap;

/// Per-node error messages currently shown inline.
#[derive(Debug, Default, Clone)]
pub struct ValidationState {
    errors: IndexMap<String, String>,
}

impl ValidationState {
    pub fn set_error(&mut self, id: impl Into<String>, error: impl Into<String>) {
        self.errors.insert(id.into(), error.into());
    }

    pub fn clear_error(&mut self, id: &str) {
        self.errors.shift_remove(id);
    }

    /// Stores `Err` as the node's error and clears it on `Ok`.
    pub fn apply(&mut self, id: &str, result: Result<(), String>) -> bool {
        match result {
            Ok(()) => {
                self.clear_error(id);
                true
            }
            Err(error) => {
                self.set_error(id, error);
                false
            }
        }
    }

    pub fn visible_error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationState;

    #[test]
    fn apply_sets_and_clears() {
        let mut state = ValidationState::default();
        assert!(!state.apply("email", Err("bad".into())));
        assert_eq!(state.visible_error("email"), Some("bad"));
        assert!(state.apply("email", Ok(())));
        assert!(state.is_empty());
    }

    #[test]
    fn resetting_an_error_replaces_the_message() {
        let mut state = ValidationState::default();
        state.set_error("lastName", "x");
        state.set_error("lastName", "z");
        assert_eq!(state.visible_error("lastName"), Some("z"));
        state.clear_error("lastName");
        assert_eq!(state.visible_error("lastName"), None);
    }
}
