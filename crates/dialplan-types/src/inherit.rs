//! Single-level inheritance for optional metadata fields.
//!
//! Format and type records may omit a field and defer to their owning
//! country. Every such lookup goes through [`resolve`] so the fallback rule
//! is the same everywhere: the owner is consulted only when the field is
//! absent, and the owner's value is taken as-is (it may itself be absent).
//! Callers map empty strings and `false` to `None` before resolving.

/// Return `own` if present, otherwise the owner's value.
pub fn resolve<T>(own: Option<T>, fallback: impl FnOnce() -> Option<T>) -> Option<T> {
    own.or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_value_wins() {
        assert_eq!(resolve(Some("0$1"), || Some("8$1")), Some("0$1"));
    }

    #[test]
    fn falls_back_when_absent() {
        assert_eq!(resolve(None, || Some("8$1")), Some("8$1"));
    }

    #[test]
    fn absent_owner_stays_absent() {
        assert_eq!(resolve::<&str>(None, || None), None);
    }

    #[test]
    fn fallback_not_consulted_when_own_present() {
        let mut called = false;
        let _ = resolve(Some(1), || {
            called = true;
            Some(2)
        });
        assert!(!called);
    }

    #[test]
    fn own_false_is_not_overridden() {
        assert_eq!(resolve(Some(false), || Some(true)), Some(false));
    }
}
