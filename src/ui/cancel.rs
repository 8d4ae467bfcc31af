/// Abort flag shared between an effect and the request it started
use std::cell::Cell;
use std::rc::Rc;

/// Set by the effect's destructor so a late response is dropped
#[derive(Clone, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_seen_by_clones() {
        let flag = CancelFlag::new();
        let in_flight = flag.clone();
        assert!(!in_flight.is_cancelled());

        flag.cancel();
        assert!(in_flight.is_cancelled());
    }

    #[test]
    fn test_newer_load_is_independent() {
        let older = CancelFlag::new();
        older.cancel();

        let newer = CancelFlag::new();
        assert!(older.is_cancelled());
        assert!(!newer.is_cancelled());
    }
}
