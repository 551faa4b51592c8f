/// Source of unique ids for sections, content blocks and keyframes.
///
/// Callers inject one instead of relying on a process-wide counter, so ids are
/// deterministic in tests and collision-free across documents.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

impl<F: FnMut() -> String> IdSource for F {
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Prefixed monotonically increasing ids: `spyn-1`, `spyn-2`, ...
#[derive(Debug, Clone)]
pub struct CounterIds {
    prefix: String,
    next: u32,
}

impl CounterIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for CounterIds {
    fn default() -> Self {
        Self::new("spyn")
    }
}

impl IdSource for CounterIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
