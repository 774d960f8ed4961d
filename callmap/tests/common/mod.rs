use callmap::{BoxError, Registry, RegistryBuilder, testing::Journal};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Registries
// ============================================================================

/// `foo` then `bar`, both recording into `journal`.
pub fn foo_bar(journal: &Journal) -> Registry {
    RegistryBuilder::new()
        .reserve("all")
        .register("foo", journal.recorder("foo"))
        .register("bar", journal.recorder("bar"))
        .build()
        .unwrap()
}

/// `foo`, `bar`, and `index` aliasing `bar`.
pub fn with_index_alias(journal: &Journal) -> Registry {
    RegistryBuilder::new()
        .reserve("all")
        .register("foo", journal.recorder("foo"))
        .register("bar", journal.recorder("bar"))
        .alias("index", "bar")
        .build()
        .unwrap()
}

// ============================================================================
// Test Actions
// ============================================================================

/// Fails on every other invocation, starting with the first.
pub struct FlakyAction {
    pub calls: Arc<AtomicUsize>,
}

impl callmap::Action for FlakyAction {
    fn invoke(&self) -> Result<(), BoxError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
            Err("flaky failure".into())
        } else {
            Ok(())
        }
    }
}
