//! Sealed name → action registry.
//!
//! A [`Registry`] is produced once by [`RegistryBuilder::build`] and has no
//! mutating methods. It keeps two views of the same registrations:
//!
//! - the **slots**, one per registration in registration order, used by
//!   [`Registry::invoke_all`] and enumeration;
//! - the **index**, mapping each name to its latest slot, used by lookup.
//!
//! A name registered twice therefore resolves to its last action but still
//! runs once per slot during bulk invocation.

mod builder;

pub use builder::{DuplicatePolicy, RegistryBuilder};

use crate::report::{InvokeReport, Outcome};
use callmap_core::{Action, BoxError, DispatchError, RouteResult, Router};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

/// A single registration: a name and the action bound to it.
#[derive(Clone)]
pub struct Slot {
    name: Arc<str>,
    action: Arc<dyn Action>,
}

impl Slot {
    /// The name this slot was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The action bound to this slot.
    pub fn action(&self) -> &Arc<dyn Action> {
        &self.action
    }

    /// Run the slot's action once.
    pub fn invoke(&self) -> Result<(), BoxError> {
        self.action.invoke()
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("name", &self.name).finish_non_exhaustive()
    }
}

/// An immutable, thread-safe registry of named actions.
///
/// Cloning is cheap; actions are shared, not copied.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register("foo", foo)
///     .register("bar", bar)
///     .build()?;
///
/// registry.dispatch("foo")?;
/// let report = registry.invoke_all();
/// ```
#[derive(Clone)]
pub struct Registry {
    slots: Vec<Slot>,
    index: HashMap<Arc<str>, usize>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolve `name` to the action last registered under it.
    pub fn lookup(&self, name: &str) -> Result<&Arc<dyn Action>, DispatchError> {
        self.route(name)
            .matched()
            .ok_or_else(|| DispatchError::NotFound(name.to_string()))
    }

    /// Resolve `name` and run its action once.
    pub fn dispatch(&self, name: &str) -> Result<(), DispatchError> {
        let action = self.lookup(name)?;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name, "dispatching action");
        }

        action.invoke().map_err(|source| {
            #[cfg(feature = "tracing")]
            {
                tracing::warn!(name, error = %source, "action failed");
            }
            DispatchError::ActionFailed {
                name: name.to_string(),
                source,
            }
        })
    }

    /// Run every slot once, in registration order.
    ///
    /// A failing action does not stop the run; its error is recorded in the
    /// returned report and the next slot is invoked.
    pub fn invoke_all(&self) -> InvokeReport {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("invoke_all", slots = self.slots.len()).entered();

        let outcomes = self
            .slots
            .iter()
            .map(|slot| {
                let result = slot.invoke();

                #[cfg(feature = "tracing")]
                {
                    match &result {
                        Ok(()) => tracing::debug!(name = slot.name(), "action completed"),
                        Err(error) => {
                            tracing::warn!(name = slot.name(), error = %error, "action failed")
                        }
                    }
                }

                Outcome::new(slot.name.clone(), result)
            })
            .collect();

        InvokeReport::new(outcomes)
    }

    /// Iterate over slot names in registration order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(Slot::name)
    }

    /// Each registered name once, in order of first registration.
    pub fn distinct_names(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.index.len());
        self.names().filter(|name| seen.insert(*name)).collect()
    }

    /// All slots in registration order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Get the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Router<str, Arc<dyn Action>> for Registry {
    fn route(&self, key: &str) -> RouteResult<'_, Arc<dyn Action>> {
        match self.index.get(key) {
            Some(&slot) => RouteResult::Matched(&self.slots[slot].action),
            None => RouteResult::NotFound,
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Registry, RegistryBuilder};
    use crate::testing::{CountingAction, FailingAction, Journal};
    use callmap_core::{DispatchError, Router};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn foo_bar(journal: &Journal) -> Registry {
        RegistryBuilder::new()
            .register("foo", journal.recorder("foo"))
            .register("bar", journal.recorder("bar"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_and_dispatch() {
        let journal = Journal::new();
        let registry = foo_bar(&journal);

        registry.dispatch("foo").unwrap();
        assert_eq!(journal.entries(), vec!["foo"]);

        assert!(registry.lookup("bar").is_ok());
        assert!(registry.contains("bar"));
    }

    #[test]
    fn test_lookup_unknown_name() {
        let journal = Journal::new();
        let registry = foo_bar(&journal);

        let err = registry.dispatch("baz").unwrap_err();
        assert!(matches!(err, DispatchError::NotFound(ref name) if name == "baz"));
        assert!(journal.is_empty(), "no action should run on a failed lookup");
    }

    #[test]
    fn test_invoke_all_in_registration_order() {
        let journal = Journal::new();
        let registry = foo_bar(&journal);

        let report = registry.invoke_all();
        assert!(report.is_success());
        assert_eq!(journal.entries(), vec!["foo", "bar"]);
    }

    #[test]
    fn test_alias_shares_action_and_keeps_slot() {
        let journal = Journal::new();
        let registry = foo_bar(&journal);
        let registry = RegistryBuilder::new()
            .register_shared("foo", registry.lookup("foo").unwrap().clone())
            .register_shared("bar", registry.lookup("bar").unwrap().clone())
            .alias("index", "bar")
            .build()
            .unwrap();

        let bar = registry.lookup("bar").unwrap();
        let index = registry.lookup("index").unwrap();
        assert!(Arc::ptr_eq(bar, index));

        registry.invoke_all();
        assert_eq!(journal.entries(), vec!["foo", "bar", "bar"]);
        assert_eq!(registry.distinct_names(), vec!["foo", "bar", "index"]);
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let journal = Journal::new();
        let registry = RegistryBuilder::new()
            .register("bar", journal.recorder("first"))
            .register("foo", journal.recorder("foo"))
            .register("bar", journal.recorder("second"))
            .build()
            .unwrap();

        registry.dispatch("bar").unwrap();
        assert_eq!(journal.entries(), vec!["second"]);

        journal.clear();
        registry.invoke_all();
        assert_eq!(journal.entries(), vec!["first", "foo", "second"]);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["bar", "foo", "bar"]
        );
    }

    #[test]
    fn test_invoke_all_continues_after_failure() {
        let counter = CountingAction::new();
        let registry = RegistryBuilder::new()
            .register("broken", FailingAction::new("boom"))
            .register("count", counter.clone())
            .build()
            .unwrap();

        let report = registry.invoke_all();
        assert_eq!(counter.count(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.succeeded(), 1);

        let failure = report.failures().next().unwrap();
        assert_eq!(failure.name(), "broken");
        assert_eq!(failure.error().unwrap().to_string(), "boom");
    }

    #[test]
    fn test_dispatch_reports_action_failure() {
        let registry = RegistryBuilder::new()
            .register("broken", FailingAction::new("boom"))
            .build()
            .unwrap();

        let err = registry.dispatch("broken").unwrap_err();
        assert_eq!(err.to_string(), "action 'broken' failed: boom");
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let counter = CountingAction::new();
        let registry = Registry::builder()
            .register("count", counter.clone())
            .build()
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || registry.dispatch("count").is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(counter.count(), 4);
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::new().build().unwrap();
        assert!(registry.is_empty());
        assert!(registry.invoke_all().is_empty());
        assert!(registry.lookup("anything").is_err());
    }

    fn arb_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-e]{1,2}", 0..12)
    }

    proptest! {
        /// Lookup resolves every name to the action registered under it last.
        #[test]
        fn prop_lookup_returns_last_registration(names in arb_names()) {
            let journal = Journal::new();
            let mut builder = RegistryBuilder::new();
            for (position, name) in names.iter().enumerate() {
                builder.register_mut(name.clone(), journal.recorder(position.to_string()));
            }
            let registry = builder.build().unwrap();

            for name in &names {
                let last = names.iter().rposition(|n| n == name).unwrap();
                journal.clear();
                registry.dispatch(name).unwrap();
                prop_assert_eq!(journal.entries(), vec![last.to_string()]);
            }
        }

        /// Names that were never registered are reported as not found.
        #[test]
        fn prop_unregistered_names_not_found(names in arb_names(), missing in "[a-h]{1,3}") {
            prop_assume!(!names.contains(&missing));
            let mut builder = RegistryBuilder::new();
            for name in &names {
                builder.register_mut(name.clone(), || ());
            }
            let registry = builder.build().unwrap();

            prop_assert!(registry.lookup(&missing).err().unwrap().is_not_found());
        }

        /// Bulk invocation runs every slot exactly once, in registration order.
        #[test]
        fn prop_invoke_all_runs_every_slot_in_order(names in arb_names()) {
            let journal = Journal::new();
            let mut builder = RegistryBuilder::new();
            for (position, name) in names.iter().enumerate() {
                builder.register_mut(name.clone(), journal.recorder(position.to_string()));
            }
            let registry = builder.build().unwrap();

            let report = registry.invoke_all();
            let expected: Vec<String> = (0..names.len()).map(|p| p.to_string()).collect();
            prop_assert_eq!(journal.entries(), expected);
            prop_assert_eq!(report.len(), names.len());
            let reported: Vec<&str> = report.iter().map(|o| o.name()).collect();
            let registered: Vec<&str> = names.iter().map(String::as_str).collect();
            prop_assert_eq!(reported, registered);
        }

        /// Building the same list twice yields registries that resolve alike.
        #[test]
        fn prop_construction_is_idempotent(names in arb_names()) {
            let journal = Journal::new();
            let build = || {
                let mut builder = RegistryBuilder::new();
                for name in &names {
                    builder.register_mut(name.clone(), journal.recorder(name.clone()));
                }
                builder.build().unwrap()
            };
            let first = build();
            let second = build();

            prop_assert_eq!(first.names().collect::<Vec<_>>(), second.names().collect::<Vec<_>>());
            for name in &names {
                journal.clear();
                first.dispatch(name).unwrap();
                second.dispatch(name).unwrap();
                prop_assert_eq!(journal.entries(), vec![name.clone(), name.clone()]);
            }
        }
    }
}
