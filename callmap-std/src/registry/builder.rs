//! Registry construction.
//!
//! [`RegistryBuilder`] is the only place names and actions can be added. It is
//! consumed by [`RegistryBuilder::build`], which yields a read-only
//! [`Registry`].

use super::{Registry, Slot};
use callmap_core::{Action, BuildError};
use std::{collections::HashMap, sync::Arc};

/// How the builder treats a name that is registered more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later registration wins for lookup. Every registration keeps its
    /// own slot in invocation order.
    #[default]
    Replace,
    /// A repeated name is a build error.
    Reject,
}

/// Builder for constructing a [`Registry`].
///
/// Registration methods never fail on the spot. The first invalid
/// registration is remembered and reported by [`build`](Self::build), so
/// registrations can be chained.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .reserve("all")
///     .register("foo", foo)
///     .register("bar", bar)
///     .alias("index", "bar")
///     .build()?;
/// ```
pub struct RegistryBuilder {
    slots: Vec<Slot>,
    index: HashMap<Arc<str>, usize>,
    reserved: Vec<String>,
    duplicates: DuplicatePolicy,
    error: Option<BuildError>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            reserved: Vec::new(),
            duplicates: DuplicatePolicy::default(),
            error: None,
        }
    }

    /// Set the duplicate name policy.
    pub fn on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Reject names that are registered more than once.
    pub fn reject_duplicates(self) -> Self {
        self.on_duplicate(DuplicatePolicy::Reject)
    }

    /// Reserve a name so that no action can be registered under it.
    pub fn reserve(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.index.contains_key(name.as_str()) {
            self.fail(BuildError::ReservedName(name.clone()));
        }
        self.reserved.push(name);
        self
    }

    /// Register an action under `name`.
    pub fn register<A: Action>(mut self, name: impl Into<String>, action: A) -> Self {
        self.register_mut(name, action);
        self
    }

    /// Register an action under `name` (mutable version).
    pub fn register_mut<A: Action>(&mut self, name: impl Into<String>, action: A) {
        self.push(name.into(), Arc::new(action));
    }

    /// Register an action that is already shared.
    pub fn register_shared(mut self, name: impl Into<String>, action: Arc<dyn Action>) -> Self {
        self.push(name.into(), action);
        self
    }

    /// Register `name` as a new slot sharing the action currently bound to
    /// `target`.
    pub fn alias(mut self, name: impl Into<String>, target: &str) -> Self {
        self.alias_mut(name, target);
        self
    }

    /// Register an alias (mutable version).
    pub fn alias_mut(&mut self, name: impl Into<String>, target: &str) {
        let name = name.into();
        match self.index.get(target).copied() {
            Some(slot) => {
                let action = self.slots[slot].action.clone();
                self.push(name, action);
            }
            None => self.fail(BuildError::UnknownAliasTarget {
                alias: name,
                target: target.to_string(),
            }),
        }
    }

    /// Get the number of registered slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the builder has no registrations.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Seal the builder into an immutable [`Registry`].
    ///
    /// Returns the first error recorded during registration, if any.
    pub fn build(self) -> Result<Registry, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                slots = self.slots.len(),
                names = self.index.len(),
                "registry sealed"
            );
        }

        Ok(Registry {
            slots: self.slots,
            index: self.index,
        })
    }

    fn push(&mut self, name: String, action: Arc<dyn Action>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.check(&name) {
            self.fail(err);
            return;
        }

        let name: Arc<str> = name.into();
        let position = self.slots.len();

        #[cfg(feature = "tracing")]
        {
            match self.index.get(&*name) {
                Some(&previous) => tracing::debug!(
                    name = %name,
                    slot = position,
                    previous,
                    "registered action, replacing earlier binding"
                ),
                None => tracing::debug!(name = %name, slot = position, "registered action"),
            }
        }

        self.index.insert(name.clone(), position);
        self.slots.push(Slot { name, action });
    }

    fn check(&self, name: &str) -> Result<(), BuildError> {
        if name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if self.reserved.iter().any(|r| r == name) {
            return Err(BuildError::ReservedName(name.to_string()));
        }
        if self.duplicates == DuplicatePolicy::Reject && self.index.contains_key(name) {
            return Err(BuildError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn fail(&mut self, err: BuildError) {
        // First error wins
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
