//! Name resolution abstraction.
//!
//! A [`Router`] maps keys to values. It never fails: a miss is reported as
//! [`RouteResult::NotFound`] and the caller decides whether that becomes an
//! error.

/// Result of a routing lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteResult<'a, V: ?Sized> {
    /// Route matched, contains the value.
    Matched(&'a V),
    /// No matching route found.
    NotFound,
}

impl<V: ?Sized> Clone for RouteResult<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for RouteResult<'_, V> {}

impl<'a, V: ?Sized> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// A router that maps keys to values.
pub trait Router<K: ?Sized, V: ?Sized>: Send + Sync {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<'_, V>;

    /// Check if a key exists in the router.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}
