/// Builds a [`Registry`](crate::registry::Registry) from `name => action`
/// pairs, in order.
///
/// Expands to a [`RegistryBuilder`](crate::registry::RegistryBuilder) chain
/// followed by `build()`, so the result is a
/// `Result<Registry, BuildError>`.
///
/// # Example
/// ```rust
/// use callmap_std::registry;
///
/// fn foo() {}
/// fn bar() {}
///
/// let registry = registry! {
///     "foo" => foo,
///     "bar" => bar,
/// }
/// .unwrap();
/// assert_eq!(registry.names().collect::<Vec<_>>(), ["foo", "bar"]);
/// ```
#[macro_export]
macro_rules! registry {
    ($($name:expr => $action:expr),* $(,)?) => {
        $crate::registry::RegistryBuilder::new()
            $(.register($name, $action))*
            .build()
    };
}
