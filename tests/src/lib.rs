//! End-to-end tests for the docblock type workspace.
//!
//! Scenarios run against the shared manifest in `test_data/symbols.json`, which
//! declares a small hierarchy: `Type` and its subclass `ArrayType`, `Foo`
//! implementing `FooInterface`, the abstract `MyClass` with documented members,
//! and an invocable `Invoker`.

#[cfg(test)]
mod metadata;
#[cfg(test)]
mod types;
#[cfg(test)]
mod utils;
