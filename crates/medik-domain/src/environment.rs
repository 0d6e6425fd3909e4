//! Read-only access to environment variables.
//!
//! Exams never call `std::env` directly: they go through [`Environment`], so a run can be fed
//! the live process environment, a fixed snapshot, or an env file layered over the process.

use std::collections::BTreeMap;

pub trait Environment {
    /// Value of `name`, or `None` when the variable is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The live process environment.
///
/// Values that are not valid UTF-8 are converted lossily; they still count as set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Variables from an env file layered over a base environment.
///
/// Layered values win over the base, the same way exporting them before the run would.
#[derive(Clone, Debug, Default)]
pub struct LayeredEnv<E> {
    layer: BTreeMap<String, String>,
    base: E,
}

impl<E: Environment> LayeredEnv<E> {
    pub fn new(layer: BTreeMap<String, String>, base: E) -> Self {
        Self { layer, base }
    }

    pub fn layer(&self) -> &BTreeMap<String, String> {
        &self.layer
    }
}

impl<E: Environment> Environment for LayeredEnv<E> {
    fn var(&self, name: &str) -> Option<String> {
        self.layer.get(name).cloned().or_else(|| self.base.var(name))
    }
}
