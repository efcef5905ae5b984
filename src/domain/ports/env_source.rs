//! Environment source port.
//!
//! The materializer never reads the process environment directly. It asks an
//! [`EnvSource`] instead, so runs can be driven from a fixed map in tests.

use std::collections::HashMap;

/// Read-only access to named environment values.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when it is unset or not valid
    /// Unicode.
    fn var(&self, name: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_env_lookup() {
        let env = StaticEnv::new().with_var("GOOGLE_CREDENTIALS_JSON", "e30=");
        assert_eq!(env.var("GOOGLE_CREDENTIALS_JSON").as_deref(), Some("e30="));
        assert_eq!(env.var("OTHER"), None);
    }

    #[test]
    fn test_static_env_from_iter() {
        let env: StaticEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("B").as_deref(), Some("2"));
    }

    #[test]
    fn test_reference_forwards() {
        let env = StaticEnv::new().with_var("A", "1");
        let by_ref: &dyn EnvSource = &env;
        assert_eq!(by_ref.var("A").as_deref(), Some("1"));
    }
}
