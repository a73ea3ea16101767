#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences how schedule is built.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// Specifies whether days are grouped in parallel.
    pub parallelism: bool,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, parallelism: bool) -> Self {
        Self { logger, parallelism }
    }

    /// Creates a new instance of `Environment` which does not log anything.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_: &str| {}), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(|msg: &str| println!("{msg}")), true)
    }
}
