//! Calculator factory, registry and selection.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::calculator::{Calculator, FibError};
use crate::constants::KARATSUBA_THRESHOLD;
use crate::decimal::DecimalString;
use crate::fastdoubling::FastDoubling;
use crate::fixed::FixedWidth;
use crate::linear::LinearIteration;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn canonical(name: &str) -> &str {
        match name {
            "fast" => "doubling",
            other => other,
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        match name {
            "doubling" => Ok(Arc::new(FastDoubling::new())),
            "doubling-karatsuba" => Ok(Arc::new(FastDoubling::with_karatsuba(KARATSUBA_THRESHOLD))),
            "linear" => Ok(Arc::new(LinearIteration::new())),
            "fixed" => Ok(Arc::new(FixedWidth::new())),
            "decimal" => Ok(Arc::new(DecimalString::new())),
            _ => Err(FibError::Config(format!("unknown calculator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let name = Self::canonical(name);
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_calculator(name)?;
        debug!(name, calculator = calc.name(), "calculator created");
        let mut cache = self.cache.write();
        let cached = cache.entry(name.to_string()).or_insert(calc);
        Ok(Arc::clone(cached))
    }

    fn available(&self) -> Vec<&str> {
        vec!["doubling", "doubling-karatsuba", "linear", "fixed", "decimal"]
    }
}

/// Resolve an algorithm selection to the calculators to run.
///
/// `"all"` yields every registered calculator in registry order.
pub fn select(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
