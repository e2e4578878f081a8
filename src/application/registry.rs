use crate::domain::employee::CompensationType;
use crate::domain::ports::{ProcessorBox, ProcessorFactory};
use crate::error::{PaymentError, Result};
use crate::infrastructure::processors::KNOWN_VARIANTS;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use std::time::Instant;

static GLOBAL_REGISTRY: LazyLock<ProcessorRegistry> =
    LazyLock::new(ProcessorRegistry::with_known_variants);

/// Maps processor identifiers to the constructors that build them.
///
/// The registry is filled once and only read afterwards. `create` borrows it
/// immutably, so a shared registry can serve any number of threads without
/// locking.
pub struct ProcessorRegistry {
    factories: HashMap<String, ProcessorFactory>,
}

impl ProcessorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry holding every variant shipped with the crate.
    pub fn with_known_variants() -> Self {
        let mut registry = Self::new();
        registry.register_all_known_variants();
        registry
    }

    /// The process-wide registry, built on first access.
    pub fn global() -> &'static ProcessorRegistry {
        &GLOBAL_REGISTRY
    }

    /// Registers a constructor under `identifier`.
    ///
    /// Returns `false` without touching the registry when the identifier is
    /// empty or already taken. The first registration always wins.
    pub fn register(&mut self, identifier: impl Into<String>, factory: ProcessorFactory) -> bool {
        let identifier = identifier.into();
        if identifier.is_empty() {
            tracing::warn!("Ignoring processor registration with an empty identifier");
            return false;
        }
        if self.factories.contains_key(&identifier) {
            tracing::warn!(processor = %identifier, "Processor already registered, keeping the first");
            return false;
        }
        tracing::trace!(processor = %identifier, "Registered processor");
        self.factories.insert(identifier, factory);
        true
    }

    /// Registers every known variant under its canonical name.
    ///
    /// Variants that are already present are skipped, so calling this more
    /// than once leaves the registry unchanged. Returns how many entries were
    /// added.
    pub fn register_all_known_variants(&mut self) -> usize {
        let started = Instant::now();
        let mut added = 0;
        for variant in KNOWN_VARIANTS {
            if self.factories.contains_key(variant.identifier) {
                continue;
            }
            let construct = variant.construct;
            if self.register(variant.identifier, Box::new(construct)) {
                added += 1;
            }
        }
        tracing::debug!(
            added,
            total = self.factories.len(),
            elapsed = ?started.elapsed(),
            "Registered known payment processors"
        );
        added
    }

    /// Builds the processor registered under `identifier`.
    ///
    /// Accepts a plain `&str` or an `Option<&str>`; `None` and `""` are both
    /// rejected as invalid.
    pub fn create<'a>(&self, identifier: impl Into<Option<&'a str>>) -> Result<ProcessorBox> {
        let identifier = match identifier.into() {
            Some(identifier) if !identifier.is_empty() => identifier,
            _ => return Err(PaymentError::InvalidIdentifier),
        };

        let factory = self
            .factories
            .get(identifier)
            .ok_or_else(|| PaymentError::UnknownIdentifier(identifier.to_string()))?;

        Ok(factory())
    }

    /// Builds the processor that pays the given compensation type.
    pub fn create_for(&self, compensation_type: CompensationType) -> Result<ProcessorBox> {
        self.create(compensation_type.processor_identifier())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// Registered identifiers in sorted order.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        identifiers
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}
