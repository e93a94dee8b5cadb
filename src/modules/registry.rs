//! Central registry mapping module names to constructors
//!
//! A registry is filled once during start-up and only read afterwards.
//! Registration needs `&mut self`, so once the table is shared behind an
//! `Arc` or installed as the process-wide registry it can no longer change
//! and lookups from any number of threads need no locking.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use tracing::warn;

use crate::modules::interface::ModuleConstructor;

static GLOBAL: OnceCell<ModuleRegistry> = OnceCell::new();

/// Central registry for all module constructors
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    constructors: HashMap<String, ModuleConstructor>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all bundled modules pre-registered
    pub fn with_core_modules() -> Self {
        let mut registry = Self::new();

        registry.register("log", crate::modules::core::LogModule::create);
        registry.register("fail", crate::modules::core::FailModule::create);
        registry.register("shell", crate::modules::core::ShellModule::create);
        registry.register("file", crate::modules::files::FileModule::create);
        registry.register("directory", crate::modules::files::DirectoryModule::create);

        registry
    }

    /// Associate `name` with a constructor.
    ///
    /// The last registration for a name wins; the constructor it replaced is
    /// returned.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: ModuleConstructor,
    ) -> Option<ModuleConstructor> {
        let name = name.into();
        let previous = self.constructors.insert(name.clone(), constructor);
        if previous.is_some() {
            warn!(module = %name, "module registered twice, replacing earlier constructor");
        }
        previous
    }

    /// Constructor for `name`, or `None` if no such module was registered
    pub fn lookup(&self, name: &str) -> Option<ModuleConstructor> {
        self.constructors.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered module names, sorted
    pub fn list_modules(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Install `registry` as the process-wide table.
    ///
    /// Fails, handing the registry back, if a global registry already
    /// exists; that includes one created implicitly by [`ModuleRegistry::global`].
    pub fn install(registry: ModuleRegistry) -> Result<(), ModuleRegistry> {
        GLOBAL.set(registry)
    }

    /// The process-wide registry, built from the core modules on first use
    /// unless one was installed earlier
    pub fn global() -> &'static ModuleRegistry {
        GLOBAL.get_or_init(Self::with_core_modules)
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.list_modules())
            .finish()
    }
}
