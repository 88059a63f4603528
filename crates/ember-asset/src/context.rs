//! The combined registration and resolution surface
//!
//! An `AssetContext` owns a loader registry and a configuration registry.
//! Contexts are plain constructible values so tests can run isolated
//! instances; one process-default instance is available behind a mutex for
//! convenience call sites.

use crate::{
    register_builtin_loaders, Asset, DecodeFn, LoaderRegistry, PostprocessFn, Resolver,
};
use ember_config::ConfigRegistry;
use ember_core::{LoadOptions, Result};
use std::sync::{Mutex, OnceLock};

/// Loader registry plus configuration profiles
#[derive(Debug, Default)]
pub struct AssetContext {
    configs: ConfigRegistry,
    loaders: LoaderRegistry,
}

impl AssetContext {
    /// Create a context with no loaders and the default profile
    pub fn new() -> Self {
        Self {
            configs: ConfigRegistry::new(),
            loaders: LoaderRegistry::new(),
        }
    }

    /// Create a context with the built-in loaders registered
    pub fn with_builtin_loaders() -> Result<Self> {
        let mut ctx = Self::new();
        register_builtin_loaders(&mut ctx)?;
        Ok(ctx)
    }

    /// The process-default context, built with the built-in loaders
    ///
    /// The built-ins are wired against the `default` profile, so an
    /// environment override naming an unregistered profile cannot leave the
    /// context without loaders; resolving through such an override still
    /// fails loudly at load time. The mutex is the concurrency discipline
    /// for the shared tables; isolated contexts from [`AssetContext::new`]
    /// need no locking.
    pub fn global() -> &'static Mutex<AssetContext> {
        static GLOBAL: OnceLock<Mutex<AssetContext>> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let mut ctx = AssetContext::new();
            ctx.install_builtins_on_default();
            Mutex::new(ctx)
        })
    }

    /// Register a decode function for an asset type
    ///
    /// Builds and stores the resolver, wires the default search directory
    /// (the asset type's own name) on the active profile if none is
    /// configured, and returns the resolver for direct use. Registering over
    /// an existing asset type replaces it.
    pub fn register(&mut self, asset_type: &str, decode: DecodeFn) -> Result<Resolver> {
        self.install(Resolver::new(asset_type, decode))
    }

    /// Register a decode function with a postprocess step
    pub fn register_with(
        &mut self,
        asset_type: &str,
        decode: DecodeFn,
        postprocess: PostprocessFn,
    ) -> Result<Resolver> {
        self.install(Resolver::with_postprocess(asset_type, decode, postprocess))
    }

    /// Register a new asset type with explicit search directories
    ///
    /// `Some(dirs)` replaces the active profile's entry for this type;
    /// `None` wires the default single directory named after the type.
    pub fn define_loader(
        &mut self,
        asset_type: &str,
        dirs: Option<&[&str]>,
        decode: DecodeFn,
    ) -> Result<Resolver> {
        if let Some(dirs) = dirs {
            self.configs
                .active_mut()?
                .set_search_dirs(asset_type, dirs.iter().copied());
        }
        self.register(asset_type, decode)
    }

    /// Remove a loader
    ///
    /// Errors if the asset type was never registered. When
    /// `also_remove_dirs` is set, the active profile's search-directory
    /// entry for the type is removed as well, and its absence is an error
    /// too.
    pub fn unregister(&mut self, asset_type: &str, also_remove_dirs: bool) -> Result<()> {
        self.loaders.remove(asset_type)?;
        if also_remove_dirs {
            self.configs.active_mut()?.remove_search_dirs(asset_type)?;
        }
        Ok(())
    }

    /// Resolve an asset through the registered loader for its type
    ///
    /// Looks up the live resolver and resolves against the profile that is
    /// active right now; switching profiles changes resolution behavior
    /// without re-registering anything.
    pub fn load(&self, asset_type: &str, filename: &str, options: &LoadOptions) -> Result<Asset> {
        let resolver = self.loaders.get(asset_type)?;
        resolver.resolve(self.configs.active()?, filename, options)
    }

    /// Get the registered resolver for an asset type
    pub fn resolver(&self, asset_type: &str) -> Result<&Resolver> {
        self.loaders.get(asset_type)
    }

    /// Whether a loader is registered for this asset type
    pub fn contains(&self, asset_type: &str) -> bool {
        self.loaders.contains(asset_type)
    }

    pub fn loaders(&self) -> &LoaderRegistry {
        &self.loaders
    }

    pub fn configs(&self) -> &ConfigRegistry {
        &self.configs
    }

    pub fn configs_mut(&mut self) -> &mut ConfigRegistry {
        &mut self.configs
    }

    /// Register the built-in loaders against the `default` profile,
    /// regardless of the current active override
    ///
    /// The override is restored afterwards. With the override cleared,
    /// registration resolves the seeded `default` profile and cannot fail.
    fn install_builtins_on_default(&mut self) {
        let saved = self.configs.active_override().map(str::to_string);
        self.configs.set_active_override(None);
        let wired = register_builtin_loaders(self);
        debug_assert!(wired.is_ok(), "default profile missing");
        self.configs.set_active_override(saved.as_deref());
    }

    fn install(&mut self, resolver: Resolver) -> Result<Resolver> {
        self.configs
            .active_mut()?
            .ensure_default_dir(resolver.asset_type());
        self.loaders.insert(resolver.clone());
        Ok(resolver)
    }
}
