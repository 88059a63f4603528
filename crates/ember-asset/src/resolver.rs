//! Asset resolution
//!
//! A resolver binds an asset-type name to a decode function. Resolving walks
//! the active profile's candidate paths in order and hands the first existing
//! file to the decode function. Missing files are skipped; a decode failure
//! on a file that exists aborts the whole search, so real decoding bugs are
//! never masked as "not found".

use ember_config::ConfigProfile;
use ember_core::{EmberError, LoadOptions, Result};
use std::any::Any;
use std::path::Path;
use std::sync::Arc;

/// A decoded in-memory asset, opaque to the resolution engine
///
/// Callers downcast to the concrete type their decode function produced.
pub type Asset = Box<dyn Any + Send>;

/// A decode collaborator: turns a file path into an in-memory asset
///
/// Expected to report a missing or unopenable file as an `IoError` with
/// `ErrorKind::NotFound` (see [`EmberError::is_missing_file`]) and any
/// genuine decode failure as some other error.
pub type DecodeFn = Arc<dyn Fn(&Path, &LoadOptions) -> Result<Asset> + Send + Sync>;

/// Applied to a successfully decoded asset before it is returned
pub type PostprocessFn = Arc<dyn Fn(Asset) -> Asset + Send + Sync>;

/// The callable bound to an asset type
///
/// Clones share the same decode function; a clone held by a caller remains
/// usable after the registry entry is unregistered.
#[derive(Clone)]
pub struct Resolver {
    asset_type: String,
    decode: DecodeFn,
    postprocess: Option<PostprocessFn>,
}

impl Resolver {
    pub fn new(asset_type: &str, decode: DecodeFn) -> Self {
        Self {
            asset_type: asset_type.to_string(),
            decode,
            postprocess: None,
        }
    }

    pub fn with_postprocess(
        asset_type: &str,
        decode: DecodeFn,
        postprocess: PostprocessFn,
    ) -> Self {
        Self {
            asset_type: asset_type.to_string(),
            decode,
            postprocess: Some(postprocess),
        }
    }

    pub fn asset_type(&self) -> &str {
        &self.asset_type
    }

    /// Resolve a filename against a profile's search paths
    ///
    /// The candidate list is taken from the profile at call time, so profile
    /// mutations and active-profile switches apply without re-registering.
    pub fn resolve(
        &self,
        profile: &ConfigProfile,
        filename: &str,
        options: &LoadOptions,
    ) -> Result<Asset> {
        let search_paths = profile.search_paths(&self.asset_type, filename);
        let asset = resolve_asset(&self.decode, filename, &search_paths, options)?;
        match &self.postprocess {
            Some(post) => Ok(post(asset)),
            None => Ok(asset),
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("asset_type", &self.asset_type)
            .field("postprocess", &self.postprocess.is_some())
            .finish()
    }
}

/// The shared resolution algorithm
///
/// Tries each candidate path in order and returns the first successful
/// decode. A candidate is skipped when the path is not an existing regular
/// file, or when the decode function reports a missing file (it can vanish
/// between the existence check and the open). Any other decode error aborts
/// the search immediately. Exhausting every candidate yields
/// [`EmberError::AssetNotFound`] carrying the full list of attempted paths.
pub fn resolve_asset(
    decode: &DecodeFn,
    filename: &str,
    search_paths: &[std::path::PathBuf],
    options: &LoadOptions,
) -> Result<Asset> {
    for path in search_paths {
        if !path.is_file() {
            continue;
        }
        match decode(path, options) {
            Ok(asset) => return Ok(asset),
            Err(err) if err.is_missing_file() => continue,
            Err(err) => return Err(err),
        }
    }
    Err(EmberError::AssetNotFound {
        filename: filename.to_string(),
        searched: search_paths.to_vec(),
    })
}
