//! Built-in loaders
//!
//! Each decode function maps its library's own "cannot open" error back to
//! an IO error so the resolution loop can keep scanning later directories,
//! and reports everything else as a decode failure that aborts the search.

use crate::{Asset, AssetContext};
use ember_core::{EmberError, LoadOptions, Result};
use kira::sound::static_sound::StaticSoundData;
use kira::sound::FromFileError;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Register the built-in loaders on a context
///
/// Registered types: `text`, `bytes`, `toml`, `image`, `sound`. Each can be
/// replaced by re-registering under the same name.
pub fn register_builtin_loaders(ctx: &mut AssetContext) -> Result<()> {
    ctx.register("text", Arc::new(decode_text))?;
    ctx.register("bytes", Arc::new(decode_bytes))?;
    ctx.register("toml", Arc::new(decode_toml))?;
    ctx.register("image", Arc::new(decode_image))?;
    ctx.register("sound", Arc::new(decode_sound))?;
    Ok(())
}

/// Load a UTF-8 text file as a `String`
fn decode_text(path: &Path, _options: &LoadOptions) -> Result<Asset> {
    let text = fs::read_to_string(path)?;
    Ok(Box::new(text))
}

/// Load a file's raw contents as `Vec<u8>`
fn decode_bytes(path: &Path, _options: &LoadOptions) -> Result<Asset> {
    let bytes = fs::read(path)?;
    Ok(Box::new(bytes))
}

/// Load a TOML document as a `toml::Value`
fn decode_toml(path: &Path, _options: &LoadOptions) -> Result<Asset> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content).map_err(|e| EmberError::DecodeError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(Box::new(value))
}

/// Load an image as an `image::DynamicImage`
///
/// Option `grayscale: bool` converts the decoded image.
fn decode_image(path: &Path, options: &LoadOptions) -> Result<Asset> {
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => EmberError::IoError(io),
        other => EmberError::DecodeError {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;

    let img = if options.bool_opt("grayscale")?.unwrap_or(false) {
        img.grayscale()
    } else {
        img
    };
    Ok(Box::new(img))
}

/// Load a sound file as a `kira` `StaticSoundData`
///
/// Option `volume: float` is an amplitude in `0.0..=1.0` applied to the
/// sound data.
fn decode_sound(path: &Path, options: &LoadOptions) -> Result<Asset> {
    let mut data = StaticSoundData::from_file(path).map_err(|e| match e {
        FromFileError::IoError(io) => EmberError::IoError(io),
        other => EmberError::DecodeError {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;

    if let Some(volume) = options.float_opt("volume")? {
        data = data.volume(amplitude_to_db(volume));
    }
    Ok(Box::new(data))
}

fn amplitude_to_db(amplitude: f64) -> kira::Decibels {
    if amplitude <= 0.0 {
        kira::Decibels(-60.0) // silence
    } else {
        kira::Decibels((20.0 * (amplitude as f32).log10()).max(-60.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeFn, Resolver};
    use ember_config::ConfigProfile;
    use std::path::PathBuf;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ember_builtin_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn scratch_context(base: &PathBuf) -> AssetContext {
        let mut ctx = AssetContext::with_builtin_loaders().unwrap();
        ctx.configs_mut().register(ConfigProfile::new("test", base));
        ctx.configs_mut().set_active_override(Some("test"));
        ctx
    }

    #[test]
    fn test_builtin_loaders_are_registered() {
        let ctx = AssetContext::with_builtin_loaders().unwrap();
        for ty in ["text", "bytes", "toml", "image", "sound"] {
            assert!(ctx.contains(ty), "missing builtin loader: {ty}");
        }
    }

    #[test]
    fn test_text_loader_round_trip() {
        let base = temp_dir();
        let ctx = scratch_context(&base);
        fs::create_dir_all(base.join("text")).unwrap();
        fs::write(base.join("text/hello.txt"), "hi there").unwrap();

        let asset = ctx.load("text", "hello.txt", &LoadOptions::new()).unwrap();
        assert_eq!(*asset.downcast::<String>().unwrap(), "hi there");

        fs::remove_dir_all(base).ok();
    }

    #[test]
    fn test_bytes_loader() {
        let base = temp_dir();
        let ctx = scratch_context(&base);
        fs::create_dir_all(base.join("bytes")).unwrap();
        fs::write(base.join("bytes/blob.bin"), [1u8, 2, 3]).unwrap();

        let asset = ctx.load("bytes", "blob.bin", &LoadOptions::new()).unwrap();
        assert_eq!(*asset.downcast::<Vec<u8>>().unwrap(), vec![1u8, 2, 3]);

        fs::remove_dir_all(base).ok();
    }

    #[test]
    fn test_toml_loader_decodes_value() {
        let base = temp_dir();
        let ctx = scratch_context(&base);
        fs::create_dir_all(base.join("toml")).unwrap();
        fs::write(base.join("toml/level.toml"), "name = \"cavern\"\n").unwrap();

        let asset = ctx.load("toml", "level.toml", &LoadOptions::new()).unwrap();
        let value = asset.downcast::<toml::Value>().unwrap();
        assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("cavern"));

        fs::remove_dir_all(base).ok();
    }

    #[test]
    fn test_toml_loader_rejects_malformed_file() {
        let base = temp_dir();
        let ctx = scratch_context(&base);
        fs::create_dir_all(base.join("toml")).unwrap();
        fs::write(base.join("toml/bad.toml"), "name = ").unwrap();

        let err = ctx
            .load("toml", "bad.toml", &LoadOptions::new())
            .unwrap_err();
        // Malformed content on an existing file is a decode failure, never
        // a not-found.
        assert!(matches!(err, EmberError::DecodeError { .. }));

        fs::remove_dir_all(base).ok();
    }

    #[test]
    fn test_image_loader_rejects_non_image_bytes() {
        let base = temp_dir();
        let ctx = scratch_context(&base);
        fs::create_dir_all(base.join("image")).unwrap();
        fs::write(base.join("image/fake.png"), "not an image").unwrap();

        let err = ctx
            .load("image", "fake.png", &LoadOptions::new())
            .unwrap_err();
        assert!(matches!(err, EmberError::DecodeError { .. }));

        fs::remove_dir_all(base).ok();
    }

    #[test]
    fn test_missing_sound_is_exhaustion_not_decode_error() {
        let base = temp_dir();
        let ctx = scratch_context(&base);
        fs::create_dir_all(base.join("sound")).unwrap();

        let err = ctx
            .load("sound", "silence.ogg", &LoadOptions::new())
            .unwrap_err();
        assert!(matches!(err, EmberError::AssetNotFound { .. }));

        fs::remove_dir_all(base).ok();
    }

    #[test]
    fn test_amplitude_conversion_clamps() {
        assert_eq!(amplitude_to_db(0.0).0, -60.0);
        assert_eq!(amplitude_to_db(1.0).0, 0.0);
        assert!(amplitude_to_db(0.5).0 < 0.0);
        assert!(amplitude_to_db(1e-9).0 >= -60.0);
    }

    #[test]
    fn test_direct_resolver_use_without_registry() {
        let base = temp_dir();
        fs::create_dir_all(base.join("text")).unwrap();
        fs::write(base.join("text/a.txt"), "free-floating").unwrap();

        let profile = ConfigProfile::new("test", &base);
        let resolver = Resolver::new("text", Arc::new(decode_text) as DecodeFn);
        let asset = resolver
            .resolve(&profile, "a.txt", &LoadOptions::new())
            .unwrap();
        assert_eq!(*asset.downcast::<String>().unwrap(), "free-floating");

        fs::remove_dir_all(base).ok();
    }
}
