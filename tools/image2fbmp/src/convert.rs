//! Image → FBMP conversion.

use anyhow::Context;
use fbmp_common::{FBMP_EXT, FbmpImage};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::decode::{ImageCrateDecoder, ImageDecoder, RgbaPixels};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("image2fbmp: file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("image2fbmp: error converting image: {0:#}")]
    ConversionFailed(anyhow::Error),
}

/// Output path used when none is given: the input with its extension
/// replaced by `.fbmp`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(FBMP_EXT)
}

/// Convert `input` with the `image` crate decoder
///
/// See [`Converter::convert`].
pub fn convert(input: &Path, output: Option<&Path>) -> Result<PathBuf, ConvertError> {
    Converter::new().convert(input, output)
}

/// Image → FBMP converter, generic over the decoder
#[derive(Debug, Default, Clone)]
pub struct Converter<D = ImageCrateDecoder> {
    decoder: D,
}

impl Converter {
    pub fn new() -> Self {
        Self::with_decoder(ImageCrateDecoder)
    }
}

impl<D: ImageDecoder> Converter<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Convert an image file to `.fbmp`, returning the path written
    ///
    /// A missing input is reported as [`ConvertError::NotFound`] before the
    /// output is touched. Anything else that goes wrong is
    /// [`ConvertError::ConversionFailed`].
    pub fn convert(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf, ConvertError> {
        match input.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(ConvertError::NotFound(input.to_path_buf())),
            Err(e) => {
                return Err(ConvertError::ConversionFailed(anyhow::Error::new(e).context(
                    format!("Failed to access input: {}", input.display()),
                )));
            }
        }

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));

        self.convert_to(input, &output)
            .map_err(ConvertError::ConversionFailed)?;

        Ok(output)
    }

    fn convert_to(&self, input: &Path, output: &Path) -> anyhow::Result<()> {
        ensure_not_same_file(input, output)?;

        let RgbaPixels {
            width,
            height,
            data,
        } = self.decoder.decode(input)?;

        let image = FbmpImage::from_rgba(width, height, data)
            .with_context(|| format!("Invalid pixel data from {}", input.display()))?;
        let bytes = image.to_bytes();

        tracing::debug!(
            "Encoded {}x{} image ({} bytes)",
            width,
            height,
            bytes.len()
        );

        write_atomic(output, &bytes)
            .with_context(|| format!("Failed to write output: {}", output.display()))?;

        tracing::info!("Wrote {:?} ({}x{})", output, width, height);
        Ok(())
    }
}

/// Refuse to overwrite the input image (e.g. converting `foo.fbmp` in place)
fn ensure_not_same_file(input: &Path, output: &Path) -> anyhow::Result<()> {
    if !output.exists() {
        return Ok(());
    }

    let input = std::fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input: {}", input.display()))?;
    let resolved = std::fs::canonicalize(output)
        .with_context(|| format!("Failed to resolve output: {}", output.display()))?;

    anyhow::ensure!(
        input != resolved,
        "Output {} is the input image",
        output.display()
    );
    Ok(())
}

/// Write `bytes` to a temporary file next to `path`, then rename it into place
///
/// An interrupted write never leaves a truncated file at `path`. A symlinked
/// output is written through, and an existing output keeps its permissions;
/// new files get `0666 & !umask` like a plain create.
fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let target = resolve_symlink(path)
        .with_context(|| format!("Failed to resolve output link: {}", path.display()))?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(&target).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".image2fbmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }

    tmp.persist(&target)?;
    Ok(())
}

/// Follow `path` if it is a symlink; dangling links resolve to their target
fn resolve_symlink(path: &Path) -> std::io::Result<PathBuf> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {}
        Ok(_) => return Ok(path.to_path_buf()),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(path.to_path_buf()),
        Err(e) => return Err(e),
    }

    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let link = std::fs::read_link(path)?;
            Ok(path.parent().unwrap_or(Path::new("")).join(link))
        }
        Err(e) => Err(e),
    }
}
