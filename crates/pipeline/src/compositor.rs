//! Layered PNG compositing.
//!
//! [`render_image`] stacks the part images of an [`AssetSpecification`]
//! onto a transparent canvas in [`LAYER_ORDER`](vikings_core::slot::LAYER_ORDER),
//! scales the result to [`OUTPUT_SIZE`] and encodes it into a temporary file
//! inside the output directory. Nothing appears at `viking_{number}.png`
//! until [`RenderedImage::persist`] renames it into place, so readers never
//! observe a partial image and a dropped render leaves no trace.
//!
//! This is blocking file I/O; async callers run it on
//! `tokio::task::spawn_blocking`.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use tempfile::NamedTempFile;
use vikings_core::config::AssetConfig;
use vikings_core::slot::Slot;
use vikings_core::specification::AssetSpecification;
use vikings_core::types::VikingNumber;

use crate::error::GenerationError;

/// Edge length of every composited image, in pixels.
pub const OUTPUT_SIZE: u32 = 1024;

/// A fully encoded image waiting in the output directory under a temporary
/// name. Dropping it deletes the file.
#[derive(Debug)]
pub struct RenderedImage {
    number: VikingNumber,
    file: NamedTempFile,
    target: PathBuf,
}

impl RenderedImage {
    /// Final location the image is renamed to by [`persist`](Self::persist).
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rename the image into `viking_{number}.png`, replacing any existing
    /// file for the same number.
    pub fn persist(self) -> Result<PathBuf, GenerationError> {
        let Self {
            number,
            file,
            target,
        } = self;
        file.persist(&target).map_err(|e| {
            composite_error(number, format!("rename into {}: {}", target.display(), e.error))
        })?;
        Ok(target)
    }
}

/// Composite the layers of `spec` into a temporary file in `output_dir`.
///
/// Missing assets are all reported together. On failure nothing is left
/// in `output_dir`.
pub fn render_image(
    spec: &AssetSpecification,
    output_dir: &Path,
) -> Result<RenderedImage, GenerationError> {
    let number = spec.number;
    let layers = spec.layers();

    let missing: Vec<(Slot, PathBuf)> = layers
        .iter()
        .filter(|(_, path)| !path.is_file())
        .map(|(slot, path)| (*slot, path.to_path_buf()))
        .collect();
    if !missing.is_empty() {
        for (slot, path) in &missing {
            tracing::warn!(
                number,
                slot = slot.key(),
                path = %path.display(),
                "Asset file missing"
            );
        }
        return Err(GenerationError::MissingAsset { number, missing });
    }

    let mut decoded = Vec::with_capacity(layers.len());
    for (slot, path) in &layers {
        let layer = image::open(path)
            .map_err(|e| {
                composite_error(
                    number,
                    format!("decode {} ({}): {e}", slot.key(), path.display()),
                )
            })?
            .to_rgba8();
        decoded.push(layer);
    }

    let canvas = flatten(&decoded);
    let canvas = if canvas.dimensions() == (OUTPUT_SIZE, OUTPUT_SIZE) {
        canvas
    } else {
        imageops::resize(&canvas, OUTPUT_SIZE, OUTPUT_SIZE, FilterType::Lanczos3)
    };

    let file = encode_to_temp(number, &canvas, output_dir)?;
    let target = output_dir.join(AssetConfig::image_file_name(number));

    tracing::debug!(
        number,
        layers = layers.len(),
        path = %target.display(),
        "Viking image rendered"
    );
    Ok(RenderedImage {
        number,
        file,
        target,
    })
}

/// Render and immediately persist. Returns the path of the written image.
pub fn compose_image(
    spec: &AssetSpecification,
    output_dir: &Path,
) -> Result<PathBuf, GenerationError> {
    render_image(spec, output_dir)?.persist()
}

/// Alpha-composite `layers` in order onto a transparent canvas large
/// enough for the biggest layer. Layers are anchored at the top-left.
fn flatten(layers: &[RgbaImage]) -> RgbaImage {
    let width = layers.iter().map(RgbaImage::width).max().unwrap_or(OUTPUT_SIZE);
    let height = layers.iter().map(RgbaImage::height).max().unwrap_or(OUTPUT_SIZE);

    let mut canvas = RgbaImage::new(width, height);
    for layer in layers {
        imageops::overlay(&mut canvas, layer, 0, 0);
    }
    canvas
}

fn encode_to_temp(
    number: VikingNumber,
    canvas: &RgbaImage,
    output_dir: &Path,
) -> Result<NamedTempFile, GenerationError> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        composite_error(number, format!("create {}: {e}", output_dir.display()))
    })?;

    // Dropping the temp file on any error below removes it.
    let mut tmp = NamedTempFile::new_in(output_dir)
        .map_err(|e| composite_error(number, format!("create temp file: {e}")))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        canvas
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| composite_error(number, format!("encode png: {e}")))?;
        writer
            .flush()
            .map_err(|e| composite_error(number, format!("flush png: {e}")))?;
    }
    Ok(tmp)
}

fn composite_error(number: VikingNumber, message: String) -> GenerationError {
    GenerationError::Composite { number, message }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use assert_matches::assert_matches;
    use image::Rgba;
    use vikings_core::config::DEFAULT_DESCRIPTION;
    use vikings_core::input::RawTraitInput;
    use vikings_core::specification::build_specification;

    use super::*;

    pub(crate) const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    pub(crate) const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    pub(crate) fn asset_config(root: &Path) -> AssetConfig {
        AssetConfig {
            assets_dir: root.join("assets"),
            output_dir: root.join("output"),
            image_base_uri: "https://vikings.test/images".into(),
            description: DEFAULT_DESCRIPTION.into(),
        }
    }

    /// Every equipment slot above its lowest tier, so all nine layers exist.
    pub(crate) fn full_input() -> RawTraitInput {
        RawTraitInput {
            appearance: 15032704,
            boots: 50,
            speed: 60,
            bottoms: 20,
            stamina: 80,
            helmet: 30,
            intelligence: 40,
            shield: 75,
            defence: 92,
            weapon: 10,
            attack: 97,
        }
    }

    fn write_png(path: &Path, image: &RgbaImage) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        image.save(path).unwrap();
    }

    /// Write an 8x8 fully transparent PNG for every layer of `spec`.
    pub(crate) fn write_clear_layers(spec: &AssetSpecification) {
        for (_, path) in spec.layers() {
            write_png(path, &RgbaImage::from_pixel(8, 8, CLEAR));
        }
    }

    fn spec_for(config: &AssetConfig, input: &RawTraitInput) -> AssetSpecification {
        build_specification(config, 7, input).unwrap()
    }

    fn temp_files(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| p.file_name().unwrap() != "viking_7.png")
            .collect()
    }

    #[test]
    fn writes_square_output_image() {
        let dir = tempfile::tempdir().unwrap();
        let config = asset_config(dir.path());
        let spec = spec_for(&config, &full_input());
        write_clear_layers(&spec);

        let path = compose_image(&spec, &config.output_dir).unwrap();

        assert_eq!(path, config.output_path(7));
        let written = image::open(&path).unwrap();
        assert_eq!(written.width(), OUTPUT_SIZE);
        assert_eq!(written.height(), OUTPUT_SIZE);
        assert!(temp_files(&config.output_dir).is_empty());
    }

    #[test]
    fn later_layers_render_on_top() {
        let dir = tempfile::tempdir().unwrap();
        let config = asset_config(dir.path());
        let spec = spec_for(&config, &full_input());
        write_clear_layers(&spec);

        // Body is the bottom layer and fully red; the weapon is the top
        // layer and covers only the left half in blue.
        write_png(&spec.file_paths.body, &RgbaImage::from_pixel(8, 8, RED));
        let mut weapon = RgbaImage::from_pixel(8, 8, CLEAR);
        for y in 0..8 {
            for x in 0..4 {
                weapon.put_pixel(x, y, BLUE);
            }
        }
        write_png(spec.file_paths.weapon.as_ref().unwrap(), &weapon);

        let path = compose_image(&spec, &config.output_dir).unwrap();
        let written = image::open(&path).unwrap().to_rgba8();

        let left = written.get_pixel(0, OUTPUT_SIZE / 2);
        assert!(left[2] >= 250 && left[0] <= 5, "left edge should be weapon blue: {left:?}");
        let right = written.get_pixel(OUTPUT_SIZE - 1, OUTPUT_SIZE / 2);
        assert!(right[0] >= 250 && right[2] <= 5, "right edge should be body red: {right:?}");
    }

    #[test]
    fn absent_equipment_is_not_layered() {
        let dir = tempfile::tempdir().unwrap();
        let config = asset_config(dir.path());
        let input = RawTraitInput {
            intelligence: 0,
            defence: 9,
            attack: 3,
            ..full_input()
        };
        let spec = spec_for(&config, &input);
        assert_eq!(spec.layers().len(), 6);
        write_clear_layers(&spec);

        assert!(compose_image(&spec, &config.output_dir).is_ok());
    }

    #[test]
    fn missing_assets_are_all_reported_and_nothing_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let config = asset_config(dir.path());
        let spec = spec_for(&config, &full_input());
        write_clear_layers(&spec);
        std::fs::remove_file(&spec.file_paths.face).unwrap();
        std::fs::remove_file(spec.file_paths.shield.as_ref().unwrap()).unwrap();

        let err = compose_image(&spec, &config.output_dir).unwrap_err();

        assert_matches!(err, GenerationError::MissingAsset { number: 7, ref missing } => {
            assert_eq!(missing.len(), 2);
            assert_eq!(missing[0].0, Slot::Face);
            assert_eq!(missing[1].0, Slot::Shield);
        });
        assert!(!config.output_path(7).exists());
    }

    #[test]
    fn undecodable_asset_is_a_composite_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = asset_config(dir.path());
        let spec = spec_for(&config, &full_input());
        write_clear_layers(&spec);
        std::fs::write(&spec.file_paths.top, b"not a png").unwrap();

        let err = compose_image(&spec, &config.output_dir).unwrap_err();

        assert_matches!(err, GenerationError::Composite { number: 7, ref message } => {
            assert!(message.contains("top"), "{message}");
        });
        assert!(!config.output_path(7).exists());
    }

    #[test]
    fn composing_twice_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let config = asset_config(dir.path());
        let spec = spec_for(&config, &full_input());
        write_clear_layers(&spec);
        write_png(&spec.file_paths.body, &RgbaImage::from_pixel(8, 8, RED));

        let first = compose_image(&spec, &config.output_dir).unwrap();
        let first_bytes = std::fs::read(&first).unwrap();
        let second = compose_image(&spec, &config.output_dir).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_bytes, std::fs::read(&second).unwrap());
        assert!(temp_files(&config.output_dir).is_empty());
    }

    #[test]
    fn dropped_render_leaves_output_dir_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = asset_config(dir.path());
        let spec = spec_for(&config, &full_input());
        write_clear_layers(&spec);

        let rendered = render_image(&spec, &config.output_dir).unwrap();
        assert_eq!(rendered.target(), config.output_path(7));
        assert!(!config.output_path(7).exists());
        assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 1);

        drop(rendered);

        assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }
}
