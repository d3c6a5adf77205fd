use std::path::Path;

use image::{RgbaImage, imageops};
use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    alpha::binarize_alpha,
    chroma_key::ChromaKeySegmenter,
    common::error::{ExtractionError, Result},
    conversions::{ExtractionConfig, ExtractionReport, IconOutcome},
    grid::IconLayout,
    png::{PngWriter, StandardPngWriter},
    source::{ImageCrateReader, SourceReader},
    trim::trim_transparent,
};

pub struct SpriteToIconsPipeline<R: SourceReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: ExtractionConfig,
}

impl SpriteToIconsPipeline<ImageCrateReader, StandardPngWriter> {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: SourceReader, W: PngWriter> SpriteToIconsPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ExtractionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Keys out the background of one cell, hardens its alpha and trims it.
    pub fn process_cell(&self, cell: RgbaImage) -> RgbaImage {
        self.run_cell(cell).0
    }

    fn run_cell(&self, mut cell: RgbaImage) -> (RgbaImage, bool) {
        let segmenter = ChromaKeySegmenter::new(self.config.chroma_key.clone());

        let mask = {
            let _span = tracing::debug_span!("chroma_key").entered();
            segmenter.remove_background(&mut cell)
        };

        {
            let _span = tracing::debug_span!("binarize_alpha", threshold = self.config.alpha_threshold).entered();
            binarize_alpha(&mut cell, self.config.alpha_threshold);
        }

        let degenerate = !cell.pixels().any(|p| p[3] > 0);
        debug!(
            background = mask.count(),
            degenerate,
            "Cell keyed"
        );

        let trimmed = {
            let _span = tracing::debug_span!("trim", padding = self.config.padding).entered();
            trim_transparent(&cell, self.config.padding)
        };

        (trimmed, degenerate)
    }

    fn write_icon(&self, code: &str, image: &RgbaImage, path: &Path) -> Result<()> {
        let _span = tracing::debug_span!("write_icon", code).entered();

        let unwritable = |reason: String| ExtractionError::DestinationUnwritable {
            identifier: code.to_string(),
            path: path.to_path_buf(),
            reason,
        };

        let mut file = std::fs::File::create(path).map_err(|e| unwritable(e.to_string()))?;
        self.writer
            .write_png(image, &mut file, self.config.compression)
            .map_err(|e| unwritable(e.to_string()))?;

        Ok(())
    }

    /// Cuts every identifier's cell out of `source` and writes it to
    /// `output_dir` as `<code>.png`.
    ///
    /// The layout and grid are validated before the output directory is
    /// touched. Existing files are overwritten. The first write failure
    /// aborts the run; icons written before it are kept.
    #[instrument(skip_all, fields(icons = layout.len(), output = %output_dir.as_ref().display()))]
    pub fn extract<P: AsRef<Path>>(
        &self,
        source: &RgbaImage,
        layout: &IconLayout,
        output_dir: P,
    ) -> Result<ExtractionReport> {
        let output_dir = output_dir.as_ref();

        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(ExtractionError::SourceUnreadable(format!(
                "source image has no pixels ({}x{})",
                width, height
            )));
        }

        layout.validate()?;
        let grid = layout.grid();
        let (cell_width, cell_height) = grid.cell_size(width, height)?;

        info!(
            width,
            height,
            columns = grid.columns,
            rows = grid.rows,
            cell_width,
            cell_height,
            "Slicing sprite sheet"
        );

        std::fs::create_dir_all(output_dir).map_err(|e| ExtractionError::DestinationDirUnwritable {
            path: output_dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let total = layout.len();
        let mut report = ExtractionReport {
            output_dir: output_dir.to_path_buf(),
            cell_width,
            cell_height,
            icons: Vec::with_capacity(total),
        };

        for cell in layout.descriptors() {
            let _span = tracing::info_span!("cell", index = cell.index, code = %cell.code).entered();

            let bounds = grid.cell_bounds(cell.column, cell.row, cell_width, cell_height);
            let crop = imageops::crop_imm(source, bounds.left, bounds.top, cell_width, cell_height).to_image();

            let (icon, degenerate) = self.run_cell(crop);

            let path = output_dir.join(format!("{}.png", cell.code));
            self.write_icon(&cell.code, &icon, &path)?;

            info!(
                width = icon.width(),
                height = icon.height(),
                degenerate,
                "[{:>2}/{}] Saved {}.png ({})",
                cell.index + 1,
                total,
                cell.code,
                cell.label
            );

            report.icons.push(IconOutcome {
                index: cell.index,
                code: cell.code,
                label: cell.label,
                path,
                source_bounds: bounds,
                width: icon.width(),
                height: icon.height(),
                degenerate,
            });
        }

        info!(
            "Extracted {} icons to {}",
            report.len(),
            output_dir.display()
        );
        Ok(report)
    }

    /// Reads and decodes `source_path`, then runs [`Self::extract`].
    ///
    /// Nothing is written when the source cannot be read.
    #[instrument(skip_all, fields(source = %source_path.as_ref().display()))]
    pub fn extract_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source_path: P,
        layout: &IconLayout,
        output_dir: Q,
    ) -> Result<ExtractionReport> {
        let source_path = source_path.as_ref();

        let data = {
            let _span = tracing::info_span!("read_source").entered();
            std::fs::read(source_path).map_err(|e| {
                ExtractionError::SourceUnreadable(format!("{}: {}", source_path.display(), e))
            })?
        };

        let source = {
            let _span = tracing::info_span!("decode_source", bytes = data.len()).entered();
            self.reader.read_source(&data).map_err(|e| match e {
                ExtractionError::SourceUnreadable(msg) => {
                    ExtractionError::SourceUnreadable(format!("{}: {}", source_path.display(), msg))
                }
                other => other,
            })?
        };

        self.extract(&source, layout, output_dir)
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExtractionConfig) {
        self.config = config;
    }
}
