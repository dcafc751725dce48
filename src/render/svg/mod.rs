//! Static SVG export with native `<title>` hover tooltips.

mod path;
mod writer;

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use geo::Coord;

use super::RenderArtifact;
use path::{escape_xml, multipolygon_to_path};
use writer::{write_svg_footer, write_svg_header, write_svg_legend, write_svg_styles};

const MARGIN: f64 = 10.0;

impl RenderArtifact {
    /// Render to an SVG string `width` pixels wide.
    pub fn to_svg_string(&self, width: f64) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_svg_to(&mut buffer, width)?;
        String::from_utf8(buffer).context("[render::svg] SVG output is not valid UTF-8")
    }

    /// Render to an SVG file at `path`.
    pub fn write_svg(&self, path: &Path, width: f64) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[render::svg] Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_svg_to(&mut writer, width)?;
        writer.flush()
            .with_context(|| format!("[render::svg] Failed to write {}", path.display()))
    }

    /// Render to any writer. Regions without parsed geometry are skipped;
    /// an empty collection yields a valid SVG with only the frame and legend.
    pub fn write_svg_to<W: Write>(&self, writer: &mut W, width: f64) -> Result<()> {
        let width = width.max(2.0 * MARGIN + 1.0);
        let inner = width - 2.0 * MARGIN;

        let bounds = self.features.bounds();

        // Equirectangular projection with longitude scaled by cos(mid latitude), Y down.
        let (scale_x, scale_y, height, origin) = match bounds {
            Some(rect) => {
                let mid_lat = (rect.min().y + rect.max().y) / 2.0;
                let aspect = mid_lat.to_radians().cos().abs().max(1e-6);
                let span_x = (rect.width() * aspect).max(f64::EPSILON);
                let scale = inner / span_x;
                let height = rect.height() * scale + 2.0 * MARGIN;
                (scale * aspect, scale, height, Coord { x: rect.min().x, y: rect.max().y })
            }
            None => (1.0, 1.0, width, Coord { x: 0.0, y: 0.0 }),
        };
        let project = move |coord: &Coord<f64>| -> (f64, f64) {
            (MARGIN + (coord.x - origin.x) * scale_x, MARGIN + (origin.y - coord.y) * scale_y)
        };

        let legend_height = 40.0;
        write_svg_header(writer, width, height + legend_height, &self.spec.title)?;
        write_svg_styles(writer, self.spec.opacity)?;

        for (feature, region) in self.features.iter().zip(self.regions.iter()) {
            let Some(shape) = feature.shape.as_ref() else { continue };
            let d = multipolygon_to_path(shape, &project);
            match (&region.fill, &region.hover) {
                (Some(fill), Some(hover)) => writeln!(
                    writer,
                    r#"<path class="area hl" data-area-code="{}" d="{}" style="fill:{}"><title>{}</title></path>"#,
                    region.area_code,
                    d,
                    fill.to_hex(),
                    escape_xml(&hover.plain(&self.spec.value_label)),
                )?,
                _ => writeln!(
                    writer,
                    r#"<path class="area" data-area-code="{}" d="{}"><title>{}</title></path>"#,
                    region.area_code,
                    d,
                    escape_xml(&region.feature_name),
                )?,
            }
        }

        write_svg_legend(writer, &self.spec, MARGIN, height + 8.0, inner)?;
        write_svg_footer(writer)?;
        Ok(())
    }
}
