//! SVG document framing: header, styles, legend, footer.

use std::io::Write;

use anyhow::Result;

use crate::render::RenderSpec;
use super::path::escape_xml;

/// Write the XML declaration, opening `<svg>` tag and background.
pub(super) fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64, title: &str) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.3} {height:.3}">"##)?;
    writeln!(writer, "<title>{}</title>", escape_xml(title))?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    Ok(())
}

/// Write styles; `opacity` applies to highlighted fills.
pub(super) fn write_svg_styles<W: Write>(writer: &mut W, opacity: f64) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .area {{ fill: #e5e7eb; stroke: #111827; stroke-width: 0.5; vector-effect: non-scaling-stroke; }}
    .hl {{ fill-opacity: {opacity}; }}
    .hl:hover {{ fill-opacity: 1; stroke-width: 1.5; }}
    .legend {{ font: 11px sans-serif; fill: #111827; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write a horizontal gradient bar labelled with the fixed color domain.
pub(super) fn write_svg_legend<W: Write>(writer: &mut W, spec: &RenderSpec, x: f64, y: f64, width: f64) -> Result<()> {
    writeln!(writer, r##"<linearGradient id="scale" x1="0" x2="1" y1="0" y2="0">"##)?;
    for (offset, color) in spec.color_scale.to_stop_list() {
        writeln!(writer, r##"<stop offset="{offset:.3}" stop-color="{color}"/>"##)?;
    }
    writeln!(writer, "</linearGradient>")?;

    let bar_width = (width / 2.0).max(1.0);
    writeln!(writer, r##"<rect x="{x:.3}" y="{y:.3}" width="{bar_width:.3}" height="10" fill="url(#scale)"/>"##)?;
    writeln!(writer, r##"<text class="legend" x="{x:.3}" y="{:.3}">{}</text>"##, y + 24.0, spec.color_domain.min())?;
    writeln!(writer, r##"<text class="legend" x="{:.3}" y="{:.3}" text-anchor="end">{}</text>"##,
        x + bar_width, y + 24.0, spec.color_domain.max())?;
    writeln!(writer, r##"<text class="legend" x="{:.3}" y="{:.3}">{}</text>"##,
        x + bar_width + 8.0, y + 9.0, escape_xml(&spec.value_label))?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(super) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
