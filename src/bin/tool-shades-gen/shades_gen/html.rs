#![forbid(unsafe_code)]

use anyhow::Result;
use color_shades::{Color, best_text_color, contrast_ratio_display};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Swatch label: hex, hsl, and the contrast ratio of the chosen text color.
fn swatch_label(shade: Color) -> String {
    let formats = shade.formats();
    let text = best_text_color(shade);
    let ratio = contrast_ratio_display(shade, text.color());
    format!("{} | {} | {ratio}:1", formats.hex, formats.hsl)
}

pub fn write_html_grid(
    title: &str,
    cols: usize,
    shades: &[Color],
    path: impl AsRef<std::path::Path>,
) -> Result<std::path::PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#111;color:#eee;font-family:system-ui}}
  h2{{margin:12px}}
  .g{{display:grid;grid-template-columns:repeat({cols},1fr);gap:6px;padding:8px}}
  .s{{aspect-ratio:3/1;border-radius:10px;display:flex;align-items:center;justify-content:center;
      font-weight:700}}
</style>
<h2>{title}</h2>
<div class="g">"#
    )?;
    for shade in shades {
        let hex = shade.hex();
        let text = best_text_color(*shade);
        writeln!(
            w,
            r#"<div class="s" style="background:{hex};color:{text}">{}</div>"#,
            swatch_label(*shade)
        )?;
    }
    writeln!(w, "</div>")?;
    Ok(path.to_path_buf())
}
