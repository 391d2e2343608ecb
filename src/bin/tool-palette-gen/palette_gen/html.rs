#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Result;
use brandforge_back::color::{
    contrast::is_light,
    harmony::{HarmonyPalette, SemanticSuggestions},
};

/// Label ink for a swatch background.
#[inline]
fn ink(hex: &str) -> &'static str {
    if is_light(hex) { "#1a1a1a" } else { "#f5f5f5" }
}

pub fn write_preview(
    seed: &str,
    harmonies: &[HarmonyPalette],
    semantics: &SemanticSuggestions,
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
  .g{{display:grid;grid-template-columns:repeat(3,1fr);gap:6px;padding:8px}}
  .s{{aspect-ratio:3/1;border-radius:10px;display:flex;align-items:center;justify-content:center;font-weight:700}}
</style>
<h1 style="margin:12px">Palette options for {seed}</h1>"#
    )?;

    for palette in harmonies {
        writeln!(w, "<h2>{}</h2>\n<div class=\"g\">", palette.name)?;
        for color in &palette.colors {
            writeln!(
                w,
                r#"<div class="s" style="background:{hex};color:{ink}">{role} | {hex}</div>"#,
                hex = color.hex,
                ink = ink(&color.hex),
                role = color.role
            )?;
        }
        writeln!(w, "</div>")?;
    }

    for (label, options) in [
        ("Success", &semantics.success),
        ("Warning", &semantics.warning),
        ("Error", &semantics.error),
        ("Info", &semantics.info),
    ] {
        writeln!(w, "<h2>{label} options</h2>\n<div class=\"g\">")?;
        for hex in options {
            writeln!(
                w,
                r#"<div class="s" style="background:{hex};color:{ink}">{hex}</div>"#,
                ink = ink(hex)
            )?;
        }
        writeln!(w, "</div>")?;
    }

    Ok(path.to_path_buf())
}
