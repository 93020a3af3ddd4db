use crate::manifest::Manifest;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Recognized icon style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Regular,
    Solid,
    Brands,
}

impl Style {
    /// Resolve a style tag from the manifest; unrecognized tags map to None
    pub fn from_tag(tag: &str) -> Option<Style> {
        match tag {
            "regular" => Some(Style::Regular),
            "solid" => Some(Style::Solid),
            "brands" => Some(Style::Brands),
            _ => None,
        }
    }

    /// Resource identifier prefix for this style
    pub fn prefix(self) -> &'static str {
        match self {
            Style::Regular => "fa",
            Style::Solid => "fas",
            Style::Brands => "fab",
        }
    }
}

/// Render a single `<string>` element for one (icon, style) pair.
///
/// Hyphens in the icon name become underscores so the identifier is valid
/// as an Android resource name. The codepoint is emitted as a numeric
/// character reference and is not validated here.
fn render_entry(style: Style, name: &str, unicode: &str) -> String {
    format!(
        "    <string name=\"{}_{}\">&#x{};</string>",
        style.prefix(),
        name.replace('-', "_"),
        unicode
    )
}

/// Build the full strings.xml document from a parsed manifest.
///
/// Entries are sorted byte-wise by their rendered text, so the output is
/// stable regardless of manifest order.
pub fn build_strings_xml(manifest: &Manifest) -> String {
    let mut entries: Vec<String> = Vec::new();

    for (name, record) in manifest {
        for tag in &record.styles {
            if let Some(style) = Style::from_tag(tag) {
                entries.push(render_entry(style, name, &record.unicode));
            }
        }
    }

    entries.sort();

    format!("<resources>\n{}\n</resources>", entries.join("\n"))
}

/// Write the generated document, replacing any existing file
pub fn write_strings(xml: &str, output_path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;

    file.write_all(xml.as_bytes())
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(())
}
