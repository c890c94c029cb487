//! The external document skeleton the generated rows are substituted into.
//!
//! A template is plain FODS text containing one marker token (by default
//! `TABLE_ROWS`) where the table rows belong. It must also declare every
//! style the encoder references, so [`Template::parse`] checks both before
//! handing out a template.

use crate::common::{Error, Result};
use crate::odf::constants::{REFERENCED_STYLES, TABLE_ROWS_MARKER};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::Path;

static BUNDLED_TEMPLATE: &str = include_str!("../../../templates/empty-file.fods");

/// A validated document template.
///
/// # Examples
///
/// ```
/// use fods::odf::fods::Template;
///
/// # fn main() -> fods::Result<()> {
/// let template = Template::bundled()?;
/// let doc = template.render("<table:table-row/>");
/// assert!(doc.contains("<table:table-row/>"));
/// assert!(!doc.contains("TABLE_ROWS"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    marker: String,
    styles: Vec<String>,
}

impl Template {
    /// Parse a template that uses the default `TABLE_ROWS` marker.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        Self::with_marker(source, TABLE_ROWS_MARKER)
    }

    /// Parse a template with a custom marker token.
    pub fn with_marker(source: impl Into<String>, marker: &str) -> Result<Self> {
        let template = Self::unchecked(source, marker)?;
        for style in REFERENCED_STYLES {
            if !template.declares_style(style) {
                return Err(Error::MissingStyle(style.to_string()));
            }
        }
        Ok(template)
    }

    /// Parse a template, checking the marker but not the style catalog.
    ///
    /// For skeletons whose styles are supplied some other way, e.g. through
    /// an external `styles.xml`.
    pub fn unchecked(source: impl Into<String>, marker: &str) -> Result<Self> {
        let source = source.into();
        if marker.is_empty() {
            return Err(Error::Other("Template marker must not be empty".to_string()));
        }

        match source.matches(marker).count() {
            0 => return Err(Error::MissingMarker(marker.to_string())),
            1 => {},
            count => {
                return Err(Error::DuplicateMarker {
                    marker: marker.to_string(),
                    count,
                });
            },
        }

        let styles = scan_style_names(&source)?;
        Ok(Self {
            source,
            marker: marker.to_string(),
            styles,
        })
    }

    /// Load and validate a template file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(source)
    }

    /// The stock single-sheet template shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_TEMPLATE)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of all `style:style` elements in the template.
    pub fn style_names(&self) -> &[String] {
        &self.styles
    }

    pub fn declares_style(&self, name: &str) -> bool {
        self.styles.iter().any(|s| s == name)
    }

    /// Substitute `fragment` for the marker.
    pub fn render(&self, fragment: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + fragment.len());
        // Marker uniqueness is checked at construction.
        if let Some((head, tail)) = self.source.split_once(self.marker.as_str()) {
            out.push_str(head);
            out.push_str(fragment);
            out.push_str(tail);
        } else {
            out.push_str(&self.source);
        }
        out
    }
}

fn scan_style_names(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut names = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.name().as_ref() == b"style:style" => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"style:name" {
                        names.push(String::from_utf8_lossy(&attr.value).into_owned());
                    }
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::constants::{FODS_MIME_TYPE, OFFICE_VERSION, SHEET_NAME};
    use std::io::Write;

    fn minimal(styles: &[&str], body: &str) -> String {
        let decls: String = styles
            .iter()
            .map(|s| format!(r#"<style:style style:name="{}" style:family="table-cell"/>"#, s))
            .collect();
        format!(
            r#"<office:document><office:automatic-styles>{}</office:automatic-styles><table:table>{}</table:table></office:document>"#,
            decls, body
        )
    }

    #[test]
    fn test_bundled_template_is_valid() {
        let template = Template::bundled().unwrap();
        for style in REFERENCED_STYLES {
            assert!(template.declares_style(style), "missing {}", style);
        }
        assert_eq!(template.marker(), "TABLE_ROWS");
        assert!(template
            .source()
            .contains(&format!(r#"table:name="{}""#, SHEET_NAME)));
        assert!(template
            .source()
            .contains(&format!(r#"office:version="{}""#, OFFICE_VERSION)));
        assert!(template
            .source()
            .contains(&format!(r#"office:mimetype="{}""#, FODS_MIME_TYPE)));
    }

    #[test]
    fn test_render_replaces_marker() {
        let template = Template::parse(minimal(REFERENCED_STYLES, "TABLE_ROWS")).unwrap();
        let doc = template.render("<row/>");
        assert!(doc.contains("<table:table><row/></table:table>"));
    }

    #[test]
    fn test_render_empty_fragment() {
        let template = Template::parse(minimal(REFERENCED_STYLES, "TABLE_ROWS")).unwrap();
        assert!(template.render("").contains("<table:table></table:table>"));
    }

    #[test]
    fn test_missing_marker_is_rejected() {
        let err = Template::parse(minimal(REFERENCED_STYLES, "")).unwrap_err();
        assert!(matches!(err, Error::MissingMarker(ref m) if m == "TABLE_ROWS"));
    }

    #[test]
    fn test_duplicate_marker_is_rejected() {
        let err = Template::parse(minimal(REFERENCED_STYLES, "TABLE_ROWS TABLE_ROWS")).unwrap_err();
        assert!(matches!(err, Error::DuplicateMarker { count: 2, .. }));
    }

    #[test]
    fn test_missing_style_is_rejected() {
        let err = Template::parse(minimal(&["ce1", "ce2", "ce3", "ro1"], "TABLE_ROWS")).unwrap_err();
        assert!(matches!(err, Error::MissingStyle(ref s) if s == "ce4"));
    }

    #[test]
    fn test_unchecked_skips_style_catalog() {
        let template = Template::unchecked(minimal(&[], "TABLE_ROWS"), "TABLE_ROWS").unwrap();
        assert!(template.style_names().is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let template = Template::with_marker(minimal(REFERENCED_STYLES, "{{rows}}"), "{{rows}}").unwrap();
        assert!(template.render("X").contains("<table:table>X</table:table>"));
        assert!(Template::with_marker(minimal(REFERENCED_STYLES, "x"), "").is_err());
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        let err = Template::parse("<a>TABLE_ROWS</b>").unwrap_err();
        assert!(matches!(err, Error::XmlError(_)));
    }

    #[test]
    fn test_open_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(minimal(REFERENCED_STYLES, "TABLE_ROWS").as_bytes())
            .unwrap();
        let template = Template::open(file.path()).unwrap();
        assert_eq!(template.style_names().len(), REFERENCED_STYLES.len());

        assert!(matches!(
            Template::open(file.path().with_extension("missing")),
            Err(Error::Io(_))
        ));
    }
}
