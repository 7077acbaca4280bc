//! Style definitions part (word/styles.xml)
//!
//! A new document carries its own styles part so the style ids used by
//! headings and tables resolve without a template.

use crate::error::{Error, Result};
use crate::xml::{self, XmlElement};

/// Style id of level-0 headings
pub const TITLE: &str = "Title";
/// Table style with single-line borders on every edge
pub const TABLE_GRID: &str = "TableGrid";

const BODY_FONT: &str = "Calibri";
/// Highest heading level Word defines a built-in style for
pub const MAX_HEADING_LEVEL: u8 = 9;

struct HeadingLook {
    size: Option<u32>,
    color: &'static str,
    bold: bool,
    italic: bool,
    space_before: u32,
}

// Built-in Word 2010 heading looks, levels 1..=9
const HEADINGS: [HeadingLook; 9] = [
    HeadingLook {
        size: Some(28),
        color: "365F91",
        bold: true,
        italic: false,
        space_before: 480,
    },
    HeadingLook {
        size: Some(26),
        color: "4F81BD",
        bold: true,
        italic: false,
        space_before: 200,
    },
    HeadingLook {
        size: None,
        color: "4F81BD",
        bold: true,
        italic: false,
        space_before: 200,
    },
    HeadingLook {
        size: None,
        color: "4F81BD",
        bold: true,
        italic: true,
        space_before: 200,
    },
    HeadingLook {
        size: None,
        color: "243F60",
        bold: false,
        italic: false,
        space_before: 200,
    },
    HeadingLook {
        size: None,
        color: "243F60",
        bold: false,
        italic: true,
        space_before: 200,
    },
    HeadingLook {
        size: None,
        color: "404040",
        bold: false,
        italic: true,
        space_before: 200,
    },
    HeadingLook {
        size: Some(20),
        color: "404040",
        bold: false,
        italic: false,
        space_before: 200,
    },
    HeadingLook {
        size: Some(20),
        color: "404040",
        bold: false,
        italic: true,
        space_before: 200,
    },
];

/// Style id for a heading level: `Title` for 0, `HeadingN` for 1..=9
pub fn heading_style(level: u8) -> Result<String> {
    match level {
        0 => Ok(TITLE.to_string()),
        1..=MAX_HEADING_LEVEL => Ok(format!("Heading{}", level)),
        _ => Err(Error::InvalidHeadingLevel(level)),
    }
}

/// Inverse of [`heading_style`]
pub fn heading_level(style: &str) -> Option<u8> {
    if style == TITLE {
        return Some(0);
    }
    let level: u8 = style.strip_prefix("Heading")?.parse().ok()?;
    (1..=MAX_HEADING_LEVEL).contains(&level).then_some(level)
}

/// Serialized styles part
pub fn styles_xml() -> Result<Vec<u8>> {
    let (ns_w, w) = xml::document_namespaces()[0];
    let (ns_r, r) = xml::document_namespaces()[1];

    let mut root = XmlElement::new("w:styles")
        .attr(ns_w, w)
        .attr(ns_r, r)
        .child(doc_defaults())
        .child(
            paragraph_style("Normal", "Normal")
                .attr("w:default", "1")
                .child(XmlElement::new("w:qFormat")),
        )
        .child(title_style());

    for (i, look) in HEADINGS.iter().enumerate() {
        root = root.child(heading_style_element(i as u8 + 1, look));
    }

    root.child(table_normal_style())
        .child(table_grid_style())
        .to_part_xml()
}

fn doc_defaults() -> XmlElement {
    let fonts = XmlElement::new("w:rFonts")
        .attr("w:ascii", BODY_FONT)
        .attr("w:eastAsia", BODY_FONT)
        .attr("w:hAnsi", BODY_FONT)
        .attr("w:cs", BODY_FONT);

    XmlElement::new("w:docDefaults")
        .child(
            XmlElement::new("w:rPrDefault").child(
                XmlElement::new("w:rPr")
                    .child(fonts)
                    .child(XmlElement::val("w:sz", "22"))
                    .child(XmlElement::val("w:szCs", "22"))
                    .child(XmlElement::val("w:lang", "en-US")),
            ),
        )
        .child(
            XmlElement::new("w:pPrDefault").child(
                XmlElement::new("w:pPr").child(
                    XmlElement::new("w:spacing")
                        .attr("w:after", "200")
                        .attr("w:line", "276")
                        .attr("w:lineRule", "auto"),
                ),
            ),
        )
}

fn paragraph_style(id: &str, name: &str) -> XmlElement {
    XmlElement::new("w:style")
        .attr("w:type", "paragraph")
        .attr("w:styleId", id)
        .child(XmlElement::val("w:name", name))
}

fn title_style() -> XmlElement {
    paragraph_style(TITLE, "Title")
        .child(XmlElement::val("w:basedOn", "Normal"))
        .child(XmlElement::val("w:next", "Normal"))
        .child(XmlElement::new("w:qFormat"))
        .child(
            XmlElement::new("w:pPr")
                .child(
                    XmlElement::new("w:pBdr").child(
                        XmlElement::val("w:bottom", "single")
                            .attr("w:sz", "8")
                            .attr("w:space", "4")
                            .attr("w:color", "4F81BD"),
                    ),
                )
                .child(XmlElement::new("w:spacing").attr("w:after", "300"))
                .child(XmlElement::new("w:contextualSpacing")),
        )
        .child(
            XmlElement::new("w:rPr")
                .child(XmlElement::val("w:color", "17365D"))
                .child(XmlElement::val("w:kern", "28"))
                .child(XmlElement::val("w:sz", "52"))
                .child(XmlElement::val("w:szCs", "52")),
        )
}

fn heading_style_element(level: u8, look: &HeadingLook) -> XmlElement {
    let mut rpr = XmlElement::new("w:rPr");
    if look.bold {
        rpr = rpr.child(XmlElement::new("w:b"));
    }
    if look.italic {
        rpr = rpr.child(XmlElement::new("w:i"));
    }
    rpr = rpr.child(XmlElement::val("w:color", look.color));
    if let Some(size) = look.size {
        rpr = rpr
            .child(XmlElement::val("w:sz", size.to_string()))
            .child(XmlElement::val("w:szCs", size.to_string()));
    }

    paragraph_style(&format!("Heading{}", level), &format!("heading {}", level))
        .child(XmlElement::val("w:basedOn", "Normal"))
        .child(XmlElement::val("w:next", "Normal"))
        .child(XmlElement::val("w:uiPriority", "9"))
        .child(XmlElement::new("w:qFormat"))
        .child(
            XmlElement::new("w:pPr")
                .child(XmlElement::new("w:keepNext"))
                .child(XmlElement::new("w:keepLines"))
                .child(
                    XmlElement::new("w:spacing")
                        .attr("w:before", look.space_before.to_string())
                        .attr("w:after", "0"),
                )
                .child(XmlElement::val("w:outlineLvl", (level - 1).to_string())),
        )
        .child(rpr)
}

fn table_normal_style() -> XmlElement {
    let margin = |side: &str, w: &str| XmlElement::new(side).attr("w:w", w).attr("w:type", "dxa");

    XmlElement::new("w:style")
        .attr("w:type", "table")
        .attr("w:default", "1")
        .attr("w:styleId", "TableNormal")
        .child(XmlElement::val("w:name", "Normal Table"))
        .child(XmlElement::val("w:uiPriority", "99"))
        .child(XmlElement::new("w:semiHidden"))
        .child(
            XmlElement::new("w:tblPr")
                .child(margin("w:tblInd", "0"))
                .child(XmlElement::new("w:tblCellMar").children([
                    margin("w:top", "0"),
                    margin("w:left", "108"),
                    margin("w:bottom", "0"),
                    margin("w:right", "108"),
                ])),
        )
}

fn table_grid_style() -> XmlElement {
    let border = |side: &str| {
        XmlElement::val(side, "single")
            .attr("w:sz", "4")
            .attr("w:space", "0")
            .attr("w:color", "auto")
    };

    XmlElement::new("w:style")
        .attr("w:type", "table")
        .attr("w:styleId", TABLE_GRID)
        .child(XmlElement::val("w:name", "Table Grid"))
        .child(XmlElement::val("w:basedOn", "TableNormal"))
        .child(XmlElement::val("w:uiPriority", "59"))
        .child(
            XmlElement::new("w:pPr").child(
                XmlElement::new("w:spacing")
                    .attr("w:after", "0")
                    .attr("w:line", "240")
                    .attr("w:lineRule", "auto"),
            ),
        )
        .child(
            XmlElement::new("w:tblPr").child(XmlElement::new("w:tblBorders").children(
                ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"]
                    .into_iter()
                    .map(border),
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_ids() {
        assert_eq!(heading_style(0).unwrap(), "Title");
        assert_eq!(heading_style(3).unwrap(), "Heading3");
        assert!(matches!(heading_style(10), Err(Error::InvalidHeadingLevel(10))));
    }

    #[test]
    fn test_heading_level_inverse() {
        for level in 0..=MAX_HEADING_LEVEL {
            assert_eq!(heading_level(&heading_style(level).unwrap()), Some(level));
        }
        assert_eq!(heading_level("Normal"), None);
        assert_eq!(heading_level("Heading10"), None);
        assert_eq!(heading_level("HeadingX"), None);
    }

    #[test]
    fn test_styles_part_defines_used_ids() {
        let xml = String::from_utf8(styles_xml().unwrap()).unwrap();
        for id in ["Normal", "Title", "Heading1", "Heading9", "TableNormal", "TableGrid"] {
            assert!(
                xml.contains(&format!(r#"w:styleId="{}""#, id)),
                "missing style {}",
                id
            );
        }
        assert!(xml.contains(r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#));
        assert!(xml.contains(r#"<w:outlineLvl w:val="0"/>"#));
    }
}
