//! Intermediate representation for generated documents.
//!
//! Generators build plain value types (sections of paragraphs and tables made
//! of runs) instead of a finalized word-processor object, so composing
//! multiple documents never has to reach into a serialization library's
//! internals. The host application owns turning a [`Document`] into a binary
//! file; [`Document::to_json`] is provided for hosts that want to inspect or
//! transform the structure first.

pub mod builder;

use serde::{Deserialize, Serialize};

/// Font used by every run; per-run state only carries size and emphasis.
pub const FONT_FAMILY: &str = "Bookman Old Style";

/// Root of a generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    /// Serialize the document structure as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of forced page breaks across all sections.
    pub fn page_break_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }

    /// Every run's text, concatenated in document order. Used by callers and
    /// tests to check content without walking the block tree by hand.
    pub fn plain_text(&self) -> String {
        let mut teks = String::new();
        for section in &self.sections {
            for block in &section.blocks {
                match block {
                    Block::Paragraph(p) => {
                        teks.push_str(&p.text());
                        teks.push('\n');
                    }
                    Block::Table(t) => {
                        for row in &t.rows {
                            for cell in &row.cells {
                                for p in &cell.paragraphs {
                                    teks.push_str(&p.text());
                                    teks.push('\n');
                                }
                            }
                        }
                    }
                    Block::PageBreak => {}
                }
            }
        }
        teks
    }
}

/// One section: page geometry, an optional footer, and ordered content blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub page: PageSetup,
    pub footer: Option<Footer>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub margins: Margins,
}

/// Page margins in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top_mm: u32,
    pub right_mm: u32,
    pub bottom_mm: u32,
    pub left_mm: u32,
}

impl Margins {
    /// Fixed SPK/BAST geometry: 1cm / 2cm / 2.5cm / 2cm.
    pub const fn baku() -> Self {
        Self {
            top_mm: 10,
            right_mm: 20,
            bottom_mm: 25,
            left_mm: 20,
        }
    }
}

/// Footer rendered on every page of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub page_numbers: bool,
}

/// One content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    /// Forced page break; everything after it starts on a new page.
    PageBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Hanging indent in millimetres, for numbered sub-clauses and the
/// roman-numeral party paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indent {
    pub left_mm: u32,
    pub hanging_mm: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub align: Alignment,
    pub indent: Option<Indent>,
    /// Tab stop position, when the paragraph text contains `\t`.
    pub tab_stop_mm: Option<u32>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size_pt: u8,
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
    /// Column widths in millimetres, when the layout is fixed.
    pub column_width_mm: Option<Vec<u32>>,
    pub borders: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Fixed row height; zero models a bordered rule row.
    pub height_mm: Option<u32>,
}

/// Vertical merge state for multi-level table headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VMerge {
    Restart,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    pub col_span: u32,
    pub v_merge: Option<VMerge>,
}
