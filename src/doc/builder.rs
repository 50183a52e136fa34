//! Construction helpers for the document IR.
//!
//! Generators assemble long runs of prose, numbered sub-clauses, and table
//! cells; these helpers keep that assembly terse. The `{{...}}` marker
//! splitting replaces the hand-built bold runs the legal clauses would
//! otherwise repeat for every "PIHAK PERTAMA"/"PIHAK KEDUA" occurrence.

use super::{Alignment, Indent, Paragraph, Run, Table, TableCell, TableRow, VMerge};

pub fn text_run(text: impl Into<String>, size_pt: u8) -> Run {
    Run {
        text: text.into(),
        bold: false,
        italic: false,
        size_pt,
        highlight: None,
    }
}

pub fn bold_run(text: impl Into<String>, size_pt: u8) -> Run {
    Run {
        bold: true,
        ..text_run(text, size_pt)
    }
}

pub fn para(text: impl Into<String>, size_pt: u8, align: Alignment) -> Paragraph {
    para_runs(vec![text_run(text, size_pt)], align)
}

pub fn para_bold(text: impl Into<String>, size_pt: u8, align: Alignment) -> Paragraph {
    para_runs(vec![bold_run(text, size_pt)], align)
}

pub fn para_runs(runs: Vec<Run>, align: Alignment) -> Paragraph {
    Paragraph {
        runs,
        align,
        indent: None,
        tab_stop_mm: None,
    }
}

/// Blank line standing in for vertical spacing (signature room, gaps between
/// clauses).
pub fn empty_line(size_pt: u8) -> Paragraph {
    para("", size_pt, Alignment::Left)
}

/// Split a template on `{{...}}` markers into alternating plain and bold
/// runs. Marker content renders bold with the braces stripped; an unclosed
/// marker is kept as plain text.
pub fn runs_with_bold_markers(template: &str, size_pt: u8) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            runs.push(text_run(&rest[..start], size_pt));
        }
        match rest[start + 2..].find("}}") {
            Some(end) => {
                runs.push(bold_run(&rest[start + 2..start + 2 + end], size_pt));
                rest = &rest[start + 2 + end + 2..];
            }
            None => {
                runs.push(text_run(&rest[start..], size_pt));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        runs.push(text_run(rest, size_pt));
    }
    runs
}

/// Justified paragraph with `{{...}}` bold markers applied.
pub fn para_templated(template: &str, size_pt: u8) -> Paragraph {
    para_runs(runs_with_bold_markers(template, size_pt), Alignment::Justify)
}

/// Numbered sub-clause, e.g. `ayat(1, "...", 9)` renders "(1)\t..." with a
/// hanging indent and a matching tab stop.
pub fn ayat(nomor: u32, template: &str, size_pt: u8) -> Paragraph {
    let teks = format!("({})\t{}", nomor, template);
    Paragraph {
        runs: runs_with_bold_markers(&teks, size_pt),
        align: Alignment::Justify,
        indent: Some(Indent {
            left_mm: 10,
            hanging_mm: 10,
        }),
        tab_stop_mm: Some(10),
    }
}

pub fn cell(text: impl Into<String>, size_pt: u8, align: Alignment) -> TableCell {
    cell_paragraphs(vec![para(text, size_pt, align)])
}

pub fn cell_bold(text: impl Into<String>, size_pt: u8, align: Alignment) -> TableCell {
    cell_paragraphs(vec![para_bold(text, size_pt, align)])
}

pub fn cell_paragraphs(paragraphs: Vec<Paragraph>) -> TableCell {
    TableCell {
        paragraphs,
        col_span: 1,
        v_merge: None,
    }
}

/// Header cell opening a vertical merge.
pub fn cell_merge_start(text: impl Into<String>, size_pt: u8) -> TableCell {
    TableCell {
        v_merge: Some(VMerge::Restart),
        ..cell_bold(text, size_pt, Alignment::Center)
    }
}

/// Empty continuation cell of a vertical merge.
pub fn cell_merge_continue(size_pt: u8) -> TableCell {
    TableCell {
        paragraphs: vec![empty_line(size_pt)],
        col_span: 1,
        v_merge: Some(VMerge::Continue),
    }
}

pub fn row(cells: Vec<TableCell>) -> TableRow {
    TableRow {
        cells,
        height_mm: None,
    }
}

pub fn table(rows: Vec<TableRow>, borders: bool) -> Table {
    Table {
        rows,
        column_width_mm: None,
        borders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_with_bold_markers() {
        let runs = runs_with_bold_markers(
            "selanjutnya disebut {{PIHAK PERTAMA}} dan {{PIHAK KEDUA}}.",
            9,
        );

        assert_eq!(runs.len(), 5);
        assert!(!runs[0].bold);
        assert_eq!(runs[1].text, "PIHAK PERTAMA");
        assert!(runs[1].bold);
        assert_eq!(runs[3].text, "PIHAK KEDUA");
        assert!(runs[3].bold);
        assert_eq!(runs[4].text, ".");
    }

    #[test]
    fn test_runs_without_markers() {
        let runs = runs_with_bold_markers("tanpa penekanan", 12);
        assert_eq!(runs.len(), 1);
        assert!(!runs[0].bold);
    }

    #[test]
    fn test_runs_marker_at_start() {
        let runs = runs_with_bold_markers("{{PIHAK KEDUA}} menerima", 9);
        assert_eq!(runs.len(), 2);
        assert!(runs[0].bold);
        assert_eq!(runs[1].text, " menerima");
    }

    #[test]
    fn test_unclosed_marker_stays_plain() {
        let runs = runs_with_bold_markers("teks {{tidak ditutup", 9);
        assert_eq!(runs.len(), 2);
        assert!(!runs[1].bold);
        assert_eq!(runs[1].text, "{{tidak ditutup");
    }

    #[test]
    fn test_rendered_text_preserved() {
        let template = "a {{b}} c {{d}}";
        let runs = runs_with_bold_markers(template, 9);
        let teks: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(teks, "a b c d");
    }

    #[test]
    fn test_ayat_layout() {
        let p = ayat(2, "kewajiban {{PIHAK KEDUA}}", 9);
        assert!(p.text().starts_with("(2)\t"));
        assert_eq!(p.indent.unwrap().hanging_mm, 10);
        assert_eq!(p.tab_stop_mm, Some(10));
    }
}
