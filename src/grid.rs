// src/grid.rs
//
// Structured view of one timetable table: rows of cells carrying the span
// and rendering attributes the decoder needs. Parsing is the usual naive
// tag-block scanning tailored to the fixed markup CATe emits; everything in
// `decode/` works from this view and never touches markup itself.

use crate::core::html::{
    inner_after_open_tag, next_tag_block_ci, open_tag, strip_tags, strip_tags_keep_ws, tag_attr,
};
use crate::core::sanitize::normalize_entities;

/// An inline `<span title=…>` marker: short label plus full exercise title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitledSpan {
    pub label: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Tag-stripped, entity-normalized, trimmed text. Inner whitespace is
    /// kept as-is; the decoder applies its own run-collapsing rule.
    pub text: String,
    pub colspan: usize,
    pub rowspan: usize,
    pub bgcolor: Option<String>,
    /// Raw inline style attribute (the site only ever uses border styles).
    pub style: Option<String>,
    /// Color of a `<font>` nested in `<b>`; module label cells mark
    /// themselves with a bold blue font.
    pub font_color: Option<String>,
    pub span: Option<TitledSpan>,
    /// Embedded anchor hrefs in document order.
    pub links: Vec<String>,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            text: s!(),
            colspan: 1,
            rowspan: 1,
            bgcolor: None,
            style: None,
            font_color: None,
            span: None,
            links: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridRow {
    pub cells: Vec<GridCell>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Parse the inner HTML of one `<table>` into rows of cells.
    pub fn from_table_html(table_inner: &str) -> Grid {
        let mut rows = Vec::new();
        let mut pos = 0usize;
        while let Some((tr_s, tr_e)) = next_tag_block_ci(table_inner, "<tr", "</tr>", pos) {
            let tr = &table_inner[tr_s..tr_e];
            pos = tr_e;
            rows.push(GridRow { cells: parse_cells(tr) });
        }
        Grid { rows }
    }
}

fn parse_cells(tr: &str) -> Vec<GridCell> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_cell_block(tr, pos) {
        cells.push(parse_cell(&tr[s..e]));
        pos = e;
    }
    cells
}

/// Next `<td>` or `<th>` block, whichever starts first. Header rows use th,
/// body rows td; both carry the same attribute vocabulary.
fn next_cell_block(tr: &str, from: usize) -> Option<(usize, usize)> {
    let td = next_tag_block_ci(tr, "<td", "</td>", from);
    let th = next_tag_block_ci(tr, "<th", "</th>", from);
    match (td, th) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

fn parse_cell(block: &str) -> GridCell {
    let tag = open_tag(block);
    let inner = inner_after_open_tag(block);

    let colspan = span_attr(tag, "colspan");
    let rowspan = span_attr(tag, "rowspan");
    let bgcolor = tag_attr(tag, "bgcolor");
    let style = tag_attr(tag, "style");

    // Bold blue font marks module label cells; `<b>` is matched with its
    // bracket so `<br>` blocks don't trip the scan.
    let font_color = next_tag_block_ci(&inner, "<b>", "</b>", 0).and_then(|(bs, be)| {
        let bold = &inner[bs..be];
        let (fs, fe) = next_tag_block_ci(bold, "<font", "</font>", 0)?;
        tag_attr(open_tag(&bold[fs..fe]), "color")
    });

    // Only a span that actually carries a title counts as the code/name
    // marker; a bare span is just formatting.
    let span = next_tag_block_ci(&inner, "<span", "</span>", 0).and_then(|(ss, se)| {
        let sp = &inner[ss..se];
        let title = tag_attr(open_tag(sp), "title")?;
        Some(TitledSpan {
            label: strip_tags(normalize_entities(&inner_after_open_tag(sp))),
            title: normalize_entities(&title),
        })
    });

    let mut links = Vec::new();
    let mut pos = 0usize;
    while let Some((a_s, a_e)) = next_tag_block_ci(&inner, "<a ", "</a>", pos) {
        if let Some(href) = tag_attr(open_tag(&inner[a_s..a_e]), "href") {
            links.push(normalize_entities(&href));
        }
        pos = a_e;
    }

    let text = strip_tags_keep_ws(&normalize_entities(&inner)).trim().to_string();

    GridCell { text, colspan, rowspan, bgcolor, style, font_color, span, links }
}

/// colspan/rowspan parse with the HTML default of 1; zero and garbage also
/// fall back to 1 so downstream arithmetic stays total.
fn span_attr(tag: &str, name: &str) -> usize {
    tag_attr(tag, name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}
