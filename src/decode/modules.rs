// src/decode/modules.rs

use crate::grid::GridRow;
use crate::records::SubscriptionLevel;

/// Cell index of the label column in body rows.
const LABEL_CELL: usize = 1;

/// Border reserved for subscription-level marker rows.
const LEVEL_MARKER_BORDER: &str = "border: 2px solid red";
/// Border on a module label whose tier is set per-module (exam registration).
const LEVEL_OVERRIDE_BORDER: &str = "border: 2px solid blue";
/// Bold font color marking a module-start label cell.
const MODULE_FONT_COLOR: &str = "blue";

/// A contiguous run of grid rows belonging to one module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleBlock {
    pub number: String,
    pub name: String,
    pub notes_key: Option<String>,
    pub level: SubscriptionLevel,
    /// Index of the module-start row, relative to the rows given to `locate`.
    pub start_row: usize,
    /// Grid rows this module occupies (the label cell's rowspan).
    pub row_span: usize,
}

/// Partition body rows into module blocks, in encounter order.
///
/// The subscription tier is a running value: marker rows raise it to the
/// submissions tier ("level 3") or drop it back to the base tier
/// ("level 2"), and it carries across module boundaries until the next
/// marker. A blue-bordered label overrides the running tier for that one
/// module. Marker rows never start a module themselves.
pub fn locate(rows: &[GridRow]) -> Vec<ModuleBlock> {
    let mut blocks = Vec::new();
    let mut tier = SubscriptionLevel::Discard;

    for (index, row) in rows.iter().enumerate() {
        let Some(label) = row.cells.get(LABEL_CELL) else {
            continue;
        };

        if label.style.as_deref() == Some(LEVEL_MARKER_BORDER) {
            if label.text.contains("level 3") {
                tier = SubscriptionLevel::CateSubmissions;
            }
            if label.text.contains("level 2") {
                tier = SubscriptionLevel::Discard;
            }
        }

        if label.font_color.as_deref() != Some(MODULE_FONT_COLOR) {
            continue;
        }

        // "212 - Networks" → number "212", name "Networks" (dash dropped).
        let mut tokens = label.text.split(' ');
        let number = tokens.next().unwrap_or("").to_string();
        let name = tokens.skip(1).collect::<Vec<_>>().join(" ");

        let notes_key = label
            .links
            .first()
            .map(|href| href.rsplit('=').next().unwrap_or(href.as_str()).to_string());

        let level = if label.style.as_deref() == Some(LEVEL_OVERRIDE_BORDER) {
            SubscriptionLevel::ExamRegistration
        } else {
            tier
        };

        blocks.push(ModuleBlock {
            number,
            name,
            notes_key,
            level,
            start_row: index,
            row_span: label.rowspan,
        });
    }

    blocks
}
