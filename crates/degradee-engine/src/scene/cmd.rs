use crate::scene::shapes::rect::{FillRectCmd, StrokeRectCmd};
use crate::scene::shapes::text::TextCmd;

/// One recorded drawing operation.
///
/// A strip frame only ever needs solid cells, outlines (grid lines and
/// mark handles) and cell labels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect(FillRectCmd),
    StrokeRect(StrokeRectCmd),
    Text(TextCmd),
}
