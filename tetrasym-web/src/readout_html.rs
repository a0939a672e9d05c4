/// HTML rendering of the rotation matrix readout

use std::fmt::Write;

use tetrasym_core::RotationReadout;

/// Opacity of entries that are zero to two decimals
const NEGLIGIBLE_OPACITY: &str = "0.35";

/// A 3x3 table; negligible entries are faded out.
pub fn render(readout: &RotationReadout) -> String {
    let mut html = String::from(
        "<table class=\"rotation-matrix\" style=\"border-collapse:collapse;font-family:monospace\">",
    );
    for row in readout.rows() {
        html.push_str("<tr>");
        for cell in row {
            let opacity = if cell.negligible {
                NEGLIGIBLE_OPACITY
            } else {
                "1"
            };
            // writing to a String cannot fail
            let _ = write!(
                html,
                "<td style=\"padding:2px 6px;text-align:right;opacity:{opacity}\">{}</td>",
                cell.text
            );
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}
