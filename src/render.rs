//! Shell-export rendering for completed themes.

use std::fmt::Write;

use crate::scrape::Theme;

/// Render one theme as a shell-export block, terminated by a blank line.
///
/// The FG/CURSOR/REV_CURSOR lines reference palette slots 07, 15, and 08 by
/// name and are emitted even when the palette holds fewer entries;
/// downstream shell consumers must tolerate the unset variables.
pub fn render_theme(theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str("####################\n");
    let _ = writeln!(out, "# {}", theme.name);
    for (index, color) in theme.colors.iter().enumerate() {
        let _ = writeln!(out, "export LOCAL_DWM_COLOR_{index:02}=\"{color}\"");
    }
    let _ = writeln!(out, "export LOCAL_DWM_BG_COLOR=\"{}\"", theme.bg_color);
    out.push_str("export LOCAL_DWM_FG_COLOR=\"$LOCAL_DWM_COLOR_07\"\n");
    out.push_str("export LOCAL_DWM_CURSOR_COLOR=\"$LOCAL_DWM_COLOR_15\"\n");
    out.push_str("export LOCAL_DWM_REV_CURSOR_COLOR=\"$LOCAL_DWM_COLOR_08\"\n");
    out.push('\n');
    out
}
