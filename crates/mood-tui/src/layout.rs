//! Screen layout definitions for the TUI
//!
//! Header on top, the search panel centered below it, and a one-row key
//! hint bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: border + badge + title + subtitle + border
pub const HEADER_HEIGHT: u16 = 5;

/// Rows taken by the search panel when there is room for all of it
pub const PANEL_HEIGHT: u16 = 10;

/// The panel never grows wider than this
pub const PANEL_MAX_WIDTH: u16 = 72;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,

    /// Search panel (label, trigger, button, status lines)
    pub panel: Rect,

    /// Space under the trigger where the dropdown may open
    pub below_panel: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let width = body.width.min(PANEL_MAX_WIDTH);
    let x = body.x + (body.width - width) / 2;
    let panel_height = body.height.min(PANEL_HEIGHT);
    let panel = Rect::new(x, body.y, width, panel_height);
    let below_panel = Rect::new(
        x,
        body.y + panel_height,
        width,
        body.height - panel_height,
    );

    ScreenAreas {
        header,
        panel,
        below_panel,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.panel.y, HEADER_HEIGHT);
        assert_eq!(layout.panel.height, PANEL_HEIGHT);
        assert_eq!(layout.panel.width, PANEL_MAX_WIDTH);
        assert_eq!(layout.panel.x, 4);
        assert_eq!(layout.below_panel.y, HEADER_HEIGHT + PANEL_HEIGHT);
    }

    #[test]
    fn test_create_layout_narrow() {
        let layout = create(Rect::new(0, 0, 40, 12));

        assert_eq!(layout.panel.width, 40);
        assert_eq!(layout.panel.x, 0);
        // 12 - header - footer
        assert_eq!(layout.panel.height, 6);
    }
}
