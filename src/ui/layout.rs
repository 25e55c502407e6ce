use ratatui::layout::Rect;

/// The three fixed bands every screen renders into.
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    Regions {
        header: Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: header_height,
        },
        body: Rect {
            x: area.x,
            y: area.y + header_height,
            width: area.width,
            height: area.height.saturating_sub(header_height + footer_height),
        },
        footer: Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(footer_height),
            width: area.width,
            height: footer_height,
        },
    }
}

/// A centered rect with a fixed size, clamped to `area`. Forms look
/// better at a constant width than as a percentage of huge terminals.
pub fn fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
