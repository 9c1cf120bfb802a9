use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
/// Border plus one column of padding on each side.
const POPUP_FRAME_WIDTH: u16 = 4;
const POPUP_HEIGHT: u16 = 3;

/// Header tabs, demo body, key hints.
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl Regions {
    pub fn split(area: Rect) -> Self {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);
        Self {
            header,
            body,
            footer,
        }
    }
}

/// A one-line popup just wide enough for `message` and `title`, centered in
/// `area` and clipped to it.
pub fn popup_rect(title: &str, message: &str, area: Rect) -> Rect {
    let text_width = message.chars().count().max(title.chars().count());
    let width = u16::try_from(text_width)
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_FRAME_WIDTH)
        .min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
