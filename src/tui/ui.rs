//! Frame layout and rendering.

use super::app::App;
use super::board::BoardWidget;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictac_core::rules;

/// Screen areas for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Title line.
    pub title: Rect,
    /// Board viewport.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
}

/// Splits `area` into a title line, a centred board and a status line.
///
/// The board keeps its configured size when it fits and shrinks to the
/// space left otherwise.
pub fn layout(area: Rect, board_width: u16, board_height: u16) -> Screen {
    let title = Rect::new(area.x, area.y, area.width, area.height.min(1));
    let status_height = area.height.saturating_sub(1).min(1);
    let status = Rect::new(
        area.x,
        area.bottom().saturating_sub(status_height),
        area.width,
        status_height,
    );
    let middle = Rect::new(
        area.x,
        title.bottom(),
        area.width,
        status.y.saturating_sub(title.bottom()),
    );

    Screen {
        title,
        board: center_rect(middle, board_width, board_height),
        status,
    }
}

/// Renders the whole frame and records the board placement in `app`.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let screen = layout(
        frame.area(),
        *app.config().board_width(),
        *app.config().board_height(),
    );
    app.layout(screen.board);

    let title = Paragraph::new(app.config().title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    let outcome = app.pending_outcome();
    let board = BoardWidget::new(app.scene())
        .cursor(outcome.is_none().then(|| app.cursor()))
        .highlight(rules::winning_line(app.game().board()).map(|(_, line)| line));
    frame.render_widget(board, screen.board);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status, screen.status);

    if let Some(outcome) = outcome {
        draw_banner(frame, screen.board, &outcome.to_string());
    }
}

/// Result banner centred over the board.
fn draw_banner(frame: &mut Frame<'_>, area: Rect, text: &str) {
    let width = u16::try_from(text.len()).unwrap_or(u16::MAX).saturating_add(4);
    let banner_area = center_rect(area, width, 3);

    let banner = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, banner_area);
    frame.render_widget(banner, banner_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
