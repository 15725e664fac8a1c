use crate::app::App;
use crate::ui::{
    bars::{render_system_bars, render_volume_bars},
    footer::render_footer,
};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let area  = f.area();
    let theme = &app.theme;

    // ── Root: header | system | volumes | footer ───────────────────
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let left   = format!(" resmon v{} | {} ", env!("CARGO_PKG_VERSION"), app.theme_variant.name());
    let status = if app.paused { "  PAUSED  ".to_string() } else { format!("  every {}ms  ", app.interval.as_millis()) };
    let right  = format!(" {} ", Local::now().format("%H:%M:%S"));
    let pad    = (area.width as usize).saturating_sub(left.len() + status.len() + right.len());

    let status_style = if app.paused { theme.warn } else { theme.text_dim };
    let header = Line::from(vec![
        Span::styled(left, theme.title),
        Span::styled(status, status_style),
        Span::styled(" ".repeat(pad), theme.header),
        Span::styled(right, theme.text_dim),
    ]);
    f.render_widget(Paragraph::new(header).style(theme.header), root[0]);

    match &app.snapshot {
        Some(snap) => {
            render_system_bars(f, root[1], snap, theme);
            render_volume_bars(f, root[2], &snap.volumes, app.scroll, app.show_io, theme);
        }
        None => {
            f.render_widget(Paragraph::new(Span::styled(" Sampling…", theme.text_dim)), root[1]);
        }
    }

    render_footer(f, root[3], app.paused, theme);
}
