use crate::models::snapshot::{MetricSnapshot, VolumeResult};
use crate::ui::theme::Theme;
use crate::util::color::color_for;
use crate::util::report::{cpu_label, io_label, ram_label, volume_label};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// A single percentage bar, filled with the utilisation color.
fn usage_gauge(pct: f64, theme: &Theme) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(color_for(pct).into()).bg(theme.gauge_bg))
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", pct))
}

pub fn render_system_bars(f: &mut Frame, area: Rect, snap: &MetricSnapshot, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled("System", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 { return; }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(Span::styled(cpu_label(snap.cpu_pct), theme.text)), rows[0]);
    f.render_widget(usage_gauge(snap.cpu_pct, theme), rows[1]);
    f.render_widget(Paragraph::new(Span::styled(ram_label(&snap.memory), theme.text)), rows[2]);
    f.render_widget(usage_gauge(snap.memory.used_pct, theme), rows[3]);
}

/// Rows each volume occupies: label + gauge, plus the I/O line when shown.
pub fn rows_per_volume(show_io: bool) -> usize {
    if show_io { 3 } else { 2 }
}

pub fn render_volume_bars(
    f: &mut Frame,
    area: Rect,
    volumes: &[VolumeResult],
    scroll: usize,
    show_io: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(format!("Volumes ({})", volumes.len()), theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 { return; }
    if volumes.is_empty() {
        f.render_widget(Paragraph::new(Span::styled("No monitorable volumes", theme.text_dim)), inner);
        return;
    }

    let per = rows_per_volume(show_io);
    let visible = (inner.height as usize / per).max(1);
    let start = scroll.min(volumes.len().saturating_sub(1));
    let end   = (start + visible).min(volumes.len());
    let shown = &volumes[start..end];

    let constraints: Vec<Constraint> = shown
        .iter()
        .flat_map(|_| std::iter::repeat(Constraint::Length(1)).take(per))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, vol) in shown.iter().enumerate() {
        let base = i * per;
        match &vol.usage {
            Some(u) => {
                f.render_widget(Paragraph::new(Span::styled(volume_label(vol), theme.text)), rows[base]);
                f.render_widget(usage_gauge(u.used_pct, theme), rows[base + 1]);
            }
            None => {
                f.render_widget(Paragraph::new(Span::styled(volume_label(vol), theme.warn)), rows[base]);
                f.render_widget(Paragraph::new(Span::styled("  …", theme.text_dim)), rows[base + 1]);
            }
        }
        if show_io {
            let line = format!("  {}", io_label(vol.io.as_ref()));
            f.render_widget(Paragraph::new(Span::styled(line, theme.text_dim)), rows[base + 2]);
        }
    }
}
