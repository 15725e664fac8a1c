use crate::collectors::MetricsProvider;
use crate::input::{handle_key, Action};
use crate::models::snapshot::MetricSnapshot;
use crate::sampler::{Platform, Sampler};
use crate::ui::dashboard;
use crate::ui::theme::{Theme, ThemeVariant};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use std::time::{Duration, Instant};

/// Upper bound on how long the loop blocks waiting for input.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub struct App {
    pub theme:         Theme,
    pub theme_variant: ThemeVariant,
    pub interval:      Duration,
    pub show_io:       bool,
    pub paused:        bool,
    pub scroll:        usize,

    /// Latest tick result; replaced wholesale every tick.
    pub snapshot: Option<MetricSnapshot>,

    provider: Box<dyn MetricsProvider>,
    sampler:  Sampler,

    /// Start time of the last completed tick, fed back to the sampler.
    last_sample: Option<Instant>,
    /// When the last tick finished; the next one is due `interval` after this.
    last_tick_end: Option<Instant>,

    pub should_quit: bool,
}

impl App {
    pub fn new(
        provider: Box<dyn MetricsProvider>,
        theme_variant: ThemeVariant,
        interval: Duration,
        show_io: bool,
    ) -> Self {
        let sampler = Sampler::new(provider.as_ref(), Platform::current());
        let mut app = Self {
            theme: Theme::for_variant(theme_variant),
            theme_variant,
            interval,
            show_io,
            paused:        false,
            scroll:        0,
            snapshot:      None,
            provider,
            sampler,
            last_sample:   None,
            last_tick_end: None,
            should_quit:   false,
        };
        app.tick();
        app
    }

    // ── Main event loop ───────────────────────────────────────────────

    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| dashboard::render(f, self))?;

            if event::poll(self.poll_timeout())? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_action(handle_key(key));
                    }
                    Event::Mouse(me) => match me.kind {
                        MouseEventKind::ScrollDown => self.handle_action(Action::ScrollDown),
                        MouseEventKind::ScrollUp   => self.handle_action(Action::ScrollUp),
                        _ => {}
                    },
                    _ => {}
                }
            }

            if self.should_quit { break; }

            if self.tick_due() {
                self.tick();
            }
        }
        Ok(())
    }

    /// Run one sampling tick to completion.
    pub fn tick(&mut self) {
        let (snap, started) = self.sampler.sample_tick(self.provider.as_mut(), self.last_sample);
        self.last_sample   = Some(started);
        self.last_tick_end = Some(Instant::now());
        self.snapshot      = Some(snap);
        self.clamp_scroll();
    }

    fn tick_due(&self) -> bool {
        if self.paused { return false; }
        self.last_tick_end.map_or(true, |end| end.elapsed() >= self.interval)
    }

    fn poll_timeout(&self) -> Duration {
        match self.last_tick_end {
            Some(end) if !self.paused => self.interval.saturating_sub(end.elapsed()).min(POLL_TIMEOUT),
            _ => POLL_TIMEOUT,
        }
    }

    fn volume_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.volumes.len())
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.volume_count().saturating_sub(1));
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit       => self.should_quit = true,
            Action::ScrollUp   => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => {
                self.scroll += 1;
                self.clamp_scroll();
            }
            Action::JumpTop    => self.scroll = 0,
            Action::JumpBottom => self.scroll = self.volume_count().saturating_sub(1),
            Action::CycleTheme => {
                self.theme_variant = self.theme_variant.next();
                self.theme = Theme::for_variant(self.theme_variant);
            }
            Action::TogglePause => {
                self.paused = !self.paused;
                log::info!("sampling {}", if self.paused { "paused" } else { "resumed" });
            }
            Action::None => {}
        }
    }
}
