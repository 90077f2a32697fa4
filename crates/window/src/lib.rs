//! Notch window for `notch`.
//!
//! Owns the Iced daemon and wires together all timers and background tasks:
//! - 50 ms proximity poll (expand / collapse)
//! - 1 s refresh tick (time, CPU, RAM label)
//! - animation frames while the notch is resizing
//! - System resource monitor (CPU, RAM)
//! - Config file watcher (live reload on change)
//!
//! The notch surface is a transparent, undecorated, always-on-top window at
//! the top centre of the screen, resized to follow the hover region.  The options dialog opens as a second window.

mod options;

use notch_config::{default_path, load as load_config, ConfigWatcher, NotchConfig};
use notch_core::{
    compose,
    event::Message as AppMessage,
    NotchError,
    proximity::ProximityMonitor,
    state::AppState,
    Rect,
};
use notch_dropzone::{DeleteFlow, DialogPrompter, DropOutcome, Prompter, SystemTrash, Trash};
use notch_theme::{style, Theme};
use notch_widgets::{ClockWidget, ColorPicker, DeleteOverlay, InfoWidget, OptionsButton};
use options::{OptionsDialog, PickerChange};

use chrono::Local;
use futures::channel::mpsc::Sender;
use iced::{
    event, mouse,
    time::Instant,
    widget::{container, Row, Space},
    window, Alignment, Element, Event, Length, Point, Size, Subscription, Task,
};
use std::{path::Path, time::Duration};
use tracing::{debug, info, warn};

/// System monitor poll interval (milliseconds).
const SYSTEM_INTERVAL_MS: u64 = 1_000;

/// Fixed size of the options window.
const OPTIONS_SIZE: Size = Size::new(250.0, 350.0);

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the notch.  Returns once the notch window has been closed.
pub fn run() -> notch_core::Result<()> {
    iced::daemon(Notch::new, Notch::update, Notch::view)
        .title(Notch::title)
        .subscription(Notch::subscription)
        .style(Notch::style)
        .run()
        .map_err(|e| NotchError::Window(e.to_string()))
}

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    /// Propagate a core event-bus message.
    App(AppMessage),
    /// Pointer / drag event from a specific window.
    Surface(window::Id, AppMessage),
    /// Label refresh tick.
    Tick,
    /// Proximity poll.
    Poll(Instant),
    /// Animation frame while the notch is resizing.
    Frame(Instant),
    Opened(window::Id),
    Closed(window::Id),
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Notch {
    state:     AppState,
    config:    NotchConfig,
    theme:     Theme,
    proximity: ProximityMonitor,
    /// Last cursor position seen on the notch surface; `None` when outside.
    cursor:    Option<notch_core::Point>,
    main:      window::Id,
    /// Size last requested for the notch window; tracks the hover region.
    surface:   Size,
    options:   Option<(window::Id, OptionsDialog)>,
    deleter:   DeleteFlow<DialogPrompter, SystemTrash>,
    // Widgets
    clock:          ClockWidget,
    info:           InfoWidget,
    options_button: OptionsButton,
    overlay:        DeleteOverlay,
    picker:         ColorPicker,
}

impl Notch {
    fn new() -> (Self, Task<Message>) {
        let config = load_config(default_path()).unwrap_or_else(|e| {
            warn!("{e}; using defaults");
            NotchConfig::default()
        });

        let geometry  = config.window.geometry();
        let buffer    = config.window.hover_buffer as f32;
        let proximity = ProximityMonitor::new(
            geometry,
            buffer,
            Duration::from_millis(config.window.animation_ms),
        );

        let surface = surface_size(proximity.hover_region());
        let (main, open) = window::open(window::Settings {
            size:        surface,
            position:    window::Position::SpecificWith(top_center),
            decorations: false,
            transparent: true,
            resizable:   false,
            level:       window::Level::AlwaysOnTop,
            ..Default::default()
        });

        let state = AppState {
            options: config.display.clone(),
            notch:   proximity.current(),
            ..AppState::default()
        };
        let theme = Theme::from_parts(&config.theme, &state.options);

        info!(
            layout = ?config.window.layout,
            width = surface.width, height = surface.height, "opening notch window"
        );

        let mut notch = Self {
            state,
            config,
            theme,
            proximity,
            cursor: None,
            main,
            surface,
            options: None,
            deleter: DeleteFlow::native(),
            clock:          ClockWidget::new(),
            info:           InfoWidget::new(),
            options_button: OptionsButton::new(),
            overlay:        DeleteOverlay::new(),
            picker:         ColorPicker::new(),
        };
        // Show the time immediately instead of after the first tick.
        notch.refresh();

        (notch, open.map(Message::Opened))
    }

    fn title(&self, id: window::Id) -> String {
        match &self.options {
            Some((options_id, _)) if *options_id == id => String::from("Notch Options"),
            _ => String::from("notch"),
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.refresh();
                Task::none()
            }
            Message::Poll(now) => {
                if let Some(t) = self.proximity.sample(self.cursor, now) {
                    debug!(from = ?t.from, to = ?t.to, "notch transition");
                }
                self.sync_geometry()
            }
            Message::Frame(now) => {
                self.proximity.advance(now);
                self.sync_geometry()
            }
            Message::Opened(id) => {
                debug!(?id, "window opened");
                Task::none()
            }
            Message::Closed(id) => self.handle_closed(id),
            Message::Surface(id, msg) if id == self.main => self.handle_app(msg),
            Message::Surface(..) => Task::none(),
            Message::App(msg) => self.handle_app(msg),
        }
    }

    fn handle_app(&mut self, msg: AppMessage) -> Task<Message> {
        match msg {
            AppMessage::CursorMoved(p) => self.cursor = Some(p),
            AppMessage::CursorLeft     => self.cursor = None,

            AppMessage::FilesHovered     => self.state.dropping = true,
            AppMessage::FilesHoveredLeft => self.state.dropping = false,
            AppMessage::FileDropped(path) => {
                drop_file(&mut self.state, &self.deleter, &path);
            }

            AppMessage::SystemSnapshot(snapshot) => {
                self.state.system = snapshot;
            }
            AppMessage::ConfigReloaded => {
                self.reload_config();
                return self.sync_geometry();
            }

            AppMessage::OpenOptions => return self.open_options(),
            AppMessage::OptionToggled(field, on) => {
                if let Some((_, dialog)) = &mut self.options {
                    dialog.toggle(field, on);
                }
            }
            AppMessage::TogglePicker(target) => {
                if let Some((_, dialog)) = &mut self.options {
                    dialog.toggle_picker(target, &self.state.options);
                }
            }
            AppMessage::PickerHue(v)   => self.adjust_color(PickerChange::Hue(v)),
            AppMessage::PickerSat(v)   => self.adjust_color(PickerChange::Sat(v)),
            AppMessage::PickerLit(v)   => self.adjust_color(PickerChange::Lit(v)),
            AppMessage::PickerAlpha(v) => self.adjust_color(PickerChange::Alpha(v)),
            AppMessage::ConfirmOptions => {
                if let Some((id, dialog)) = self.options.take() {
                    dialog.commit(&mut self.state.options);
                    self.refresh();
                    info!(options = ?self.state.options, "display options updated");
                    return window::close(id);
                }
            }
            AppMessage::ExitRequested => {
                info!("exit requested from options dialog");
                return iced::exit();
            }
        }
        Task::none()
    }

    fn handle_closed(&mut self, id: window::Id) -> Task<Message> {
        if id == self.main {
            info!("notch window closed; exiting");
            return iced::exit();
        }
        if self.options.as_ref().is_some_and(|(options_id, _)| *options_id == id) {
            // Closed without "OK": discard the checkbox draft.
            debug!("options dialog dismissed");
            self.options = None;
        }
        Task::none()
    }

    fn open_options(&mut self) -> Task<Message> {
        if !self.config.window.layout.has_options_dialog() {
            return Task::none();
        }
        if let Some((id, _)) = &self.options {
            return window::gain_focus(*id);
        }

        let (id, open) = window::open(window::Settings {
            size:      OPTIONS_SIZE,
            position:  window::Position::Centered,
            resizable: false,
            level:     window::Level::AlwaysOnTop,
            ..Default::default()
        });
        self.options = Some((id, OptionsDialog::new(&self.state.options)));
        open.map(Message::Opened)
    }

    fn adjust_color(&mut self, change: PickerChange) {
        if let Some((_, dialog)) = &mut self.options {
            if dialog.adjust(change, &mut self.state.options) {
                self.theme = Theme::from_parts(&self.config.theme, &self.state.options);
            }
        }
    }

    /// Recompose the label from the live options and latest snapshot.
    fn refresh(&mut self) {
        self.state.line = compose(&self.state.options, &Local::now(), &self.state.system);
    }

    /// Copy the animated geometry into the view state and keep the window
    /// exactly as large as the hover region, so nothing below it is covered.
    fn sync_geometry(&mut self) -> Task<Message> {
        self.state.notch = self.proximity.current();
        self.state.hover = self.proximity.state();

        let surface = surface_size(self.proximity.hover_region());
        if surface == self.surface {
            return Task::none();
        }
        self.surface = surface;
        window::resize(self.main, surface)
    }

    fn reload_config(&mut self) {
        match load_config(default_path()) {
            Ok(cfg) => {
                if cfg.window.geometry() != self.config.window.geometry()
                    || cfg.window.layout != self.config.window.layout
                {
                    info!("Notch layout changed; restart to apply");
                }

                self.proximity.set_buffer(cfg.window.hover_buffer as f32);
                self.proximity.set_duration(Duration::from_millis(cfg.window.animation_ms));
                self.theme = Theme::from_parts(&cfg.theme, &self.state.options);

                // The window is already sized for the running layout.
                let window = notch_config::WindowConfig {
                    hover_buffer: cfg.window.hover_buffer,
                    animation_ms: cfg.window.animation_ms,
                    ..self.config.window.clone()
                };
                self.config = NotchConfig { window, ..cfg };
                info!("Config reloaded");
            }
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self, id: window::Id) -> Element<'_, Message> {
        match &self.options {
            Some((options_id, dialog)) if *options_id == id => dialog
                .view(&self.state.options, &self.picker)
                .map(Message::App),
            _ => self.view_notch().map(Message::App),
        }
    }

    fn view_notch(&self) -> Element<'_, AppMessage> {
        let state = &self.state;
        let theme = &self.theme;

        let mut content = Row::new()
            .spacing(theme.spacing as f32)
            .align_y(Alignment::Center)
            .height(Length::Fill);

        if let Some(clock) = self.clock.view(state, theme) {
            content = content.push(clock);
        }

        match self.overlay.view(state, theme) {
            Some(overlay) => content = content.push(overlay),
            None => {
                if let Some(info) = self.info.view(state, theme) {
                    content = content.push(info);
                }
                content = content.push(Space::new().width(Length::Fill));

                if self.config.window.layout.has_options_dialog() {
                    if let Some(gear) = self.options_button.view(state, theme) {
                        content = content.push(gear);
                    }
                }
            }
        }

        let notch = container(content)
            .width(Length::Fixed(state.notch.width))
            .height(Length::Fixed(state.notch.height))
            .padding([theme.padding_y, theme.padding_x])
            .style(style::notch_surface(theme));

        // The rest of the surface stays transparent; it only exists so the
        // hover buffer below the notch still receives cursor events.
        container(notch)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let timing = &self.config.timing;

        let tick = iced::time::every(Duration::from_millis(timing.refresh_ms.max(1)))
            .map(|_| Message::Tick);
        let poll = iced::time::every(Duration::from_millis(timing.proximity_ms.max(1)))
            .map(Message::Poll);

        let mut subs = vec![
            tick,
            poll,
            event::listen_with(surface_event),
            window::close_events().map(Message::Closed),
            Subscription::run(system_stream),
            Subscription::run(config_stream),
        ];

        if self.proximity.is_animating() {
            subs.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subs)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: iced::Color::TRANSPARENT,
            text_color:       self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.

/// Polls CPU / RAM every [`SYSTEM_INTERVAL_MS`] ms and forwards snapshots.
fn system_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(4, |mut sender: Sender<Message>| async move {
        let mut rx = notch_system::spawn_monitor(SYSTEM_INTERVAL_MS);

        while let Some(snapshot) = rx.recv().await {
            let _ = sender.try_send(Message::App(AppMessage::SystemSnapshot(snapshot)));
        }

        // Monitor task exited — shouldn't happen; stall rather than crash.
        warn!("System monitor stopped; CPU/RAM figures will no longer update");
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches `~/.config/notch/notch.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());
        info!(path = %watcher.path().display(), "watching config");

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::App(AppMessage::ConfigReloaded));
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Map raw window events to notch events, tagged with their source window.
fn surface_event(event: Event, _status: event::Status, id: window::Id) -> Option<Message> {
    let msg = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            AppMessage::CursorMoved(notch_core::Point::new(position.x, position.y))
        }
        Event::Mouse(mouse::Event::CursorLeft) => AppMessage::CursorLeft,
        Event::Window(window::Event::FileHovered(_)) => AppMessage::FilesHovered,
        Event::Window(window::Event::FilesHoveredLeft) => AppMessage::FilesHoveredLeft,
        Event::Window(window::Event::FileDropped(path)) => AppMessage::FileDropped(path),
        _ => return None,
    };
    Some(Message::Surface(id, msg))
}

/// Run the delete flow for one dropped file, then hide the drop overlay.
///
/// Blocks the UI thread while the native dialogs are up.
fn drop_file<P: Prompter, T: Trash>(
    state: &mut AppState,
    deleter: &DeleteFlow<P, T>,
    path: &Path,
) -> DropOutcome {
    let outcome = deleter.handle(path);
    match &outcome {
        DropOutcome::Failed(p, e) => warn!(path = %p.display(), "delete failed: {e}"),
        outcome => debug!(?outcome, "drop handled"),
    }
    state.dropping = false;
    outcome
}

fn surface_size(region: Rect) -> Size {
    Size::new(region.width, region.height)
}

/// Top edge, horizontally centred on the monitor.
fn top_center(window: Size, monitor: Size) -> Point {
    Point::new(((monitor.width - window.width) / 2.0).max(0.0), 0.0)
}
