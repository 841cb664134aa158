//! Headless host for HUD overlays.
//!
//! Plays the part of the game loop: owns the simulated world, the
//! subscription bus, the icon row and the renderer, and drives every overlay
//! through day-start and per-frame notifications.
//! - Day boundary  → `DayStarted`
//! - Each frame    → `RenderingHud`, then `RenderedHud`
//! - Config watcher → live overlay toggle / locale switch

pub mod bus;
pub mod renderer;
pub mod slots;
pub mod world;

pub use bus::EventHub;
pub use renderer::TraceRenderer;
pub use slots::IconRow;
pub use world::SimWorld;

use hud_config::{ConfigWatcher, HudConfig};
use hud_core::{HostContext, IconSlots, OverlayWidget, Result, Topic, ViewportId};
use hud_i18n::Catalog;
use hud_widgets::ConstructionStatusIcon;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

// ── Host ──────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Host {
    bus:      EventHub,
    widgets:  Vec<Box<dyn OverlayWidget>>,
    world:    SimWorld,
    catalog:  Catalog,
    renderer: TraceRenderer,
    slots:    IconRow,
    viewport: ViewportId,
    frames:   u64,
}

impl Host {
    /// Host with no overlays.
    pub fn new(config: &HudConfig) -> Result<Self> {
        Ok(Self {
            bus:      EventHub::new(),
            widgets:  Vec::new(),
            world:    SimWorld::from_scenario(&config.scenario, &config.overlays.builder),
            catalog:  Catalog::with_locale(&config.global.locale)?,
            renderer: TraceRenderer::new(),
            slots:    IconRow::new(config.icons),
            viewport: ViewportId::PRIMARY,
            frames:   0,
        })
    }

    /// Host with every built-in overlay registered, toggled per `config`.
    pub fn from_config(config: &HudConfig) -> Result<Self> {
        let mut host = Self::new(config)?;
        host.add_widget(
            Box::new(ConstructionStatusIcon::new(config.overlays.builder.clone())),
            config.overlays.construction_status,
        );
        Ok(host)
    }

    pub fn bus(&self) -> &EventHub {
        &self.bus
    }

    pub fn world(&self) -> &SimWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut SimWorld {
        &mut self.world
    }

    pub fn renderer(&self) -> &TraceRenderer {
        &self.renderer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Register `widget` and switch it on or off.
    pub fn add_widget(&mut self, widget: Box<dyn OverlayWidget>, enabled: bool) {
        info!(id = widget.id(), enabled, "overlay registered");
        self.widgets.push(widget);
        if let Some(id) = self.widgets.last().map(|w| w.id().to_string()) {
            self.set_widget_enabled(&id, enabled);
        }
    }

    /// Toggle the overlay named `id`.  Returns `false` if no such overlay exists.
    pub fn set_widget_enabled(&mut self, id: &str, enabled: bool) -> bool {
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id() == id) else {
            warn!(id, "no overlay with this id");
            return false;
        };
        let mut cx = HostContext {
            world:    &self.world,
            i18n:     &self.catalog,
            renderer: &mut self.renderer,
            slots:    &mut self.slots,
            viewport: self.viewport,
        };
        widget.set_enabled(enabled, &mut self.bus, &mut cx);
        true
    }

    /// Apply a reloaded config: locale, icon row layout and overlay toggles.
    ///
    /// Scenario and builder changes only take effect on restart.
    pub fn apply_config(&mut self, config: &HudConfig) {
        self.catalog.set_locale(&config.global.locale);
        self.slots.set_layout(config.icons);
        // Re-enabling refreshes the cached text, picking up a new locale.
        self.set_widget_enabled(ConstructionStatusIcon::ID, config.overlays.construction_status);
        info!(locale = self.catalog.active_locale(), "config applied");
    }

    /// Advance the world to the next morning and notify subscribers.
    pub fn next_day(&mut self) {
        self.world.advance_day();
        info!(day = self.world.day(), "day started");
        self.dispatch(Topic::DayStarted);
    }

    /// One frame: pre-render overlays, then post-render overlays.
    pub fn render_frame(&mut self) {
        self.slots.reset();
        self.dispatch(Topic::RenderingHud);
        self.dispatch(Topic::RenderedHud);
        self.frames += 1;
    }

    /// Release every overlay's subscriptions.
    pub fn shutdown(&mut self) {
        for widget in &mut self.widgets {
            widget.dispose(&mut self.bus);
        }
        debug!(remaining = self.bus.len(), "overlays disposed");
    }

    fn dispatch(&mut self, topic: Topic) {
        for id in self.bus.subscribers(topic) {
            let Some(widget) = self.widgets.iter_mut().find(|w| w.id() == id) else {
                warn!(%topic, id = %id, "subscriber is not a registered overlay");
                continue;
            };
            let mut cx = HostContext {
                world:    &self.world,
                i18n:     &self.catalog,
                renderer: &mut self.renderer,
                slots:    &mut self.slots,
                viewport: self.viewport,
            };
            widget.on_notification(topic, &mut cx);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run the host loop until `global.days` days have passed or Ctrl-C.
///
/// Edits to the file at `config_path` are applied live.
pub async fn run(config: HudConfig, config_path: impl AsRef<Path>) -> Result<()> {
    let config_path = config_path.as_ref();
    let mut host = Host::from_config(&config)?;
    let (watcher, mut reload_rx) = ConfigWatcher::spawn(config_path);

    let frames_per_day = config.global.frames_per_day.max(1);
    let days = config.global.days;
    let mut ticker = tokio::time::interval(Duration::from_millis(
        config.global.frame_interval_ms.max(1),
    ));
    let mut frame_in_day = 0;

    info!(day = host.world().day(), frames_per_day, days, "host running");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if frame_in_day == frames_per_day {
                    if days > 0 && host.world().day() >= days {
                        break;
                    }
                    host.next_day();
                    frame_in_day = 0;
                }
                host.render_frame();
                frame_in_day += 1;
            }
            Some(()) = reload_rx.recv() => {
                match hud_config::load(watcher.path()) {
                    Ok(reloaded) => {
                        info!(path = %watcher.path().display(), "config reloaded");
                        host.apply_config(&reloaded);
                    }
                    Err(e) => warn!("Keeping previous config: {e}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    host.shutdown();
    info!(
        frames = host.frames(),
        icons = host.renderer().icons_drawn(),
        tooltips = host.renderer().tooltips_drawn(),
        "host stopped"
    );
    Ok(())
}
