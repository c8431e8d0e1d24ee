//! App module - application state, event dispatch, and async plumbing

mod generate;

use crate::api::ApiClient;
use crate::settings::Settings;
use crate::store::{reduce, Effect, Event, State};
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) state: State,
    pub(crate) client: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    /// Events produced by background request tasks, drained every frame
    pub(crate) inbox: Arc<Mutex<Vec<Event>>>,
    // Window geometry tracked for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) data_dir: PathBuf,
    pub(crate) settings: Settings,
}

// ============================================================================
// APP INITIALIZATION & DISPATCH
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        client: ApiClient,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            state: State::default(),
            client,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            inbox: Arc::new(Mutex::new(Vec::new())),
            window_pos: None,
            window_size: None,
            data_dir,
            settings,
        }
    }

    /// Run one event through the reducer and execute any resulting effect.
    pub fn dispatch(&mut self, ctx: &egui::Context, event: Event) {
        if let Some(effect) = reduce(&mut self.state, event) {
            match effect {
                Effect::SendRequest {
                    request_id,
                    request,
                } => self.spawn_generate(ctx, request_id, request),
            }
        }
    }

    /// Apply events pushed by background tasks, in arrival order.
    pub fn drain_inbox(&mut self, ctx: &egui::Context) {
        let pending: Vec<Event> = std::mem::take(&mut *self.inbox.lock().unwrap());
        for event in pending {
            self.dispatch(ctx, event);
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            api_base: self.settings.api_base.clone(),
        };
        settings.save(&self.data_dir);
    }
}
