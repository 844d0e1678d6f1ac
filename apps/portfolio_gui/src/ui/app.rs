use std::time::{Duration, Instant};

use chrono::Datelike;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::content::NAV_ITEMS;
use site_core::{
    effects::{page_bindings, selectors, Ease},
    navigation::NavigationState,
    preloader::{PreloadFrame, PreloadSequence, PreloadTimeline},
    BootstrapController, ContactForm, PageView, SiteSettings,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::reducer::{apply_ui_event, BackendStatus};
use crate::ui::{effects::PageEffects, theme, toasts::ToastOverlay};

const PRELOAD_PARTICLES: usize = 20;

pub struct PortfolioApp {
    pub(super) cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    pub(super) settings: SiteSettings,
    bootstrap: BootstrapController,
    preload: PreloadSequence,
    started_at: Instant,
    mounted: bool,
    pub(super) navigation: NavigationState,
    pub(super) contact_form: ContactForm,
    pub(super) backend: BackendStatus,
    pub(super) effects: PageEffects,
    toasts: ToastOverlay,
    pub(super) footer_year: i32,
}

impl PortfolioApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: SiteSettings,
    ) -> Self {
        let mut bootstrap = BootstrapController::default();
        if let Some(style_root) = bootstrap.take_style_root() {
            theme::apply_style_root(&cc.egui_ctx, style_root);
        }
        let preload = PreloadSequence::new(
            PreloadTimeline::default(),
            bootstrap.completion_callback(),
        );

        let now = Instant::now();
        let mut effects = PageEffects::new(page_bindings(), now);
        // section links plus the logo and the call-to-action
        effects.set_group_size(selectors::NAV_ITEM, NAV_ITEMS.len() + 2);

        Self {
            cmd_tx,
            ui_rx,
            settings,
            bootstrap,
            preload,
            started_at: now,
            mounted: false,
            navigation: NavigationState::new(),
            contact_form: ContactForm::new(),
            backend: BackendStatus::default(),
            effects,
            toasts: ToastOverlay::default(),
            footer_year: chrono::Local::now().year(),
        }
    }

    fn process_ui_events(&mut self, now: Instant) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.contact_form, &mut self.backend, event);
        }
        self.toasts.extend(self.contact_form.take_toasts(), now);
    }

    fn show_preloader(&mut self, ctx: &egui::Context, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started_at);
        let frame = self.preload.advance(elapsed);
        let title = self.settings.owner.name.to_uppercase();
        let role = self.settings.owner.role.to_uppercase();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.multiply_opacity(frame.overlay_opacity);
            let rect = ui.max_rect();
            paint_particles(ui.painter(), rect, elapsed);
            paint_preload_content(ui.painter(), rect, &frame, &title, &role);
        });
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        if !self.mounted {
            self.mounted = true;
            let fired = self.effects.mount();
            tracing::debug!(fired, "main content mounted");
        }

        self.show_navigation(ctx);
        if self.navigation.menu_open() {
            self.show_mobile_menu(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let output = egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_hero(ui);
                    self.show_about(ui);
                    self.show_projects(ui);
                    self.show_contact(ui);
                    self.show_footer(ui);
                });
            self.navigation.on_scroll(output.state.offset.y);
        });
    }
}

/// Triangle wave over `period`, delayed by `delay`, in `0..=1`.
fn yoyo(elapsed: Duration, period: Duration, delay: Duration) -> f32 {
    let Some(active) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    let cycle = (active.as_secs_f32() / period.as_secs_f32()) % 2.0;
    if cycle <= 1.0 {
        cycle
    } else {
        2.0 - cycle
    }
}

/// Deterministic scatter in `0..1` so particles keep their place between frames.
fn scatter(index: usize, salt: usize) -> f32 {
    ((index * 7919 + salt * 104_729) % 1000) as f32 / 1000.0
}

fn paint_particles(painter: &egui::Painter, rect: egui::Rect, elapsed: Duration) {
    let color = theme::ACCENT.gamma_multiply(0.3);
    for idx in 0..PRELOAD_PARTICLES {
        let phase = yoyo(
            elapsed,
            Duration::from_secs(3),
            Duration::from_millis(200 * idx as u64),
        );
        let rise = -100.0 * Ease::Power1InOut.apply(phase);
        let pos = egui::pos2(
            rect.left() + rect.width() * scatter(idx, 1),
            rect.top() + rect.height() * scatter(idx, 2) + rise,
        );
        painter.circle_filled(pos, 2.0, color);
    }
}

fn paint_preload_content(
    painter: &egui::Painter,
    rect: egui::Rect,
    frame: &PreloadFrame,
    title: &str,
    role: &str,
) {
    let scale = frame.overlay_scale;
    let center = rect.center();
    let text_color = |color: egui::Color32| color.gamma_multiply(frame.title_opacity);

    painter.text(
        center + egui::vec2(0.0, (-70.0 + frame.title_offset) * scale),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(64.0 * scale),
        text_color(theme::ACCENT),
    );
    painter.text(
        center + egui::vec2(0.0, (-18.0 + frame.title_offset) * scale),
        egui::Align2::CENTER_CENTER,
        role,
        egui::FontId::proportional(18.0 * scale),
        text_color(theme::MUTED_TEXT),
    );

    let track = egui::Rect::from_center_size(
        center + egui::vec2(0.0, 32.0 * scale),
        egui::vec2(320.0 * scale, 4.0),
    );
    painter.rect_filled(
        track,
        egui::CornerRadius::same(2),
        egui::Color32::from_rgb(38, 40, 54),
    );
    let mut filled = track;
    filled.set_width(track.width() * frame.bar_fraction);
    painter.rect_filled(filled, egui::CornerRadius::same(2), theme::ACCENT_SOFT);

    painter.text(
        center + egui::vec2(0.0, 56.0 * scale),
        egui::Align2::CENTER_CENTER,
        format!("{}%", frame.percent),
        egui::FontId::proportional(16.0 * scale),
        theme::ACCENT,
    );
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_ui_events(now);
        self.effects.begin_frame(now);

        let animating = match self.bootstrap.view() {
            PageView::Preload => {
                self.show_preloader(ctx, now);
                true
            }
            PageView::Main => {
                self.show_main(ctx);
                self.effects.is_animating() || self.contact_form.is_submitting()
            }
        };
        self.toasts.show(ctx, now);

        if animating || !self.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yoyo_rises_then_falls() {
        let period = Duration::from_secs(3);
        assert_eq!(yoyo(Duration::from_millis(100), period, Duration::from_millis(200)), 0.0);
        assert!((yoyo(Duration::from_millis(1500), period, Duration::ZERO) - 0.5).abs() < 1e-4);
        assert!((yoyo(Duration::from_secs(3), period, Duration::ZERO) - 1.0).abs() < 1e-4);
        assert!((yoyo(Duration::from_millis(4500), period, Duration::ZERO) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn scatter_stays_in_unit_range() {
        assert!((0..PRELOAD_PARTICLES).all(|idx| (0.0..1.0).contains(&scatter(idx, 1))));
    }
}
