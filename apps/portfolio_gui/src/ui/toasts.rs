use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use eframe::egui;
use shared::domain::Toast;

use crate::ui::theme;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 3;

#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    shown_at: Instant,
}

/// Bottom-right stack of transient notifications.
#[derive(Debug)]
pub struct ToastOverlay {
    entries: VecDeque<ActiveToast>,
    lifetime: Duration,
}

impl Default for ToastOverlay {
    fn default() -> Self {
        Self::new(TOAST_LIFETIME)
    }
}

impl ToastOverlay {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, toast: Toast, now: Instant) {
        self.entries.push_back(ActiveToast {
            toast,
            shown_at: now,
        });
        while self.entries.len() > MAX_VISIBLE {
            self.entries.pop_front();
        }
    }

    pub fn extend(&mut self, toasts: impl IntoIterator<Item = Toast>, now: Instant) {
        for toast in toasts {
            self.push(toast, now);
        }
    }

    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.entries
            .retain(|entry| now.saturating_duration_since(entry.shown_at) < lifetime);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter().map(|entry| &entry.toast)
    }

    pub fn show(&mut self, ctx: &egui::Context, now: Instant) {
        self.prune(now);
        if self.entries.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                for (idx, entry) in self.entries.iter().enumerate() {
                    let (fill, stroke) = if entry.toast.is_destructive() {
                        (theme::DESTRUCTIVE, theme::DESTRUCTIVE)
                    } else {
                        (theme::CARD_FILL, theme::ACCENT.gamma_multiply(0.6))
                    };
                    egui::Frame::popup(ui.style())
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, stroke))
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::same(12))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(egui::RichText::new(entry.toast.title.as_str()).strong());
                                    ui.label(entry.toast.description.as_str());
                                });
                                if ui.small_button("✕").clicked() {
                                    dismissed = Some(idx);
                                }
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        if let Some(idx) = dismissed {
            self.entries.remove(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let start = Instant::now();
        let mut overlay = ToastOverlay::new(Duration::from_secs(2));
        overlay.push(Toast::message_sent(), start);
        overlay.push(Toast::submission_failed(), start + Duration::from_secs(1));

        overlay.prune(start + Duration::from_millis(2500));
        let titles: Vec<_> = overlay.visible().map(|toast| toast.title.as_str()).collect();
        assert_eq!(titles, ["Error"]);

        overlay.prune(start + Duration::from_secs(4));
        assert!(overlay.is_empty());
    }

    #[test]
    fn oldest_toast_is_dropped_beyond_the_visible_limit() {
        let now = Instant::now();
        let mut overlay = ToastOverlay::default();
        overlay.extend(
            [
                Toast::submission_failed(),
                Toast::message_sent(),
                Toast::message_sent(),
                Toast::message_sent(),
            ],
            now,
        );
        assert_eq!(overlay.visible().count(), MAX_VISIBLE);
        assert!(overlay.visible().all(|toast| !toast.is_destructive()));
    }
}
