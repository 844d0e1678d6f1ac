use std::collections::BTreeMap;

use eframe::egui;
use site_core::bootstrap::{ColorScheme, FontFamily, StyleRoot};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(139, 92, 246);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(148, 156, 172);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(24, 26, 36);
pub const GLASS_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(14, 15, 22, 215);
pub const DESTRUCTIVE: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

pub const DISPLAY_STYLE: &str = "Display";
pub const SECTION_TITLE_STYLE: &str = "SectionTitle";

pub fn display_style() -> egui::TextStyle {
    egui::TextStyle::Name(DISPLAY_STYLE.into())
}

pub fn section_title_style() -> egui::TextStyle {
    egui::TextStyle::Name(SECTION_TITLE_STYLE.into())
}

/// Applies the page-wide style once, before the first frame is drawn.
pub fn apply_style_root(ctx: &egui::Context, root: StyleRoot) {
    ctx.set_theme(match root.color_scheme {
        ColorScheme::Dark => egui::Theme::Dark,
        ColorScheme::Light => egui::Theme::Light,
    });
    ctx.style_mut(|style| {
        style.visuals = visuals_for_scheme(root.color_scheme);
        style.text_styles = text_styles_for(root.body_font);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.interact_size = egui::vec2(40.0, 32.0);
    });
}

fn visuals_for_scheme(scheme: ColorScheme) -> egui::Visuals {
    match scheme {
        ColorScheme::Dark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(226, 232, 240));
            v.window_fill = egui::Color32::from_rgb(17, 18, 27);
            v.panel_fill = egui::Color32::from_rgb(10, 11, 17);
            v.extreme_bg_color = egui::Color32::from_rgb(20, 22, 31);
            v.faint_bg_color = CARD_FILL;
            v.hyperlink_color = ACCENT_SOFT;
            v.selection.bg_fill = ACCENT.gamma_multiply(0.7);
            v.widgets.inactive.bg_stroke =
                egui::Stroke::new(1.0, egui::Color32::from_rgb(45, 48, 64));
            v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT_SOFT);
            v.widgets.active.bg_stroke = egui::Stroke::new(1.2, ACCENT);
            v
        }
        ColorScheme::Light => {
            let mut v = egui::Visuals::light();
            v.hyperlink_color = ACCENT;
            v.selection.bg_fill = ACCENT_SOFT.gamma_multiply(0.6);
            v
        }
    }
}

fn text_styles_for(body_font: FontFamily) -> BTreeMap<egui::TextStyle, egui::FontId> {
    // egui ships no serif face; serif falls back to the proportional family.
    let family = match body_font {
        FontFamily::Sans | FontFamily::Serif => egui::FontFamily::Proportional,
        FontFamily::Mono => egui::FontFamily::Monospace,
    };
    let font = |size: f32| egui::FontId::new(size, family.clone());

    let mut styles = egui::Style::default().text_styles;
    styles.insert(egui::TextStyle::Small, font(12.0));
    styles.insert(egui::TextStyle::Body, font(16.0));
    styles.insert(egui::TextStyle::Button, font(15.0));
    styles.insert(egui::TextStyle::Heading, font(22.0));
    styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::new(14.0, egui::FontFamily::Monospace),
    );
    styles.insert(display_style(), font(56.0));
    styles.insert(section_title_style(), font(38.0));
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_body_switches_every_text_style_but_code() {
        let styles = text_styles_for(FontFamily::Mono);
        assert_eq!(
            styles[&egui::TextStyle::Body].family,
            egui::FontFamily::Monospace
        );
        assert_eq!(styles[&display_style()].size, 56.0);
    }

    #[test]
    fn default_root_uses_the_dark_palette() {
        let ctx = egui::Context::default();
        apply_style_root(&ctx, StyleRoot::default());
        let style = ctx.style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.visuals.hyperlink_color, ACCENT_SOFT);
        assert!(style.text_styles.contains_key(&section_title_style()));
    }
}
