//! egui host for declarative effect bindings.
//!
//! Effects are evaluated per frame from the instant they were triggered. An
//! instance selector such as `"nav-item:2"` without its own entry falls back
//! to its group's entry (`"nav-item"`) staggered by the instance index.

use std::{collections::HashMap, time::Instant};

use eframe::egui;
use site_core::effects::{EffectBindings, EffectHost, EffectKind, EffectSpec, EffectTrigger};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Channel {
    Reveal,
    Hover,
}

impl Channel {
    fn of(kind: &EffectKind) -> Self {
        match kind {
            EffectKind::HoverLift { .. } => Self::Hover,
            _ => Self::Reveal,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Running {
    spec: EffectSpec,
    started: Instant,
}

fn split_instance(selector: &str) -> (&str, usize) {
    match selector.rsplit_once(':') {
        Some((base, index)) => match index.parse() {
            Ok(index) => (base, index),
            Err(_) => (selector, 0),
        },
        None => (selector, 0),
    }
}

#[derive(Debug)]
pub struct EguiEffectHost {
    now: Instant,
    running: HashMap<(String, Channel), Running>,
    group_sizes: HashMap<String, usize>,
}

impl EguiEffectHost {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            running: HashMap::new(),
            group_sizes: HashMap::new(),
        }
    }

    /// Number of instances drawn for a group selector, so its staggered
    /// tail counts as animating.
    pub fn set_group_size(&mut self, selector: impl Into<String>, count: usize) {
        self.group_sizes.insert(selector.into(), count);
    }

    pub fn set_now(&mut self, now: Instant) {
        self.now = now;
    }

    /// Eased progress for `selector`, or `None` if nothing was triggered.
    fn progress(&self, selector: &str, channel: Channel) -> Option<(EffectKind, f32)> {
        let (entry, index) = match self.running.get(&(selector.to_string(), channel)) {
            Some(entry) => (entry, split_instance(selector).1),
            None => {
                let (base, index) = split_instance(selector);
                (self.running.get(&(base.to_string(), channel))?, index)
            }
        };
        let elapsed = self.now.saturating_duration_since(entry.started);
        Some((entry.spec.kind, entry.spec.progress(elapsed, index)))
    }

    pub fn is_animating(&self) -> bool {
        self.running.iter().any(|((selector, _), entry)| {
            let count = match self.group_sizes.get(selector) {
                Some(count) => *count,
                None => split_instance(selector).1 + 1,
            };
            self.now.saturating_duration_since(entry.started) < entry.spec.settle_time(count)
        })
    }
}

impl EffectHost for EguiEffectHost {
    fn trigger(&mut self, selector: &str, effect: &EffectSpec) {
        self.running.insert(
            (selector.to_string(), Channel::of(&effect.kind)),
            Running {
                spec: *effect,
                started: self.now,
            },
        );
    }
}

/// How a revealed element is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset: egui::Vec2,
    pub scale: f32,
}

impl RevealStyle {
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        offset: egui::Vec2::ZERO,
        scale: 1.0,
    };

    fn from_progress(kind: EffectKind, p: f32) -> Self {
        match kind {
            EffectKind::FadeUp { distance } => Self {
                opacity: p,
                offset: egui::vec2(0.0, distance * (1.0 - p)),
                scale: 1.0,
            },
            EffectKind::SlideIn { offset } => Self {
                opacity: p,
                offset: egui::vec2(offset * (1.0 - p), 0.0),
                scale: 1.0,
            },
            EffectKind::ScaleIn { from } => Self {
                opacity: p.min(1.0),
                offset: egui::Vec2::ZERO,
                scale: from + (1.0 - from) * p,
            },
            EffectKind::HoverLift { .. } => Self::SETTLED,
        }
    }

    /// A frame whose outer margins shift the content by `offset` and inset it
    /// by the scale while keeping the allocated size constant.
    pub fn frame(&self) -> egui::Frame {
        let inset = ((1.0 - self.scale) * 24.0).max(0.0);
        let dx = self.offset.x;
        let dy = self.offset.y;
        egui::Frame::NONE
            .outer_margin(egui::Margin {
                left: to_margin(dx - inset),
                right: to_margin(-dx - inset),
                top: to_margin(dy - inset),
                bottom: to_margin(-dy - inset),
            })
            .inner_margin(egui::Margin::same(to_margin(inset)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverStyle {
    pub scale: f32,
    pub lift: f32,
}

impl HoverStyle {
    pub const REST: Self = Self {
        scale: 1.0,
        lift: 0.0,
    };

    /// How far into its hover state the element is, `0..=1`.
    pub fn emphasis(&self, full_scale: f32) -> f32 {
        if full_scale <= 1.0 {
            return 0.0;
        }
        ((self.scale - 1.0) / (full_scale - 1.0)).clamp(0.0, 1.0)
    }
}

fn to_margin(value: f32) -> i8 {
    value.round().clamp(i8::MIN as f32, i8::MAX as f32) as i8
}

/// Page bindings wired to the egui host.
#[derive(Debug)]
pub struct PageEffects {
    bindings: EffectBindings,
    host: EguiEffectHost,
}

impl PageEffects {
    pub fn new(bindings: EffectBindings, now: Instant) -> Self {
        Self {
            bindings,
            host: EguiEffectHost::new(now),
        }
    }

    pub fn set_group_size(&mut self, selector: impl Into<String>, count: usize) {
        self.host.set_group_size(selector, count);
    }

    pub fn begin_frame(&mut self, now: Instant) {
        self.host.set_now(now);
    }

    pub fn mount(&mut self) -> usize {
        self.bindings.notify_mounted(&mut self.host)
    }

    pub fn is_animating(&self) -> bool {
        self.host.is_animating()
    }

    /// Bound but untriggered elements stay at the start of their reveal.
    pub fn reveal(&self, selector: &str) -> RevealStyle {
        if let Some((kind, p)) = self.host.progress(selector, Channel::Reveal) {
            return RevealStyle::from_progress(kind, p);
        }
        let pending = self
            .bindings
            .spec_for(selector, EffectTrigger::OnVisible)
            .or_else(|| self.bindings.spec_for(selector, EffectTrigger::OnMount));
        match pending {
            Some(spec) => RevealStyle::from_progress(spec.kind, 0.0),
            None => RevealStyle::SETTLED,
        }
    }

    pub fn hover(&self, selector: &str) -> HoverStyle {
        match self.host.progress(selector, Channel::Hover) {
            Some((EffectKind::HoverLift { to, lift }, p)) => HoverStyle {
                scale: 1.0 + (to - 1.0) * p,
                lift: lift * p,
            },
            _ => HoverStyle::REST,
        }
    }

    /// Reports that `selector` was laid out at `rect` this frame.
    pub fn observe_visible(&mut self, ui: &egui::Ui, selector: &str, rect: egui::Rect) {
        if ui.clip_rect().intersects(rect) {
            self.bindings.notify_visible(selector, &mut self.host);
        }
    }

    pub fn observe_hover(&mut self, selector: &str, hovered: bool) {
        self.bindings.notify_hover(selector, hovered, &mut self.host);
    }
}

/// Draws `add` with the given reveal style applied.
pub fn show_revealed<R>(
    ui: &mut egui::Ui,
    style: RevealStyle,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    style.frame().show(ui, |ui| {
        ui.multiply_opacity(style.opacity);
        add(ui)
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use site_core::effects::{page_bindings, selectors};

    use super::*;

    #[test]
    fn instance_selectors_fall_back_to_their_group() {
        let start = Instant::now();
        let mut host = EguiEffectHost::new(start);
        let spec = EffectSpec::new(EffectKind::FadeUp { distance: 20.0 }, Duration::from_secs(1))
            .with_stagger(Duration::from_millis(500));
        host.trigger("nav-item", &spec);

        host.set_now(start + Duration::from_millis(500));
        let (_, first) = host.progress("nav-item:0", Channel::Reveal).expect("group entry");
        let (_, second) = host.progress("nav-item:1", Channel::Reveal).expect("group entry");
        assert!(first > 0.0);
        assert_eq!(second, 0.0);
        assert!(host.is_animating());

        host.set_now(start + Duration::from_millis(1200));
        assert!(!host.is_animating());

        host.set_group_size("nav-item", 3);
        assert!(host.is_animating());

        host.set_now(start + Duration::from_secs(3));
        assert!(!host.is_animating());
    }

    #[test]
    fn hover_and_reveal_do_not_overwrite_each_other() {
        let start = Instant::now();
        let mut effects = PageEffects::new(page_bindings(), start);
        let card = format!("{}:1", selectors::PROJECT_CARD);

        assert_eq!(effects.reveal(&card).opacity, 0.0);

        effects.host.trigger(
            &card,
            effects
                .bindings
                .spec_for(&card, EffectTrigger::OnVisible)
                .expect("bound"),
        );
        effects.observe_hover(&card, true);

        effects.begin_frame(start + Duration::from_secs(5));
        assert_eq!(effects.reveal(&card), RevealStyle::SETTLED);
        let hover = effects.hover(&card);
        assert!((hover.scale - 1.02).abs() < 1e-4);
        assert!((hover.lift - 10.0).abs() < 1e-4);

        effects.observe_hover(&card, false);
        effects.begin_frame(start + Duration::from_secs(10));
        assert_eq!(effects.hover(&card), HoverStyle::REST);
    }

    #[test]
    fn unbound_elements_render_settled() {
        let effects = PageEffects::new(page_bindings(), Instant::now());
        assert_eq!(effects.reveal("not-bound"), RevealStyle::SETTLED);
        assert_eq!(effects.hover("not-bound"), HoverStyle::REST);
    }

    #[test]
    fn mount_fires_once() {
        let mut effects = PageEffects::new(page_bindings(), Instant::now());
        assert!(effects.mount() > 0);
        assert_eq!(effects.mount(), 0);
    }
}
