//! Declarative effect bindings.
//!
//! Sections describe *what* should animate and *when* (`on-mount`,
//! `on-visible`, `on-hover`); an [`EffectHost`] decides how. Hosts only need
//! the single `trigger(selector, spec)` capability.

use std::{collections::HashSet, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1InOut,
    Power2Out,
    Power2InOut,
    BackOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::BackOut => {
                const OVERSHOOT: f32 = 1.7;
                let u = t - 1.0;
                1.0 + (OVERSHOOT + 1.0) * u.powi(3) + OVERSHOOT * u.powi(2)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTrigger {
    OnMount,
    OnVisible,
    OnHover,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectKind {
    /// Fade in while travelling `distance` points upwards.
    FadeUp { distance: f32 },
    /// Fade in while sliding horizontally from `offset`.
    SlideIn { offset: f32 },
    /// Fade in while growing from `from` to full size.
    ScaleIn { from: f32 },
    /// Grow to `to` and rise by `lift` points while hovered.
    HoverLift { to: f32, lift: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSpec {
    pub kind: EffectKind,
    pub duration: Duration,
    pub stagger: Duration,
    pub ease: Ease,
    pub reverse: bool,
}

impl EffectSpec {
    pub fn new(kind: EffectKind, duration: Duration) -> Self {
        Self {
            kind,
            duration,
            stagger: Duration::ZERO,
            ease: Ease::Power2Out,
            reverse: false,
        }
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn reversed(&self) -> Self {
        Self {
            reverse: !self.reverse,
            ..*self
        }
    }

    /// Eased completion in `0..=1` for the `index`-th element of a staggered
    /// group, `elapsed` after the trigger. Reversed specs run from 1 to 0.
    pub fn progress(&self, elapsed: Duration, index: usize) -> f32 {
        let delay = self.stagger.saturating_mul(index as u32);
        let Some(active) = elapsed.checked_sub(delay) else {
            return if self.reverse { 1.0 } else { 0.0 };
        };
        let linear = if self.duration.is_zero() {
            1.0
        } else {
            (active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.ease.apply(linear);
        if self.reverse {
            1.0 - eased
        } else {
            eased
        }
    }

    /// Total time until the last element of a group of `count` settles.
    pub fn settle_time(&self, count: usize) -> Duration {
        self.stagger.saturating_mul(count.saturating_sub(1) as u32) + self.duration
    }
}

/// The capability a rendering runtime exposes to run effects.
pub trait EffectHost {
    fn trigger(&mut self, selector: &str, effect: &EffectSpec);
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectBinding {
    pub selector: String,
    pub trigger: EffectTrigger,
    pub spec: EffectSpec,
}

impl EffectBinding {
    /// `"project-card"` matches itself and instance selectors such as
    /// `"project-card:3"`.
    fn matches(&self, element: &str) -> bool {
        element == self.selector
            || element
                .strip_prefix(self.selector.as_str())
                .is_some_and(|rest| rest.starts_with(':'))
    }
}

#[derive(Debug, Default)]
pub struct EffectBindings {
    bindings: Vec<EffectBinding>,
    fired: HashSet<(String, EffectTrigger)>,
    hovered: HashSet<String>,
}

impl EffectBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(
        &mut self,
        selector: impl Into<String>,
        trigger: EffectTrigger,
        spec: EffectSpec,
    ) -> &mut Self {
        self.bindings.push(EffectBinding {
            selector: selector.into(),
            trigger,
            spec,
        });
        self
    }

    pub fn on_mount(&mut self, selector: impl Into<String>, spec: EffectSpec) -> &mut Self {
        self.bind(selector, EffectTrigger::OnMount, spec)
    }

    pub fn on_visible(&mut self, selector: impl Into<String>, spec: EffectSpec) -> &mut Self {
        self.bind(selector, EffectTrigger::OnVisible, spec)
    }

    pub fn on_hover(&mut self, selector: impl Into<String>, spec: EffectSpec) -> &mut Self {
        self.bind(selector, EffectTrigger::OnHover, spec)
    }

    pub fn bindings(&self) -> &[EffectBinding] {
        &self.bindings
    }

    pub fn spec_for(&self, element: &str, trigger: EffectTrigger) -> Option<&EffectSpec> {
        self.bindings
            .iter()
            .find(|binding| binding.trigger == trigger && binding.matches(element))
            .map(|binding| &binding.spec)
    }

    /// Fires every on-mount binding that has not fired yet.
    pub fn notify_mounted(&mut self, host: &mut dyn EffectHost) -> usize {
        let mut fired = 0;
        for binding in &self.bindings {
            if binding.trigger != EffectTrigger::OnMount {
                continue;
            }
            if self
                .fired
                .insert((binding.selector.clone(), EffectTrigger::OnMount))
            {
                host.trigger(&binding.selector, &binding.spec);
                fired += 1;
            }
        }
        fired
    }

    /// Fires the on-visible binding for `element` the first time it scrolls
    /// into view. Returns whether anything fired.
    pub fn notify_visible(&mut self, element: &str, host: &mut dyn EffectHost) -> bool {
        let Some(spec) = self.spec_for(element, EffectTrigger::OnVisible).copied() else {
            return false;
        };
        if !self
            .fired
            .insert((element.to_string(), EffectTrigger::OnVisible))
        {
            return false;
        }
        host.trigger(element, &spec);
        true
    }

    /// Fires the hover binding on enter and its reverse on leave. Repeated
    /// reports of the same hover state are ignored.
    pub fn notify_hover(&mut self, element: &str, hovered: bool, host: &mut dyn EffectHost) -> bool {
        let Some(spec) = self.spec_for(element, EffectTrigger::OnHover).copied() else {
            return false;
        };
        let changed = if hovered {
            self.hovered.insert(element.to_string())
        } else {
            self.hovered.remove(element)
        };
        if !changed {
            return false;
        }
        if hovered {
            host.trigger(element, &spec);
        } else {
            host.trigger(element, &spec.reversed());
        }
        true
    }
}

pub mod selectors {
    pub const NAV_ITEM: &str = "nav-item";
    pub const HERO_HEADLINE: &str = "hero-headline";
    pub const HERO_CTA: &str = "hero-cta";
    pub const ABOUT_CONTENT: &str = "about-content";
    pub const SKILL_CARD: &str = "skill-card";
    pub const PROJECTS_TITLE: &str = "projects-title";
    pub const PROJECT_CARD: &str = "project-card";
    pub const CONTACT_TITLE: &str = "contact-title";
    pub const FORM_INPUT: &str = "form-input";
    pub const SOCIAL_ICON: &str = "social-icon";
    pub const FOOTER: &str = "footer-content";
}

/// Bindings for every decorated element on the page.
pub fn page_bindings() -> EffectBindings {
    use selectors::*;

    let secs = Duration::from_secs_f32;
    let mut bindings = EffectBindings::new();
    bindings
        .on_mount(
            NAV_ITEM,
            EffectSpec::new(EffectKind::FadeUp { distance: -20.0 }, secs(0.6))
                .with_stagger(secs(0.1)),
        )
        .on_mount(
            HERO_HEADLINE,
            EffectSpec::new(EffectKind::FadeUp { distance: 50.0 }, secs(1.2)),
        )
        .on_hover(
            HERO_CTA,
            EffectSpec::new(EffectKind::HoverLift { to: 1.05, lift: 0.0 }, secs(0.3)),
        )
        .on_visible(
            ABOUT_CONTENT,
            EffectSpec::new(EffectKind::FadeUp { distance: 50.0 }, secs(1.0)),
        )
        .on_visible(
            SKILL_CARD,
            EffectSpec::new(EffectKind::ScaleIn { from: 0.5 }, secs(0.6))
                .with_stagger(secs(0.1))
                .with_ease(Ease::BackOut),
        )
        .on_visible(
            PROJECTS_TITLE,
            EffectSpec::new(EffectKind::FadeUp { distance: 50.0 }, secs(1.0)),
        )
        .on_visible(
            PROJECT_CARD,
            EffectSpec::new(EffectKind::ScaleIn { from: 0.8 }, secs(0.8)).with_stagger(secs(0.2)),
        )
        .on_hover(
            PROJECT_CARD,
            EffectSpec::new(EffectKind::HoverLift { to: 1.02, lift: 10.0 }, secs(0.3)),
        )
        .on_visible(
            CONTACT_TITLE,
            EffectSpec::new(EffectKind::FadeUp { distance: 50.0 }, secs(1.0)),
        )
        .on_visible(
            FORM_INPUT,
            EffectSpec::new(EffectKind::SlideIn { offset: -50.0 }, secs(0.8))
                .with_stagger(secs(0.2)),
        )
        .on_visible(
            SOCIAL_ICON,
            EffectSpec::new(EffectKind::ScaleIn { from: 0.5 }, secs(0.6))
                .with_stagger(secs(0.1))
                .with_ease(Ease::BackOut),
        )
        .on_visible(
            FOOTER,
            EffectSpec::new(EffectKind::FadeUp { distance: 60.0 }, secs(1.0)),
        );
    bindings
}

#[cfg(test)]
#[path = "tests/effects_tests.rs"]
mod tests;
