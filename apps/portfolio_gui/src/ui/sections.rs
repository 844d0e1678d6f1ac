//! Page sections drawn inside the main scroll area, plus the navigation bar.

use eframe::egui;
use shared::{
    content::{
        copyright_line, project_has_link, Project, Skill, SocialLink, ABOUT_PARAGRAPHS,
        AVAILABILITY_BLURB, CONTACT_BLURB, HERO_TAGLINE, NAV_ITEMS, PROJECTS, PROJECTS_BLURB,
        SKILLS,
    },
    domain::{FormField, SectionId},
};
use site_core::{effects::selectors, navigation::NavigationState};

use crate::controller::orchestration::submit_contact_form;
use crate::ui::{
    app::PortfolioApp,
    effects::{show_revealed, RevealStyle},
    theme,
};

const MOBILE_BREAKPOINT: f32 = 720.0;
const CONTENT_MAX_WIDTH: f32 = 1100.0;
const SECTION_GAP: f32 = 96.0;

fn instance(selector: &str, index: usize) -> String {
    format!("{selector}:{index}")
}

/// Zero-height marker at the top of a section; consumes a pending scroll
/// request aimed at it.
fn section_anchor(ui: &mut egui::Ui, navigation: &mut NavigationState, section: SectionId) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 0.0), egui::Sense::hover());
    if navigation.take_scroll_target_for(section) {
        ui.scroll_to_rect(rect, Some(egui::Align::TOP));
    }
}

fn centered<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
    let side = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            add(ui)
        })
        .inner
    })
    .inner
}

fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(text)
                .text_style(theme::section_title_style())
                .strong()
                .color(theme::ACCENT),
        );
    });
}

fn muted(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).color(theme::MUTED_TEXT)
}

fn card_frame(emphasis: f32) -> egui::Frame {
    let stroke = egui::Color32::from_rgb(45, 48, 64).lerp_to_gamma(theme::ACCENT, emphasis);
    egui::Frame::NONE
        .fill(theme::CARD_FILL)
        .stroke(egui::Stroke::new(1.0, stroke))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(18))
}

fn primary_button(text: &str, scale: f32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .size(17.0 * scale)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(theme::ACCENT)
    .corner_radius(egui::CornerRadius::same(8))
    .min_size(egui::vec2(150.0, 44.0) * scale)
}

fn skill_card(ui: &mut egui::Ui, skill: &Skill) {
    card_frame(0.0).show(ui, |ui| {
        ui.set_width(96.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(skill.icon).size(28.0).color(theme::ACCENT_SOFT));
            ui.label(egui::RichText::new(skill.name).small());
        });
    });
}

fn project_card(ui: &mut egui::Ui, project: &Project, emphasis: f32) {
    card_frame(emphasis).show(ui, |ui| {
        ui.set_width(300.0);
        ui.label(egui::RichText::new(project.title).heading().strong());
        ui.add_space(4.0);
        ui.label(muted(project.description));
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for tech in project.tech {
                egui::Frame::NONE
                    .fill(theme::ACCENT.gamma_multiply(0.18))
                    .corner_radius(egui::CornerRadius::same(10))
                    .inner_margin(egui::Margin::symmetric(8, 2))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(*tech).small().color(theme::ACCENT_SOFT));
                    });
            }
        });
        ui.add_space(8.0);
        if project_has_link(project) {
            ui.hyperlink_to("View Project →", project.link);
        } else {
            ui.add_enabled(false, egui::Label::new("View Project →"));
        }
    });
}

impl PortfolioApp {
    fn scroll_to(&mut self, section: SectionId) {
        self.navigation.scroll_to_section(section.anchor());
    }

    fn nav_item(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        add: impl FnOnce(&mut egui::Ui) -> egui::Response,
    ) -> egui::Response {
        let style = self.effects.reveal(&instance(selectors::NAV_ITEM, index));
        show_revealed(ui, style, add).inner
    }

    pub(super) fn show_navigation(&mut self, ctx: &egui::Context) {
        let (fill, v_margin) = if self.navigation.scrolled() {
            (theme::GLASS_FILL, 10)
        } else {
            (ctx.style().visuals.panel_fill, 18)
        };
        let initials = self.settings.owner.initials.clone();

        egui::TopBottomPanel::top("navigation")
            .frame(
                egui::Frame::NONE
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(24, v_margin)),
            )
            .show(ctx, |ui| {
                let narrow = ui.available_width() < MOBILE_BREAKPOINT;
                ui.horizontal(|ui| {
                    let logo = self.nav_item(ui, 0, |ui| {
                        ui.add(
                            egui::Button::new(
                                egui::RichText::new(initials)
                                    .size(24.0)
                                    .strong()
                                    .color(theme::ACCENT),
                            )
                            .frame(false),
                        )
                    });
                    if logo.clicked() {
                        self.scroll_to(SectionId::Hero);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if narrow {
                            let icon = if self.navigation.menu_open() { "✕" } else { "☰" };
                            let toggle = self.nav_item(ui, 1, |ui| {
                                ui.add(
                                    egui::Button::new(egui::RichText::new(icon).size(20.0))
                                        .frame(false),
                                )
                            });
                            if toggle.clicked() {
                                self.navigation.toggle_menu();
                            }
                            return;
                        }

                        let hire = self.nav_item(ui, NAV_ITEMS.len() + 1, |ui| {
                            ui.add(primary_button("Hire Me", 0.85))
                        });
                        if hire.clicked() {
                            self.scroll_to(SectionId::Contact);
                        }
                        for (idx, item) in NAV_ITEMS.iter().enumerate().rev() {
                            let link = self.nav_item(ui, idx + 1, |ui| {
                                ui.add(egui::Button::new(item.label).frame(false))
                            });
                            if link.clicked() {
                                self.navigation.scroll_to_section(item.target.anchor());
                            }
                        }
                    });
                });
            });
    }

    pub(super) fn show_mobile_menu(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("mobile_menu"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 72.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(theme::GLASS_FILL)
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        ui.set_min_width(220.0);
                        ui.vertical_centered(|ui| {
                            for item in NAV_ITEMS {
                                let link = ui.add(
                                    egui::Button::new(egui::RichText::new(item.label).size(22.0))
                                        .frame(false),
                                );
                                if link.clicked() {
                                    self.navigation.scroll_to_section(item.target.anchor());
                                }
                                ui.add_space(12.0);
                            }
                            if ui.add(primary_button("Hire Me", 1.0)).clicked() {
                                self.scroll_to(SectionId::Contact);
                            }
                        });
                    });
            });
    }

    pub(super) fn show_hero(&mut self, ui: &mut egui::Ui) {
        section_anchor(ui, &mut self.navigation, SectionId::Hero);
        ui.add_space(SECTION_GAP);

        let headline = self.effects.reveal(selectors::HERO_HEADLINE);
        let cta_hover = self.effects.hover(selectors::HERO_CTA);
        let owner = self.settings.owner.clone();

        let cta = centered(ui, |ui| {
            show_revealed(ui, headline, |ui| {
                ui.label(egui::RichText::new("Hi, I'm").text_style(theme::display_style()));
                ui.label(
                    egui::RichText::new(&owner.name)
                        .text_style(theme::display_style())
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.label(
                    egui::RichText::new(&owner.role)
                        .text_style(theme::section_title_style())
                        .color(theme::MUTED_TEXT),
                );
            });
            ui.add_space(16.0);
            ui.label(muted(HERO_TAGLINE).size(20.0));
            ui.add_space(24.0);
            ui.add(primary_button("Hire Me →", cta_hover.scale))
        });
        self.effects.observe_hover(selectors::HERO_CTA, cta.hovered());
        if cta.clicked() {
            self.scroll_to(SectionId::Contact);
        }

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            let indicator = ui.add(
                egui::Button::new(egui::RichText::new("⌄").size(22.0).color(theme::ACCENT))
                    .frame(false),
            );
            if indicator.clicked() {
                self.scroll_to(SectionId::About);
            }
        });
        ui.add_space(SECTION_GAP);
    }

    pub(super) fn show_about(&mut self, ui: &mut egui::Ui) {
        section_anchor(ui, &mut self.navigation, SectionId::About);
        ui.add_space(SECTION_GAP / 2.0);

        let style = self.effects.reveal(selectors::ABOUT_CONTENT);
        let owner = self.settings.owner.clone();
        let content = centered(ui, |ui| {
            show_revealed(ui, style, |ui| {
                section_title(ui, "About Me");
                ui.add_space(16.0);
                for paragraph in ABOUT_PARAGRAPHS {
                    ui.label(muted(*paragraph).size(17.0));
                    ui.add_space(8.0);
                }
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("📍").color(theme::ACCENT_SOFT));
                    ui.label(muted(&owner.location));
                    ui.add_space(16.0);
                    ui.label(egui::RichText::new("●").color(egui::Color32::from_rgb(34, 197, 94)));
                    ui.label(muted(&owner.availability));
                });
            })
            .response
            .rect
        });
        self.effects
            .observe_visible(ui, selectors::ABOUT_CONTENT, content);

        ui.add_space(32.0);
        centered(ui, |ui| {
            ui.label(egui::RichText::new("Skills & Technologies").heading().strong());
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for (idx, skill) in SKILLS.iter().enumerate() {
                    let selector = instance(selectors::SKILL_CARD, idx);
                    let style = self.effects.reveal(&selector);
                    let card = show_revealed(ui, style, |ui| skill_card(ui, skill));
                    self.effects.observe_visible(ui, &selector, card.response.rect);
                }
            });
        });
        ui.add_space(SECTION_GAP);
    }

    pub(super) fn show_projects(&mut self, ui: &mut egui::Ui) {
        section_anchor(ui, &mut self.navigation, SectionId::Projects);
        ui.add_space(SECTION_GAP / 2.0);

        centered(ui, |ui| {
            let style = self.effects.reveal(selectors::PROJECTS_TITLE);
            let title = show_revealed(ui, style, |ui| {
                section_title(ui, "Featured Projects");
                ui.vertical_centered(|ui| ui.label(muted(PROJECTS_BLURB).size(17.0)));
            });
            self.effects
                .observe_visible(ui, selectors::PROJECTS_TITLE, title.response.rect);
            ui.add_space(24.0);

            ui.horizontal_wrapped(|ui| {
                for (idx, project) in PROJECTS.iter().enumerate() {
                    let selector = instance(selectors::PROJECT_CARD, idx);
                    let reveal = self.effects.reveal(&selector);
                    let hover = self.effects.hover(&selector);
                    let style = RevealStyle {
                        offset: reveal.offset - egui::vec2(0.0, hover.lift),
                        ..reveal
                    };
                    let card = show_revealed(ui, style, |ui| {
                        project_card(ui, project, hover.emphasis(1.02))
                    });
                    self.effects.observe_visible(ui, &selector, card.response.rect);
                    self.effects
                        .observe_hover(&selector, card.response.contains_pointer());
                }
            });
        });
        ui.add_space(SECTION_GAP);
    }

    pub(super) fn show_contact(&mut self, ui: &mut egui::Ui) {
        section_anchor(ui, &mut self.navigation, SectionId::Contact);
        ui.add_space(SECTION_GAP / 2.0);

        centered(ui, |ui| {
            let style = self.effects.reveal(selectors::CONTACT_TITLE);
            let title = show_revealed(ui, style, |ui| {
                section_title(ui, "Get In Touch");
                ui.vertical_centered(|ui| ui.label(muted(CONTACT_BLURB).size(17.0)));
            });
            self.effects
                .observe_visible(ui, selectors::CONTACT_TITLE, title.response.rect);
            ui.add_space(24.0);

            if ui.available_width() < MOBILE_BREAKPOINT {
                self.show_contact_form(ui);
                ui.add_space(32.0);
                self.show_contact_info(ui);
            } else {
                ui.columns(2, |columns| {
                    self.show_contact_form(&mut columns[0]);
                    self.show_contact_info(&mut columns[1]);
                });
            }
        });
        ui.add_space(SECTION_GAP);
    }

    fn show_contact_form(&mut self, ui: &mut egui::Ui) {
        card_frame(0.0).show(ui, |ui| {
            for (idx, field) in FormField::ALL.into_iter().enumerate() {
                let selector = instance(selectors::FORM_INPUT, idx);
                let style = self.effects.reveal(&selector);
                let hint = self
                    .contact_form
                    .validation_error()
                    .filter(|err| err.field() == field)
                    .map(|err| err.hint());
                let mut value = self.contact_form.draft().field(field).to_string();

                let input = show_revealed(ui, style, |ui| {
                    ui.label(egui::RichText::new(field.label()).strong());
                    let edit = match field {
                        FormField::Message => egui::TextEdit::multiline(&mut value).desired_rows(6),
                        FormField::Name | FormField::Email => egui::TextEdit::singleline(&mut value),
                    };
                    let changed = ui
                        .add(
                            edit.hint_text(field.placeholder())
                                .desired_width(f32::INFINITY),
                        )
                        .changed();
                    if let Some(hint) = hint {
                        ui.colored_label(theme::DESTRUCTIVE, hint);
                    }
                    ui.add_space(8.0);
                    changed
                });
                if input.inner {
                    self.contact_form.update_field(field, value);
                }
                self.effects.observe_visible(ui, &selector, input.response.rect);
            }

            let submitting = self.contact_form.is_submitting();
            let label = if submitting { "Sending..." } else { "Send Message" };
            let clicked = ui
                .horizontal(|ui| {
                    let button =
                        ui.add_enabled(self.contact_form.can_submit(), primary_button(label, 1.0));
                    if submitting {
                        ui.spinner();
                    }
                    button.clicked()
                })
                .inner;
            if clicked {
                if let Err(rejection) = submit_contact_form(&mut self.contact_form, &self.cmd_tx) {
                    tracing::debug!(%rejection, "contact submission not started");
                }
            }

            if let Some(reason) = self.backend.failure() {
                ui.colored_label(
                    theme::DESTRUCTIVE,
                    format!("Messaging is unavailable: {reason}"),
                );
            }
        });
    }

    fn show_contact_info(&mut self, ui: &mut egui::Ui) {
        let owner = self.settings.owner.clone();
        ui.label(egui::RichText::new("Let's Connect").heading().strong());
        ui.add_space(8.0);
        ui.label(muted(AVAILABILITY_BLURB));
        ui.add_space(16.0);
        for (icon, text) in [
            ("✉", owner.email.as_str()),
            ("📍", owner.location.as_str()),
            ("●", owner.availability.as_str()),
        ] {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).color(theme::ACCENT_SOFT));
                ui.label(text);
            });
        }
        ui.add_space(16.0);

        let links = self.settings.social_links.clone();
        ui.horizontal_wrapped(|ui| {
            for (idx, link) in links.iter().enumerate() {
                let selector = instance(selectors::SOCIAL_ICON, idx);
                let style = self.effects.reveal(&selector);
                let icon = show_revealed(ui, style, |ui| ui.button(link.label.as_str()));
                if icon.inner.clicked() {
                    open_social_link(ui.ctx(), link);
                }
                self.effects.observe_visible(ui, &selector, icon.response.rect);
            }
        });
    }

    pub(super) fn show_footer(&mut self, ui: &mut egui::Ui) {
        let style = self.effects.reveal(selectors::FOOTER);
        let owner = self.settings.owner.clone();
        let year = self.footer_year;

        let footer = egui::Frame::NONE
            .fill(theme::CARD_FILL)
            .inner_margin(egui::Margin::symmetric(24, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                show_revealed(ui, style, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(&owner.name)
                                .size(28.0)
                                .strong()
                                .color(theme::ACCENT),
                        );
                        ui.label(muted(format!(
                            "{} crafting digital experiences with passion and precision.",
                            owner.role
                        )));
                        ui.add_space(16.0);
                        let mut target = None;
                        ui.horizontal(|ui| {
                            for item in NAV_ITEMS {
                                if ui
                                    .add(egui::Button::new(muted(item.label)).frame(false))
                                    .clicked()
                                {
                                    target = Some(item.target);
                                }
                            }
                        });
                        ui.add_space(16.0);
                        ui.separator();
                        ui.label(muted(copyright_line(year, &owner)).small());
                        target
                    })
                    .inner
                })
            })
            .inner;

        if let Some(section) = footer.inner {
            self.scroll_to(section);
        }
        self.effects
            .observe_visible(ui, selectors::FOOTER, footer.response.rect);
    }
}

fn open_social_link(ctx: &egui::Context, link: &SocialLink) {
    let url = link.url.to_string();
    if link.is_mailto() {
        ctx.open_url(egui::OpenUrl::same_tab(url));
    } else {
        ctx.open_url(egui::OpenUrl::new_tab(url));
    }
}
