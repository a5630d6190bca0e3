// app.rs
use egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, TopBottomPanel};

use crate::canvas::draw_body_canvas;
use crate::muscles::{LibraryError, MuscleLibrary};
use crate::panels;
use crate::state::PostureState;

pub struct PostureApp {
    pub state: PostureState,
    pub muscles: MuscleLibrary,
    pub dark_mode: bool,
}

impl PostureApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, LibraryError> {
        let muscles = MuscleLibrary::load()?;
        log::info!("loaded {} muscle records", muscles.len());
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        Ok(Self { state: PostureState::default(), muscles, dark_mode: true })
    }
}

impl eframe::App for PostureApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("POSTURE LAB").strong());
                ui.label(
                    RichText::new("upper crossed syndrome visualizer")
                        .small()
                        .color(ui.visuals().weak_text_color()),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    if ui.button(if self.dark_mode { "☀ Light" } else { "🌙 Dark" }).clicked() {
                        self.dark_mode = !self.dark_mode;
                        ctx.set_theme(if self.dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
                    }
                });
            });
            ui.add_space(4.0);
        });

        SidePanel::left("view_controls").min_width(220.0).max_width(280.0).show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                panels::view_controls(ui, &mut self.state);
            });
        });

        SidePanel::right("detail").min_width(300.0).max_width(380.0).show(ctx, |ui| {
            panels::detail_panel(ui, &self.state, &self.muscles);
        });

        TopBottomPanel::bottom("severity_bar").show(ctx, |ui| {
            panels::severity_bar(ui, &mut self.state);
        });

        let clicked = CentralPanel::default()
            .show(ctx, |ui| {
                if self.state.comparison_mode() {
                    // Two independent scenes derived from the one shared state:
                    // a neutral reference next to the current simulation.
                    let neutral = self.state.neutral_reference();
                    let current = self.state.without_comparison();
                    let mut clicked = None;
                    ui.columns(2, |cols| {
                        cols[0].vertical_centered(|ui| {
                            ui.label(
                                RichText::new("NEUTRAL REFERENCE")
                                    .small()
                                    .strong()
                                    .color(ui.visuals().weak_text_color()),
                            );
                            let size = ui.available_size();
                            clicked = draw_body_canvas(ui, &neutral, &self.muscles, size);
                        });
                        cols[1].vertical_centered(|ui| {
                            ui.label(
                                RichText::new("CURRENT SIMULATION")
                                    .small()
                                    .strong()
                                    .color(egui::Color32::from_rgb(248, 113, 113)),
                            );
                            let size = ui.available_size();
                            if let Some(id) = draw_body_canvas(ui, &current, &self.muscles, size) {
                                clicked = Some(id);
                            }
                        });
                    });
                    clicked
                } else {
                    let size = ui.available_size();
                    draw_body_canvas(ui, &self.state, &self.muscles, size)
                }
            })
            .inner;

        if let Some(id) = clicked {
            self.state.select_muscle(&id);
        }
    }
}
