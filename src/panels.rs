// panels.rs
use egui::{Color32, ProgressBar, RichText, ScrollArea, Slider, Ui};

use crate::figure;
use crate::morph::{self, NerveRisk, SeverityBand};
use crate::muscles::{MuscleLibrary, MuscleRecord, MuscleStatus};
use crate::state::{PostureState, StateUpdate, ViewMode};

const MILD_COLOR: Color32 = Color32::from_rgb(74, 222, 128);
const MODERATE_COLOR: Color32 = Color32::from_rgb(251, 146, 60);
const SEVERE_COLOR: Color32 = Color32::from_rgb(248, 113, 113);

fn band_color(band: SeverityBand) -> Color32 {
    match band {
        SeverityBand::Mild => MILD_COLOR,
        SeverityBand::Moderate => MODERATE_COLOR,
        SeverityBand::Severe => SEVERE_COLOR,
    }
}

fn section_heading(ui: &mut Ui, label: &str) {
    ui.label(RichText::new(label).small().strong().color(ui.visuals().weak_text_color()));
    ui.add_space(4.0);
}

// ── Left panel: view mode and overlay toggles ─────────────────────────────────

pub fn view_controls(ui: &mut Ui, state: &mut PostureState) {
    ui.add_space(6.0);
    section_heading(ui, "VIEW MODE");
    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::selectable(state.view_mode() == ViewMode::Morphology, "🧍 Morphology"))
            .clicked()
        {
            state.apply(StateUpdate { view_mode: Some(ViewMode::Morphology), ..Default::default() });
        }
        if ui
            .add(egui::Button::selectable(state.view_mode() == ViewMode::Muscle, "💪 Muscle"))
            .clicked()
        {
            state.apply(StateUpdate { view_mode: Some(ViewMode::Muscle), ..Default::default() });
        }
    });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    section_heading(ui, "OVERLAYS");
    let toggles: [(&str, bool, fn(bool) -> StateUpdate); 3] = [
        ("🦴 Skeletal overlay", state.show_skeleton(), |v| StateUpdate {
            show_skeleton: Some(v),
            ..Default::default()
        }),
        ("📏 Plumb line guides", state.show_plumb_line(), |v| StateUpdate {
            show_plumb_line: Some(v),
            ..Default::default()
        }),
        ("🔳 Side-by-side compare", state.comparison_mode(), |v| StateUpdate {
            comparison_mode: Some(v),
            ..Default::default()
        }),
    ];
    for (label, on, patch) in toggles {
        if ui.add(egui::Button::selectable(on, label)).clicked() {
            state.apply(patch(!on));
        }
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    section_heading(ui, "LEGEND");
    ui.label(
        RichText::new("Morphology: tracks the ear relative to C7 as severity grows.")
            .small()
            .color(ui.visuals().weak_text_color()),
    );
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("●").color(figure::TIGHT_COLOR));
        ui.label(RichText::new("tight / overactive").small());
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new("●").color(figure::WEAK_COLOR));
        ui.label(RichText::new("weak / inhibited").small());
    });
    ui.add_space(2.0);
    ui.label(
        RichText::new("Muscle: Janda crossed-syndrome coloring; click a region for detail.")
            .small()
            .color(ui.visuals().weak_text_color()),
    );
}

// ── Bottom panel: severity slider ─────────────────────────────────────────────

pub fn severity_bar(ui: &mut Ui, state: &mut PostureState) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.vertical(|ui| {
            ui.label(RichText::new("SEVERITY SIMULATION").small().strong());
            ui.label(
                RichText::new("dynamic morphing")
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );
        });
        ui.add_space(16.0);

        let mut severity = state.severity();
        let slider = ui.add(
            Slider::new(&mut severity, 0.0..=1.0)
                .step_by(0.01)
                .show_value(false),
        );
        if slider.changed() {
            state.apply(StateUpdate { severity: Some(severity), ..Default::default() });
        }

        let pct_color = if severity > 0.7 {
            SEVERE_COLOR
        } else if severity > 0.4 {
            MODERATE_COLOR
        } else {
            figure::WEAK_COLOR
        };
        ui.label(RichText::new(format!("{:.0}%", severity * 100.0)).strong().size(18.0).color(pct_color));
        ui.label(RichText::new("UCS index").small().color(ui.visuals().weak_text_color()));

        ui.add_space(16.0);
        if ui.button("Reset neutral").clicked() {
            state.apply(StateUpdate { severity: Some(0.0), ..Default::default() });
        }
        if ui.button("Max severity").clicked() {
            state.apply(StateUpdate { severity: Some(1.0), ..Default::default() });
        }
    });
    ui.add_space(6.0);
}

// ── Right panel: biometrics readouts and muscle detail ────────────────────────

pub fn detail_panel(ui: &mut Ui, state: &PostureState, muscles: &MuscleLibrary) {
    let severity = state.severity();
    let band = SeverityBand::from_severity(severity);
    let risk = NerveRisk::from_severity(severity);

    ui.add_space(6.0);
    section_heading(ui, "BIOMETRICS");
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("C7/tragus angle").small().color(ui.visuals().weak_text_color()));
            ui.label(
                RichText::new(format!("{}°", morph::craniovertebral_angle(severity)))
                    .strong()
                    .size(22.0),
            );
        });
        ui.add_space(24.0);
        ui.vertical(|ui| {
            ui.label(RichText::new("Status").small().color(ui.visuals().weak_text_color()));
            ui.label(RichText::new(band.label()).strong().color(band_color(band)));
        });
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Nerve compression risk").small());
        ui.label(
            RichText::new(risk.label())
                .small()
                .strong()
                .color(if risk == NerveRisk::High { SEVERE_COLOR } else { MILD_COLOR }),
        );
    });
    ui.add(ProgressBar::new(severity).desired_width(f32::INFINITY).fill(band_color(band)));

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        // Lookup failure (stale or unknown id) renders the empty state rather
        // than failing.
        match state.selected_muscle_id().and_then(|id| muscles.get(id)) {
            Some(record) => muscle_detail(ui, record, muscles),
            None => empty_detail(ui),
        }
    });
}

fn status_chip(ui: &mut Ui, status: MuscleStatus) {
    let (label, color) = match status {
        MuscleStatus::Tight => ("OVERACTIVE (TIGHT)", figure::TIGHT_COLOR),
        MuscleStatus::Weak => ("INHIBITED (WEAK)", figure::WEAK_COLOR),
    };
    egui::Frame::new()
        .fill(color.gamma_multiply(0.15))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().strong().color(color));
        });
}

fn muscle_detail(ui: &mut Ui, record: &MuscleRecord, muscles: &MuscleLibrary) {
    status_chip(ui, record.status);
    ui.add_space(4.0);
    ui.heading(&record.name);
    ui.label(RichText::new(&record.latin_name).italics().color(ui.visuals().weak_text_color()));
    ui.add_space(8.0);

    if let Some(linked) = muscles.antagonist_of(&record.id) {
        section_heading(ui, "IMBALANCE CHAIN");
        ui.label(
            RichText::new(format!(
                "While the {} stays {}, its antagonist compensates:",
                record.name.to_lowercase(),
                match record.status {
                    MuscleStatus::Tight => "tight",
                    MuscleStatus::Weak => "weak",
                },
            ))
            .small(),
        );
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("●").color(figure::status_color(linked.status)));
            ui.label(RichText::new(&linked.name).strong());
            ui.label(
                RichText::new(match linked.status {
                    MuscleStatus::Tight => "becomes tight",
                    MuscleStatus::Weak => "becomes weak",
                })
                .small()
                .color(ui.visuals().weak_text_color()),
            );
        });
        ui.add_space(8.0);
    }

    section_heading(ui, "CLINICAL PRESENTATION");
    ui.label(&record.description);
    ui.add_space(8.0);

    section_heading(ui, "BIOMECHANICAL MECHANISM");
    ui.label(RichText::new(&record.mechanism).italics());
    ui.add_space(8.0);

    section_heading(
        ui,
        match record.status {
            MuscleStatus::Tight => "RELEASE & STRETCH PLAN",
            MuscleStatus::Weak => "ACTIVATION & STRENGTHENING PLAN",
        },
    );
    for (i, step) in record.exercise_steps().enumerate() {
        ui.horizontal(|ui| {
            ui.label(RichText::new("▶").small().color(ui.visuals().weak_text_color()));
            ui.vertical(|ui| {
                ui.label(RichText::new(step).strong());
                ui.label(
                    RichText::new(if i == 0 { "suggested: 3 sets x 30s" } else { "suggested: morning and evening" })
                        .small()
                        .color(ui.visuals().weak_text_color()),
                );
            });
        });
        ui.add_space(4.0);
    }
}

fn empty_detail(ui: &mut Ui) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🎯").size(40.0));
        ui.add_space(8.0);
        ui.label(RichText::new("Diagnostic panel").strong().size(16.0));
        ui.add_space(4.0);
        ui.label(
            RichText::new(
                "Click an orange (tight) or blue (weak) region on the model \
                 for pathology detail and a correction plan.",
            )
            .small()
            .color(ui.visuals().weak_text_color()),
        );
    });
}
