// canvas.rs
// Paints one complete scene from the current state; returns the id of the
// muscle region under a click, if any.
use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};

use crate::figure;
use crate::morph::MorphParams;
use crate::muscles::MuscleLibrary;
use crate::state::PostureState;

pub fn draw_body_canvas(
    ui: &mut Ui,
    state: &PostureState,
    muscles: &MuscleLibrary,
    size: Vec2,
) -> Option<String> {
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let rect = response.rect;

    painter.rect_filled(
        rect,
        12.0,
        if ui.visuals().dark_mode { Color32::from_gray(18) } else { Color32::from_gray(70) },
    );

    // Fit the 400x600 model box into the canvas, centered.
    let scale = (rect.width() / figure::MODEL_WIDTH)
        .min(rect.height() / figure::MODEL_HEIGHT)
        * 0.95;
    let origin = rect.center() - Vec2::new(figure::MODEL_WIDTH, figure::MODEL_HEIGHT) * scale / 2.0;
    let ts = move |p: Pos2| Pos2::new(origin.x + p.x * scale, origin.y + p.y * scale);

    let severity = state.severity();
    let morph = MorphParams::from_severity(severity);

    // Guides sit behind everything.
    if state.show_plumb_line() {
        let guides = figure::plumb_lines(&morph);
        for (x, color) in [
            (guides.ear_x, figure::EAR_LINE_COLOR),
            (guides.shoulder_x, figure::WEAK_COLOR),
        ] {
            painter.extend(Shape::dashed_line(
                &[ts(Pos2::new(x, 0.0)), ts(Pos2::new(x, figure::MODEL_HEIGHT))],
                Stroke::new(1.0, color.gamma_multiply(0.4)),
                4.0 * scale,
                4.0 * scale,
            ));
        }
        painter.text(
            ts(Pos2::new(320.0, 580.0)),
            Align2::RIGHT_BOTTOM,
            "PLUMB LINE DEVIATION",
            FontId::monospace(10.0),
            figure::MUTED_TEXT,
        );
    }

    // Silhouette, always visible.
    let outline: Vec<Pos2> = figure::silhouette(&morph).into_iter().map(ts).collect();
    painter.add(Shape::convex_polygon(outline.clone(), figure::SKIN_FILL, Stroke::NONE));
    painter.add(Shape::closed_line(outline, Stroke::new(1.0, Color32::from_black_alpha(128))));

    if state.show_skeleton() {
        for rect4 in figure::cervical_vertebrae(severity, &morph) {
            painter.add(Shape::convex_polygon(
                rect4.iter().map(|&p| ts(p)).collect(),
                figure::CERVICAL_FILL,
                Stroke::new(1.0, figure::CERVICAL_STROKE),
            ));
        }
        for rect4 in figure::thoracic_vertebrae(severity, &morph) {
            painter.add(Shape::convex_polygon(
                rect4.iter().map(|&p| ts(p)).collect(),
                figure::THORACIC_FILL,
                Stroke::new(1.0, figure::THORACIC_STROKE),
            ));
        }
    }

    // Ear and shoulder-joint reference dots.
    let (ear, shoulder) = figure::landmarks(&morph);
    painter.circle_filled(ts(ear), 4.0 * scale, figure::WEAK_COLOR.gamma_multiply(0.8));
    painter.circle_stroke(ts(ear), 4.0 * scale, Stroke::new(1.0, Color32::WHITE));
    painter.circle_filled(ts(shoulder), 5.0 * scale, figure::TIGHT_COLOR.gamma_multiply(0.8));
    painter.circle_stroke(ts(shoulder), 5.0 * scale, Stroke::new(1.0, Color32::WHITE));

    // Interactive muscle regions. The click handler stays attached in every
    // view mode; morphology merely renders them at zero opacity.
    let selected = state.selected_muscle_id().filter(|id| muscles.get(id).is_some());
    let antagonist = selected
        .and_then(|id| muscles.antagonist_of(id))
        .map(|m| m.id.as_str());
    let click_pos = if response.clicked() { response.interact_pointer_pos() } else { None };
    let mut clicked = None;

    for region in figure::muscle_regions(&morph) {
        let Some(record) = muscles.get(region.id) else { continue };
        let style = figure::region_style(
            state.view_mode(),
            record.status,
            region.hint_opacity,
            region.id,
            selected,
            antagonist,
        );
        let points: Vec<Pos2> = region.points.iter().map(|&p| ts(p)).collect();
        if style.fill_opacity > 0.0 {
            painter.add(Shape::convex_polygon(
                points.clone(),
                figure::status_color(record.status).gamma_multiply(style.fill_opacity),
                Stroke::NONE,
            ));
        }
        if let Some(color) = style.outline {
            painter.add(Shape::closed_line(points.clone(), Stroke::new(2.0, color)));
        }
        if let Some(pos) = click_pos {
            // Regions drawn later sit on top, so the last hit wins.
            if figure::point_in_polygon(pos, &points) {
                clicked = Some(region.id.to_string());
            }
        }
    }

    if let Some(cross) = figure::cross_vectors(state.view_mode(), severity, &morph) {
        painter.extend(Shape::dashed_line(
            &[ts(cross.tight[0]), ts(cross.tight[1])],
            Stroke::new(3.0, figure::TIGHT_COLOR.gamma_multiply(0.6)),
            6.0 * scale,
            2.0 * scale,
        ));
        painter.extend(Shape::dashed_line(
            &[ts(cross.weak[0]), ts(cross.weak[1])],
            Stroke::new(3.0, figure::WEAK_COLOR.gamma_multiply(0.6)),
            6.0 * scale,
            2.0 * scale,
        ));
        painter.text(
            ts(Pos2::new(240.0 + morph.head_x, 160.0)),
            Align2::LEFT_BOTTOM,
            "TIGHT",
            FontId::proportional(10.0),
            figure::TIGHT_COLOR,
        );
        painter.text(
            ts(Pos2::new(260.0 + morph.head_x, 180.0)),
            Align2::LEFT_BOTTOM,
            "WEAK",
            FontId::proportional(10.0),
            figure::WEAK_COLOR,
        );
        painter.circle_filled(ts(cross.node), 8.0 * scale, Color32::from_white_alpha(50));
        painter.circle_stroke(ts(cross.node), 8.0 * scale, Stroke::new(1.0, Color32::WHITE));
    }

    clicked
}
