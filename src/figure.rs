// figure.rs
// Scene geometry in the 400x600 model box of the reference illustration.
// Pure functions of MorphParams (plus raw severity where the reference scales
// by it directly) so the whole layer is testable without a UI context.
use egui::{pos2, Color32, Pos2};

use crate::morph::MorphParams;
use crate::muscles::MuscleStatus;
use crate::state::ViewMode;

pub const MODEL_WIDTH: f32 = 400.0;
pub const MODEL_HEIGHT: f32 = 600.0;

// Palette carried over from the reference illustration.
pub const TIGHT_COLOR: Color32 = Color32::from_rgb(249, 115, 22);
pub const WEAK_COLOR: Color32 = Color32::from_rgb(59, 130, 246);
pub const EAR_LINE_COLOR: Color32 = Color32::from_rgb(239, 68, 68);
pub const SKIN_FILL: Color32 = Color32::from_rgb(75, 85, 99);
pub const CERVICAL_FILL: Color32 = Color32::from_rgb(226, 232, 240);
pub const CERVICAL_STROKE: Color32 = Color32::from_rgb(148, 163, 184);
pub const THORACIC_FILL: Color32 = Color32::from_rgb(203, 213, 225);
pub const THORACIC_STROKE: Color32 = Color32::from_rgb(100, 116, 139);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(100, 116, 139);

pub fn status_color(status: MuscleStatus) -> Color32 {
    match status {
        MuscleStatus::Tight => TIGHT_COLOR,
        MuscleStatus::Weak => WEAK_COLOR,
    }
}

// ── Path flattening ───────────────────────────────────────────────────────────

const CURVE_STEPS: usize = 12;

struct PathBuilder {
    points: Vec<Pos2>,
}

impl PathBuilder {
    fn new(start: Pos2) -> Self {
        Self { points: vec![start] }
    }

    fn line_to(&mut self, p: Pos2) -> &mut Self {
        self.points.push(p);
        self
    }

    fn quad_to(&mut self, ctrl: Pos2, end: Pos2) -> &mut Self {
        let from = *self.points.last().unwrap();
        for i in 1..=CURVE_STEPS {
            let t = i as f32 / CURVE_STEPS as f32;
            let u = 1.0 - t;
            self.points.push(pos2(
                u * u * from.x + 2.0 * u * t * ctrl.x + t * t * end.x,
                u * u * from.y + 2.0 * u * t * ctrl.y + t * t * end.y,
            ));
        }
        self
    }

    fn cubic_to(&mut self, c1: Pos2, c2: Pos2, end: Pos2) -> &mut Self {
        let from = *self.points.last().unwrap();
        for i in 1..=CURVE_STEPS {
            let t = i as f32 / CURVE_STEPS as f32;
            let u = 1.0 - t;
            self.points.push(pos2(
                u * u * u * from.x + 3.0 * u * u * t * c1.x + 3.0 * u * t * t * c2.x + t * t * t * end.x,
                u * u * u * from.y + 3.0 * u * u * t * c1.y + 3.0 * u * t * t * c2.y + t * t * t * end.y,
            ));
        }
        self
    }

    fn finish(self) -> Vec<Pos2> {
        self.points
    }
}

// ── Silhouette ────────────────────────────────────────────────────────────────

/// One smooth closed outline; always drawn. Control points shift with the
/// four morph offsets exactly as the reference path does.
pub fn silhouette(m: &MorphParams) -> Vec<Pos2> {
    let MorphParams { head_x: hx, shoulder_forward: sf, kyphosis: k, .. } = *m;
    let mut p = PathBuilder::new(pos2(210.0, 580.0));
    p.line_to(pos2(170.0, 580.0))
        .line_to(pos2(165.0, 500.0))
        .quad_to(pos2(145.0, 400.0), pos2(155.0, 350.0))
        .quad_to(pos2(155.0 + k, 280.0), pos2(185.0 + sf, 240.0))
        .quad_to(pos2(185.0 + hx, 210.0), pos2(195.0 + hx, 130.0))
        .cubic_to(pos2(195.0 + hx, 90.0), pos2(245.0 + hx, 90.0), pos2(245.0 + hx, 130.0))
        .quad_to(pos2(240.0 + hx, 180.0), pos2(230.0 + hx, 210.0))
        .quad_to(pos2(280.0 + sf, 240.0), pos2(290.0 + sf, 320.0))
        .quad_to(pos2(300.0, 450.0), pos2(260.0, 580.0));
    p.finish()
}

// ── Skeletal overlay ──────────────────────────────────────────────────────────

pub const CERVICAL_COUNT: usize = 7;
pub const THORACIC_COUNT: usize = 8;

fn rotated_rect(x: f32, y: f32, w: f32, h: f32, degrees: f32, pivot: Pos2) -> [Pos2; 4] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let rotate = |p: Pos2| {
        let (dx, dy) = (p.x - pivot.x, p.y - pivot.y);
        pos2(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    };
    [
        rotate(pos2(x, y)),
        rotate(pos2(x + w, y)),
        rotate(pos2(x + w, y + h)),
        rotate(pos2(x, y + h)),
    ]
}

/// Seven cervical segments; rotation grows toward the head with severity,
/// simulating hyperlordosis.
pub fn cervical_vertebrae(severity: f32, m: &MorphParams) -> Vec<[Pos2; 4]> {
    (0..CERVICAL_COUNT)
        .map(|i| {
            let i = i as f32;
            rotated_rect(
                195.0 + m.head_x + i * 2.0,
                130.0 + i * 12.0,
                14.0,
                10.0,
                i * 6.0 + severity * 15.0,
                pos2(200.0 + m.head_x, 135.0 + i * 12.0),
            )
        })
        .collect()
}

/// Eight thoracic segments; rotation decreases and reverses down the spine,
/// simulating hyperkyphosis.
pub fn thoracic_vertebrae(severity: f32, m: &MorphParams) -> Vec<[Pos2; 4]> {
    (0..THORACIC_COUNT)
        .map(|i| {
            let i = i as f32;
            rotated_rect(
                180.0 + m.shoulder_forward - (i * 0.5).sin() * m.kyphosis * 0.3,
                220.0 + i * 15.0,
                18.0,
                12.0,
                15.0 - i * 2.0 - severity * i * 3.0,
                pos2(190.0, 230.0 + i * 15.0),
            )
        })
        .collect()
}

// ── Guides and landmarks ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlumbLines {
    /// Tracks the ear landmark.
    pub ear_x: f32,
    /// Tracks the shoulder joint.
    pub shoulder_x: f32,
}

pub fn plumb_lines(m: &MorphParams) -> PlumbLines {
    PlumbLines {
        ear_x: 205.0 + m.head_x,
        shoulder_x: 200.0 + m.shoulder_forward,
    }
}

/// (ear, shoulder joint) reference dots, drawn in every mode.
pub fn landmarks(m: &MorphParams) -> (Pos2, Pos2) {
    (
        pos2(220.0 + m.head_x, 145.0 + m.head_y),
        pos2(225.0 + m.shoulder_forward, 245.0),
    )
}

// ── Muscle regions ────────────────────────────────────────────────────────────

pub struct RegionShape {
    pub id: &'static str,
    /// Resting opacity in muscle view when nothing is selected; the deep
    /// regions sit a little fainter.
    pub hint_opacity: f32,
    pub points: Vec<Pos2>,
}

/// The six clickable regions. Anchors track the same head/shoulder/kyphosis
/// offsets as the silhouette so the regions stay glued to the figure.
pub fn muscle_regions(m: &MorphParams) -> Vec<RegionShape> {
    let MorphParams { head_x: hx, shoulder_forward: sf, kyphosis: k, .. } = *m;

    let mut pecs = PathBuilder::new(pos2(225.0 + sf, 245.0));
    pecs.quad_to(pos2(255.0 + sf, 285.0), pos2(235.0 + sf, 330.0))
        .line_to(pos2(205.0 + sf, 310.0));

    let mut upper_traps = PathBuilder::new(pos2(225.0 + hx, 175.0));
    upper_traps
        .quad_to(pos2(255.0 + sf, 205.0), pos2(265.0 + sf, 245.0))
        .line_to(pos2(225.0 + sf, 245.0));

    let mut levator = PathBuilder::new(pos2(215.0 + hx, 165.0));
    levator.line_to(pos2(225.0 + sf, 235.0)).line_to(pos2(215.0 + sf, 235.0));

    let mut deep_flexors = PathBuilder::new(pos2(235.0 + hx, 145.0));
    deep_flexors
        .quad_to(pos2(245.0 + hx, 175.0), pos2(250.0 + hx, 200.0))
        .line_to(pos2(235.0 + hx, 200.0));

    let mut rhomboids = PathBuilder::new(pos2(195.0 + sf * 0.5, 260.0));
    rhomboids
        .quad_to(pos2(185.0 + k, 350.0), pos2(205.0 + k * 0.5, 420.0))
        .line_to(pos2(220.0 + k * 0.5, 400.0));

    let mut serratus = PathBuilder::new(pos2(265.0 + sf, 300.0));
    serratus
        .quad_to(pos2(285.0 + sf, 330.0), pos2(275.0 + sf, 365.0))
        .line_to(pos2(255.0 + sf, 345.0));

    vec![
        RegionShape { id: "pecs", hint_opacity: 0.4, points: pecs.finish() },
        RegionShape { id: "upper_traps", hint_opacity: 0.4, points: upper_traps.finish() },
        RegionShape { id: "levator", hint_opacity: 0.3, points: levator.finish() },
        RegionShape { id: "deep_flexors", hint_opacity: 0.4, points: deep_flexors.finish() },
        RegionShape { id: "rhomboids", hint_opacity: 0.4, points: rhomboids.finish() },
        RegionShape { id: "serratus", hint_opacity: 0.3, points: serratus.finish() },
    ]
}

// ── Region styling ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionStyle {
    pub fill_opacity: f32,
    pub outline: Option<Color32>,
}

/// Visibility/highlight decision for one region. View mode and selection only
/// ever affect styling, never coordinates.
pub fn region_style(
    view: ViewMode,
    status: MuscleStatus,
    hint_opacity: f32,
    region_id: &str,
    selected: Option<&str>,
    antagonist: Option<&str>,
) -> RegionStyle {
    if view != ViewMode::Muscle {
        // Invisible but still clickable.
        return RegionStyle { fill_opacity: 0.0, outline: None };
    }
    if selected == Some(region_id) {
        RegionStyle { fill_opacity: 0.8, outline: Some(Color32::WHITE) }
    } else if antagonist == Some(region_id) {
        RegionStyle { fill_opacity: 0.6, outline: Some(status_color(status)) }
    } else if selected.is_some() {
        RegionStyle { fill_opacity: 0.1, outline: None }
    } else {
        RegionStyle { fill_opacity: hint_opacity, outline: None }
    }
}

// ── Cross vectors ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossVectors {
    pub tight: [Pos2; 2],
    pub weak: [Pos2; 2],
    pub node: Pos2,
}

/// The two diagonal connectors illustrating the crossed tight/weak chain.
/// Only shown in muscle view once there is something to illustrate.
pub fn cross_vectors(view: ViewMode, severity: f32, m: &MorphParams) -> Option<CrossVectors> {
    if view != ViewMode::Muscle || severity <= 0.1 {
        return None;
    }
    let tight = [
        pos2(225.0 + m.head_x, 160.0),
        pos2(235.0 + m.shoulder_forward, 300.0),
    ];
    let weak = [
        pos2(250.0 + m.head_x, 160.0),
        pos2(190.0 + m.kyphosis, 350.0),
    ];
    let node = pos2((tight[0].x + tight[1].x) / 2.0, (tight[0].y + tight[1].y) / 2.0);
    Some(CrossVectors { tight, weak, node })
}

// ── Hit testing ───────────────────────────────────────────────────────────────

/// Even-odd ray cast; good enough for the flattened region polygons.
pub fn point_in_polygon(p: Pos2, polygon: &[Pos2]) -> bool {
    let mut inside = false;
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y)
            && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::MorphParams;

    fn centroid(points: &[Pos2]) -> Pos2 {
        let sum = points
            .iter()
            .fold(pos2(0.0, 0.0), |acc, p| pos2(acc.x + p.x, acc.y + p.y));
        pos2(sum.x / points.len() as f32, sum.y / points.len() as f32)
    }

    #[test]
    fn silhouette_is_closed_and_morphs_with_severity() {
        let neutral = silhouette(&MorphParams::from_severity(0.0));
        let bent = silhouette(&MorphParams::from_severity(1.0));
        assert_eq!(neutral.len(), bent.len());
        // Anchor points (feet) never move.
        assert_eq!(neutral[0], bent[0]);
        // The crown of the head translates by the full head offset.
        let top_neutral = neutral.iter().cloned().min_by(|a, b| a.y.total_cmp(&b.y)).unwrap();
        let top_bent = bent.iter().cloned().min_by(|a, b| a.y.total_cmp(&b.y)).unwrap();
        assert!((top_bent.x - top_neutral.x - 60.0).abs() < 1e-3);
    }

    #[test]
    fn vertebra_counts_are_fixed() {
        let m = MorphParams::from_severity(0.5);
        assert_eq!(cervical_vertebrae(0.5, &m).len(), 7);
        assert_eq!(thoracic_vertebrae(0.5, &m).len(), 8);
    }

    #[test]
    fn cervical_rotation_grows_toward_the_head() {
        // With zero severity the first segment is unrotated and later ones
        // are not: the rect's top edge tilts progressively.
        let m = MorphParams::from_severity(0.0);
        let segs = cervical_vertebrae(0.0, &m);
        let tilt = |r: &[Pos2; 4]| (r[1].y - r[0].y).atan2(r[1].x - r[0].x);
        assert!(tilt(&segs[0]).abs() < 1e-6);
        for w in segs.windows(2) {
            assert!(tilt(&w[1]) > tilt(&w[0]));
        }
    }

    #[test]
    fn thoracic_rotation_reverses_down_the_spine() {
        let m = MorphParams::from_severity(1.0);
        let segs = thoracic_vertebrae(1.0, &m);
        let tilt = |r: &[Pos2; 4]| (r[1].y - r[0].y).atan2(r[1].x - r[0].x);
        // 15 - 2i - 3i at full severity: positive at the top, negative below.
        assert!(tilt(&segs[0]) > 0.0);
        assert!(tilt(&segs[7]) < 0.0);
    }

    #[test]
    fn plumb_lines_track_head_and_shoulder() {
        let m = MorphParams::from_severity(0.0);
        assert_eq!(plumb_lines(&m), PlumbLines { ear_x: 205.0, shoulder_x: 200.0 });
        let m = MorphParams::from_severity(1.0);
        assert_eq!(plumb_lines(&m), PlumbLines { ear_x: 265.0, shoulder_x: 235.0 });
    }

    #[test]
    fn six_regions_with_dataset_ids() {
        let regions = muscle_regions(&MorphParams::from_severity(0.35));
        let ids: Vec<_> = regions.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["pecs", "upper_traps", "levator", "deep_flexors", "rhomboids", "serratus"]);
    }

    #[test]
    fn region_hit_testing() {
        let regions = muscle_regions(&MorphParams::from_severity(0.5));
        for r in &regions {
            assert!(point_in_polygon(centroid(&r.points), &r.points), "{} misses own centroid", r.id);
        }
        let pecs = &regions[0];
        assert!(!point_in_polygon(pos2(10.0, 10.0), &pecs.points));
    }

    #[test]
    fn morphology_view_hides_every_region() {
        for status in [MuscleStatus::Tight, MuscleStatus::Weak] {
            let style = region_style(ViewMode::Morphology, status, 0.4, "pecs", Some("pecs"), None);
            assert_eq!(style.fill_opacity, 0.0);
            assert_eq!(style.outline, None);
        }
    }

    #[test]
    fn muscle_view_styles_follow_selection() {
        let hint = region_style(ViewMode::Muscle, MuscleStatus::Tight, 0.4, "pecs", None, None);
        assert_eq!(hint.fill_opacity, 0.4);
        assert_eq!(hint.outline, None);

        let selected =
            region_style(ViewMode::Muscle, MuscleStatus::Tight, 0.4, "pecs", Some("pecs"), Some("rhomboids"));
        assert_eq!(selected.fill_opacity, 0.8);
        assert_eq!(selected.outline, Some(Color32::WHITE));

        let related = region_style(
            ViewMode::Muscle,
            MuscleStatus::Weak,
            0.4,
            "rhomboids",
            Some("pecs"),
            Some("rhomboids"),
        );
        assert_eq!(related.fill_opacity, 0.6);
        assert_eq!(related.outline, Some(WEAK_COLOR));

        let dimmed =
            region_style(ViewMode::Muscle, MuscleStatus::Tight, 0.4, "levator", Some("pecs"), Some("rhomboids"));
        assert_eq!(dimmed.fill_opacity, 0.1);
        assert_eq!(dimmed.outline, None);
    }

    #[test]
    fn cross_vectors_need_muscle_view_and_enough_severity() {
        let m = MorphParams::from_severity(0.5);
        assert!(cross_vectors(ViewMode::Morphology, 0.5, &m).is_none());
        assert!(cross_vectors(ViewMode::Muscle, 0.1, &MorphParams::from_severity(0.1)).is_none());

        let cv = cross_vectors(ViewMode::Muscle, 0.5, &m).unwrap();
        assert_eq!(cv.tight[0], pos2(225.0 + 30.0, 160.0));
        assert_eq!(cv.weak[1], pos2(190.0 + 22.5, 350.0));
        assert_eq!(cv.node.y, 230.0);
    }
}
