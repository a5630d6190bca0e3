// morph.rs
// Severity → geometry offsets plus the derived clinical readouts. Everything
// here is a pure function of the slider value; nothing is cached.

// Hand-tuned ranges carried over from the reference illustration. They were
// picked for visual effect, not derived from clinical data.
pub const HEAD_X_SPAN: f32 = 60.0;
pub const HEAD_Y_SPAN: f32 = 10.0;
pub const SHOULDER_SPAN: f32 = 35.0;
pub const KYPHOSIS_SPAN: f32 = 45.0;

/// The four scalars every downstream geometry computation is parameterized by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphParams {
    /// Forward head posture, px.
    pub head_x: f32,
    /// Slight head drop, px.
    pub head_y: f32,
    /// Rounded shoulders, px.
    pub shoulder_forward: f32,
    /// Humpback curvature, px.
    pub kyphosis: f32,
}

impl MorphParams {
    pub fn from_severity(severity: f32) -> Self {
        Self {
            head_x: severity * HEAD_X_SPAN,
            head_y: severity * HEAD_Y_SPAN,
            shoulder_forward: severity * SHOULDER_SPAN,
            kyphosis: severity * KYPHOSIS_SPAN,
        }
    }
}

/// Rounded C7/tragus angle estimate shown in the biometrics readout.
pub fn craniovertebral_angle(severity: f32) -> i32 {
    (severity * 45.0).round() as i32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityBand {
    Mild,
    Moderate,
    Severe,
}

impl SeverityBand {
    pub fn from_severity(severity: f32) -> Self {
        if severity > 0.7 {
            Self::Severe
        } else if severity > 0.3 {
            Self::Moderate
        } else {
            Self::Mild
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NerveRisk {
    Low,
    High,
}

impl NerveRisk {
    pub fn from_severity(severity: f32) -> Self {
        if severity > 0.6 { Self::High } else { Self::Low }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_linear_in_severity() {
        for s in [0.0, 0.1, 0.35, 0.5, 0.99, 1.0] {
            let m = MorphParams::from_severity(s);
            assert_eq!(m.head_x, s * 60.0);
            assert_eq!(m.head_y, s * 10.0);
            assert_eq!(m.shoulder_forward, s * 35.0);
            assert_eq!(m.kyphosis, s * 45.0);
        }
    }

    #[test]
    fn zero_severity_is_the_neutral_pose() {
        let m = MorphParams::from_severity(0.0);
        assert_eq!(m, MorphParams { head_x: 0.0, head_y: 0.0, shoulder_forward: 0.0, kyphosis: 0.0 });
    }

    #[test]
    fn offsets_are_monotonic() {
        let mut prev = MorphParams::from_severity(0.0);
        for i in 1..=100 {
            let m = MorphParams::from_severity(i as f32 / 100.0);
            assert!(m.head_x >= prev.head_x);
            assert!(m.head_y >= prev.head_y);
            assert!(m.shoulder_forward >= prev.shoulder_forward);
            assert!(m.kyphosis >= prev.kyphosis);
            prev = m;
        }
    }

    #[test]
    fn angle_estimate_rounds() {
        assert_eq!(craniovertebral_angle(0.0), 0);
        assert_eq!(craniovertebral_angle(0.35), 16); // round(15.75)
        assert_eq!(craniovertebral_angle(1.0), 45);
    }

    #[test]
    fn severity_bands() {
        assert_eq!(SeverityBand::from_severity(0.0), SeverityBand::Mild);
        assert_eq!(SeverityBand::from_severity(0.3), SeverityBand::Mild); // boundary exclusive
        assert_eq!(SeverityBand::from_severity(0.35), SeverityBand::Moderate);
        assert_eq!(SeverityBand::from_severity(0.5), SeverityBand::Moderate);
        assert_eq!(SeverityBand::from_severity(0.7), SeverityBand::Moderate); // boundary exclusive
        assert_eq!(SeverityBand::from_severity(0.75), SeverityBand::Severe);
        assert_eq!(SeverityBand::from_severity(1.0), SeverityBand::Severe);
    }

    #[test]
    fn nerve_risk_threshold() {
        assert_eq!(NerveRisk::from_severity(0.5), NerveRisk::Low);
        assert_eq!(NerveRisk::from_severity(0.6), NerveRisk::Low); // exactly 0.6 is still low
        assert_eq!(NerveRisk::from_severity(0.61), NerveRisk::High);
        assert_eq!(NerveRisk::from_severity(0.75), NerveRisk::High);
    }
}
