// state.rs
// Single shared simulation record. All writes go through `apply` or
// `select_muscle`; everything else reads through the accessors.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Morphology,
    Muscle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostureState {
    severity: f32,
    view_mode: ViewMode,
    show_skeleton: bool,
    show_plumb_line: bool,
    selected_muscle_id: Option<String>,
    comparison_mode: bool,
}

impl Default for PostureState {
    fn default() -> Self {
        Self {
            severity: 0.35,
            view_mode: ViewMode::Morphology,
            show_skeleton: false,
            show_plumb_line: true,
            selected_muscle_id: None,
            comparison_mode: false,
        }
    }
}

/// Partial patch merged over the current state; `None` fields stay unchanged.
#[derive(Clone, Debug, Default)]
pub struct StateUpdate {
    pub severity: Option<f32>,
    pub view_mode: Option<ViewMode>,
    pub show_skeleton: Option<bool>,
    pub show_plumb_line: Option<bool>,
    pub selected_muscle_id: Option<Option<String>>,
    pub comparison_mode: Option<bool>,
}

impl PostureState {
    pub fn severity(&self) -> f32 { self.severity }
    pub fn view_mode(&self) -> ViewMode { self.view_mode }
    pub fn show_skeleton(&self) -> bool { self.show_skeleton }
    pub fn show_plumb_line(&self) -> bool { self.show_plumb_line }
    pub fn comparison_mode(&self) -> bool { self.comparison_mode }
    pub fn selected_muscle_id(&self) -> Option<&str> { self.selected_muscle_id.as_deref() }

    pub fn apply(&mut self, update: StateUpdate) {
        if let Some(s) = update.severity {
            self.severity = s.clamp(0.0, 1.0);
        }
        if let Some(m) = update.view_mode {
            self.view_mode = m;
        }
        if let Some(v) = update.show_skeleton {
            self.show_skeleton = v;
        }
        if let Some(v) = update.show_plumb_line {
            self.show_plumb_line = v;
        }
        if let Some(sel) = update.selected_muscle_id {
            self.selected_muscle_id = sel;
        }
        if let Some(v) = update.comparison_mode {
            self.comparison_mode = v;
        }
    }

    /// Toggle semantics: re-selecting the current muscle clears the selection
    /// (view mode untouched); any other id selects it and switches into
    /// muscle view.
    pub fn select_muscle(&mut self, id: &str) {
        if self.selected_muscle_id.as_deref() == Some(id) {
            self.selected_muscle_id = None;
        } else {
            self.selected_muscle_id = Some(id.to_string());
            self.view_mode = ViewMode::Muscle;
        }
    }

    /// Left half of the comparison split: severity forced to zero.
    pub fn neutral_reference(&self) -> Self {
        let mut derived = self.clone();
        derived.severity = 0.0;
        derived.comparison_mode = false;
        derived
    }

    /// Right half of the comparison split: actual severity, split disabled so
    /// the scene does not recurse.
    pub fn without_comparison(&self) -> Self {
        let mut derived = self.clone();
        derived.comparison_mode = false;
        derived
    }
}
