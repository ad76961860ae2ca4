use ratatui::layout::Rect;

/// Clickable parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The search input field
    Input,
    /// The results popup border or an empty line inside it
    Results,
    /// A suggestion row, by index into the full result list
    ResultRow(usize),
}

/// Where the input and results popup were drawn on the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    /// Outer popup area including its border; `None` while hidden
    pub results: Option<Rect>,
    /// Index of the suggestion drawn on the first popup line
    pub first_row: usize,
    /// Number of suggestion lines drawn
    pub row_count: usize,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the popup, e.g. when it is not drawn this frame
    pub fn clear_results(&mut self) {
        self.results = None;
        self.first_row = 0;
        self.row_count = 0;
    }
}
