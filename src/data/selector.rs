//! State machine behind the address typeahead.

use super::candidate::Candidate;

/// What the dropdown area should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Closed,
    NoResults,
    Options,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
    input_value: String,
    is_open: bool,
}

impl SelectorState {
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn input_changed(&mut self, value: String) {
        self.is_open = !value.is_empty();
        self.input_value = value;
    }

    pub fn option_selected(&mut self, candidate: &Candidate) {
        self.input_value = candidate.label.clone();
        self.is_open = false;
    }

    /// Selects the row at `index` of the list currently shown.
    pub fn pick(&mut self, options: &[Candidate], index: usize) -> Option<Candidate> {
        let candidate = options.get(index)?.clone();
        self.option_selected(&candidate);
        Some(candidate)
    }

    /// Focus or click on the input reopens the list only when there is
    /// something to show for non-empty text.
    pub fn input_focused(&mut self, has_options: bool) {
        self.is_open = has_options && !self.input_value.is_empty();
    }

    /// `inside` is `None` while the widget is not mounted.
    pub fn pointer_down(&mut self, inside: Option<bool>) {
        if inside == Some(false) {
            self.is_open = false;
        }
    }

    pub fn dropdown(&self, option_count: usize) -> Dropdown {
        if !self.is_open || self.input_value.is_empty() {
            Dropdown::Closed
        } else if option_count == 0 {
            Dropdown::NoResults
        } else {
            Dropdown::Options
        }
    }
}

/// One row per candidate, in the order received. Rows are keyed by position
/// so candidates that share coordinates are still listed separately.
pub fn option_rows(options: &[Candidate]) -> Vec<(usize, Candidate)> {
    options.iter().cloned().enumerate().collect()
}
