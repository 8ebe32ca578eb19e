/// Visibility of the thank-you overlay shown after a successful registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Hidden,
    Visible,
}

impl Overlay {
    pub fn is_visible(self) -> bool {
        self == Overlay::Visible
    }

    pub fn show(&mut self) {
        *self = Overlay::Visible;
    }

    pub fn close(&mut self) {
        *self = Overlay::Hidden;
    }

    /// Click anywhere on the overlay; only a click on the backdrop itself
    /// (not bubbled up from the content box) dismisses it.
    pub fn click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }
}
