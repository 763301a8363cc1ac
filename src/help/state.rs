/// Help popup visibility
pub struct HelpState {
    pub visible: bool,
}

impl HelpState {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}
