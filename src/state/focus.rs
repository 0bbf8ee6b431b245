#[derive(Debug, Default, Clone)]
pub struct FocusState {
    targets: Vec<String>,
    index: Option<usize>,
}

impl FocusState {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets: Vec<String> = ids.into_iter().map(Into::into).collect();
        let index = if targets.is_empty() { None } else { Some(0) };
        Self { targets, index }
    }

    pub fn current_id(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.targets.get(i))
            .map(String::as_str)
    }

    pub fn set_focus_by_id(&mut self, id: &str) {
        if let Some(pos) = self.targets.iter().position(|target| target == id) {
            self.index = Some(pos);
        }
    }

    pub fn next(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + 1) % self.targets.len());
    }

    pub fn prev(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + self.targets.len() - 1) % self.targets.len());
    }
}
