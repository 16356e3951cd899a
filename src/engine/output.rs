use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Items(String),
    Exits(String),
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn items(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Items(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Exits block exists, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// Plain-text lines, in order; handy for tests and line-oriented frontends.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Title(s)
                | OutputBlock::Text(s)
                | OutputBlock::Items(s)
                | OutputBlock::Exits(s) => s.as_str(),
            })
            .collect()
    }
}
