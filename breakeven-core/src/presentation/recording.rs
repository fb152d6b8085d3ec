use super::{PresentationSink, StyleState};

fn upsert<V>(
    slots: &mut Vec<(String, V)>,
    name: &str,
    value: V,
) {
    match slots.iter_mut().find(|(slot, _)| slot == name) {
        Some((_, current)) => *current = value,
        None => slots.push((name.to_string(), value)),
    }
}

fn lookup<'a, V>(
    slots: &'a [(String, V)],
    name: &str,
) -> Option<&'a V> {
    slots
        .iter()
        .find(|(slot, _)| slot == name)
        .map(|(_, value)| value)
}

/// In-memory sink that remembers the latest value of every slot.
///
/// Slots keep the order in which they were first written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    texts: Vec<(String, String)>,
    styles: Vec<(String, StyleState)>,
    inputs: Vec<(String, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(
        &self,
        target: &str,
    ) -> Option<&str> {
        lookup(&self.texts, target).map(String::as_str)
    }

    pub fn style(
        &self,
        target: &str,
    ) -> Option<StyleState> {
        lookup(&self.styles, target).copied()
    }

    pub fn input(
        &self,
        path: &str,
    ) -> Option<&str> {
        lookup(&self.inputs, path).map(String::as_str)
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.texts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn inputs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inputs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PresentationSink for RecordingSink {
    fn set_text(
        &mut self,
        target: &str,
        text: &str,
    ) {
        upsert(&mut self.texts, target, text.to_string());
    }

    fn set_style(
        &mut self,
        target: &str,
        style: StyleState,
    ) {
        upsert(&mut self.styles, target, style);
    }

    fn set_input(
        &mut self,
        path: &str,
        value: &str,
    ) {
        upsert(&mut self.inputs, path, value.to_string());
    }
}
