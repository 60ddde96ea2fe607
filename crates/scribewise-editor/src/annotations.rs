use scribewise_core::models::annotation::Annotation;
use tracing::debug;

/// Active annotations, in creation order.
#[derive(Debug, Clone, Default)]
pub struct AnnotationLedger {
    annotations: Vec<Annotation>,
}

impl AnnotationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Annotations whose span lies inside `selected_text`, without removing
    /// them.
    pub fn relevant(&self, selected_text: &str) -> Vec<Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.is_within(selected_text))
            .cloned()
            .collect()
    }

    /// Remove and return every annotation whose span lies inside
    /// `selected_text`. Unrelated annotations keep their order.
    pub fn consume_overlapping(&mut self, selected_text: &str) -> Vec<Annotation> {
        let (consumed, kept): (Vec<_>, Vec<_>) = self
            .annotations
            .drain(..)
            .partition(|a| a.is_within(selected_text));
        self.annotations = kept;
        debug!(consumed = consumed.len(), remaining = self.annotations.len(), "annotations consumed");
        consumed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    pub fn as_slice(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
