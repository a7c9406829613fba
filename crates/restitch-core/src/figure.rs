use serde::Serialize;

use crate::field::FieldSlot;

/// A figure or table cluster: header line, label, caption and any
/// tabular/graphic content captured as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FigureCluster {
    pub head: FieldSlot,
    pub label: FieldSlot,
    pub caption: FieldSlot,
    pub content: FieldSlot,
}

impl FigureCluster {
    pub fn is_empty(&self) -> bool {
        self.head.is_empty()
            && self.label.is_empty()
            && self.caption.is_empty()
            && self.content.is_empty()
    }
}
