//! Figure and table cluster accumulation.

use restitch_core::FigureCluster;

use crate::engine::{EntityParser, LabeledEntity, SlotRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureField {
    Head,
    Label,
    Caption,
    Content,
}

impl LabeledEntity for FigureCluster {
    type Field = FigureField;

    fn field_for(tag: &str) -> Option<FigureField> {
        match tag {
            "<figure_head>" => Some(FigureField::Head),
            "<label>" => Some(FigureField::Label),
            "<figDesc>" => Some(FigureField::Caption),
            "<content>" => Some(FigureField::Content),
            _ => None,
        }
    }

    fn slot(&mut self, field: FigureField) -> SlotRef<'_> {
        match field {
            FigureField::Head => SlotRef::Single(&mut self.head),
            FigureField::Label => SlotRef::Single(&mut self.label),
            FigureField::Caption => SlotRef::Single(&mut self.caption),
            FigureField::Content => SlotRef::Single(&mut self.content),
        }
    }

    fn is_empty(&self) -> bool {
        FigureCluster::is_empty(self)
    }
}

/// Parser for tagged figure/table clusters.
pub type FigureParser = EntityParser<FigureCluster>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_label_and_caption() {
        let wire = concat!(
            "Figure\tI-<figure_head>\n",
            "1\tI-<label>\n",
            "System\tI-<figDesc>\n",
            "overview\t<figDesc>\n",
        );
        let figures = FigureParser::new().parse(wire).unwrap();
        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].head.get(), Some("Figure"));
        assert_eq!(figures[0].label.get(), Some("1"));
        assert_eq!(figures[0].caption.get(), Some("System overview"));
    }

    #[test]
    fn new_head_segment_after_caption_opens_new_figure() {
        let wire = concat!(
            "Figure\tI-<figure_head>\n",
            "caption\tI-<figDesc>\n",
            "Table\tI-<figure_head>\n",
            "data\tI-<content>\n",
        );
        let figures = FigureParser::new().parse(wire).unwrap();
        assert_eq!(figures.len(), 2);
        assert_eq!(figures[0].head.get(), Some("Figure"));
        assert_eq!(figures[1].head.get(), Some("Table"));
        assert_eq!(figures[1].content.get(), Some("data"));
    }

    #[test]
    fn blank_line_closes_the_cluster() {
        let wire = "Figure\tI-<figure_head>\n\nTable\tI-<figure_head>\n";
        let figures = FigureParser::new().parse(wire).unwrap();
        assert_eq!(figures.len(), 2);
    }
}
