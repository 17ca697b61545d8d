use crate::domain::{ChipView, ComboboxView, DropdownRow, HighlightedLabel};

/// Plain-text presentation of a [`ComboboxView`].
///
/// The first line shows the chips, the input and the open/closed glyph. When
/// the dropdown is visible one line per row follows, with the matched part of
/// each label wrapped in square brackets.
///
/// ```text
/// (Apple ✕) {BMW ✕} | ze ↑
///   [Ze]pto  a@b.com
/// > Lin[e]ar
/// ```
pub struct TextRenderer {
    placeholder: String,
}

impl TextRenderer {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    pub fn render(&self, view: &ComboboxView) -> String {
        let mut lines = vec![self.render_header(view)];
        if let Some(dropdown) = view.dropdown.as_ref().filter(|d| d.visible) {
            lines.extend(dropdown.rows.iter().map(|row| self.render_row(row)));
        }
        lines.join("\n")
    }

    fn render_header(&self, view: &ComboboxView) -> String {
        let mut parts: Vec<String> = view.chips.iter().map(|chip| self.render_chip(chip)).collect();

        let input = if view.search_text.is_empty() {
            format!("({})", self.placeholder)
        } else {
            view.search_text.clone()
        };
        parts.push(format!("| {} {}", input, view.indicator.glyph()));
        parts.join(" ")
    }

    /// Focused chips use braces instead of parentheses
    pub fn render_chip(&self, chip: &ChipView) -> String {
        if chip.focused {
            format!("{{{} ✕}}", chip.label)
        } else {
            format!("({} ✕)", chip.label)
        }
    }

    /// Hovered rows are marked with `>`
    pub fn render_row(&self, row: &DropdownRow) -> String {
        let marker = if row.hovered { '>' } else { ' ' };
        let mut line = format!("{} {}", marker, self.render_label(&row.label));
        if let Some(sub_text) = &row.sub_text {
            line.push_str("  ");
            line.push_str(sub_text);
        }
        line
    }

    pub fn render_label(&self, label: &HighlightedLabel) -> String {
        match label {
            HighlightedLabel::Plain { text } => text.clone(),
            HighlightedLabel::Emphasized {
                before,
                matched,
                after,
            } => format!("{}[{}]{}", before, matched, after),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandidateItem, CandidateList, Combobox};

    fn combobox() -> Combobox {
        Combobox::new(
            CandidateList::new(vec![
                CandidateItem::new("1", "Zepto").with_sub_text("a@b.com"),
                CandidateItem::new("2", "Linear"),
                CandidateItem::new("4", "Apple"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_render_closed_shows_placeholder() {
        let renderer = TextRenderer::new("Search...");
        assert_eq!(renderer.render(&combobox().view()), "| (Search...) ↓");
    }

    #[test]
    fn test_render_open_with_matches() {
        let renderer = TextRenderer::new("Search...");
        let mut combo = combobox();
        combo.select_item("4");
        combo.focus_chip(0);
        combo.set_search_text("e");
        combo.hover_candidate("2");

        assert_eq!(
            renderer.render(&combo.view()),
            "{Apple ✕} | e ↑\n  Z[e]pto  a@b.com\n> Lin[e]ar"
        );
    }

    #[test]
    fn test_render_label_plain() {
        let renderer = TextRenderer::new("");
        let label = HighlightedLabel::Plain { text: "BMW".to_string() };
        assert_eq!(renderer.render_label(&label), "BMW");
    }
}
