//! Card rendering for the result list.
//!
//! One card per result item, in response order. Optional fields are simply
//! omitted when absent, matching the conditional rendering contract of the
//! collaborator's record shape.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph};

use crate::model::{ResultItem, format_discount, format_price, format_relevance};
use crate::ui::theme::Theme;

/// Placeholder shown when there is nothing to display and no request is in
/// flight.
pub const EMPTY_PLACEHOLDER: &str = "No results to display.";

/// Build the text block for one card.
pub fn card_text(item: &ResultItem, theme: &Theme) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(title_line(item, theme));
    lines.push(meta_line(item, theme));
    lines.push(Line::styled(item.description.clone(), theme.description));
    lines.push(price_line(item, theme));
    if let Some(tags) = tag_line(item, theme) {
        lines.push(tags);
    }
    lines.push(Line::default());

    Text::from(lines)
}

fn title_line(item: &ResultItem, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(item.title.clone(), theme.title)];
    if item.is_bestseller {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(" Bestseller ", theme.badge_bestseller));
    }
    if item.is_featured {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(" Featured ", theme.badge_featured));
    }
    Line::from(spans)
}

fn meta_line(item: &ResultItem, theme: &Theme) -> Line<'static> {
    let mut parts = vec![item.brand.clone(), item.category.clone()];
    for optional in [
        &item.subcategory,
        &item.color,
        &item.material,
        &item.size_range,
        &item.gender,
    ] {
        if let Some(value) = optional
            && !value.is_empty()
        {
            parts.push(value.clone());
        }
    }
    Line::styled(parts.join(" • "), theme.meta)
}

fn price_line(item: &ResultItem, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(format_price(item.price), theme.price)];
    if let Some(discount) = format_discount(item.discount) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(discount, theme.badge_bestseller));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("{} {}", item.stars(), item.rating),
        theme.meta,
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(format!("stock: {}", item.stock), theme.meta));
    if let Some(score) = item.score {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("relevance {}", format_relevance(score)),
            theme.meta,
        ));
    }
    Line::from(spans)
}

fn tag_line(item: &ResultItem, theme: &Theme) -> Option<Line<'static>> {
    if item.tags.is_empty() {
        return None;
    }
    let mut spans = Vec::new();
    for tag in &item.tags {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {tag} "), theme.tag));
    }
    Some(Line::from(spans))
}

/// Render the card list in response order.
pub fn render_cards(
    frame: &mut ratatui::Frame,
    area: Rect,
    items: &[ResultItem],
    list_state: &mut ListState,
    theme: &Theme,
) {
    let cards: Vec<ListItem<'_>> = items
        .iter()
        .map(|item| ListItem::new(card_text(item, theme)))
        .collect();
    let list = List::new(cards).highlight_style(theme.row_highlight);
    frame.render_stateful_widget(list, area, list_state);
}

/// Render the fixed empty-results placeholder.
pub fn render_empty(frame: &mut ratatui::Frame, area: Rect, theme: &Theme) {
    let empty = Paragraph::new(EMPTY_PLACEHOLDER)
        .alignment(Alignment::Center)
        .style(theme.empty);
    frame.render_widget(Clear, area);
    frame.render_widget(empty, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::default_theme;

    fn text_of(text: &Text<'_>) -> String {
        text.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn full_item() -> ResultItem {
        ResultItem {
            title: "Air Zoom".into(),
            brand: "Nike".into(),
            category: "shoes".into(),
            subcategory: Some("running".into()),
            color: Some("white".into()),
            material: Some("mesh".into()),
            size_range: Some("7-13".into()),
            gender: Some("men".into()),
            description: "Lightweight runner".into(),
            price: 129.99,
            discount: 15.0,
            rating: 3.7,
            stock: 24,
            tags: vec!["running".into(), "lightweight".into()],
            is_bestseller: true,
            is_featured: true,
            score: Some(0.8731),
        }
    }

    #[test]
    fn full_card_shows_every_field() {
        let rendered = text_of(&card_text(&full_item(), &default_theme()));
        assert!(rendered.contains("Air Zoom"));
        assert!(rendered.contains("Bestseller"));
        assert!(rendered.contains("Featured"));
        assert!(rendered.contains("Nike • shoes • running • white • mesh • 7-13 • men"));
        assert!(rendered.contains("Lightweight runner"));
        assert!(rendered.contains("$129.99"));
        assert!(rendered.contains("15% off"));
        assert!(rendered.contains("★★★☆☆ 3.7"));
        assert!(rendered.contains("stock: 24"));
        assert!(rendered.contains("relevance 0.87"));
        assert!(rendered.contains(" running "));
        assert!(rendered.contains(" lightweight "));
    }

    #[test]
    fn sparse_card_omits_absent_fields() {
        let item = ResultItem {
            title: "Plain Tee".into(),
            brand: "Acme".into(),
            category: "tops".into(),
            description: "A plain tee".into(),
            price: 19.0,
            rating: 4.0,
            stock: 3,
            ..ResultItem::default()
        };
        let rendered = text_of(&card_text(&item, &default_theme()));
        assert!(rendered.contains("Acme • tops"));
        assert!(!rendered.contains("Bestseller"));
        assert!(!rendered.contains("Featured"));
        assert!(!rendered.contains("% off"));
        assert!(!rendered.contains("relevance"));
        assert!(rendered.contains("★★★★☆ 4"));
        // exactly brand and category in the meta line
        let meta = rendered.lines().nth(1).unwrap();
        assert_eq!(meta, "Acme • tops");
    }

    #[test]
    fn tag_line_is_absent_without_tags() {
        let mut item = full_item();
        item.tags.clear();
        let with_tags = card_text(&full_item(), &default_theme());
        let without_tags = card_text(&item, &default_theme());
        assert_eq!(with_tags.lines.len(), without_tags.lines.len() + 1);
    }

    #[test]
    fn empty_meta_values_are_treated_as_absent() {
        let mut item = full_item();
        item.color = Some(String::new());
        let rendered = text_of(&card_text(&item, &default_theme()));
        assert!(rendered.contains("Nike • shoes • running • mesh • 7-13 • men"));
    }
}
