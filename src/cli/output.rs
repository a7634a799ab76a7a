use anyhow::Result;
use serde_json::json;

use shopfind::SearchOutcome;
use shopfind::model::format_price;

/// Print a plain-text representation of the final query and result list.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
    if outcome.results.is_empty() {
        println!("No results for '{}'", outcome.query);
        return;
    }

    for item in &outcome.results {
        println!(
            "{} — {} ({})",
            item.title,
            item.brand,
            format_price(item.price)
        );
    }
}

/// Format the final query and result list as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
    let payload = json!({
        "query": outcome.query,
        "results": outcome.results,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the final query and result list.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use shopfind::ResultItem;

    use super::*;

    #[test]
    fn json_format_includes_query_and_results() {
        let outcome = SearchOutcome {
            query: "sneakers".into(),
            results: vec![ResultItem {
                title: "Air Zoom".into(),
                brand: "Nike".into(),
                category: "shoes".into(),
                price: 129.99,
                ..ResultItem::default()
            }],
        };

        let rendered = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(value["query"], "sneakers");
        assert_eq!(value["results"][0]["title"], "Air Zoom");
        assert_eq!(value["results"][0]["brand"], "Nike");
    }

    #[test]
    fn json_format_keeps_result_order() {
        let outcome = SearchOutcome {
            query: "q".into(),
            results: vec![
                ResultItem {
                    title: "First".into(),
                    ..ResultItem::default()
                },
                ResultItem {
                    title: "Second".into(),
                    ..ResultItem::default()
                },
            ],
        };

        let rendered = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(value["results"][0]["title"], "First");
        assert_eq!(value["results"][1]["title"], "Second");
    }
}
