use interest_core::{AppViewModel, RequestStatus};

const CHIP_WIDTH: usize = 16;

/// Text rendering of the view model, one entry per output line.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push("Explore What Fuels You".to_string());
    for row in &view.rows {
        let chips: Vec<String> = row
            .iter()
            .map(|chip| {
                let mark = if chip.selected { 'x' } else { ' ' };
                format!("[{mark}] {:<width$}", chip.tag, width = CHIP_WIDTH)
            })
            .collect();
        lines.push(format!("  {}", chips.join(" ").trim_end()));
    }

    let selected = if view.selected.is_empty() {
        "(none)".to_string()
    } else {
        view.selected.join(", ")
    };
    lines.push(format!("Selected: {selected}"));

    let button = if view.fetch_enabled {
        "Get Recommendations (type `fetch`)"
    } else {
        "Loading..."
    };
    lines.push(format!("> {button}"));

    if let RequestStatus::Error(message) = view.status {
        lines.push(format!("! {message}"));
    }

    if let Some(suggestions) = &view.suggestions {
        if suggestions.is_empty() {
            lines.push("No suggestions returned.".to_string());
        }
        for (category, items) in suggestions.categories() {
            lines.push(category.label().to_string());
            for (index, item) in items.iter().enumerate() {
                lines.push(format!("  {}. {} <{}>", index + 1, item.name, item.url));
            }
        }
    }

    lines
}

pub fn help() -> Vec<String> {
    [
        "Commands:",
        "  toggle <interest>   select or deselect an interest (alias: t)",
        "  clear               deselect everything",
        "  fetch               get recommendations for the selection",
        "  help                show this list",
        "  quit                exit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
