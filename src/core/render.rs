use crate::domain::model::{Buckets, Category, Showcase};

/// One collapsible block per category, in the order the categories file declares them.
/// Categories with no rows produce nothing.
pub fn render_port_list(categories: &[Category], buckets: &Buckets) -> String {
    categories
        .iter()
        .filter_map(|category| {
            let rows = buckets.get(&category.key).filter(|rows| !rows.is_empty())?;
            let items = rows
                .iter()
                .map(|row| format!("- [{}]({})", row.name, row.url))
                .collect::<Vec<_>>()
                .join("\n");
            Some(format!(
                "<details open>\n<summary>{} {}</summary>\n\n{}\n\n</details>",
                category.emoji, category.name, items
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_showcases(showcases: Option<&[Showcase]>) -> Option<String> {
    let showcases = showcases?;
    Some(
        showcases
            .iter()
            .map(|s| format!("- [{}]({}) - {}", s.title, s.link, s.description))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PortKind, Row};
    use serde_json::Map;

    fn category(key: &str, name: &str, emoji: &str) -> Category {
        Category {
            key: key.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            description: None,
        }
    }

    fn row(name: &str, url: &str) -> Row {
        Row {
            slug: name.to_lowercase(),
            kind: PortKind::Port,
            name: name.to_string(),
            url: url.to_string(),
            categories: vec![],
            alias: None,
            supports: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_render_port_list_follows_category_order() {
        let categories = vec![
            category("terminals", "Terminals", "💻"),
            category("empty", "Nobody Here", "🕳️"),
            category("editor", "Editors", "📝"),
        ];
        let mut buckets = Buckets::new();
        buckets.insert(
            "editor".to_string(),
            vec![row("Helix", "https://github.com/catppuccin/helix")],
        );
        buckets.insert(
            "terminals".to_string(),
            vec![
                row("Alacritty", "https://github.com/catppuccin/alacritty"),
                row("Kitty", "https://github.com/catppuccin/kitty"),
            ],
        );
        buckets.insert("empty".to_string(), vec![]);

        let rendered = render_port_list(&categories, &buckets);

        assert_eq!(
            rendered,
            "<details open>\n<summary>💻 Terminals</summary>\n\n\
             - [Alacritty](https://github.com/catppuccin/alacritty)\n\
             - [Kitty](https://github.com/catppuccin/kitty)\n\n</details>\n\
             <details open>\n<summary>📝 Editors</summary>\n\n\
             - [Helix](https://github.com/catppuccin/helix)\n\n</details>"
        );
        assert!(!rendered.contains("Nobody Here"));
    }

    #[test]
    fn test_render_port_list_without_rows_is_empty() {
        let categories = vec![category("a", "Alpha", "🔺")];
        assert_eq!(render_port_list(&categories, &Buckets::new()), "");
    }

    #[test]
    fn test_render_showcases() {
        let showcases = vec![
            Showcase {
                title: "Catwalk".to_string(),
                link: "https://github.com/catppuccin/catwalk".to_string(),
                description: "Preview generator".to_string(),
            },
            Showcase {
                title: "Whiskers".to_string(),
                link: "https://github.com/catppuccin/whiskers".to_string(),
                description: "Template tool".to_string(),
            },
        ];

        let rendered = render_showcases(Some(showcases.as_slice())).unwrap();
        assert_eq!(
            rendered,
            "- [Catwalk](https://github.com/catppuccin/catwalk) - Preview generator\n\
             - [Whiskers](https://github.com/catppuccin/whiskers) - Template tool"
        );
        assert!(render_showcases(None).is_none());
    }
}
