//! Table formatting utilities for CLI output.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use rutils::PluralCategory;

/// One number of a plural table.
pub struct PluralRow {
    pub amount: u64,
    pub category: PluralCategory,
    /// The agreed noun form alone.
    pub form: String,
    /// Number and form, as printed by `rutils plural`.
    pub phrase: String,
}

fn category_color(category: PluralCategory) -> Color {
    match category {
        PluralCategory::One => Color::Green,
        PluralCategory::Few => Color::Yellow,
        PluralCategory::Many => Color::Cyan,
    }
}

/// Format agreed forms as a table, one row per number.
pub fn format_plural_table(rows: &[PluralRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Number", "Category", "Phrase"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.amount),
            Cell::new(row.category).fg(category_color(row.category)),
            Cell::new(&row.phrase),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_number() {
        let rows = vec![
            PluralRow {
                amount: 1,
                category: PluralCategory::One,
                form: "минута".to_string(),
                phrase: "1\u{a0}минута".to_string(),
            },
            PluralRow {
                amount: 5,
                category: PluralCategory::Many,
                form: "минут".to_string(),
                phrase: "5\u{a0}минут".to_string(),
            },
        ];
        let table = format_plural_table(&rows);
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("минута"));
        assert!(rendered.contains("many"));
    }
}
