//! Plain-text reports for task sets, rankings, and distributions.
//!
//! Tables are rendered with `comfy-table` at a width of 80 columns. Every
//! report is returned as a `String`; printing is left to the caller.

use std::fmt;

use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::allocation::{Distribution, MAX_BUDGET};
use crate::criteria::TaskSet;
use crate::ranking::RankedEntry;
use crate::scoring::WeightConfig;

const WIDTH: u16 = 80;
const BAR_LABEL: usize = 30;

/// Lists every task with its raw criteria.
pub fn task_summary(tasks: &TaskSet) -> String {
    Summary(tasks).to_string()
}

/// Shows the weights in use followed by the numbered ranking.
pub fn ranking(tasks: &TaskSet, weights: &WeightConfig, ranked: &[RankedEntry]) -> String {
    Ranking {
        tasks,
        weights,
        ranked,
    }
    .to_string()
}

/// Renders the parts table and a bar chart, largest share first.
///
/// The TOTAL row shows the parts actually allocated, which may differ
/// from the budget.
pub fn distribution(dist: &Distribution) -> String {
    Parts(dist).to_string()
}

struct Summary<'a>(&'a TaskSet);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks to display");
        }

        banner(f, "TASK SUMMARY")?;
        let mut table = table(&["Task", "Core %", "Effort", "Org Value", "Due (days)"]);
        for (name, c) in self.0.iter() {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(c.core_percentage),
                Cell::new(c.effort_complexity),
                Cell::new(c.organization_value),
                Cell::new(due(c.due_in_days)),
            ]);
        }
        writeln!(f, "{table}")
    }
}

struct Ranking<'a> {
    tasks: &'a TaskSet,
    weights: &'a WeightConfig,
    ranked: &'a [RankedEntry],
}

impl fmt::Display for Ranking<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "TASK RANKING BY SCORE")?;

        writeln!(f, "\nWeights used:")?;
        for (criterion, weight) in self.weights.iter() {
            writeln!(f, "  {}: {weight:.2}", criterion.label())?;
        }
        writeln!(f)?;

        let mut table = table(&["#", "Task", "Score", "Core %", "Effort", "Org", "Due"]);
        for (i, entry) in self.ranked.iter().enumerate() {
            let mut row = vec![
                Cell::new(i + 1),
                Cell::new(&entry.name),
                Cell::new(format!("{:.3}", entry.score)),
            ];
            if let Some(c) = self.tasks.get(&entry.name) {
                row.extend([
                    Cell::new(c.core_percentage),
                    Cell::new(c.effort_complexity),
                    Cell::new(c.organization_value),
                    Cell::new(due(c.due_in_days)),
                ]);
            }
            table.add_row(row);
        }
        writeln!(f, "{table}")
    }
}

struct Parts<'a>(&'a Distribution);

impl fmt::Display for Parts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dist = self.0;
        if dist.is_degenerate() {
            return writeln!(f, "No distribution to display");
        }

        let budget = dist.budget;
        let sorted = dist.by_parts_desc();

        banner(f, &format!("TASK DISTRIBUTION INTO {budget}THS"))?;
        let parts_header = format!("Parts/{budget}");
        let mut table = table(&["Task", "Score", parts_header.as_str(), "% of Total"]);
        for a in &sorted {
            table.add_row(vec![
                Cell::new(&a.name),
                Cell::new(format!("{:.3}", a.score)),
                Cell::new(a.parts),
                Cell::new(format!("{:.1}%", a.percentage)),
            ]);
        }
        table.add_row(vec![
            Cell::new("TOTAL").fg(Color::Cyan),
            Cell::new(""),
            Cell::new(dist.total_parts()),
            Cell::new("100.0%"),
        ]);
        writeln!(f, "{table}")?;

        let width = usize::from(WIDTH);
        let rule = "-".repeat(width);
        writeln!(
            f,
            "\n{:^width$}",
            format!("Visual Representation ({budget} parts)")
        )?;
        writeln!(f, "{rule}")?;
        for a in &sorted {
            let bar = if a.parts > 0 {
                "█".repeat(bar_len(a.parts))
            } else {
                "·".repeat(bar_len(budget))
            };
            writeln!(
                f,
                "{:<BAR_LABEL$} {bar} ({}/{budget})",
                truncate(&a.name, BAR_LABEL),
                a.parts
            )?;
        }
        writeln!(f, "{rule}")
    }
}

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(WIDTH)
        .set_header(header.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let width = usize::from(WIDTH);
    let rule = "=".repeat(width);
    writeln!(f, "\n{rule}")?;
    writeln!(f, "{title:^width$}")?;
    writeln!(f, "{rule}")
}

fn due(days: u32) -> String {
    if days == 0 {
        "none".to_string()
    } else {
        days.to_string()
    }
}

// Unvalidated allocators can carry budgets far past anything printable.
fn bar_len(parts: u32) -> usize {
    parts.min(MAX_BUDGET) as usize
}

fn truncate(name: &str, max: usize) -> &str {
    match name.char_indices().nth(max) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{allocate, AllocationConfig, Allocator};
    use crate::criteria::Criteria;
    use crate::ranking::rank;
    use crate::scoring::Scorer;

    fn tasks() -> TaskSet {
        [
            ("Alpha", Criteria::new(100.0, 5.0, 10.0, 30)),
            ("Beta", Criteria::new(10.0, 1.0, 0.0, 0)),
        ]
        .into_iter()
        .collect()
    }

    fn row<'a>(text: &'a str, label: &str) -> &'a str {
        text.lines()
            .find(|l| l.contains(label) && l.contains('|'))
            .unwrap()
    }

    #[test]
    fn test_summary_lists_tasks() {
        let text = task_summary(&tasks());
        assert!(text.contains("TASK SUMMARY"));

        let alpha = row(&text, "Alpha");
        assert!(alpha.contains("100"));
        assert!(alpha.contains("30"));
        assert!(row(&text, "Beta").contains("none"));
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(task_summary(&TaskSet::new()), "No tasks to display\n");
    }

    #[test]
    fn test_ranking_shows_weights_and_order() {
        let set = tasks();
        let scorer = Scorer::default();
        let ranked = rank(&set, &scorer);
        let text = ranking(&set, scorer.weights(), &ranked);

        assert!(text.contains("  Due In Days: 1.00"));
        let alpha = text.find("Alpha").unwrap();
        let beta = text.find("Beta").unwrap();
        assert!(alpha < beta);
        assert!(row(&text, "Alpha").contains("3.799"));
    }

    #[test]
    fn test_tables_fit_width() {
        let long = "x".repeat(120);
        let set: TaskSet = [(long.as_str(), Criteria::new(50.0, 2.0, 3.0, 4))]
            .into_iter()
            .collect();
        let ranked = rank(&set, &Scorer::default());
        let text = ranking(&set, &WeightConfig::default(), &ranked);
        // header cells may carry color codes on a terminal
        let table_lines = text
            .lines()
            .filter(|l| l.starts_with('|') && !l.contains('\u{1b}'));
        for line in table_lines {
            assert!(line.chars().count() <= usize::from(WIDTH), "{line}");
        }
    }

    #[test]
    fn test_distribution_table_and_bars() {
        let ranked = vec![RankedEntry::new("Big", 6.0), RankedEntry::new("Small", 4.0)];
        let text = distribution(&allocate(&ranked));

        assert!(text.contains("TASK DISTRIBUTION INTO 20THS"));
        assert!(text.contains("Parts/20"));
        assert!(row(&text, "Big").contains("60.0%"));
        assert!(text.contains(&format!("{} (12/20)", "█".repeat(12))));
        assert!(text.contains(&format!("{} (8/20)", "█".repeat(8))));

        let total = row(&text, "TOTAL");
        assert!(total.contains(" 20 "));
        assert!(total.contains("100.0%"));
    }

    #[test]
    fn test_total_row_shows_actual_parts() {
        let ranked: Vec<RankedEntry> = (0..3)
            .map(|i| RankedEntry::new(format!("t{i}"), 1.0))
            .collect();
        let text = distribution(&allocate(&ranked));
        assert!(row(&text, "TOTAL").contains(" 21 "));
    }

    #[test]
    fn test_distribution_zero_parts_row() {
        let ranked = vec![RankedEntry::new("Huge", 100.0), RankedEntry::new("Tiny", 1.0)];
        let text = distribution(&allocate(&ranked));
        assert!(text.contains(&format!("{} (0/20)", "·".repeat(20))));
    }

    #[test]
    fn test_oversized_budget_bars_are_capped() {
        let allocator = Allocator::new(AllocationConfig::default().with_budget(u32::MAX));
        let ranked = vec![RankedEntry::new("Huge", 1e12), RankedEntry::new("Tiny", 1.0)];
        let text = distribution(&allocator.allocate(&ranked));
        let tiny = text.lines().find(|l| l.starts_with("Tiny")).unwrap();
        assert_eq!(tiny.matches('·').count(), MAX_BUDGET as usize);
    }

    #[test]
    fn test_distribution_degenerate() {
        assert_eq!(distribution(&allocate(&[])), "No distribution to display\n");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("short", 30), "short");
    }
}
