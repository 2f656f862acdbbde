use colored::Colorize;

use bakecart_cart::{added_message, view, AddOutcome, CartObserver, LineItem};

/// Observer that prints cart notifications to the terminal.
pub struct TerminalObserver;

impl CartObserver for TerminalObserver {
    fn counter_changed(&self, item_count: u64) {
        match view::counter_badge(item_count) {
            Some(badge) => println!("  {} {}", "cart:".dimmed(), badge.bold()),
            None => println!("  {} {}", "cart:".dimmed(), "empty".dimmed()),
        }
    }

    fn item_added(&self, item: &LineItem, outcome: &AddOutcome) {
        println!("{} {}", "✓".green().bold(), added_message(&item.name));
        if let AddOutcome::Merged { quantity, .. } = outcome {
            println!("  now {} in line [{}]", quantity.to_string().yellow(), outcome.index());
        }
    }

    fn cart_changed(&self, items: &[LineItem]) {
        println!("{} cart updated ({} lines)", "✓".green(), items.len());
    }
}
