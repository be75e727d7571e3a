//! # Console Surface
//!
//! Terminal stand-in for the kiosk screen: stdin lines become kiosk events
//! and every render is printed as a short text block.
//!
//! ## Input
//! ```text
//!   9556001234567      typed as a scanner burst, then Enter
//!   /manual A100       manual entry submit
//!   /focus  /blur      manual entry focus on / off
//!   /dismiss  /esc     back to the slideshow
//!   /slide 2           pick a slide
//!   /key Shift         one named key
//!   /state             print the current state
//!   /quit              exit
//! ```

use pricecheck_core::{ProductView, StockLevel};
use pricecheck_kiosk::{DisplayState, Key, Renderer};
use tracing::debug;

// =============================================================================
// Commands
// =============================================================================

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scan(String),
    Manual(String),
    Focus,
    Blur,
    Dismiss,
    Slide(i64),
    Key(Key),
    State,
    Quit,
}

/// Parses one stdin line. Lines not starting with `/` are scans.
pub fn parse_command(line: &str) -> Result<Command, String> {
    if !line.starts_with('/') {
        return Ok(Command::Scan(line.to_string()));
    }

    let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
    match name {
        "/manual" => Ok(Command::Manual(rest.to_string())),
        "/focus" => Ok(Command::Focus),
        "/blur" => Ok(Command::Blur),
        "/dismiss" | "/esc" => Ok(Command::Dismiss),
        "/slide" => rest
            .trim()
            .parse()
            .map(Command::Slide)
            .map_err(|_| format!("Slide index must be a number, got '{}'", rest.trim())),
        "/key" if !rest.trim().is_empty() => Ok(Command::Key(Key::from_name(rest.trim()))),
        "/key" => Err("Usage: /key <name>".to_string()),
        "/state" => Ok(Command::State),
        "/quit" | "/exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {}", other)),
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renderer that prints to stdout.
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&self, state: &DisplayState) {
        if let Ok(json) = serde_json::to_string(state) {
            debug!(state = %json, "Render");
        }
        for line in describe(state) {
            println!("{}", line);
        }
    }

    fn show_slide(&self, index: usize, slide: &str) {
        println!("  [slide {}] {}", index + 1, slide);
    }

    fn alert(&self, message: &str) {
        println!("  (!) {}", message);
    }
}

/// Text lines for a display state.
pub fn describe(state: &DisplayState) -> Vec<String> {
    match state {
        DisplayState::Slideshow => vec!["== Slideshow ==".to_string()],
        DisplayState::Loading { term } => vec![format!("Searching for {} ...", term)],
        DisplayState::Error { message } => vec![format!("!! {}", message)],
        DisplayState::ProductShown(view) => describe_product(view),
    }
}

fn describe_product(view: &ProductView) -> Vec<String> {
    let details = &view.details;
    let pricing = &view.pricing;
    let mut lines = vec![
        format!("== {} ==", details.name),
        format!("  Code: {}   Barcode: {}", details.item_code, details.barcode),
        format!("  Brand: {}   Location: {}", details.brand, details.location),
        format!("  Price: {} / {}", pricing.normal.amount, pricing.normal.unit),
    ];

    if let Some(promo) = &pricing.promo {
        lines.push(format!(
            "  Promo: {} / {}   save {}",
            promo.amount, promo.unit, promo.savings
        ));
        if let Some(rule) = &promo.quantity_rule {
            lines.push(format!("    {}", rule.label()));
        }
        if let Some(validity) = &promo.validity {
            lines.push(format!(
                "    Valid {} to {}",
                validity.from_label(),
                validity.until_label()
            ));
        }
    }

    if let Some(member) = &pricing.member {
        lines.push(format!(
            "  Member: {} / {}   save {}",
            member.amount, member.unit, member.total_savings
        ));
        if let Some(bundle) = &member.bundle {
            lines.push(format!(
                "    {} for {}   {}",
                bundle.total_qty,
                bundle.total_amount,
                bundle.rule.label()
            ));
        }
    }

    let level = match view.stock.level {
        StockLevel::OutOfStock => "out of stock",
        StockLevel::Low => "low stock",
        StockLevel::Normal => "in stock",
    };
    lines.push(format!(
        "  Stock: {} {} ({})",
        view.stock.quantity, view.stock.unit, level
    ));

    lines
}
