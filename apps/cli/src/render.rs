//! # Terminal Renderer
//!
//! Paints the view snapshots the session emits. This is the whole point of
//! the `Renderer` seam: the session hands over immutable data and this
//! module decides what a "menu card" or "cart panel" looks like on a
//! terminal, just like the web frontend decides what it looks like in HTML.

use fooddash_core::{Money, OrderRecord, Product};
use fooddash_storefront::{CartView, Renderer, SubmitState};

/// Renders menu, cart, and history to stdout.
pub struct TerminalRenderer {
    store_name: String,
}

impl TerminalRenderer {
    pub fn new(store_name: String) -> Self {
        TerminalRenderer { store_name }
    }
}

impl Renderer for TerminalRenderer {
    fn render_menu(&self, products: &[Product]) {
        println!();
        println!("=== {} menu ===", self.store_name);
        if products.is_empty() {
            println!("(the menu is empty right now)");
            return;
        }
        for (index, product) in products.iter().enumerate() {
            println!(
                "{:>3}. {:<20} {:>10}   {}",
                index + 1,
                product.name,
                product.price().to_string(),
                product.rating
            );
        }
    }

    fn render_cart(&self, view: &CartView) {
        println!();
        if view.lines.is_empty() {
            println!("Your cart is empty. Add delicious items from the menu!");
            return;
        }
        println!("--- cart ({} items) ---", view.total_quantity);
        for line in &view.lines {
            println!(
                "  {:<20} x{:<3} {:>10}",
                line.name,
                line.quantity,
                Money::from_cents(line.line_total_cents).to_string()
            );
        }
        let b = &view.breakdown;
        println!("  {:<24} {:>10}", "subtotal", b.subtotal().to_string());
        println!("  {:<24} {:>10}", "tax", b.tax().to_string());
        println!("  {:<24} {:>10}", "delivery", b.delivery_fee().to_string());
        println!("  {:<24} {:>10}", "TOTAL", b.total().to_string());
        if !view.submit_enabled {
            println!("  (submit disabled)");
        }
    }

    fn render_order_history(&self, orders: &[OrderRecord]) {
        println!();
        if orders.is_empty() {
            println!("No orders yet. Your order history will appear here.");
            return;
        }
        println!("=== past orders ===");
        for order in orders {
            println!(
                "{}  {}  {}",
                order.created_at.format("%d %b %Y %H:%M"),
                order.customer_name,
                order.total_amount()
            );
            for item in &order.items {
                println!("    {} x{}", item.name, item.qty);
            }
        }
    }

    fn set_submit_state(&self, state: SubmitState) {
        match state {
            SubmitState::InFlight => println!("Placing Order..."),
            SubmitState::Idle { .. } => {}
        }
    }
}
