//! # FoodDash Terminal Storefront
//!
//! A thin terminal binding over the storefront session. It exists to prove
//! the point of the capability seams: the exact command interface the web
//! frontend invokes (`add_item`, `remove_item`, `update_quantity`,
//! `submit_order`, ...) is driven here from a stdin REPL with a terminal
//! renderer and a console notifier plugged in.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • FOODDASH_* environment variables over defaults                    │
//! │                                                                         │
//! │  3. Bind Capabilities ────────────────────────────────────────────────► │
//! │     • LocalAuth (FOODDASH_USER / FOODDASH_ROLE)                         │
//! │     • MemoryStore (seeded menu, in-memory orders)                       │
//! │     • TerminalRenderer + ConsoleNotifier                                │
//! │                                                                         │
//! │  4. Storefront::open ─────────────────────────────────────────────────► │
//! │     • session gate → catalog load → initial paint → REPL                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod config;
mod notify;
mod render;
mod store;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fooddash_storefront::{MenuCatalog, Renderer, SessionGate, Storefront};

use auth::LocalAuth;
use config::AppConfig;
use notify::ConsoleNotifier;
use render::TerminalRenderer;
use store::MemoryStore;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::from_env();
    info!(store = %config.store_name, "Starting FoodDash terminal storefront");

    let auth = Arc::new(LocalAuth::from_env());
    let data = Arc::new(MemoryStore::seeded());
    let renderer = Arc::new(TerminalRenderer::new(config.store_name.clone()));
    let notifier = Arc::new(ConsoleNotifier);

    let gate = Storefront::open(
        auth,
        data,
        renderer.clone(),
        notifier,
        config.pricing(),
    )
    .await;

    match gate {
        SessionGate::RequiresLogin => {
            println!("Nobody is signed in. Set FOODDASH_USER=<name> and try again.");
        }
        SessionGate::Admin => {
            println!("Admin accounts use the admin console, not the storefront.");
        }
        SessionGate::Customer(storefront) => {
            println!("Signed in as {}. Type 'help' for commands.", storefront.user().display_name());
            run_repl(storefront, renderer).await;
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fooddash=trace` - Show trace for fooddash crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,fooddash=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Drives the storefront command interface from stdin.
async fn run_repl(storefront: Storefront, renderer: Arc<TerminalRenderer>) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("fooddash> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "help" => print_help(),
            "menu" => renderer.render_menu(storefront.catalog().products()),
            "cart" => {
                if args.first() == Some(&"--json") {
                    match serde_json::to_string_pretty(&storefront.cart().view()) {
                        Ok(json) => println!("{}", json),
                        Err(e) => eprintln!("could not encode cart: {}", e),
                    }
                } else {
                    storefront.cart().render();
                }
            }
            "add" => {
                if let Some(token) = args.first() {
                    storefront.add_item(&resolve_id(storefront.catalog(), token));
                } else {
                    println!("usage: add <menu number>");
                }
            }
            "rm" => {
                if let Some(token) = args.first() {
                    storefront.remove_item(&resolve_id(storefront.catalog(), token));
                } else {
                    println!("usage: rm <menu number>");
                }
            }
            "qty" => match (args.first(), args.get(1).and_then(|d| d.parse::<i64>().ok())) {
                (Some(token), Some(delta)) => {
                    storefront.update_quantity(&resolve_id(storefront.catalog(), token), delta);
                }
                _ => println!("usage: qty <menu number> <delta>"),
            },
            "name" => storefront.delivery_form().set_name(&args.join(" ")),
            "phone" => storefront.delivery_form().set_phone(&args.join(" ")),
            "addr" => storefront.delivery_form().set_address(&args.join(" ")),
            "order" => {
                storefront.submit_order().await;
            }
            "history" => storefront.show_order_history().await,
            "logout" => {
                storefront.logout().await;
                println!("Signed out.");
                break;
            }
            "quit" | "exit" => break,
            other => println!("unknown command '{}'; type 'help'", other),
        }
    }
}

/// Resolves a REPL token to a product id.
///
/// A number is treated as a 1-based menu index; anything else (including an
/// out-of-range number) is passed through as a raw id, which the cart store
/// silently ignores when unknown.
fn resolve_id(catalog: &MenuCatalog, token: &str) -> String {
    if let Ok(index) = token.parse::<usize>() {
        if let Some(product) = index.checked_sub(1).and_then(|i| catalog.products().get(i)) {
            return product.id.clone();
        }
    }
    token.to_string()
}

fn print_help() {
    println!("commands:");
    println!("  menu                 show the menu");
    println!("  add <n>              add menu item n to the cart");
    println!("  rm <n>               remove menu item n from the cart");
    println!("  qty <n> <delta>      change quantity of item n by delta");
    println!("  cart [--json]        show the cart (optionally as JSON)");
    println!("  name <text>          set delivery name");
    println!("  phone <text>         set delivery phone");
    println!("  addr <text>          set delivery address");
    println!("  order                place the order");
    println!("  history              show past orders");
    println!("  logout | quit        leave");
}
