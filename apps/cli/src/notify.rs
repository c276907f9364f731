//! # Console Notifier
//!
//! Terminal stand-in for the web frontend's toast stack. Toasts on a
//! terminal scroll away on their own, so the auto-dismiss timings
//! (`NOTICE_VISIBLE_MS` / `NOTICE_EXIT_MS`) only matter to bindings that
//! keep notices on screen.

use fooddash_storefront::{NoteKind, Notifier};

/// Prints notices to stdout.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, kind: NoteKind, message: &str) {
        let icon = match kind {
            NoteKind::Success => "✅",
            NoteKind::Error => "❌",
        };
        println!("{} {}", icon, message);
    }
}
