//! Subcommands of the `arena` binary.

mod duel;
mod roster;
mod simulate;

pub use duel::Duel;
pub use roster::Roster;
pub use simulate::Simulate;

use anyhow::{Result, anyhow};
use arena_content::{RosterEntry, roster as fighters};

/// Resolves a fighter given on the command line.
fn resolve(name: &str) -> Result<&'static RosterEntry> {
    fighters::lookup(name).ok_or_else(|| {
        let known: Vec<_> = fighters::names().collect();
        anyhow!("unknown fighter '{name}' (known: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_lists_known_fighters_on_error() {
        assert_eq!(resolve("mind-weaver").unwrap().name, "Mind Weaver");
        let err = resolve("bard").unwrap_err().to_string();
        assert!(err.contains("unknown fighter 'bard'"));
        assert!(err.contains("blazing-warrior"));
    }
}
