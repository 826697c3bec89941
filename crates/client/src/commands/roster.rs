use anyhow::Result;
use clap::Parser;

use crate::report;

/// List the available fighters
#[derive(Parser, Debug)]
pub struct Roster {}

impl Roster {
    pub fn execute(self) -> Result<()> {
        let mut out = std::io::stdout().lock();
        report::write_roster(&mut out, arena_content::roster::entries())?;
        Ok(())
    }
}
