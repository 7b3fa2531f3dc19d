use std::io;

use anyhow::Result;
use tracing::info;

use fenedit_cli::Editor;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("fenedit starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Editor::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
