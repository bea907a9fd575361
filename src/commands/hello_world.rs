//! Hello world command

use console::Style;

use crate::error::Result;

/// Run hello-world command
pub fn run() -> Result<()> {
    println!(
        "{} from {}!",
        Style::new().bold().apply_to("Hello"),
        Style::new().cyan().apply_to("shadcn-extension")
    );
    Ok(())
}
