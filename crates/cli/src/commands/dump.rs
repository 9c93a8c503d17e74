//! Tree dump command.

use anyhow::Result;
use cascade_store::Store;

pub fn run(store: &Store, output: &str) -> Result<()> {
    match output {
        "text" => print!("{}", store.render_tree()),
        "json" => println!("{}", serde_json::to_string_pretty(&store.to_tree())?),
        other => anyhow::bail!("unsupported output format: {other} (expected text or json)"),
    }
    Ok(())
}
