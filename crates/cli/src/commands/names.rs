//! Scope listing command.

use anyhow::Result;
use cascade_store::Store;

use super::get::resolve;

pub fn run(store: &mut Store, path: Option<&str>) -> Result<()> {
    let names: Vec<String> = match path {
        None => store.names().map(str::to_string).collect(),
        Some(path) => resolve(store, path).child_names(),
    };
    for name in names {
        println!("{name}");
    }
    Ok(())
}
