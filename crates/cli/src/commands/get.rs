//! Typed path lookup command.
//!
//! Misses are not errors: a path that resolves to nothing prints the
//! type-appropriate zero value and exits successfully, matching the
//! store's fail-soft contract.

use anyhow::Result;
use cascade_store::{Entry, Store};

use crate::args::ValueKind;

pub fn run(store: &mut Store, path: &str, kind: ValueKind) -> Result<()> {
    let entry = resolve(store, path);
    match kind {
        ValueKind::String => println!("{}", entry.value::<String>()),
        ValueKind::Int => println!("{}", entry.value::<i64>()),
        ValueKind::Float => println!("{}", entry.value::<f64>()),
        ValueKind::Bool => println!("{}", entry.value::<bool>()),
        ValueKind::Floats => {
            let values = entry.value::<Vec<f64>>();
            let rendered: Vec<String> = values.iter().map(f64::to_string).collect();
            println!("{}", rendered.join(" "));
        }
    }
    Ok(())
}

/// Walk a colon-delimited path through nested scopes.
pub(crate) fn resolve<'s>(store: &'s mut Store, path: &str) -> Entry<'s> {
    let mut segments = path.split(':');
    let mut entry = store.lookup(segments.next().unwrap_or_default());
    for segment in segments {
        entry = entry.select(segment);
    }
    entry
}
