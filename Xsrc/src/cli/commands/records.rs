//! CLI command for listing parsed records

use std::path::Path;

use crate::read_xsrc;

pub fn execute(source: &Path) -> anyhow::Result<()> {
    let document = read_xsrc(source)?;

    for record in document.records() {
        let name = record
            .id
            .as_deref()
            .or(record.reference.as_deref())
            .unwrap_or("<unnamed>");
        let parent = record.containment_parent_id.as_deref().unwrap_or("-");
        println!(
            "{name:<32} parent={parent:<24} attributes={}",
            record.attributes.len()
        );
    }
    println!("{} records", document.len());

    Ok(())
}
