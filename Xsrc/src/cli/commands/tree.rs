//! CLI command for printing the entity tree

use std::path::Path;

use crate::XsrcFile;
use crate::entity::{BuilderOptions, ChildResolution, XsrcEntity};

pub fn execute(source: &Path, json: bool, scan: bool) -> anyhow::Result<()> {
    let resolution = if scan {
        ChildResolution::Scan
    } else {
        ChildResolution::Indexed
    };
    let global = XsrcFile::new(source)
        .with_options(BuilderOptions::new().with_resolution(resolution))
        .build()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&global)?);
        return Ok(());
    }

    let mut out = String::new();
    render(&global.global_entity, 0, &mut out);
    print!("{out}");
    println!("{} entities", global.entity_count());

    Ok(())
}

fn render(entity: &XsrcEntity, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    if entity.public_name.is_empty() || entity.public_name == entity.name {
        out.push_str(&format!("{indent}{}\n", entity.name));
    } else {
        out.push_str(&format!("{indent}{} ({})\n", entity.name, entity.public_name));
    }
    for attr in &entity.attributes {
        out.push_str(&format!("{indent}  - {}: {}\n", attr.public_name, attr.type_name));
    }
    for child in &entity.children {
        render(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::entity::XsrcAttribute;

    #[test]
    fn test_render_nested() {
        let entity = XsrcEntity {
            name: "global".to_string(),
            public_name: "global".to_string(),
            parent: None,
            attributes: Vec::new(),
            children: vec![XsrcEntity {
                name: "customer".to_string(),
                public_name: "Customer".to_string(),
                parent: Some("global".to_string()),
                attributes: vec![XsrcAttribute {
                    public_name: "CustomerDOB".to_string(),
                    type_name: "date".to_string(),
                }],
                children: Vec::new(),
            }],
        };

        let mut out = String::new();
        render(&entity, 0, &mut out);
        assert_eq!(out, "global\n  customer (Customer)\n    - CustomerDOB: date\n");
    }
}
