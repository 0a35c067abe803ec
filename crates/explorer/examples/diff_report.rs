use anyhow::Result;
use object_explorer::{DiffOptions, ExploreOptions, Explorer, Map, Value};

fn config(port: i64, hosts: &[&str], debug: bool) -> Value {
    let hosts = hosts.iter().map(|h| Value::from(*h)).collect();
    let server: Map = [("port", Value::from(port)), ("hosts", hosts)].into_iter().collect();
    let map: Map = [
        ("server", Value::Map(server)),
        ("debug", Value::from(debug)),
        ("name", Value::from("demo")),
    ]
    .into_iter()
    .collect();
    Value::Map(map)
}

fn main() -> Result<()> {
    let old = config(8080, &["a.example", "b.example", "c.example"], false);
    let new = config(8080, &["a.example", "b2.example", "c.example"], true);

    let explorer = Explorer::new(&old)?;

    println!("=== Plain diff ===");
    println!("{:#?}", explorer.diff(&new, DiffOptions::default())?);

    println!("\n=== Diff annotated with the new value ===");
    let annotated = explorer.diff(
        &new,
        DiffOptions::default().report(|node, path, _root| {
            let after = new.get_path(path).cloned().unwrap_or_default();
            let entry: Map = [("path", Value::from(path.to_string())), ("before", node.clone()), ("after", after)]
                .into_iter()
                .collect();
            Ok(Value::Map(entry))
        }),
    )?;
    println!("{:#?}", annotated);

    println!("\n=== Strings only, keeping list positions ===");
    let strings = explorer.explore(
        ExploreOptions::default()
            .select(|node, _path, _parent| Ok(node.as_str().is_some()))
            .report(|node, _path, _root| Ok(Value::from(node.as_str().unwrap_or_default().len() as i64)))
            .preserve_array_indexes(true),
    )?;
    println!("{:#?}", strings);

    Ok(())
}
