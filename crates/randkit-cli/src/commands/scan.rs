use randkit_core::{Error, GeneratorKind, Result, available_generators};
use serde::Serialize;

#[derive(Serialize)]
struct GeneratorRow {
    name: &'static str,
    description: &'static str,
    secure: bool,
    supported: bool,
    default: bool,
}

pub fn run(json: bool) -> Result<()> {
    let rows = scan_rows();

    if json {
        println!("{}", to_json(&rows)?);
        return Ok(());
    }

    println!("Generators on this machine:\n");
    for row in &rows {
        let mark = if row.supported { "\u{2705}" } else { "\u{274C}" };
        let tags = match (row.default, row.secure) {
            (true, _) => " [default]",
            (false, false) => " [insecure]",
            _ => "",
        };
        println!("  {mark} {:<10} {}{tags}", row.name, row.description);
    }
    Ok(())
}

fn scan_rows() -> Vec<GeneratorRow> {
    let default = GeneratorKind::detect();
    available_generators()
        .into_iter()
        .map(|status| GeneratorRow {
            name: status.info.name,
            description: status.info.description,
            secure: status.info.secure,
            supported: status.supported,
            default: status.kind == default,
        })
        .collect()
}

fn to_json(rows: &[GeneratorRow]) -> Result<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| Error::SourceUnavailable(format!("failed to serialize scan: {e}")))
}
