//! Reference table listing.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::Value;

use vigil_http::services::ReferenceTable;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Table to list (communes, types-incidents, type-missions, ...).
    /// Without one, every table is listed with its size.
    #[arg(value_parser = table)]
    pub table: Option<ReferenceTable>,

    /// Print the entries as JSON
    #[arg(long)]
    pub json: bool,
}

fn table(name: &str) -> Result<ReferenceTable, String> {
    ReferenceTable::ALL
        .into_iter()
        .find(|t| t.to_string() == name)
        .ok_or_else(|| {
            let known: Vec<String> = ReferenceTable::ALL.iter().map(|t| t.to_string()).collect();
            format!("unknown table '{}' (expected one of: {})", name, known.join(", "))
        })
}

pub async fn run(args: ReferenceArgs, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;
    let reference = ctx.backoffice.reference();

    let Some(table) = args.table else {
        for table in ReferenceTable::ALL {
            let entries: Vec<Value> = reference
                .list(table)
                .await
                .with_context(|| format!("Failed to list {}", table))?;
            println!("{:<24} {}", table.to_string(), entries.len());
        }
        return Ok(());
    };

    let entries: Vec<Value> = reference
        .list(table)
        .await
        .with_context(|| format!("Failed to list {}", table))?;

    if args.json {
        return output::json_pretty(&entries);
    }

    if entries.is_empty() {
        output::note("No entries.");
        return Ok(());
    }

    for entry in &entries {
        let id = entry.get("id").and_then(Value::as_str).unwrap_or("-");
        let name = entry.get("name").and_then(Value::as_str).unwrap_or("-");
        let inactive = entry.get("is_active").and_then(Value::as_bool) == Some(false);
        if inactive {
            println!("{}  {}  {}", id.dimmed(), name, "inactive".red());
        } else {
            println!("{}  {}", id.dimmed(), name);
        }
    }

    Ok(())
}
