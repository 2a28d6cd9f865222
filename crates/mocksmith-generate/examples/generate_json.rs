use std::env;
use std::path::PathBuf;

use mocksmith_core::TableSchema;
use mocksmith_generate::{GenerateOptions, GenerationEngine, NoProgress};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut schema_path: Option<PathBuf> = None;
    let mut records: u64 = 10;
    let mut seed: u64 = 0;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => schema_path = args.next().map(PathBuf::from),
            "--records" => {
                records = args
                    .next()
                    .ok_or("missing --records value")?
                    .parse()
                    .map_err(|_| "invalid --records value")?;
            }
            "--seed" => {
                seed = args
                    .next()
                    .ok_or("missing --seed value")?
                    .parse()
                    .map_err(|_| "invalid --seed value")?;
            }
            _ => {
                if schema_path.is_none() {
                    schema_path = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let schema_path = schema_path.ok_or("missing --schema path")?;
    let schema_json = std::fs::read_to_string(&schema_path)?;
    let schema: TableSchema = serde_json::from_str(&schema_json)?;

    let options = GenerateOptions {
        seed,
        ..GenerateOptions::default()
    };

    let engine = GenerationEngine::new(options);
    let result = engine.run(&schema, records, &mut NoProgress)?;

    println!("{}", serde_json::to_string_pretty(&result.records)?);
    eprintln!("{}", serde_json::to_string_pretty(&result.report)?);
    Ok(())
}
