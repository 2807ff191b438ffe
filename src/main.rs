use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use query_filter::config::Config;
use query_filter::core::error::ToPublicError;
use query_filter::core::schema::{EntitySchema, SchemaRegistry};
use query_filter::query::{parse_query, QueryParams};
use query_filter::utils::logging;

#[derive(Parser)]
#[command(version, about = "Parse filter/orderBy/limit/offset request parameters")]
enum Cli {
    /// Parse a query string and print the resulting query spec as JSON
    Parse {
        #[arg(short, long)]
        schema: Option<PathBuf>,
        #[arg(short, long)]
        entity: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// urlencoded query string, e.g. "filter=age%3C30&orderBy=name%20desc&limit=10"
        query: String,
    },
    /// List the fields of an entity
    Fields {
        #[arg(short, long)]
        schema: Option<PathBuf>,
        #[arg(short, long)]
        entity: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn load_schema(path: Option<PathBuf>, config: &Config) -> Result<SchemaRegistry> {
    let path = path
        .or_else(|| config.schema_path.as_ref().map(PathBuf::from))
        .ok_or_else(|| anyhow!("no schema file given (use --schema or schema_path in config)"))?;
    let registry = SchemaRegistry::load(&path)
        .with_context(|| format!("failed to load schema {}", path.display()))?;
    if registry.is_empty() {
        return Err(anyhow!("schema {} defines no entities", path.display()));
    }
    Ok(registry)
}

fn find_entity<'a>(registry: &'a SchemaRegistry, name: &str) -> Result<&'a EntitySchema> {
    registry.get(name).ok_or_else(|| {
        let known: Vec<&str> = registry.entity_names().collect();
        anyhow!("unknown entity '{}' (known: {})", name, known.join(", "))
    })
}

/// 返回进程退出码：0 成功，2 参数验证失败
fn run(cli: Cli) -> Result<i32> {
    match cli {
        Cli::Parse {
            schema,
            entity,
            config,
            query,
        } => {
            let config = load_config(config.as_ref())?;
            logging::init(&config.log)?;
            let registry = load_schema(schema, &config)?;
            let entity = find_entity(&registry, &entity)?;

            let params = QueryParams::parse(&query);
            match parse_query(entity, &params, &config.parser) {
                Ok(spec) => {
                    println!("{}", serde_json::to_string_pretty(&spec)?);
                    Ok(0)
                }
                Err(e) => {
                    let public = e.to_public_error();
                    println!("{}", serde_json::to_string_pretty(&public)?);
                    Ok(2)
                }
            }
        }
        Cli::Fields {
            schema,
            entity,
            config,
        } => {
            let config = load_config(config.as_ref())?;
            logging::init(&config.log)?;
            let registry = load_schema(schema, &config)?;
            let entity = find_entity(&registry, &entity)?;
            for field in entity.field_names() {
                println!("{}", field);
            }
            Ok(0)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let result = run(cli);
    logging::shutdown();
    let code = result?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
