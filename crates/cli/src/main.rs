use anyhow::Result;
use ccodes_core::{ConvertOptions, CountryResolver, Resolved, TableSource};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Convert country names between classification schemes
#[derive(Debug, Parser)]
#[command(
    name = "ccodes",
    version,
    about = "Convert country names between classification schemes"
)]
struct Cli {
    /// Countries to convert; names consisting of multiple words must be quoted
    names: Vec<String>,

    /// Classification of the given names (default: inferred per name)
    #[arg(short = 's', long, visible_aliases = ["source", "from"], short_alias = 'f')]
    src: Option<String>,

    /// Target classification
    #[arg(short = 't', long, default_value = "ISO3")]
    to: String,

    /// Separator for printed output
    #[arg(short = 'o', long, default_value = " ")]
    output_sep: String,

    /// Fill value for entries without a match; the literal "None" keeps the input
    #[arg(short = 'n', long, default_value = "not found")]
    not_found: String,

    /// Additional data file (same tab-separated format as the bundled data)
    #[arg(short = 'a', long)]
    additional_data: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let additional: Vec<TableSource> = cli
        .additional_data
        .iter()
        .map(|path| TableSource::Path(path.clone()))
        .collect();
    let resolver = CountryResolver::with_additional(&additional)?;

    let options = ConvertOptions {
        src: cli.src.clone(),
        to: cli.to.clone(),
        not_found: fill_value(&cli.not_found),
        ..ConvertOptions::default()
    };

    let converted = resolver.convert(&cli.names, &options)?;
    println!("{}", render(converted, &cli.output_sep));
    Ok(())
}

// The literal string "None" means "keep the original input".
fn fill_value(raw: &str) -> Option<String> {
    (raw != "None").then(|| raw.to_string())
}

fn render(converted: Vec<Resolved>, separator: &str) -> String {
    converted
        .into_iter()
        .flat_map(Resolved::into_values)
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccodes_core::SchemeValue;

    #[test]
    fn test_fill_value_none_keeps_input() {
        assert_eq!(fill_value("None"), None);
        assert_eq!(fill_value("not found"), Some("not found".to_string()));
    }

    #[test]
    fn test_render_flattens_multiple_matches() {
        let converted = vec![
            Resolved::Single(SchemeValue::Text("DEU".to_string())),
            Resolved::Multiple(vec![
                SchemeValue::Text("COG".to_string()),
                SchemeValue::Text("COD".to_string()),
            ]),
        ];
        assert_eq!(render(converted, ", "), "DEU, COG, COD");
    }
}
