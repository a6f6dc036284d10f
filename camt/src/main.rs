use anyhow::{Context, Result};
use camtlib::{export, model::Statement, traits::StatementParser, Camt053};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, Read, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Json,
    Csv,
    Summary,
}

#[derive(Parser, Debug)]
#[command(name = "camt", version, about = "Разбор выписок CAMT.053")]
struct Cli {
    /// Входной файл (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат вывода
    #[arg(long = "format", value_enum, default_value = "json")]
    format: Fmt,

    /// Подробный лог в stderr (переопределяется RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();

    let mut data = Vec::new();
    match &cli.input {
        Some(path) => File::open(path)
            .with_context(|| format!("open {path}"))?
            .read_to_end(&mut data)?,
        None => io::stdin().read_to_end(&mut data)?,
    };

    let statements = Camt053::parse(&data)
        .with_context(|| format!("{} parser ({})", Camt053::CODE, Camt053::NAME))?;
    info!(statements = statements.len(), "parsed");

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("create {path}"))?),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        Fmt::Json => {
            serde_json::to_writer_pretty(&mut writer, &statements)?;
            writeln!(writer)?;
        }
        Fmt::Csv => export::write_csv(&mut writer, &statements)?,
        Fmt::Summary => write_summary(&mut writer, &statements)?,
    }

    writer.flush()?;
    Ok(())
}

fn write_summary<W: Write>(w: &mut W, statements: &[Statement]) -> io::Result<()> {
    for st in statements {
        writeln!(
            w,
            "{}\t{}\t{}\t{} -> {}\t{} transactions",
            st.id,
            st.local_account,
            st.local_currency,
            st.start_balance,
            st.end_balance,
            st.transactions.len()
        )?;
    }
    Ok(())
}
