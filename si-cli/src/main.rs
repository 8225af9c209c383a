use anyhow::Context;
use clap::{Parser, Subcommand};
use si_prefix::{prefix, si_format, si_format_with, si_parse, si_parse_with_trace, SiValue};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a number with an SI prefix
    Format {
        #[clap(value_parser, allow_negative_numbers = true)]
        value: f64,
        /// Template for values with a prefix, e.g. "{value:.1f} {prefix}Hz"
        #[arg(short, long)]
        format: Option<String>,
        /// Template for values beyond yocto/yotta, e.g. "{value:.1f}e{expof10} Hz"
        #[arg(short, long)]
        exp_format: Option<String>,
    },
    /// Parse an SI-prefixed or exponential string back into a number
    Parse {
        #[clap(value_parser, allow_hyphen_values = true)]
        text: String,
        /// Enable debug trace output showing which parsers were used
        #[arg(short, long)]
        debug: bool,
        #[arg(short, long)]
        json: bool,
    },
    /// Show the mantissa and exponent a number normalizes to
    Split {
        #[clap(value_parser, allow_negative_numbers = true)]
        value: f64,
        #[arg(short, long)]
        json: bool,
    },
    /// Look up the prefix symbol for a power of ten
    Prefix {
        #[clap(value_parser, allow_negative_numbers = true)]
        expof10: i32,
    },
}

fn run(command: &Commands) -> anyhow::Result<String> {
    match command {
        Commands::Format {
            value,
            format,
            exp_format,
        } => match (format, exp_format) {
            (None, None) => Ok(si_format(*value)),
            (format, exp_format) => Ok(si_format_with(
                *value,
                format.as_deref().unwrap_or(si_prefix::DEFAULT_FORMAT),
                exp_format.as_deref().unwrap_or(si_prefix::DEFAULT_EXP_FORMAT),
            )?),
        },
        Commands::Parse { text, debug, json } => {
            let result = if *debug {
                let traced = si_parse_with_trace(text);
                let use_color = atty::is(atty::Stream::Stderr);
                eprintln!("{}", traced.trace.format_tree(use_color));
                traced.result
            } else {
                si_parse(text)
            };
            let value = result.with_context(|| format!("could not parse {text:?}"))?;
            if *json {
                Ok(serde_json::to_string_pretty(&SiValue::new(value))?)
            } else {
                Ok(value.to_string())
            }
        }
        Commands::Split { value, json } => {
            let split = SiValue::new(*value);
            if *json {
                Ok(serde_json::to_string_pretty(&split)?)
            } else {
                Ok(format!("{} {}", split.mantissa, split.expof10))
            }
        }
        Commands::Prefix { expof10 } => Ok(prefix(*expof10)?.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{}", run(&cli.command)?);
    Ok(())
}
