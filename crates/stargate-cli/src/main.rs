use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use stargate_cli::output::OutputFormat;
use stargate_cli::terminal::ColorPalette;

mod commands;

use commands::source::SourceOptions;
use commands::CommandContext;

#[derive(Parser, Debug)]
#[command(author, version, about = "Stargate journey costs and fleet sizing")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct GlobalOptions {
    /// Answer from canned JSON responses in this directory instead of the API.
    /// Falls back to STARGATE_FIXTURES.
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Override the API base URL (defaults to STARGATE_API_BASE_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// API key sent as `x-api-key` (defaults to STARGATE_API_KEY).
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every gate with its number of connections.
    Gates {
        /// Only list these gate codes (repeatable).
        #[arg(long = "favorite", value_name = "CODE")]
        favorites: Vec<String>,
    },
    /// Show a gate and the gates it links to.
    Gate {
        /// Gate code, e.g. SOL.
        code: String,
    },
    /// Number of vehicles needed to carry a party.
    Fleet {
        #[arg(long, allow_negative_numbers = true)]
        passengers: i64,
        /// Passenger seats per vehicle.
        #[arg(long, allow_negative_numbers = true)]
        capacity: i64,
    },
    /// Format an amount for display.
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Price a journey and size the fleet for a party.
    Quote {
        /// Distance in AU.
        #[arg(long)]
        distance: f64,
        #[arg(long)]
        passengers: i64,
        /// Days of parking at the destination.
        #[arg(long, default_value_t = 0)]
        parking: i64,
    },
    /// Cheapest route between two gates with per-leg costs.
    Route {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
        /// Number of vehicles sharing the journey.
        #[arg(long, default_value_t = 1)]
        fleet: u32,
        /// Parking fee to add to the route total.
        #[arg(long, default_value_t = 0.0)]
        parking_fee: f64,
        /// Cost per AU used to price each leg (defaults to 1:1).
        #[arg(long)]
        rate: Option<f64>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let context = CommandContext {
        format: cli.global.format,
        palette: ColorPalette::resolve(cli.global.no_color),
        source: SourceOptions {
            fixtures: cli.global.fixtures,
            api_url: cli.global.api_url,
            api_key: cli.global.api_key,
        },
    };

    match cli.command {
        Command::Gates { favorites } => commands::gates::handle_list_gates(&context, &favorites),
        Command::Gate { code } => commands::gates::handle_gate_details(&context, &code),
        Command::Fleet {
            passengers,
            capacity,
        } => commands::fleet::handle_fleet(&context, passengers, capacity),
        Command::Format { value } => commands::fleet::handle_format(&context, value),
        Command::Quote {
            distance,
            passengers,
            parking,
        } => commands::quote::handle_quote(
            &context,
            &stargate_lib::QuoteRequest {
                distance,
                passengers,
                parking_days: parking,
            },
        ),
        Command::Route {
            from,
            to,
            fleet,
            parking_fee,
            rate,
        } => commands::route::handle_route(
            &context,
            &commands::route::RouteCommandArgs {
                from,
                to,
                fleet,
                parking_fee,
                rate,
            },
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
