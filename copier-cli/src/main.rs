use build_copier::{Copier, ItemSet, Role};
use clap::{Parser, Subcommand};
use ddragon_sdk::DataDragon;

/// Convert third-party build guides into item sets the game client imports.
#[derive(Parser)]
#[command(name = "copier", version)]
struct Cli {
    /// Game version to resolve names against; the latest when omitted
    #[arg(long, global = true)]
    game_version: Option<String>,

    /// Title of the output item set
    #[arg(long, global = true)]
    title: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one build of a MOBAfire guide page
    Mobafire {
        /// URL of the guide page
        url: String,

        /// Index of the build to convert (starting from 0)
        #[arg(long, default_value_t = 0)]
        build_index: usize,

        /// Skip items the catalog does not know instead of failing
        #[arg(long)]
        ignore_unknown_items: bool,
    },
    /// Convert a Mobalytics build
    Mobalytics {
        /// Champion name, id or key
        champion: String,

        /// ID of the build to convert
        build_id: i64,
    },
    /// Convert the OP.GG build for a champion and role
    Opgg {
        /// Champion name, id or key
        champion: String,

        /// One of: top, jungle, mid, bot, support
        role: Role,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dragon = match &cli.game_version {
        Some(version) => DataDragon::new(version),
        None => DataDragon::latest().await?,
    };
    let copier = Copier::new(dragon);

    let set = convert(&copier, &cli).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&set)?
    } else {
        serde_json::to_string(&set)?
    };
    println!("{}", json);

    Ok(())
}

async fn convert(copier: &Copier, cli: &Cli) -> build_copier::Result<ItemSet> {
    match &cli.command {
        Command::Mobafire {
            url,
            build_index,
            ignore_unknown_items,
        } => {
            let mut request = copier
                .mobafire(url)
                .build_index(*build_index)
                .ignore_unknown_items(*ignore_unknown_items);
            if let Some(title) = &cli.title {
                request = request.title(title);
            }
            request.send().await
        }
        Command::Mobalytics { champion, build_id } => {
            let mut request = copier.mobalytics(champion, *build_id);
            if let Some(title) = &cli.title {
                request = request.title(title);
            }
            request.send().await
        }
        Command::Opgg { champion, role } => {
            let mut request = copier.opgg(champion, *role);
            if let Some(title) = &cli.title {
                request = request.title(title);
            }
            request.send().await
        }
    }
}
