use clap::Parser;
use shoplist::core::action::{Action, update};
use shoplist::core::config::{self, CliOverrides};
use shoplist::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shoplist", about = "Terminal shopping list")]
struct Args {
    /// Config file to use instead of ~/.shoplist/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen fade duration in milliseconds (0 disables it)
    #[arg(long)]
    fade_ms: Option<u64>,

    /// Item to put on the list at startup (repeatable)
    #[arg(short, long = "item")]
    items: Vec<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to shoplist.log in current directory.
    // Starts wide open so config loading is captured, narrowed once resolved.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("shoplist.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let (file_config, source) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Config load failed: {e}");
            eprintln!("shoplist: {e}");
            std::process::exit(1);
        }
    };
    let cli = CliOverrides {
        fade_ms: args.fade_ms,
    };
    let mut resolved = config::resolve(&file_config, &cli);
    resolved.source = source;
    log::set_max_level(resolved.log_level);

    log::info!(
        "Shoplist starting up (config: {:?}, fade: {}ms)",
        resolved.source,
        resolved.fade_ms
    );

    let mut app = App::new(resolved);
    for item in args.items {
        update(&mut app, Action::AddItem(item));
    }

    shoplist::tui::run(app)
}
