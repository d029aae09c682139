use anyhow::Result;
use clap::Parser;

use labelr::api::{self, HttpCategoryStore, HttpInputStore};
use labelr::code::CodeAllocator;
use labelr::{app, cli, event, logger, tui};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli_opts = cli::Cli::parse();
    let config = cli_opts.config;
    let _log_guard = logger::init(&config.log_dir(), &config.log_level)?;
    tracing::info!(
        categories_url = %config.categories_url,
        inputs_url = %config.inputs_url,
        "starting labelr"
    );

    let client = api::build_client(config.timeout())?;
    let categories = HttpCategoryStore::new(client.clone(), config.categories_url.clone());
    let inputs = HttpInputStore::new(client, config.inputs_url.clone());
    let allocator = CodeAllocator::new(config.on_exhausted);

    if let Some(command) = cli_opts.command {
        return cli::run(command, &categories, &inputs, &allocator);
    }

    let mut app = app::App::new(Box::new(categories), Box::new(inputs), allocator);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
