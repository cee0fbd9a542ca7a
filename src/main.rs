use anyhow::Result;
use card_search::{
    cli::{Cli, Commands},
    config::load_reference,
    import::import_file,
    index::{Engine, LoadState, LOAD_FAILED_TEXT},
    logging::init_tracing,
    source::DataLocation,
    ui::BrowseApp,
    JaCollator, ReferenceData,
};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse_args();
    let collator = JaCollator::new()?;

    match cli.command {
        Commands::Import {
            input,
            output,
            delimiter,
        } => {
            let start = Instant::now();

            let outcome = import_file(&input, &output, delimiter, &collator)?;

            println!(
                "Imported {} stations to {} in {:.1}s",
                outcome.station_count(),
                relative(&output),
                start.elapsed().as_secs_f64()
            );
            if outcome.rows_skipped > 0 {
                println!("Skipped {} of {} rows", outcome.rows_skipped, outcome.rows_read);
            }
        }

        Commands::Search { query, data, json } => {
            let reference = load_reference(cli.config.as_deref())?;
            let engine = open_engine(&data, &reference, &collator);
            let hits = engine.search_hits(&query);

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if let Some(text) = engine.placeholder(&query, hits.len()) {
                println!("{}", text);
            } else {
                for hit in &hits {
                    for block in &hit.blocks {
                        println!("[{}] {}", block.class, block.header(&hit.display_name));
                        for card in &block.cards {
                            println!("  {}", card);
                        }
                    }
                    println!();
                }
            }
        }

        Commands::Categories { data } => {
            let reference = load_reference(cli.config.as_deref())?;
            let engine = open_engine(&data, &reference, &collator);

            for category in engine.categories() {
                match &category.icon {
                    Some(icon) => println!("{} [{}]", icon, category.name),
                    None => println!("[{}]", category.name),
                }
                for card in &category.cards {
                    println!("  {}", card);
                }
            }
        }

        Commands::Stations { data } => {
            let reference = load_reference(cli.config.as_deref())?;
            let engine = open_engine(&data, &reference, &collator);

            println!("{} stations:\n", engine.records().len());
            for record in engine.records() {
                println!("  {}", record.display_name);
            }
        }

        Commands::Browse { data } => {
            let reference = load_reference(cli.config.as_deref())?;
            let engine = open_engine(&data, &reference, &collator);

            let mut app = BrowseApp::new()?;
            let result = app.run(&engine);
            app.restore()?;
            result?;
        }
    }

    Ok(())
}

/// Load the document, reporting a failure but carrying on with no data
fn open_engine(data: &str, reference: &ReferenceData, collator: &JaCollator) -> Engine {
    let location = DataLocation::parse(data);
    let engine = Engine::load_or_empty(&location, reference, collator);
    if let LoadState::Failed(reason) = engine.state() {
        eprintln!("{} ({})", LOAD_FAILED_TEXT, reason);
    }
    engine
}

fn relative(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()))
        .unwrap_or_else(|| path.display().to_string())
}
