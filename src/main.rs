use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use vacancy_etl::core::menu::{write_description_matches, write_vacancies};
use vacancy_etl::utils::{logger, validation::Validate};
use vacancy_etl::{
    AppConfig, CliConfig, Command, EtlEngine, HeadHunterClient, InteractiveMenu,
    JsonVacancyStorage, VacancyFilter, VacancyStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let config = cli.resolve().context("failed to load configuration")?;

    logger::init_logger(cli.verbose, config.logging.format);

    tracing::info!("Starting vacancy-etl");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!("❌ {} (severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: Option<Command>, config: &AppConfig) -> vacancy_etl::Result<()> {
    let mut storage = JsonVacancyStorage::open(&config.storage.path)?;
    tracing::info!(
        "📁 {} vacancies loaded from {}",
        storage.len(),
        storage.path().display()
    );

    let engine = EtlEngine::new(HeadHunterClient::new(config.source.clone())?);

    let Some(command) = command else {
        let mut menu = InteractiveMenu::new(&engine, &mut storage);
        return menu.run(io::stdin().lock(), io::stdout()).await;
    };

    let mut out = io::stdout().lock();
    match command {
        Command::Fetch { query } => {
            let count = engine.run(&mut storage, &query).await?;
            writeln!(out, "Added {} vacancies.", count)?;
        }
        Command::Top { n } => {
            write_vacancies(&mut out, &storage.query(&VacancyFilter::top(n)))?;
        }
        Command::Search { keyword } => {
            write_description_matches(&mut out, &storage, &keyword)?;
        }
        Command::Prune { keyword } => {
            let before = storage.len();
            storage.remove_where(&VacancyFilter::keyword(keyword))?;
            writeln!(
                out,
                "Removed {} vacancies, {} left.",
                before - storage.len(),
                storage.len()
            )?;
        }
        Command::List => {
            write_vacancies(&mut out, storage.vacancies())?;
        }
    }

    Ok(())
}
