use anyhow::Context;
use clap::Parser;
use hydro_find::{cli, config, export, input, logging, search, session};
use cli::{Cli, Commands};
use config::Config;
use hydro_find::error::HydroFindError;
use search::{BackendClient, SearchController};
use session::ArticleSession;
use std::path::PathBuf;

const INSTRUCTIONS: &str = "\
Распознаются:
  - коды с дефисом или подчёркиванием: A-123-45, DK-12, JIC_16
  - пометки «арт.»: арт. 7890, арт7890
  - числа от 6 цифр: 123456
  - буквенно-цифровые токены от 5 символов: DKOL12";

/// Настройки читаются только командами, которым они нужны
fn load_config() -> anyhow::Result<Config> {
    Config::load().context("не удалось загрузить настройки")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Commands::Extract { text, file, json, instructions } => {
            let interactive = text.is_none() && file.is_none();
            let mut session = ArticleSession::new(input::read_query(text, file.as_deref())?);

            if instructions {
                session.toggle_instructions();
            }
            if session.is_expanded {
                println!("{}\n", INSTRUCTIONS);
            }

            loop {
                println!("{}", input::char_count_line(session.char_count()));
                let found = if interactive {
                    session.find_articles_retrying(|e| {
                        println!("⚠ {}", e);
                        input::read_query(None, None)
                    })?
                } else {
                    session.find_articles()?
                };

                if json {
                    println!("{}", serde_json::to_string_pretty(found)?);
                } else if found.is_empty() {
                    println!("Артикулы не найдены");
                } else {
                    println!("✔ Найдено артикулов: {}", found.len());
                    for article in found {
                        println!("  {}", article);
                    }
                }

                if !interactive || !input::confirm("Искать ещё?")? {
                    break;
                }
                session.clear_input();
                session.input_text = input::read_query(None, None)?;
            }
        }

        Commands::Search { text, file, url } => {
            let query = input::read_query(text, file.as_deref())?;
            println!("{}", input::char_count_line(query.chars().count()));

            let url = match url {
                Some(url) => url,
                None => load_config()?.backend_url(),
            };
            let client = BackendClient::new(url);
            let mut controller = SearchController::new(client);
            controller.set_input(query);

            let outcome = controller.search().await.map(|view| view.to_string());
            match outcome {
                Ok(rendered) => println!("\n{}", rendered),
                Err(e @ HydroFindError::Validation(_)) => return Err(e.into()),
                Err(e) => {
                    let status = controller.status().unwrap_or_default().to_string();
                    return Err(anyhow::Error::new(e).context(status));
                }
            }
        }

        Commands::Export { input, output, prefix } => {
            println!("📄 hydro-find - выгрузка в Excel\n");
            let config = load_config()?;

            let output_dir = output
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let prefix = prefix.unwrap_or_else(|| config.file_prefix.clone());

            let path = export::export_json_file(&input, &output_dir, &prefix)?;
            println!("✔ Excel: {}", path.display());
        }

        Commands::Config { set_backend_url, set_file_prefix, show } => {
            let mut config = load_config()?;

            if let Some(url) = set_backend_url {
                config.set_backend_url(url)?;
                println!("✔ Адрес бэкенда сохранён");
            }

            if let Some(prefix) = set_file_prefix {
                config.set_file_prefix(prefix)?;
                println!("✔ Префикс файла сохранён");
            }

            if show {
                println!("Настройки:");
                println!("  Бэкенд: {}", config.backend_url());
                println!("  Префикс файла: {}", config.file_prefix);
                println!(
                    "  Каталог выгрузки: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "текущий".into())
                );
            }
        }
    }

    Ok(())
}
