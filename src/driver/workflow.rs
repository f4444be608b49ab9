//! Workflow Orchestration
//!
//! Оркестрация сценариев приложения
//!
//! Собирает репозитории и сценарии под выбранную команду и печатает
//! результат. Ошибки домена поднимаются наверх и завершают процесс
//! с ненулевым кодом.

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::api::client::ApiClient;
use crate::adapter::config::Config;
use crate::adapter::repositories::local_check_repository::LocalCheckRepository;
use crate::adapter::repositories::remote_check_repository::RemoteCheckRepository;
use crate::adapter::superstition::RotatingSuperstitions;
use crate::application::dto::adjacent_view::AdjacentView;
use crate::application::dto::batch_view::BatchView;
use crate::application::dto::check_view::CheckView;
use crate::application::use_cases::check_multiple::CheckMultipleUseCase;
use crate::application::use_cases::check_year::CheckYearUseCase;
use crate::application::use_cases::find_adjacent::FindAdjacentUseCase;
use crate::domain::repositories::year_check_repository::YearCheckRepository;
use crate::domain::services::year_parse::YearParseService;

use super::cli::{Args, Command};
use super::server;

/// Выбирает адрес сервера из конфигурации и переопределений CLI
pub fn resolve_bind_addr(
    config: &Config,
    host: Option<String>,
    port: Option<u16>,
) -> (String, u16) {
    (
        host.unwrap_or_else(|| config.host.clone()),
        port.unwrap_or(config.port),
    )
}

/// Собирает годы из аргументов, разворачивая списки через запятую
pub fn gather_tokens(years: &[String]) -> Vec<String> {
    years
        .iter()
        .flat_map(|arg| YearParseService::tokenize(arg))
        .collect()
}

/// Year Check Workflow
pub struct YearCheckWorkflow {
    config: Config,
}

impl YearCheckWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the selected command
    pub async fn execute(&self, args: Args) -> Result<()> {
        match args.command {
            Command::Serve { host, port } => {
                let (host, port) = resolve_bind_addr(&self.config, host, port);
                server::serve(&host, port).await
            }
            Command::Check { years, remote } => self.run_check(&years, remote).await,
            Command::Adjacent { year, remote } => self.run_adjacent(&year, remote).await,
        }
    }

    async fn run_check(&self, years: &[String], remote: bool) -> Result<()> {
        let tokens = gather_tokens(years);
        let superstitions = Arc::new(RotatingSuperstitions::new());

        if remote {
            info!("Удалённая проверка через {}", self.config.backend_url);
            let api = Arc::new(ApiClient::new(self.config.backend_url.clone()));
            let repository = Arc::new(RemoteCheckRepository::new(api));
            check_years(repository, superstitions, &tokens).await?;
        } else {
            info!("Локальная проверка {} годов", tokens.len());
            let repository = Arc::new(LocalCheckRepository::new());
            check_years(repository, superstitions, &tokens).await?;
        }

        Ok(())
    }

    async fn run_adjacent(&self, year: &str, remote: bool) -> Result<()> {
        let superstitions = Arc::new(RotatingSuperstitions::new());

        let view = if remote {
            info!("Удалённый поиск соседей через {}", self.config.backend_url);
            let api = Arc::new(ApiClient::new(self.config.backend_url.clone()));
            let repository = Arc::new(RemoteCheckRepository::new(api));
            FindAdjacentUseCase::new(repository, superstitions)
                .execute(year)
                .await?
        } else {
            let repository = Arc::new(LocalCheckRepository::new());
            FindAdjacentUseCase::new(repository, superstitions)
                .execute(year)
                .await?
        };

        render_adjacent(&view);
        Ok(())
    }
}

/// Один год печатается с объяснением, список сводным отчётом
async fn check_years<R: YearCheckRepository>(
    repository: Arc<R>,
    superstitions: Arc<RotatingSuperstitions>,
    tokens: &[String],
) -> Result<()> {
    if tokens.len() == 1 {
        let use_case = CheckYearUseCase::new(repository, superstitions);
        let view = use_case.execute(&tokens[0]).await?;
        render_check(&view);
    } else {
        let use_case = CheckMultipleUseCase::new(repository, superstitions);
        let view = use_case.execute(tokens).await?;
        render_batch(&view);
    }

    Ok(())
}

fn render_check(view: &CheckView) {
    println!("Год {}: {}", view.year, view.status_label);
    println!("  {}", view.explanation);
    println!();
    println!("Суеверие: {}", view.superstition);
}

fn render_batch(view: &BatchView) {
    for item in &view.items {
        println!("{}: {}", item.year, item.status_label);
    }
    for error in &view.errors {
        println!("⚠ {}", error);
    }
    println!();
    println!("{}", view.summary);
    println!("Суеверие: {}", view.superstition);
}

fn render_adjacent(view: &AdjacentView) {
    println!("Год {}: {}", view.year, view.status_label);
    match &view.previous {
        Some(previous) => println!(
            "{}: {} ({})",
            previous.label, previous.year, previous.caption
        ),
        None => println!("← Предыдущий: нет"),
    }
    println!("{}: {} ({})", view.next.label, view.next.year, view.next.caption);
    println!();
    println!("Суеверие: {}", view.superstition);
}
