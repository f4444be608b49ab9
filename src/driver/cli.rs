//! CLI Argument Parsing
//!
//! Разбор аргументов командной строки

use clap::{Parser, Subcommand};

/// CLI проверки високосных лет
#[derive(Parser, Debug, Clone)]
#[command(name = "visokos")]
#[command(about = "Проверка високосных лет: сервер и командная строка", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./visokos.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Команды приложения
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Запустить HTTP-сервер проверки
    Serve {
        /// Адрес вместо значения из конфигурации
        #[arg(long)]
        host: Option<String>,

        /// Порт вместо значения из конфигурации
        #[arg(long)]
        port: Option<u16>,
    },

    /// Проверить один год или список годов
    Check {
        /// Годы, также допустимы списки через запятую
        #[arg(required = true)]
        years: Vec<String>,

        /// Проверять через удалённый сервер
        #[arg(long)]
        remote: bool,
    },

    /// Найти соседние високосные годы
    Adjacent {
        /// Год для поиска соседей
        year: String,

        /// Проверять через удалённый сервер
        #[arg(long)]
        remote: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["visokos", "check", "2024"]);
        assert_eq!(args.config, "./visokos.json");
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["visokos", "-c", "/custom/visokos.json", "check", "2024"]);
        assert_eq!(args.config, "/custom/visokos.json");
    }

    #[test]
    fn test_check_years() {
        let args = Args::parse_from(["visokos", "check", "2000", "1900,2024"]);
        match args.command {
            Command::Check { years, remote } => {
                assert_eq!(years, vec!["2000", "1900,2024"]);
                assert!(!remote);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_remote() {
        let args = Args::parse_from(["visokos", "check", "--remote", "2024"]);
        match args.command {
            Command::Check { remote, .. } => assert!(remote),
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_negative_year_after_separator() {
        let args = Args::parse_from(["visokos", "check", "--", "-400"]);
        match args.command {
            Command::Check { years, .. } => assert_eq!(years, vec!["-400"]),
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_adjacent_year() {
        let args = Args::parse_from(["visokos", "adjacent", "1900"]);
        match args.command {
            Command::Adjacent { year, remote } => {
                assert_eq!(year, "1900");
                assert!(!remote);
            }
            _ => panic!("expected adjacent command"),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let args = Args::parse_from(["visokos", "serve", "--host", "127.0.0.1", "--port", "8080"]);
        match args.command {
            Command::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_defaults_to_config() {
        let args = Args::parse_from(["visokos", "serve"]);
        match args.command {
            Command::Serve { host, port } => {
                assert!(host.is_none());
                assert!(port.is_none());
            }
            _ => panic!("expected serve command"),
        }
    }
}
