use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hydro-find")]
#[command(about = "Поиск артикулов гидравлических компонентов и выгрузка в Excel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Подробный лог
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Найти артикулы в тексте
    Extract {
        /// Текст запроса (без него откроется редактор)
        text: Option<String>,

        /// Прочитать текст из файла
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Вывести результат как JSON-массив
        #[arg(long)]
        json: bool,

        /// Показать подсказку по форматам артикулов
        #[arg(long)]
        instructions: bool,
    },

    /// Отправить запрос бэкенду и показать карточки результатов
    Search {
        /// Текст запроса (без него откроется редактор)
        text: Option<String>,

        /// Прочитать текст из файла
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Адрес бэкенда (по умолчанию из настроек)
        #[arg(long)]
        url: Option<String>,
    },

    /// Выгрузить результаты поиска (JSON) в Excel
    Export {
        /// JSON-файл с массивом результатов
        #[arg(required = true)]
        input: PathBuf,

        /// Каталог или путь к .xlsx
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Префикс имени файла
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Показать или изменить настройки
    Config {
        /// Адрес бэкенда
        #[arg(long)]
        set_backend_url: Option<String>,

        /// Префикс имени файла выгрузки
        #[arg(long)]
        set_file_prefix: Option<String>,

        /// Показать настройки
        #[arg(long)]
        show: bool,
    },
}
