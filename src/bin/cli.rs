use anyhow::{Context, Result, bail};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::fs;
use std::io::Read;
use std::path::Path;
use todo_parser::config::ParserConfig;
use todo_parser::model::parser::parse_sections_with;
use todo_parser::store::{JsonLinesStore, submit_sections};

fn main() -> Result<()> {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = env::args().collect();

    let mut json = false;
    let mut config_path: Option<String> = None;
    let mut input_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => {
                todo_parser::cli::print_help("todo-parser");
                return Ok(());
            }
            "--json" => json = true,
            "--config" | "-c" => {
                i += 1;
                config_path = Some(
                    args.get(i)
                        .cloned()
                        .context("--config requires a path argument")?,
                );
            }
            other if !other.starts_with('-') => input_path = Some(other.to_string()),
            other => bail!("Unknown option: {} (see --help)", other),
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => ParserConfig::load(Path::new(path))?,
        None => ParserConfig::load_default()?,
    };

    let content = match &input_path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let sections = parse_sections_with(&content, &config);
    if sections.is_empty() {
        log::warn!("No tasks found in input");
    }

    if json {
        let mut store = JsonLinesStore::new(std::io::stdout().lock());
        submit_sections(&mut store, &sections)?;
        return Ok(());
    }

    for section in &sections {
        println!("{} ({:.2}h)", section.title, section.total_time_hours);
        for task in &section.tasks {
            let mut line = format!("  - {} [{:.2}h]", task.task, task.study_time_hours);
            if let Some(priority) = task.priority {
                line.push_str(&format!(" (優先度: {})", priority.level()));
            }
            if let Some(goal) = &task.goal {
                line.push_str(&format!(" (目標: {})", goal));
            }
            println!("{}", line);
        }
    }
    Ok(())
}
