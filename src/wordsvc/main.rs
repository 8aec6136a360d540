use clap::Parser;
use colored::*;
use serde_json::Value;
use std::path::PathBuf;
use wordsvc::api::WordApi;
use wordsvc::config::{WordConfig, DOCUMENTS_DIR_ENV};
use wordsvc::error::{Result, WordError};
use wordsvc::logging;
use wordsvc::mcp::{McpServer, StdioTransport};
use wordsvc::store::fs::FileStore;
use wordsvc::tools::{self, ToolOutput};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: WordApi<FileStore>,
    config: WordConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Tools) => handle_tools(),
        Some(Commands::Call { ref tool, ref args }) => {
            let mut ctx = init_context(&cli)?;
            handle_call(&mut ctx, tool, args.as_deref())
        }
        Some(Commands::Serve) | None => handle_serve(init_context(&cli)?),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match &cli.config {
        Some(path) => WordConfig::load_file(path)?,
        None => match WordConfig::default_dir() {
            Some(dir) => WordConfig::load(dir)?,
            None => WordConfig::default(),
        },
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_dir = std::env::var(DOCUMENTS_DIR_ENV).ok();
    let documents_dir =
        config.documents_dir(cli.documents_dir.as_deref(), env_dir.as_deref(), &cwd);

    if !documents_dir.is_dir() {
        return Err(WordError::InvalidDirectory(
            documents_dir.display().to_string(),
        ));
    }
    tracing::debug!(documents_dir = %documents_dir.display(), "resolved documents directory");

    Ok(AppContext {
        api: WordApi::new(FileStore::new(documents_dir)),
        config,
    })
}

fn handle_serve(ctx: AppContext) -> Result<()> {
    tracing::info!(
        name = %ctx.config.server_name,
        documents_dir = %ctx.api.documents_dir().display(),
        "serving MCP over stdio"
    );
    let mut server = McpServer::new(ctx.api, ctx.config.server_name);
    StdioTransport::stdio().run(&mut server)
}

fn handle_tools() -> Result<()> {
    for def in tools::definitions() {
        println!("{}", def.name.bold());
        println!("  {}", def.description.dimmed());
    }
    Ok(())
}

fn handle_call(ctx: &mut AppContext, tool: &str, args: Option<&str>) -> Result<()> {
    let arguments: Value = match args {
        Some(raw) => serde_json::from_str(raw)?,
        None => Value::Null,
    };

    let output = tools::call_tool(&mut ctx.api, tool, arguments);
    print_output(&output);
    if output.is_error {
        std::process::exit(1);
    }
    Ok(())
}

fn print_output(output: &ToolOutput) {
    for item in &output.content {
        if output.is_error {
            eprintln!("{}", item.red());
        } else {
            println!("{}", item.green());
        }
    }
}
