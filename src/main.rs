use std::io::{BufRead, Write};

use anyhow::Context;
use colored::Colorize;
use rag_engine::{LoggingConfig, QueryOptions, RagPipeline, telemetry};

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables win.
    let _ = dotenvy::dotenv();

    telemetry::init(&LoggingConfig::from_env());

    if let Err(e) = run().await {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let pipeline = RagPipeline::from_env().context("configuration")?;

    println!("Initializing system...");
    let count = pipeline
        .setup_index()
        .await
        .context("system initialization failed")?;
    println!("Indexed {count} orders. System ready!");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        interactive_loop(&pipeline).await
    } else {
        one_shot(&pipeline, &args.join(" ")).await
    }
}

async fn one_shot(pipeline: &RagPipeline, query: &str) -> anyhow::Result<()> {
    println!("\nQuery: {query}");
    let result = pipeline.query(query, QueryOptions::default()).await?;
    println!("\n{}", result.answer);
    println!("Response time: {:.1}s", result.total_time);
    Ok(())
}

async fn interactive_loop(pipeline: &RagPipeline) -> anyhow::Result<()> {
    println!();
    println!("{}", "E-commerce Data Assistant".bold());
    println!("Ask me about orders, products, sales, and more!");
    println!("Type 'quit' to exit\n");

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "Query:".cyan().bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("\nGoodbye!");
            return Ok(());
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        match query.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                return Ok(());
            }
            "info" => {
                print_system_info(pipeline).await;
                continue;
            }
            _ => {}
        }

        // A failed query never ends the session.
        match pipeline.query(query, QueryOptions::default()).await {
            Ok(result) => {
                println!("\n{}", result.answer);
                println!("Response time: {:.1}s\n", result.total_time);
            }
            Err(e) => println!("{} {e}", "Error:".red()),
        }
    }
}

async fn print_system_info(pipeline: &RagPipeline) {
    let info = pipeline.system_info().await;
    let status = |healthy: bool| {
        if healthy {
            "healthy".green()
        } else {
            "unhealthy".red()
        }
    };

    println!("search engine: {} ({})", status(info.search_engine_healthy), info.search_engine_url);
    println!("llm: {} (model {})", status(info.llm_healthy), info.model);
    match info.index_stats {
        Some(stats) => println!("index: {} documents", stats.number_of_documents),
        None => println!("index: stats not available"),
    }
}
