use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};
use tracing::{error, info};

use pagelex::fetch::resolve_link;
use pagelex::stopwords::{load_stopword_file, StopwordFilter};
use pagelex::{export, report, utils, Analyzer, Args, FetchConfig, History, HttpFetcher};

fn run(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let mut stopwords = StopwordFilter::english();
    if let Some(path) = &args.stopwords {
        stopwords.add_stopwords(&load_stopword_file(path)?);
    }

    let config = FetchConfig {
        timeout: Duration::from_secs(args.timeout),
        user_agent: args.user_agent.clone(),
    };
    let fetcher = HttpFetcher::new(&config).context("Failed to build HTTP client")?;
    let analyzer = Analyzer::with_stopwords(fetcher, stopwords);

    let target = match &args.link {
        Some(href) => resolve_link(&args.url, href)
            .with_context(|| format!("Cannot resolve link {:?} against {}", href, args.url))?
            .to_string(),
        None => args.url.clone(),
    };
    let result = analyzer.analyze(&target);

    let history = match &args.history {
        Some(path) => {
            let history = History::load(path)?.record(&target);
            history.save(path)?;
            Some(history)
        }
        None => None,
    };

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
        export::write_csv(&result, args.top, BufWriter::new(file))?;
        info!(action = "export", component = "csv", file_path = ?path, "Wrote CSV export");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report::print_analysis_results(&target, &result, args.top, history.as_ref());
    }

    info!(
        action = "complete",
        component = "main",
        duration_ms = start_time.elapsed().as_millis(),
        "Run completed"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    if let Err(e) = run(&args) {
        error!(action = "error", component = "main", error = %e, "Run failed");
        return Err(e);
    }
    Ok(())
}
