mod adapter;
mod app;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use common::error::Error;

use cli::parse_args;
use wiring::wire_postgen;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("postgen: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    if config.help {
        print_help();
        return Ok(0);
    }
    let app = wire_postgen(&config)?;
    app::run_app(&app, &config)
}

fn print_usage() {
    eprintln!("Usage: postgen [options] <topic...>");
}

fn print_help() {
    println!("Usage: postgen [options] <topic...>");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -p, --provider <provider>  Specify LLM provider (groq, echo). Default: groq");
    println!("  -m, --model <model>        Specify model name. Default: llama-3.3-70b-versatile");
    println!("  --retries <n>              Maximum number of generation attempts. Default: 3");
    println!("  --temperature <t>          Sampling temperature override. Default: 0.8");
    println!("  --history <file>           JSON file with prior {{role, content}} messages");
    println!("  --log-file <file>          Append structured JSONL logs to this file");
    println!("  --json                     Print the validated response as JSON instead of streaming chunks");
    println!();
    println!("Environment:");
    println!("  GROQ_API_KEY    API key for the groq provider.");
    println!();
    println!("Description:");
    println!("  Generate 4 validated social media post drafts for a topic and stream");
    println!("  them as typed chunks (title, paragraphs, hashtags). Output that fails");
    println!("  validation is discarded and regenerated up to the retry limit; when the");
    println!("  limit is reached a single error post is emitted and the exit code is 1.");
    println!();
    println!("Examples:");
    println!("  postgen career growth");
    println!("  postgen -p echo career growth");
    println!("  postgen --json --retries 5 remote work culture");
}
