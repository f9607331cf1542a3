use minic_frontend::config::runtime::RuntimeConfig;
use minic_frontend::logging;
use minic_frontend::pipeline::{self, PipelineOutput};
use std::env;
use std::path::Path;

struct Options {
    tokens_only: bool,
    json: bool,
    config_path: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.mc> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let options = parse_options(&args[2..]);

    // Install runtime preferences before the logger reads them
    if let Some(ref config_path) = options.config_path {
        let config = RuntimeConfig::load_from_file(Path::new(config_path))?;
        logging::config::init_runtime_preferences(config.logging)?;
    }
    logging::init_global_logging()?;

    let output = pipeline::process_file(&args[1])?;

    if options.json {
        println!("{}", output.to_json_pretty()?);
    } else {
        print_report(&output, options.tokens_only);
    }

    if !output.parse_success && !options.tokens_only {
        std::process::exit(1);
    }

    Ok(())
}

fn print_help(program_name: &str) {
    println!("MiniC front end v{}", env!("CARGO_PKG_VERSION"));
    println!("Tokenizer and predictive parser with derivation tracing");
    println!();
    println!("USAGE:");
    println!("    {} <input.mc> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <input.mc>     Path to the MiniC source file to analyze");
    println!();
    println!("OPTIONS:");
    println!("    --help         Show this help message");
    println!("    --tokens       Stop after tokenization (no parse report)");
    println!("    --json         Emit the full analysis record as JSON");
    println!("    --config FILE  Load runtime preferences from a TOML profile");
    println!();
    println!("OUTPUT:");
    println!("    Token list as <code, lexeme> pairs, lexical errors, the");
    println!("    normalized source, the leftmost-derivation trace and the");
    println!("    parser verdict. Exits nonzero when the parse is rejected.");
}

fn parse_options(args: &[String]) -> Options {
    let mut options = Options {
        tokens_only: false,
        json: false,
        config_path: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--tokens" => {
                options.tokens_only = true;
            }
            "--json" => {
                options.json = true;
            }
            "--config" => {
                if i + 1 < args.len() {
                    options.config_path = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Warning: --config requires a file path");
                }
            }
            _ => {
                eprintln!("Warning: Unknown option '{}'", args[i]);
            }
        }
        i += 1;
    }

    options
}

fn print_report(output: &PipelineOutput, tokens_only: bool) {
    println!("Processed code:");
    println!("    {}", output.processed_code);
    println!();

    println!("Tokens ({}):", output.token_count);
    for token in &output.tokens {
        println!("    {}", token);
    }

    if !output.lexical_errors.is_empty() {
        println!();
        println!("Lexical errors ({}):", output.lexical_errors.len());
        for message in &output.lexical_errors {
            println!("    {}", message);
        }
    }

    if tokens_only {
        return;
    }

    println!();
    println!("Derivation ({} steps):", output.step_count);
    for step in &output.derivation_steps {
        println!("    {}", step);
    }

    println!();
    if output.parse_success {
        println!("Result: accepted");
    } else {
        println!("Result: rejected");
    }
}
