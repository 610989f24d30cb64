//! uuidwhen CLI
//!
//! Usage:
//!   uuidwhen --text "deploy d2719bc0-95d4-11ed-... done"   # Single scan
//!   uuidwhen --interactive                                 # Read lines from stdin
//!   uuidwhen --text "..." --json                           # JSON output
//!   uuidwhen --text "..." --no-time-ago                    # Dates only

use clap::Parser;
use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};

use uuidwhen::core::{Scanner, TimestampDecoder};
use uuidwhen::types::Annotation;
use uuidwhen::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "uuidwhen",
    version = VERSION,
    about = "Find version-1 UUIDs in text and reveal when they were made",
    long_about = "uuidwhen scans text for RFC 4122 version-1 (time-based) UUIDs,\n\
                  decodes the 60-bit timestamp embedded in each one, and prints\n\
                  the creation instant plus a relative time (\"3 hours ago\").\n\n\
                  Modes:\n  \
                  --text         Scan a single string\n  \
                  --interactive  Scan stdin line by line\n\n\
                  Only lowercase version-1 UUIDs are matched; version-4 and\n\
                  other random UUIDs carry no timestamp and are ignored."
)]
struct Args {
    /// Text to scan (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Skip the relative-time ("3 hours ago") rendering
    #[arg(long)]
    no_time_ago: bool,

    /// Reference instant for relative times, RFC 3339 (default: now)
    #[arg(long)]
    now: Option<String>,

    /// Show the timestamp field breakdown per match
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let now = match resolve_now(&args.now) {
        Ok(now) => now,
        Err(e) => {
            eprintln!("invalid --now value: {}", e);
            std::process::exit(1);
        }
    };

    let scanner = Scanner::with_time_ago(!args.no_time_ago);

    if args.interactive {
        run_interactive(&scanner, now, &args);
    } else if let Some(ref text) = args.text {
        run_single(text, &scanner, now, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&scanner, now, &args);
    }
}

/// Resolve the reference instant from --now, defaulting to the wall clock
fn resolve_now(raw: &Option<String>) -> Result<DateTime<Utc>, chrono::ParseError> {
    match raw {
        Some(value) => Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// Run single text evaluation
fn run_single(text: &str, scanner: &Scanner, now: DateTime<Utc>, args: &Args) {
    let annotations = scanner.scan(text, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&annotations).unwrap());
        return;
    }

    if annotations.is_empty() {
        println!("No version-1 UUIDs found.");
        return;
    }

    for annotation in &annotations {
        if args.verbose {
            print_verbose(annotation, args.no_color);
        } else if args.no_color {
            println!("{}", annotation.to_parseable_string());
        } else {
            println!("{}", annotation.to_terminal_string());
        }
    }
}

/// Run interactive mode - scan each stdin line
fn run_interactive(scanner: &Scanner, now: DateTime<Utc>, args: &Args) {
    print_header(args.no_color);
    println!("Paste text and press Enter to scan it. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut scanned_lines: u64 = 0;

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Lines scanned: {}", scanned_lines);
            break;
        }
        if line.is_empty() {
            continue;
        }

        scanned_lines += 1;
        let annotations = scanner.scan(line, now);

        if args.json {
            println!("{}", serde_json::to_string(&annotations).unwrap());
            continue;
        }

        if annotations.is_empty() {
            println!("  (no version-1 UUIDs)");
            continue;
        }

        for annotation in &annotations {
            if args.verbose {
                print_verbose(annotation, args.no_color);
            } else if args.no_color {
                println!("  {}", annotation.to_parseable_string());
            } else {
                println!("  {}", annotation.to_terminal_string());
            }
        }
    }
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  uuidwhen v{}", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  uuidwhen v{}\x1b[0m", VERSION);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// Print per-match field breakdown
fn print_verbose(annotation: &Annotation, no_color: bool) {
    let color = if no_color { "" } else { "\x1b[36m" };
    let dim = if no_color { "" } else { "\x1b[90m" };
    let reset = if no_color { "" } else { "\x1b[0m" };

    let decoder = TimestampDecoder::new();
    // Matcher-produced text always decodes; bail quietly if handed garbage
    let fields = match decoder.extract_fields(&annotation.uuid) {
        Ok(fields) => fields,
        Err(_) => return,
    };
    let ticks = decoder.gregorian_ticks(&annotation.uuid).unwrap_or(0);
    let seconds = decoder.decode_seconds(&annotation.uuid).unwrap_or(0);

    println!("{}┌───────────────────────────────────────────────────────┐{}", color, reset);
    println!("{}│{} {}  [{}..{}]", color, reset, annotation.uuid, annotation.start, annotation.end);
    println!("{}├───────────────────────────────────────────────────────┤{}", color, reset);
    println!("{}│{}   time_low:   {}", color, reset, fields.time_low);
    println!("{}│{}   time_mid:   {}", color, reset, fields.time_mid);
    println!("{}│{}   time_high:  {}", color, reset, fields.time_high);
    println!("{}│{}   {}ticks:      {} (100 ns since 1582-10-15){}", color, reset, dim, ticks, reset);
    println!("{}│{}   {}seconds:    {} (Unix epoch){}", color, reset, dim, seconds, reset);
    println!("{}├───────────────────────────────────────────────────────┤{}", color, reset);
    match &annotation.time_ago {
        Some(ago) => println!("{}│{} decoded: {} ({})", color, reset, annotation.decoded, ago),
        None => println!("{}│{} decoded: {}", color, reset, annotation.decoded),
    }
    println!("{}└───────────────────────────────────────────────────────┘{}", color, reset);
}
