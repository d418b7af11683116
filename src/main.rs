//! Interactive folioterm session over stdin
//!
//! Drives one terminal instance the way the embedding site would: read a
//! line, run the interpreter cycle, print whatever the transcript gained,
//! report presentation-layer signals.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use folioterm::{Terminal, TerminalConfig, UiSignal};

#[derive(Parser)]
#[command(name = "folioterm", about = "Simulated portfolio terminal")]
struct Args {
    /// TOML config file; defaults apply when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the host name shown in the prompt
    #[arg(long)]
    host: Option<String>,

    /// Skip the greeting banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => TerminalConfig::load(&path),
        None => TerminalConfig::default(),
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if args.no_banner {
        config.greeting.clear();
    }

    let mut terminal = Terminal::with_site(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in terminal.transcript() {
        println!("{}", line);
    }
    let mut seen = terminal.transcript().len();

    loop {
        print!("{}", terminal.prompt());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim_end_matches(['\n', '\r']);
        terminal.submit_line(raw);

        let transcript = terminal.transcript();
        if transcript.len() < seen {
            // the screen was cleared
            print!("\x1B[2J\x1B[1;1H");
            seen = transcript.len();
        } else {
            // skip the echo line; the user just typed it
            for output in transcript.iter().skip(seen + 1) {
                println!("{}", output);
            }
            seen = transcript.len();
        }

        for signal in terminal.take_signals() {
            match signal {
                UiSignal::OpenExternal(url) => println!("[external] {}", url),
                UiSignal::ServePage(key) => println!("[document mode] {}", key),
            }
        }
    }

    Ok(())
}
