//! Interactive menu loop and console protocol

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cidrnorm::Conversion;

use crate::files;
use crate::session::Session;

/// Console input source shared by every prompt. Carries the interrupt flag
/// set by the Ctrl-C handler so an interrupted read can be told apart from
/// end of input
pub struct Console<R> {
    input: R,
    interrupted: Arc<AtomicBool>,
}

/// Outcome of one console prompt
enum PromptRead {
    Line(String),
    Eof,
    Interrupted,
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R, interrupted: Arc<AtomicBool>) -> Self {
        Self { input, interrupted }
    }

    /// Prints a prompt and reads one trimmed line. End of input and
    /// interrupted reads are reported separately so callers can unwind to
    /// the menu instead of aborting
    fn prompt(&mut self, message: &str) -> io::Result<PromptRead> {
        print!("{message}");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = match self.input.read_line(&mut line) {
            Ok(read) => read,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {
                self.interrupted.store(false, Ordering::SeqCst);
                return Ok(PromptRead::Interrupted);
            }
            Err(error) => return Err(error),
        };
        // A Ctrl-C during the read discards whatever was typed
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Ok(PromptRead::Interrupted);
        }
        match read {
            0 => Ok(PromptRead::Eof),
            _ => Ok(PromptRead::Line(line.trim().to_string())),
        }
    }
}

/// Runs the main menu until the user exits or console input runs out
pub fn main_menu<R: BufRead>(console: &mut Console<R>, session: &mut Session) -> io::Result<()> {
    loop {
        display_menu(session);
        let choice = match console.prompt("Enter your choice (1-5): ")? {
            PromptRead::Line(line) => line,
            PromptRead::Eof => break,
            PromptRead::Interrupted => {
                println!("\nGoodbye!");
                break;
            }
        };
        match choice.as_str() {
            "1" => {
                let results = direct_entry(console, session)?;
                if !results.is_empty() {
                    print_results(&results);
                    offer_export(console, &results, session)?;
                }
            }
            "2" => file_batch(session)?,
            "3" => {
                session.show_prefix = !session.show_prefix;
                println!("\n'Converted:' prefix is now {}", on_off(session.show_prefix));
            }
            "4" => {
                session.realtime_output = !session.realtime_output;
                println!(
                    "\nReal-time output to file is now {}",
                    on_off(session.realtime_output)
                );
                if session.realtime_output {
                    println!(
                        "Results will be written to {} in real-time",
                        session.realtime_path.display()
                    );
                }
            }
            "5" => {
                println!("\nGoodbye!");
                break;
            }
            _ => println!("\nInvalid choice. Please enter 1-5."),
        }
        match console.prompt("\nPress Enter to continue...")? {
            PromptRead::Line(_) => {}
            PromptRead::Eof => break,
            PromptRead::Interrupted => {
                println!("\nGoodbye!");
                break;
            }
        }
    }
    Ok(())
}

/// Final acknowledgment before the process exits after a fatal error
pub fn pause_before_exit() {
    print!("\nPress Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}

fn display_menu(session: &Session) {
    println!("\n{}", "=".repeat(50));
    println!("IP/Subnet Converter - Main Menu");
    println!("{}", "=".repeat(50));
    println!("1. Convert IPs directly in CLI");
    println!("2. Convert IPs from file ({})", session.input_path.display());
    println!(
        "3. Toggle 'Converted:' prefix (Currently: {})",
        on_off(session.show_prefix)
    );
    println!(
        "4. Toggle real-time output to file (Currently: {})",
        on_off(session.realtime_output)
    );
    println!("5. Exit");
    println!("{}", "=".repeat(50));
}

fn on_off(enabled: bool) -> &'static str {
    match enabled {
        true => "ON",
        false => "OFF",
    }
}

/// Direct-entry mode. Collects converted results until `done`, `exit`, end
/// of input, or an interrupted read; an interruption returns to the menu
/// with the results collected so far
fn direct_entry<R: BufRead>(
    console: &mut Console<R>,
    session: &Session,
) -> io::Result<Vec<Conversion>> {
    println!("\nEnter IP addresses (one per line). Type 'done' to finish or 'exit' to quit completely.");
    println!("For batch input, use square brackets and comma separation:");
    println!("Example: [192.168.1.0/24, 10.0.0.1, 172.16.0.0/16]");

    // The real-time log starts fresh for each entry session
    if session.realtime_output {
        files::clear_realtime_log(&session.realtime_path)?;
    }

    let mut results = Vec::new();
    loop {
        let input = match console.prompt("\nEnter IP address or CIDR: ")? {
            PromptRead::Line(line) => line,
            PromptRead::Eof => break,
            PromptRead::Interrupted => {
                println!("\nReturning to main menu...");
                break;
            }
        };
        if input.eq_ignore_ascii_case("exit") {
            std::process::exit(0);
        }
        if input.eq_ignore_ascii_case("done") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match split_batch(&input) {
            Some(tokens) => {
                for token in tokens {
                    convert_one(token, session, &mut results, true)?;
                }
            }
            None => convert_one(&input, session, &mut results, false)?,
        }
    }
    Ok(results)
}

/// File-batch mode. A missing input file is reported and control returns to
/// the menu; bad tokens are reported individually and skipped. The
/// real-time log is only written from direct entry
fn file_batch(session: &Session) -> io::Result<()> {
    let tokens = match files::read_token_list(&session.input_path) {
        Ok(tokens) => tokens,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::error!("Input file not found: {}", session.input_path.display());
            return Ok(());
        }
        Err(error) => return Err(error),
    };

    let mut results = Vec::new();
    for token in &tokens {
        match cidrnorm::convert(token) {
            Ok(result) => results.push(result),
            Err(error) => log::error!("{}", entry_error_message(token, &error, true)),
        }
    }

    print_results(&results);
    files::export_results(&results, &session.output_path)?;
    println!(
        "\nResults have been exported to: {}",
        session.output_path.display()
    );
    Ok(())
}

/// Converts one token, echoing it to the console and mirroring it to the
/// real-time log. A bad token is reported and skipped
fn convert_one(
    token: &str,
    session: &Session,
    results: &mut Vec<Conversion>,
    in_batch: bool,
) -> io::Result<()> {
    match cidrnorm::convert(token) {
        Ok(result) => {
            match session.show_prefix {
                true => println!("Converted: {result}"),
                false => println!("{result}"),
            }
            if session.realtime_output {
                files::append_realtime(&result, &session.realtime_path)?;
            }
            results.push(result);
        }
        Err(error) => log::error!("{}", entry_error_message(token, &error, in_batch)),
    }
    Ok(())
}

/// Bad tokens inside a batch are reported with the offending token; a
/// single direct entry gets the shorter format message
fn entry_error_message(token: &str, error: &cidrnorm::Error, in_batch: bool) -> String {
    match in_batch {
        true => format!("Error with IP {token}: {error}"),
        false => format!("Error: Invalid IP format - {error}"),
    }
}

/// Splits a bracketed batch line (`[a, b, c]`) into trimmed tokens. Returns
/// `None` for ordinary single-token input
fn split_batch(input: &str) -> Option<Vec<&str>> {
    let inner = input.strip_prefix('[')?.strip_suffix(']')?;
    Some(
        inner
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect(),
    )
}

fn print_results(results: &[Conversion]) {
    println!("\nConverted IP addresses:");
    println!("{}", "-".repeat(40));
    for result in results {
        println!("{result}");
    }
}

fn offer_export<R: BufRead>(
    console: &mut Console<R>,
    results: &[Conversion],
    session: &Session,
) -> io::Result<()> {
    if let PromptRead::Line(answer) = console.prompt("\nWould you like to save the results? (y/n): ")? {
        if answer.eq_ignore_ascii_case("y") {
            files::export_results(results, &session.output_path)?;
            println!(
                "\nResults have been exported to: {}",
                session.output_path.display()
            );
        }
    }
    Ok(())
}
