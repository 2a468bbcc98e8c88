//! Entrypoint for the `cidr2mask` binary.
//!
//! An interactive converter that turns IPv4 CIDR notation into explicit
//! network-address / subnet-mask pairs, either from direct console entry or
//! from a batch file.

use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clap::Parser;
use common::logging::enable_logger;

mod args;
mod common;
mod files;
mod menu;
mod session;

fn main() {
    // Parse CLI args
    let args = args::Args::parse();

    // Initialize logging
    enable_logger(args.verbose);

    // Ctrl-C returns control to the menu loop instead of killing the
    // process. The prompts poll this flag after each read
    let interrupted = Arc::new(AtomicBool::new(false));
    if let Err(error) =
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupted))
    {
        log::warn!("Could not install the interrupt handler: {error}");
    }

    // All mutable run state lives in one session value
    let mut session = session::Session::new(&args);

    let stdin = io::stdin();
    let mut console = menu::Console::new(stdin.lock(), interrupted);

    // Errors that escape the menu loop are unclassified. Report them and
    // wait for acknowledgment before exiting
    if let Err(error) = menu::main_menu(&mut console, &mut session) {
        log::error!("An unexpected error occurred: {error}");
        menu::pause_before_exit();
        std::process::exit(1);
    }
}
