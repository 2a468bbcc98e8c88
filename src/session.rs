use std::path::{Path, PathBuf};

use crate::args::Args;

pub const DEFAULT_INPUT_FILE: &str = "ip_addresses.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "converted_ips.txt";
pub const DEFAULT_REALTIME_FILE: &str = "rt_output.txt";

/// Mutable per-run state, created at startup and threaded through the menu
/// loop
#[derive(Debug, Clone)]
pub struct Session {
    /// Prefix console output with `Converted:`
    pub show_prefix: bool,
    /// Mirror each conversion to the real-time log as it happens
    pub realtime_output: bool,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub realtime_path: PathBuf,
}

impl Session {
    pub fn new(args: &Args) -> Self {
        let base = program_dir();
        Self {
            show_prefix: true,
            realtime_output: false,
            input_path: args
                .input_file
                .clone()
                .unwrap_or_else(|| base.join(DEFAULT_INPUT_FILE)),
            output_path: args
                .output_file
                .clone()
                .unwrap_or_else(|| base.join(DEFAULT_OUTPUT_FILE)),
            realtime_path: args
                .realtime_file
                .clone()
                .unwrap_or_else(|| base.join(DEFAULT_REALTIME_FILE)),
        }
    }
}

/// Directory holding the running executable. The default data files live
/// next to the program rather than in the working directory
fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
