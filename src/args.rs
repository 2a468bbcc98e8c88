use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[clap(author, version, about="Convert IPv4 CIDR notation to network/mask pairs", long_about = None)]
pub struct Args {
    /// File to read address tokens from in file-batch mode
    #[clap(long = "input-file")]
    pub input_file: Option<PathBuf>,

    /// File the converted results are exported to
    #[clap(long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// File that receives each result as it is converted when real-time
    /// output is enabled
    #[clap(long = "realtime-file")]
    pub realtime_file: Option<PathBuf>,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}
