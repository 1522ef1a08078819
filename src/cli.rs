use clap::Parser;
use std::path::PathBuf;

use seathru_batch::engine::ProcessorParams;

#[derive(Parser)]
#[command(name = "seathru-batch")]
#[command(version)]
#[command(about = "Batch driver for the Sea-Thru underwater image corrector", long_about = None)]
pub struct Cli {
    /// Number of images to process, taken from the front of the sorted input
    /// listing. Zero or negative selects nothing.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub count: i64,

    /// Depth-map input size forwarded to the processor
    #[arg(long)]
    pub size: Option<u32>,

    /// Monodepth model name forwarded to the processor
    #[arg(long)]
    pub model_name: Option<String>,

    /// Backscatter brightness factor
    #[arg(long, allow_negative_numbers = true)]
    pub f: Option<f64>,

    /// Attenuation balance factor
    #[arg(long, allow_negative_numbers = true)]
    pub l: Option<f64>,

    /// Illuminant locality factor
    #[arg(long, allow_negative_numbers = true)]
    pub p: Option<f64>,

    /// Closest depth considered when fitting backscatter
    #[arg(long, allow_negative_numbers = true)]
    pub min_depth: Option<f64>,

    /// Farthest depth considered when fitting backscatter
    #[arg(long, allow_negative_numbers = true)]
    pub max_depth: Option<f64>,

    /// Fraction of pixels sampled when spreading depth data
    #[arg(long, allow_negative_numbers = true)]
    pub spread_data_fraction: Option<f64>,

    /// Tell the processor to treat inputs as camera RAW files
    #[arg(long)]
    pub raw: bool,

    /// Tell the processor to run inference on the CPU
    #[arg(long)]
    pub no_cuda: bool,

    /// Directory to scan for input images (overrides config)
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory to write results into (overrides config)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Processor command to invoke per image (overrides config)
    #[arg(long, value_name = "CMD")]
    pub processor: Option<String>,

    /// Log the constructed commands without executing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Forwarded parameters exactly as given on the command line; anything
    /// not provided stays unset.
    pub fn processor_params(&self) -> ProcessorParams {
        ProcessorParams {
            size: self.size,
            model_name: self.model_name.clone(),
            f: self.f,
            l: self.l,
            p: self.p,
            min_depth: self.min_depth,
            max_depth: self.max_depth,
            spread_data_fraction: self.spread_data_fraction,
            raw: self.raw,
            no_cuda: self.no_cuda,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
