mod batch;
mod command;
mod params;
mod scan;
mod types;

pub use batch::{run_batch, BatchConfig, BatchError};
pub use command::{build_processor_cmd, format_processor_cmd, ProcessorCommand};
pub use params::ProcessorParams;
pub use scan::{is_image_file, scan, IMAGE_EXTENSIONS};
pub use types::{
    build_job_queue, derive_output_path, BatchReport, ImageJob, JobFailure, OUTPUT_EXTENSION,
};
