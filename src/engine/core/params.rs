/// Optional tuning parameters forwarded to the external processor.
///
/// Every field tracks presence explicitly. A `None` (or `false` for the two
/// bare flags) is never rendered into the invocation, and a provided value is
/// always forwarded, including zero. The driver holds no defaults of its own;
/// defaulting is the processor's business.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorParams {
    /// Depth-map render size passed to the monocular depth model
    pub size: Option<u32>,
    /// Monodepth model identifier
    pub model_name: Option<String>,
    /// Backscatter brightness factor
    pub f: Option<f64>,
    /// Attenuation-constant balance factor
    pub l: Option<f64>,
    /// Illuminant map locality factor
    pub p: Option<f64>,
    /// Closest depth considered when fitting backscatter
    pub min_depth: Option<f64>,
    /// Farthest depth considered when fitting backscatter
    pub max_depth: Option<f64>,
    /// Fraction of pixels sampled when spreading depth data
    pub spread_data_fraction: Option<f64>,
    /// Treat inputs as camera RAW files
    pub raw: bool,
    /// Force CPU inference in the processor
    pub no_cuda: bool,
}
