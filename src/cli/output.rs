pub use lsr_core::format::OutputFormat;
use clap::ValueEnum;
use lsr_core::route::ComputeMode;

/// Computation mode as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepMode {
    /// Compute all
    #[value(name = "ca", alias = "CA")]
    ComputeAll,
    /// Single step
    #[value(name = "ss", alias = "SS")]
    SingleStep,
}

impl StepMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StepMode::ComputeAll => "ca",
            StepMode::SingleStep => "ss",
        }
    }
}

impl From<StepMode> for ComputeMode {
    fn from(mode: StepMode) -> Self {
        match mode {
            StepMode::ComputeAll => ComputeMode::All,
            StepMode::SingleStep => ComputeMode::SingleStep,
        }
    }
}
