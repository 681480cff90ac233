/// Default bound on loader passes before giving up on convergence
pub const DEFAULT_MAX_PASSES: usize = 16;
/// Name of the built-in extension that resolves declared inputs
pub const INPUTS_EXTENSION: &str = "inputs";
/// Attribute listing the logical paths an asset includes, in order
pub const INPUTS_ATTRIBUTE: &str = "inputs";
/// Attribute listing the filters to run over an asset's content, in order
pub const FILTERS_ATTRIBUTE: &str = "filters";
/// Attribute recording the filters the processor actually applied
pub const APPLIED_FILTERS_ATTRIBUTE: &str = "applied_filters";
/// Separator used by the concat extension when none is configured
pub const DEFAULT_CONCAT_SEPARATOR: &str = "\n";
