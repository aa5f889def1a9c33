// Sub-modules
mod core;
mod loader;
mod scoring;

// Re-export scoring types
pub use scoring::{
    default_department_weight, default_dependencies_weight, default_dependent_weight,
    default_description_weight, default_direct_weight, default_indirect_weight,
    default_tags_weight, default_title_weight, ImpactWeights, SimilarityWeights,
};

// Re-export core types
pub use core::{
    default_debounce_delay_ms, default_duplicate_threshold, CoemapConfig, DebounceConfig,
    DuplicatesConfig, OutputConfig,
};

// Re-export loader functions
pub use loader::{
    directory_ancestors, load_config, load_config_from_dir, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Commented default written by `coemap init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# coemap configuration

[roi]
# Discount rate applied to annual savings when computing NPV
discount_rate = 0.10
# Years of savings in the NPV and IRR cash-flow series
horizon_years = 5
irr_initial_guess = 0.10
irr_max_iterations = 100
irr_tolerance = 0.0001
# Months shown in payback timelines
payback_horizon_months = 36

[duplicates]
threshold = 0.6

[duplicates.weights]
title = 0.40
description = 0.25
tags = 0.20
department = 0.10
dependencies = 0.05

[dependencies]
dependent = 15.0
direct = 10.0
indirect = 5.0

[debounce]
delay_ms = 300

[output]
default_format = "terminal"
"#;
