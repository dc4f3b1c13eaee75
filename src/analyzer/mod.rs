// Analyzer module: one submodule per analysis plus the shared statistics.

pub mod stats;
pub mod trend;
pub mod volatility;
pub mod percentile;
pub mod yoy;
pub mod seasonal;
pub mod levels;
pub mod weekday;
pub mod moving_average;
pub mod summary;
pub mod price_analysis;

// Re-export the main Analyzer implementation for ease of use.
pub use price_analysis::{AnalysisInput, AnalysisReport, Analyzer, AnalyzerImpl};

pub use levels::{calculate_support_resistance, SupportResistanceResult};
pub use moving_average::{calculate_moving_averages, MovingAveragesResult};
pub use percentile::{analyze_percentile, PercentileResult};
pub use seasonal::{analyze_seasonal_patterns, analyze_seasonal_patterns_at, SeasonalResult};
pub use stats::calculate_sma;
pub use trend::{analyze_trend, TrendDirection, TrendResult};
pub use volatility::{analyze_volatility, VolatilityLevel, VolatilityResult};
pub use weekday::{analyze_day_of_week_patterns, DayOfWeekResult};
pub use yoy::{compare_yoy, YoYResult};
