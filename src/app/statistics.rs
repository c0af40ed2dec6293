//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{UpdateStats, WarningType};

/// Prints warning counts by category to the log.
pub fn print_update_statistics(stats: &UpdateStats) {
    let total_warnings = stats.total_warnings();
    if total_warnings == 0 {
        return;
    }

    info!("Warning Counts ({} total):", total_warnings);
    for warning_type in WarningType::iter() {
        let count = stats.get_warning_count(warning_type);
        if count > 0 {
            info!("   {}: {}", warning_type.as_str(), count);
        }
    }
}
