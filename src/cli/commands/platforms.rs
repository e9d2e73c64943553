//! `scipio platforms`

use crate::error::Result;
use crate::options::Sdk;

/// Prints every SDK with its display name, setting and filter tag.
pub fn execute() -> Result<i32> {
    println!(
        "{:<20} {:<20} {:<18} {}",
        "SDK", "DISPLAY NAME", "SETTING", "PLATFORM FILTER"
    );

    let mut sdks = Sdk::ALL;
    sdks.sort();
    for sdk in sdks {
        println!(
            "{:<20} {:<20} {:<18} {}",
            sdk.identifier(),
            sdk.display_name(),
            sdk.setting_value(),
            sdk.platform_filter_value()
        );
    }

    Ok(0)
}
