#![no_main]

use libfuzzer_sys::fuzz_target;
use folder_launcher::config::{StyleConfig, ThemeMode};

fuzz_target!(|data: &[u8]| {
    // Parse arbitrary JSON as a style file and resolve it; bad colours must
    // fall back to the palette rather than crash
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(style) = serde_json::from_str::<StyleConfig>(s) {
            let _light = style.resolve(ThemeMode::Light);
            let _dark = style.resolve(ThemeMode::Dark);
        }
    }
});
