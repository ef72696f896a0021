#![no_main]

use libfuzzer_sys::fuzz_target;
use folder_launcher::shortcut::{LinkData, ShortcutInfo};
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Arbitrary file contents must either decode or return an error, never panic
    let Ok(mut file) = tempfile::Builder::new().suffix(".lnk").tempfile() else {
        return;
    };
    if file.write_all(data).is_err() {
        return;
    }
    if let Ok(link) = LinkData::read(file.path()) {
        let _info = ShortcutInfo::from_link(&link, file.path(), |_| Some("%NESTED%".to_string()));
    }
});
