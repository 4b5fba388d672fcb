#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(catalogue) = jaarrekening::taxonomy::Catalogue::from_json(s) {
            for template in catalogue.row_templates() {
                let dims: Vec<&str> = template.open_dimensions.iter().map(String::as_str).collect();
                assert!(catalogue.row_template(&dims).is_some());
            }
        }
    }
});
