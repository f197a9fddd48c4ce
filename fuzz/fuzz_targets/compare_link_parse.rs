#![no_main]

use holiday_compare::{format_compare_ids, parse_compare_ids, DEFAULT_MAX_COMPARE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let ids = parse_compare_ids(&raw, DEFAULT_MAX_COMPARE);
    assert!(ids.len() <= DEFAULT_MAX_COMPARE);
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(',')));
    assert_eq!(parse_compare_ids(&format_compare_ids(&ids), DEFAULT_MAX_COMPARE), ids);
});
