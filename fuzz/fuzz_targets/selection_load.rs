#![no_main]

use holiday_compare::{decode_persisted_ids, SelectionSet, DEFAULT_MAX_COMPARE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let Some(ids) = decode_persisted_ids(&raw) else {
        return;
    };
    let selection = SelectionSet::hydrate(DEFAULT_MAX_COMPARE, ids);
    assert!(selection.len() <= DEFAULT_MAX_COMPARE);
    for (index, id) in selection.ids().iter().enumerate() {
        assert!(!selection.ids()[..index].contains(id));
    }
});
