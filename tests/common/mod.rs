//! Shared fixtures for the integration tests.

#![allow(dead_code)]

pub const SIMPLE_VALID: &str = include_str!("../fixtures/simple_valid.xml");
pub const QUALIFIED_MATCH: &str = include_str!("../fixtures/qualified_match.xml");
pub const SIMPLE_INVALID_CHECKSUM: &str = include_str!("../fixtures/simple_invalid_checksum.xml");
pub const EXPIRED: &str = include_str!("../fixtures/expired.xml");

/// Render `pairs` in the eVatR wire shape.
pub fn payload(pairs: &[(&str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<params>\n");
    for (key, value) in pairs {
        xml.push_str(&format!(
            "<param>\n<value><array><data>\n<value><string>{key}</string></value>\n\
             <value><string>{value}</string></value>\n</data></array></value>\n</param>\n"
        ));
    }
    xml.push_str("</params>\n");
    xml
}

/// The mandatory fields of every response, with the given error code.
pub fn core_pairs(error_code: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("UstId_1", "DE115235681"),
        ("ErrorCode", error_code),
        ("UstId_2", "CZ00177041"),
        ("Datum", "06.02.2023"),
        ("Uhrzeit", "19:16:24"),
    ]
}
