include!(concat!(env!("OUT_DIR"), "/catalog.rs"));

/// Names of all embedded catalog files
pub fn list_sources() -> Vec<&'static str> {
    SOURCES.iter().map(|(name, _)| *name).collect()
}

/// YAML text of one embedded catalog file
pub fn get_source(name: &str) -> Option<&'static str> {
    SOURCES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, content)| *content)
}
