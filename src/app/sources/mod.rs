pub mod file_source;
pub mod http_source;

pub use file_source::FileCatalogSource;
pub use http_source::HttpCatalogSource;

use crate::core::CatalogSource;
use crate::utils::validation::is_remote_location;
use std::time::Duration;

/// Picks the HTTP source for http(s) locations, the file source otherwise.
pub fn source_for(location: &str, timeout: Option<Duration>) -> Box<dyn CatalogSource> {
    if is_remote_location(location) {
        let source = HttpCatalogSource::new(location);
        match timeout {
            Some(timeout) => Box::new(source.with_timeout(timeout)),
            None => Box::new(source),
        }
    } else {
        Box::new(FileCatalogSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_location() {
        assert_eq!(source_for("components.json", None).describe(), "components.json");
        assert_eq!(
            source_for("https://parts.example.com/components.json", None).describe(),
            "https://parts.example.com/components.json"
        );
    }
}
