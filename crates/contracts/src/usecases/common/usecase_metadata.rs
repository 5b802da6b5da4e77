/// UseCase metadata for identification and documentation
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "document_upload")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// Backend endpoint the UseCase talks to
    fn endpoint() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u501_document_upload"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl UseCaseMetadata for Echo {
        fn usecase_index() -> &'static str {
            "u999"
        }
        fn usecase_name() -> &'static str {
            "echo"
        }
        fn display_name() -> &'static str {
            "回声"
        }
        fn endpoint() -> &'static str {
            "/api/echo/"
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Echo::full_name(), "u999_echo");
        assert_eq!(Echo::description(), "");
    }
}
