//! Pieces shared by every crate in the workspace: log setup and the small
//! response types that are not owned by any single resource.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn log_format_parses_known_names() {
        use utils::logging::LogFormat;
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("Compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("pretty-please".parse::<LogFormat>().is_err());
    }
}
