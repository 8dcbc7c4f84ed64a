//! Subcommand implementations.

pub mod agents;
pub mod auth;
pub mod communities;
pub mod dashboard;
pub mod incidents;
pub mod missions;
pub mod reference;
pub mod users;

use clap::Args;
use serde::de::DeserializeOwned;

use vigil_core::models::PaginationParams;

/// Paging flags shared by list commands.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page
    #[arg(long, default_value_t = 15)]
    pub per_page: u32,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Print the raw JSON items instead of a summary line each
    #[arg(long)]
    pub json: bool,
}

impl PageArgs {
    pub fn params(&self) -> PaginationParams {
        PaginationParams {
            search: self.search.clone(),
            ..PaginationParams::page(self.page, self.per_page)
        }
    }
}

/// Parse a server wire name (`in_progress`, `approved`, ...) into its enum.
pub fn wire<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown value '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::models::{IncidentStatus, MissionStatus};

    #[test]
    fn wire_names_parse() {
        assert_eq!(
            wire::<MissionStatus>("in_progress").unwrap(),
            MissionStatus::InProgress
        );
        assert_eq!(
            wire::<IncidentStatus>("resolved").unwrap(),
            IncidentStatus::Resolved
        );
        assert!(wire::<MissionStatus>("done").is_err());
    }

    #[test]
    fn page_args_to_params() {
        let args = PageArgs {
            page: 3,
            per_page: 20,
            search: Some("koné".into()),
            json: false,
        };
        let params = args.params();
        assert_eq!(params.page, Some(3));
        assert_eq!(params.per_page, Some(20));
        assert_eq!(params.search.as_deref(), Some("koné"));
    }
}
