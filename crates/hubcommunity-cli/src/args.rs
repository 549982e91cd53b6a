//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hubcommunity_core::{EventFilterOptions, EventSortOption};

/// Browse Hub Community events and communities, online or from the local cache
#[derive(Parser, Debug)]
#[command(name = "hubcommunity")]
#[command(version, about, long_about = None)]
#[command(after_help = "Set RUST_LOG=debug to see cache hits and requests on stderr.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List events (cached when available)
    Events {
        #[command(flatten)]
        query: EventQuery,
    },

    /// List communities
    Communities,

    /// Events whose title, location, tag or community matches a term
    Search {
        /// Case-insensitive search term
        term: String,

        #[command(flatten)]
        query: EventQuery,
    },

    /// Event statistics
    Stats,

    /// Unique tags across events
    Tags,

    /// Event statistics and community count side by side
    Summary,

    /// Fetch fresh events and communities and overwrite the cache
    Refresh,

    /// Remove both cached snapshots
    Clear,

    /// Show the saved configuration, or update it with the given values
    Config {
        /// GraphQL endpoint to query
        #[arg(long)]
        endpoint: Option<String>,

        /// Directory holding the cached snapshots
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
}

/// Sorting and filtering shared by the event listings
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    /// Sort order: title-asc, title-desc, communities-asc, communities-desc,
    /// talks-asc or talks-desc
    #[arg(long, default_value_t)]
    pub sort: EventSortOption,

    /// Keep events with this tag (repeatable)
    #[arg(long = "tag", value_name = "VALUE")]
    pub tags: Vec<String>,

    /// Keep events linked to this community (repeatable)
    #[arg(long = "community", value_name = "NAME")]
    pub communities: Vec<String>,

    /// Only events with at least one talk
    #[arg(long, conflicts_with = "no_talks")]
    pub has_talks: bool,

    /// Only events without talks
    #[arg(long)]
    pub no_talks: bool,

    /// Only events with at least one image
    #[arg(long, conflicts_with = "no_images")]
    pub has_images: bool,

    /// Only events without images
    #[arg(long)]
    pub no_images: bool,
}

fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl EventQuery {
    pub fn filter(&self, search_term: Option<&str>) -> EventFilterOptions {
        let mut filter = EventFilterOptions {
            search_term: search_term.map(str::to_string),
            has_talks: flag_pair(self.has_talks, self.no_talks),
            has_images: flag_pair(self.has_images, self.no_images),
            ..EventFilterOptions::default()
        };
        if !self.tags.is_empty() {
            filter = filter.with_tags(self.tags.iter().cloned());
        }
        if !self.communities.is_empty() {
            filter = filter.with_communities(self.communities.iter().cloned());
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("hubcommunity").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_events_with_options() {
        let cli = parse(&[
            "events", "--sort", "talks-desc", "--tag", "Swift", "--tag", "iOS", "--no-images",
        ])
        .unwrap();

        let Command::Events { query } = cli.command else {
            panic!("expected events command");
        };
        assert_eq!(query.sort, EventSortOption::TalkCountDescending);

        let filter = query.filter(None);
        assert_eq!(filter.tags, Some(vec!["Swift".to_string(), "iOS".to_string()]));
        assert_eq!(filter.has_images, Some(false));
        assert_eq!(filter.has_talks, None);
        assert_eq!(filter.communities, None);
    }

    #[test]
    fn test_events_defaults() {
        let cli = parse(&["events"]).unwrap();
        let Command::Events { query } = cli.command else {
            panic!("expected events command");
        };
        assert_eq!(query.sort, EventSortOption::TitleAscending);
        assert!(query.filter(None).is_empty());
    }

    #[test]
    fn test_search_sets_term() {
        let cli = parse(&["search", "rust", "--community", "Rust BR", "--has-talks"]).unwrap();
        let Command::Search { term, query } = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(term, "rust");

        let filter = query.filter(Some(term.as_str()));
        assert_eq!(filter.search_term.as_deref(), Some("rust"));
        assert_eq!(filter.communities, Some(vec!["Rust BR".to_string()]));
        assert_eq!(filter.has_talks, Some(true));
    }

    #[test]
    fn test_config_values() {
        let cli = parse(&["config", "--endpoint", "http://localhost:4000/graphql"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Config {
                endpoint: Some("http://localhost:4000/graphql".to_string()),
                cache_dir: None,
            }
        );
    }

    #[test]
    fn test_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["search"]).is_err());
        assert!(parse(&["launch"]).is_err());
        assert!(parse(&["events", "--sort", "date"]).is_err());
        assert!(parse(&["events", "--has-talks", "--no-talks"]).is_err());
    }

    #[test]
    fn test_event_options_rejected_elsewhere() {
        assert!(parse(&["stats", "--sort", "title-asc"]).is_err());
        assert!(parse(&["communities", "--tag", "Web"]).is_err());
        assert!(parse(&["refresh", "--no-images"]).is_err());
        assert!(parse(&["summary", "--community", "GDG SP"]).is_err());
    }
}
