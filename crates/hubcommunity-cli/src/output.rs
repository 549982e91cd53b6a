//! Plain-text rendering of command results.

use std::fmt::Write;

use anyhow::Result;
use hubcommunity_core::utils::truncate_string;
use hubcommunity_core::{Community, Config, Event, EventsStatistics, Tag};

const TITLE_WIDTH: usize = 40;
const LOCATION_WIDTH: usize = 24;
const DESCRIPTION_WIDTH: usize = 50;
const COVER_WIDTH: usize = 30;

pub fn events_table(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<tw$}  {:<lw$}  {:>5}  {:>11}  Cover",
        "Title",
        "Location",
        "Talks",
        "Communities",
        tw = TITLE_WIDTH,
        lw = LOCATION_WIDTH
    );
    for event in events {
        let _ = writeln!(
            out,
            "{:<tw$}  {:<lw$}  {:>5}  {:>11}  {}",
            truncate_string(&event.title, TITLE_WIDTH),
            truncate_string(&event.location.title, LOCATION_WIDTH),
            event.talks.len(),
            event.communities.len(),
            event
                .cover_image()
                .map(|cover| truncate_string(cover, COVER_WIDTH))
                .unwrap_or_else(|| "-".to_string()),
            tw = TITLE_WIDTH,
            lw = LOCATION_WIDTH
        );
    }
    let _ = writeln!(out, "{} events", events.len());
    out
}

pub fn communities_table(communities: &[Community]) -> String {
    if communities.is_empty() {
        return "No communities found\n".to_string();
    }

    let mut out = String::new();
    for community in communities {
        let _ = writeln!(
            out,
            "{:<tw$}  {:>12}  {}",
            truncate_string(&community.title, TITLE_WIDTH),
            community.display_members(),
            community
                .short_description
                .as_deref()
                .map(|d| truncate_string(d, DESCRIPTION_WIDTH))
                .unwrap_or_default(),
            tw = TITLE_WIDTH
        );
    }
    out
}

pub fn statistics(stats: &EventsStatistics) -> String {
    let rows = [
        ("Events", stats.total_events.to_string()),
        ("Talks", stats.total_talks.to_string()),
        ("Community links", stats.total_communities.to_string()),
        ("Avg talks/event", format!("{:.2}", stats.average_talks_per_event())),
        ("Avg communities/event", format!("{:.2}", stats.average_communities_per_event())),
        ("Events with talks", format!("{:.1}%", stats.events_with_talks_percentage())),
        ("Events with images", format!("{:.1}%", stats.events_with_images_percentage())),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{:<24}{}", format!("{}:", label), value);
    }
    out
}

/// Effective settings, after environment and defaults are applied
pub fn config(config: &Config) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "Endpoint:   {}", config.endpoint());
    let _ = writeln!(out, "Cache dir:  {}", config.cache_dir()?.display());
    Ok(out)
}

pub fn tags(tags: &[Tag]) -> String {
    let mut out = String::new();
    for tag in tags {
        let _ = writeln!(out, "{}", tag.value);
    }
    out
}
