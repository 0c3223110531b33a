//! Card markup for each record type.

use super::date::format_event_date;
use super::{Fragment, CLUBS_MOUNT, EVENTS_MOUNT, ROOMS_MOUNT};
use crate::escape::escape_html;
use crate::model::club::Club;
use crate::model::event::Event;
use crate::model::room::Room;
use crate::search::filter::Searchable;

/// A searchable record that renders as one card in a fixed mount point.
pub trait CardRecord: Searchable {
    /// Mount point the cards go into.
    const MOUNT: &'static str;
    /// Shown instead of cards when nothing matches.
    const EMPTY_MESSAGE: &'static str;

    fn render_card(&self) -> Fragment;
}

fn tag_row(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="{class}">{}</span>"#, escape_html(item)))
        .collect()
}

impl CardRecord for Event {
    const MOUNT: &'static str = EVENTS_MOUNT;
    const EMPTY_MESSAGE: &'static str = "No events match your search.";

    fn render_card(&self) -> Fragment {
        Fragment::card(format!(
            r#"<article class="card"><div class="card-header-row"><div><h3 class="card-title">{title}</h3><div class="card-meta"><span>{date} · {time}</span><span>•</span><span>{location}</span></div></div><span class="chip chip--primary">{category}</span></div><p class="card-body">{description}</p><div class="tag-row">{tags}</div></article>"#,
            title = escape_html(&self.title),
            date = escape_html(format_event_date(&self.date)),
            time = escape_html(&self.time),
            location = escape_html(&self.location),
            category = escape_html(&self.category),
            description = escape_html(&self.description),
            tags = tag_row(&self.tags, "tag"),
        ))
    }
}

impl CardRecord for Club {
    const MOUNT: &'static str = CLUBS_MOUNT;
    const EMPTY_MESSAGE: &'static str = "No clubs match your search.";

    fn render_card(&self) -> Fragment {
        Fragment::card(format!(
            r#"<article class="card"><div class="card-header-row"><div><h3 class="card-title">{name}</h3><div class="card-meta"><span class="chip chip--subtle">{category}</span></div></div></div><p class="card-body">{description}</p><div class="tag-row">{tags}</div><div class="card-meta"><span>Contact: {contact}</span></div></article>"#,
            name = escape_html(&self.name),
            category = escape_html(&self.category),
            description = escape_html(&self.description),
            tags = tag_row(&self.tags, "tag"),
            contact = escape_html(&self.contact),
        ))
    }
}

impl CardRecord for Room {
    const MOUNT: &'static str = ROOMS_MOUNT;
    const EMPTY_MESSAGE: &'static str = "No rooms match your search.";

    fn render_card(&self) -> Fragment {
        Fragment::card(format!(
            r#"<article class="card card--room"><div class="card-header-row"><div><h3 class="card-title">{name}</h3><div class="card-meta"><span>{building}</span><span>•</span><span>{capacity} seats</span></div></div><span class="chip chip--subtle">{kind}</span></div><div class="tag-row">{equipment}</div></article>"#,
            name = escape_html(&self.name),
            building = escape_html(&self.building),
            capacity = self.capacity,
            kind = escape_html(&self.kind),
            equipment = tag_row(&self.equipment, "tag tag--soft"),
        ))
    }
}
