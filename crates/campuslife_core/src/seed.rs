//! Built-in catalog: the event listing and the default club/room rows used to
//! seed an empty store.

use crate::model::club::Club;
use crate::model::event::Event;
use crate::model::room::Room;

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    title: &str,
    category: &str,
    date: &str,
    time: &str,
    location: &str,
    description: &str,
    tags: &[&str],
) -> Event {
    Event {
        id,
        title: title.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
    }
}

/// Returns the fixed event listing in display order.
pub fn default_events() -> Vec<Event> {
    vec![
        event(
            1,
            "AI & Data Science Meetup",
            "Tech",
            "2025-12-03",
            "17:30",
            "Innovation Lab A201",
            "Lightning talks from students building projects with AI and data tooling.",
            &["workshop", "networking", "engineering"],
        ),
        event(
            2,
            "Sustainability on Campus Panel",
            "Community",
            "2025-12-05",
            "14:00",
            "Auditorium West",
            "Hear from faculty and students working on green initiatives across campus.",
            &["panel", "environment", "policy"],
        ),
        event(
            3,
            "Winter Music Night",
            "Arts",
            "2025-12-08",
            "19:00",
            "Student Union Hall",
            "Performances from the campus choir, band, and independent artists.",
            &["performance", "music"],
        ),
        event(
            4,
            "Career Bootcamp: CV & Interview Clinic",
            "Careers",
            "2025-12-10",
            "10:00",
            "Careers Centre C101",
            "One\u{2011}to\u{2011}one coaching and workshops to get you job\u{2011}search ready.",
            &["career", "coaching", "skills"],
        ),
    ]
}

/// Clubs inserted when the `clubs` collection is empty.
pub fn default_clubs() -> Vec<Club> {
    vec![
        Club::new(
            "Developer Society",
            "Technology",
            "Weekly coding meetups, hackathons, and open\u{2011}source collaborations.",
            "devsoc@campus.edu",
        )
        .with_tags(["coding", "projects", "workshops"]),
        Club::new(
            "Outdoor Adventure Club",
            "Recreation",
            "Hikes, climbing, and weekend trips for all experience levels.",
            "adventure@campus.edu",
        )
        .with_tags(["hiking", "outdoors", "community"]),
        Club::new(
            "Film & Media Society",
            "Arts",
            "Screenings, discussions, and student\u{2011}led film productions.",
            "film@campus.edu",
        )
        .with_tags(["cinema", "creative", "production"]),
        Club::new(
            "Entrepreneurs Guild",
            "Business",
            "Pitch nights, founder talks, and startup coaching.",
            "startup@campus.edu",
        )
        .with_tags(["startups", "networking"]),
    ]
}

/// Rooms inserted when the `rooms` collection is empty.
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new("Quiet Study Room Q1", "Library North", 24, "Quiet")
            .with_equipment(["Power outlets", "Reading lamps"]),
        Room::new("Collaboration Studio C3", "Innovation Hub", 10, "Group")
            .with_equipment(["Screen", "Whiteboard", "HDMI"]),
        Room::new("Focus Pod F2", "Main Library", 4, "Silent")
            .with_equipment(["Noise\u{2011}reduction", "USB\u{2011}C docking"]),
        Room::new("Makerspace Lab M1", "Engineering Block", 16, "Lab")
            .with_equipment(["3D printers", "Soldering stations"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::{default_clubs, default_events, default_rooms};
    use std::collections::HashSet;

    #[test]
    fn event_ids_are_unique() {
        let events = default_events();
        let ids: HashSet<_> = events.iter().map(|event| event.id).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn default_rows_are_unsaved() {
        assert!(default_clubs().iter().all(|club| club.id.is_none()));
        assert!(default_rooms().iter().all(|room| room.id.is_none()));
    }
}
