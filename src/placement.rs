use crate::config::LayoutConfig;
use crate::model::AppEntry;
use crate::positions::PositionRecord;
use log::debug;

/// Assigns every app to a page slot. Saved positions win; apps without
/// one (or whose saved page no longer exists) fill the first page with
/// room, in input order. Apps that fit nowhere stay off the grid; they
/// remain reachable through the app drawer.
pub fn distribute(
    all_apps: &[AppEntry],
    positions: &[PositionRecord],
    config: &LayoutConfig,
) -> Vec<Vec<AppEntry>> {
    let num_pages = config.num_pages;
    let capacity = config.page_capacity();
    let mut pages: Vec<Vec<AppEntry>> = vec![Vec::new(); num_pages];

    let mut placed: Vec<(&AppEntry, &PositionRecord)> = Vec::new();
    let mut unplaced: Vec<&AppEntry> = Vec::new();
    for app in all_apps {
        match positions.iter().find(|p| p.app_id == app.id) {
            Some(record) if record.page < num_pages => placed.push((app, record)),
            // A record for a page that no longer exists counts as unplaced.
            _ => unplaced.push(app),
        }
    }

    // Collisions between saved slots resolve by input order; the later
    // entry shifts its neighbours down via the clamped insert.
    for (app, record) in placed {
        let page = &mut pages[record.page];
        let slot = record.slot.min(page.len());
        page.insert(slot, app.clone());
    }

    let mut current_page = 0;
    for app in unplaced {
        while current_page < num_pages && pages[current_page].len() >= capacity {
            current_page += 1;
        }
        if current_page < num_pages {
            pages[current_page].push(app.clone());
        } else {
            debug!("no page has room for {}, leaving it off the grid", app.id);
        }
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn apps(count: usize) -> Vec<AppEntry> {
        (0..count)
            .map(|i| AppEntry::new(format!("com.app.{i:02}"), format!("App {i:02}")))
            .collect()
    }

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn unsaved_apps_fill_pages_in_input_order() {
        let all = apps(45);
        let pages = distribute(&all, &[], &config());

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 20);
        assert_eq!(pages[1].len(), 20);
        assert_eq!(pages[2].len(), 5);
        assert_eq!(pages[0][0].id, "com.app.00");
        assert_eq!(pages[1][0].id, "com.app.20");
        assert_eq!(pages[2][4].id, "com.app.44");
    }

    #[test]
    fn each_app_appears_on_at_most_one_page() {
        let all = apps(30);
        let positions = vec![
            PositionRecord::new("com.app.03", 1, 0),
            PositionRecord::new("com.app.07", 2, 2),
        ];
        let pages = distribute(&all, &positions, &config());

        let mut seen = HashSet::new();
        for page in &pages {
            for app in page {
                assert!(seen.insert(app.id.clone()), "{} placed twice", app.id);
            }
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn no_page_exceeds_capacity() {
        let all = apps(80);
        let pages = distribute(&all, &[], &config());
        for page in &pages {
            assert!(page.len() <= config().page_capacity());
        }
    }

    #[test]
    fn overflow_apps_are_dropped_from_the_grid() {
        let all = apps(70);
        let pages = distribute(&all, &[], &config());
        let total: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn saved_position_places_app_on_its_page() {
        let all = apps(10);
        let positions = vec![PositionRecord::new("com.app.04", 2, 0)];
        let pages = distribute(&all, &positions, &config());

        assert_eq!(pages[2].len(), 1);
        assert_eq!(pages[2][0].id, "com.app.04");
        assert!(pages[0].iter().all(|app| app.id != "com.app.04"));
    }

    #[test]
    fn out_of_range_slot_is_clamped_to_end() {
        let all = apps(3);
        let positions = vec![PositionRecord::new("com.app.01", 1, 99)];
        let pages = distribute(&all, &positions, &config());
        assert_eq!(pages[1].len(), 1);
        assert_eq!(pages[1][0].id, "com.app.01");
    }

    #[test]
    fn stale_page_reference_means_unplaced() {
        let all = apps(3);
        let positions = vec![PositionRecord::new("com.app.01", 5, 0)];
        let pages = distribute(&all, &positions, &config());

        // Auto-filled onto page 0 with the others, original order kept.
        let ids: Vec<&str> = pages[0].iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["com.app.00", "com.app.01", "com.app.02"]);
        assert!(pages[1].is_empty());
    }

    #[test]
    fn colliding_slots_resolve_by_input_order() {
        let all = apps(2);
        let positions = vec![
            PositionRecord::new("com.app.00", 0, 0),
            PositionRecord::new("com.app.01", 0, 0),
        ];
        let pages = distribute(&all, &positions, &config());
        // Second claimant inserts at the shared slot and shifts the first.
        assert_eq!(pages[0][0].id, "com.app.01");
        assert_eq!(pages[0][1].id, "com.app.00");
    }
}
