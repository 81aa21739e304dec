//! Behavioral tests for the list view pipeline.

use workers_business::{Employee, ListViewEngine, PAGE_SIZE, PageStep, SortKey, SortOrder};

const FIRST_NAMES: [&str; 23] = [
    "Walter", "anna", "Bob", "Andrew", "Xena", "Diana", "Carl", "Frank", "Hannah", "Greta",
    "Ivan", "Julia", "Ken", "Liam", "Mona", "Nora", "Oscar", "Pia", "Quinn", "Rosa", "Sam",
    "Tina", "Uma",
];

fn roster() -> Vec<Employee> {
    FIRST_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Employee::named(name, &format!("Last{i:02}"))
                .with_email(&format!("{}@example.com", name.to_lowercase()))
        })
        .collect()
}

fn first_names(engine: &ListViewEngine) -> Vec<String> {
    engine
        .compute_visible_page()
        .records
        .iter()
        .map(|e| e.field(SortKey::FirstName).to_owned())
        .collect()
}

mod default_view {
    use super::*;

    #[test]
    fn test_first_page_is_alphabetical_top_ten() {
        let engine = ListViewEngine::with_records(roster());
        let page = engine.compute_visible_page();

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.filtered_count, 23);
        assert_eq!(
            first_names(&engine),
            vec![
                "Andrew", "anna", "Bob", "Carl", "Diana", "Frank", "Greta", "Hannah", "Ivan",
                "Julia"
            ]
        );
    }

    #[test]
    fn test_pages_cover_every_record_once() {
        let mut engine = ListViewEngine::with_records(roster());
        let mut seen = Vec::new();

        loop {
            seen.extend(first_names(&engine));
            if !engine.can_go_next() {
                break;
            }
            engine.set_page(PageStep::Next);
        }

        assert_eq!(engine.state().current_page, 3);
        assert_eq!(seen.len(), 23);
        let mut sorted = seen.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 23);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for count in [0usize, 1, 9, 10, 11, 20, 21] {
            let records = (0..count)
                .map(|i| Employee::named(&format!("N{i:03}"), "X"))
                .collect();
            let engine = ListViewEngine::with_records(records);
            assert_eq!(
                engine.compute_visible_page().total_pages,
                count.div_ceil(PAGE_SIZE),
                "count = {count}"
            );
        }
    }
}

mod search {
    use super::*;

    #[test]
    fn test_search_an_keeps_matching_first_names_and_resets_page() {
        let mut engine = ListViewEngine::with_records(roster());
        engine.set_page(PageStep::Next);

        engine.set_search_text("an");

        assert_eq!(engine.state().current_page, 1);
        let names = first_names(&engine);
        assert_eq!(
            names,
            vec!["Andrew", "anna", "Diana", "Frank", "Hannah", "Ivan"]
        );
        assert!(!names.contains(&"Bob".to_owned()));
        assert!(
            names
                .iter()
                .all(|n| n.to_lowercase().contains("an"))
        );
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let mut engine = ListViewEngine::with_records(roster());
        engine.set_search_text("zzz");
        assert_eq!(engine.compute_visible_page().filtered_count, 0);

        engine.set_search_text("");
        assert_eq!(engine.compute_visible_page().filtered_count, 23);
    }

    #[test]
    fn test_no_match_shows_single_empty_page() {
        let mut engine = ListViewEngine::with_records(roster());
        engine.set_search_text("qqq");

        let page = engine.compute_visible_page();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.displayed_total_pages(), 1);
        assert!(!engine.can_go_next());
        assert!(!engine.can_go_prev());
    }
}

mod sorting {
    use super::*;

    #[test]
    fn test_toggling_same_key_twice_returns_to_ascending() {
        let mut engine = ListViewEngine::with_records(roster());
        engine.set_search_text("an");
        let before = first_names(&engine);

        engine.set_sort(SortKey::FirstName);
        assert_eq!(engine.state().sort_order, SortOrder::Descending);
        let mut reversed = first_names(&engine);
        reversed.reverse();
        assert_eq!(reversed, before);

        engine.set_sort(SortKey::FirstName);
        assert_eq!(engine.state().sort_order, SortOrder::Ascending);
        assert_eq!(first_names(&engine), before);
    }

    #[test]
    fn test_sort_by_email_uses_email_values() {
        let mut engine = ListViewEngine::with_records(vec![
            Employee::named("Anna", "A").with_email("zoe@example.com"),
            Employee::named("Bob", "B").with_email("adam@example.com"),
        ]);
        engine.set_sort(SortKey::Email);
        assert_eq!(first_names(&engine), vec!["Bob", "Anna"]);
    }

    #[test]
    fn test_sort_change_keeps_page() {
        let mut engine = ListViewEngine::with_records(roster());
        engine.set_page(PageStep::Next);
        engine.set_sort(SortKey::LastName);
        assert_eq!(engine.state().current_page, 2);
        assert_eq!(engine.compute_visible_page().records.len(), 10);
    }

    #[test]
    fn test_equal_keys_keep_fetch_order() {
        let records: Vec<Employee> = (0..12)
            .map(|i| {
                Employee::named(&format!("P{i:02}"), "Same").with_location("Oslo", "Norway")
            })
            .collect();
        let mut engine = ListViewEngine::with_records(records);
        engine.set_sort(SortKey::City);

        let mut all = first_names(&engine);
        engine.set_page(PageStep::Next);
        all.extend(first_names(&engine));

        let expected: Vec<String> = (0..12).map(|i| format!("P{i:02}")).collect();
        assert_eq!(all, expected);
    }
}

mod paging {
    use super::*;

    #[test]
    fn test_next_past_last_page_yields_empty_page() {
        let mut engine = ListViewEngine::with_records(roster());
        engine.set_page(PageStep::Next);
        engine.set_page(PageStep::Next);
        assert!(!engine.can_go_next());

        engine.set_page(PageStep::Next);
        let page = engine.compute_visible_page();
        assert_eq!(engine.state().current_page, 4);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_prev_returns_to_previous_slice() {
        let mut engine = ListViewEngine::with_records(roster());
        let first = first_names(&engine);
        engine.set_page(PageStep::Next);
        engine.set_page(PageStep::Prev);
        assert_eq!(first_names(&engine), first);
        assert!(!engine.can_go_prev());
    }
}
