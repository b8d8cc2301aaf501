use shoplist::core::action::{Action, Effect, update};
use shoplist::core::config::ResolvedConfig;
use shoplist::core::filter::filter;
use shoplist::core::nav::Route;
use shoplist::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

fn new_app() -> App {
    App::new(ResolvedConfig::default())
}

fn add_all(app: &mut App, texts: &[&str]) {
    for text in texts {
        update(app, Action::AddItem(text.to_string()));
    }
}

fn visible(app: &App) -> Vec<String> {
    app.visible_items()
        .iter()
        .map(|item| item.text().to_string())
        .collect()
}

// ============================================================================
// List and Search
// ============================================================================

#[test]
fn test_add_then_search() {
    let mut app = new_app();
    add_all(&mut app, &["Milk", "Eggs", "milk chocolate"]);

    update(&mut app, Action::QueryChanged("MILK".into()));
    assert_eq!(visible(&app), vec!["Milk", "milk chocolate"]);

    update(&mut app, Action::QueryChanged(String::new()));
    assert_eq!(visible(&app), vec!["Milk", "Eggs", "milk chocolate"]);
}

#[test]
fn test_item_added_while_filtering_appears_only_if_it_matches() {
    let mut app = new_app();
    add_all(&mut app, &["Milk"]);
    update(&mut app, Action::QueryChanged("milk".into()));

    add_all(&mut app, &["Bread", "Oat milk"]);
    assert_eq!(visible(&app), vec!["Milk", "Oat milk"]);
    assert_eq!(app.items().len(), 3);
}

#[test]
fn test_blank_adds_are_ignored_and_duplicates_kept() {
    let mut app = new_app();
    add_all(&mut app, &["", "   ", "\t", "Milk", "Milk", "  Bread  "]);
    assert_eq!(visible(&app), vec!["Milk", "Milk", "  Bread  "]);
}

#[test]
fn test_leading_space_in_query_matches_item_typed_with_spaces() {
    let mut app = new_app();
    add_all(&mut app, &["  Bread  ", "Butter"]);

    update(&mut app, Action::QueryChanged(" b".into()));
    assert_eq!(visible(&app), vec!["  Bread  "]);
    assert_eq!(app.visible_len(), 1);
}

#[test]
fn test_whitespace_query_shows_everything() {
    let mut app = new_app();
    add_all(&mut app, &["Milk", "Eggs"]);
    update(&mut app, Action::QueryChanged("   ".into()));
    assert_eq!(visible(&app).len(), 2);
}

#[test]
fn test_visible_items_are_a_subsequence_of_items() {
    let mut app = new_app();
    add_all(&mut app, &["apple", "banana", "grape", "pineapple", "Apple pie"]);

    for query in ["", "ap", "APP", "an", "zzz", "e"] {
        update(&mut app, Action::QueryChanged(query.into()));
        let all: Vec<&str> = app.items().iter().map(|i| i.text()).collect();
        let shown = visible(&app);

        let mut cursor = all.iter();
        for item in &shown {
            assert!(
                cursor.any(|candidate| candidate == item),
                "{item:?} out of order for query {query:?}"
            );
        }
        for item in &shown {
            assert!(item.to_lowercase().contains(&query.to_lowercase()));
        }
    }
}

#[test]
fn test_cached_view_agrees_with_filter() {
    let mut app = new_app();
    add_all(&mut app, &["Milk", "Eggs", "milk chocolate", "  Bread  "]);

    for query in ["", "MILK", " b", "eggs", "nothing"] {
        update(&mut app, Action::QueryChanged(query.into()));
        let expected: Vec<&str> = filter(app.items().as_slice(), query)
            .into_iter()
            .map(|item| item.text())
            .collect();
        assert_eq!(visible(&app), expected, "query {query:?}");
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_bottom_bar_round_trip() {
    let mut app = new_app();
    update(&mut app, Action::NavigateTo(Route::Profile));
    assert_eq!(app.nav.routes(), vec![Route::Home, Route::Profile]);

    update(&mut app, Action::NavigateTo(Route::Home));
    assert_eq!(app.nav.routes(), vec![Route::Home]);
    assert!(app.nav.shows_bottom_bar());
}

#[test]
fn test_drawer_to_settings_and_back() {
    let mut app = new_app();
    update(&mut app, Action::OpenDrawer);
    update(&mut app, Action::DrawerSelect(Route::Settings));

    assert_eq!(app.route(), Route::Settings);
    assert!(!app.nav.drawer_open());
    assert!(!app.nav.shows_bottom_bar());

    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert_eq!(app.route(), Route::Home);
    assert!(app.nav.shows_bottom_bar());
}

#[test]
fn test_back_closes_drawer_before_popping() {
    let mut app = new_app();
    update(&mut app, Action::NavigateTo(Route::Profile));
    update(&mut app, Action::OpenDrawer);

    update(&mut app, Action::Back);
    assert!(!app.nav.drawer_open());
    assert_eq!(app.route(), Route::Profile);

    update(&mut app, Action::Back);
    assert_eq!(app.route(), Route::Home);

    assert_eq!(update(&mut app, Action::Back), Effect::Quit);
}

#[test]
fn test_stack_never_grows_past_two() {
    let mut app = new_app();
    let sequence = [
        Route::Profile,
        Route::Settings,
        Route::Profile,
        Route::Profile,
        Route::Home,
        Route::Settings,
        Route::Settings,
    ];
    for route in sequence {
        update(&mut app, Action::NavigateTo(route));
        assert_eq!(app.route(), route);
        assert_eq!(app.nav.routes()[0], Route::Home);
        assert!(app.nav.depth() <= 2);
    }
}

#[test]
fn test_scroll_restored_when_switching_tabs() {
    let mut app = new_app();
    update(&mut app, Action::NavigateTo(Route::Profile));
    update(&mut app, Action::Scroll(4));

    update(&mut app, Action::NavigateTo(Route::Home));
    assert_eq!(app.nav.current_state().scroll, 0);

    update(&mut app, Action::NavigateTo(Route::Profile));
    assert_eq!(app.nav.current_state().scroll, 4);
}

#[test]
fn test_scroll_forgotten_after_back() {
    let mut app = new_app();
    update(&mut app, Action::NavigateTo(Route::Profile));
    update(&mut app, Action::Scroll(4));
    update(&mut app, Action::Back);

    update(&mut app, Action::NavigateTo(Route::Profile));
    assert_eq!(app.nav.current_state().scroll, 0);
}

#[test]
fn test_list_survives_navigation() {
    let mut app = new_app();
    add_all(&mut app, &["Milk", "Eggs"]);
    update(&mut app, Action::QueryChanged("egg".into()));

    update(&mut app, Action::NavigateTo(Route::Profile));
    update(&mut app, Action::DrawerSelect(Route::Settings));
    update(&mut app, Action::Back);

    assert_eq!(app.route(), Route::Home);
    assert_eq!(app.query(), "egg");
    assert_eq!(visible(&app), vec!["Eggs"]);
}

#[test]
fn test_title_follows_route() {
    let mut app = new_app();
    assert_eq!(app.title(), "ShoppingList");
    update(&mut app, Action::NavigateTo(Route::Profile));
    assert_eq!(app.title(), "Profile");
    update(&mut app, Action::DrawerSelect(Route::Settings));
    assert_eq!(app.title(), "Settings");
}
