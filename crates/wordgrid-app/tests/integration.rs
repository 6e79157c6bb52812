//! End-to-end flows across search, detail, and layout.

use std::cell::RefCell;
use std::collections::HashMap;
use wordgrid_app::{
    AppConfig, DictionaryClient, FilterDelegate, FilterStyle, HomeModel, KeyboardObserver,
    LoadingOverlay, RecentSearches, Response, SearchError, Transport, TransportError, WordDetail,
};
use wordgrid_core::Rect;
use wordgrid_layout::Surface;

/// Serves canned bodies keyed by URL; anything else is a 404.
#[derive(Default)]
struct FakeService {
    routes: HashMap<String, &'static str>,
    requests: RefCell<Vec<String>>,
}

impl FakeService {
    fn with(mut self, url: &str, body: &'static str) -> Self {
        self.routes.insert(url.to_string(), body);
        self
    }
}

impl Transport for FakeService {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(match self.routes.get(url) {
            Some(body) => Response::new(200, *body),
            None => Response::new(404, r#"{"title": "No Definitions Found"}"#),
        })
    }
}

const BANK: &str = r#"[{
    "word": "bank",
    "phonetic": "/bæŋk/",
    "meanings": [
        {"partOfSpeech": "noun", "definitions": [
            {"definition": "An institution where one can place money.", "example": "I need to go to the bank."},
            {"definition": "The edge of a river."}
        ]},
        {"partOfSpeech": "verb", "definitions": [
            {"definition": "To deposit in a bank.", "example": "I bank at the credit union."}
        ]}
    ]
}]"#;

const BANK_SYNONYMS: &str = r#"[
    {"word": "shore", "score": 200},
    {"word": "depository", "score": 900},
    {"word": "camber"},
    {"word": "coast", "score": 150},
    {"word": "deposit", "score": 600},
    {"word": "trust", "score": 100}
]"#;

fn service() -> FakeService {
    FakeService::default()
        .with("https://api.dictionaryapi.dev/api/v2/entries/en/bank", BANK)
        .with("https://api.datamuse.com/words?rel_syn=bank", BANK_SYNONYMS)
}

struct Events(Vec<String>);

impl FilterDelegate for Events {
    fn on_filter_selected(&mut self, label: &str) {
        self.0.push(label.to_string());
    }

    fn on_filter_clear(&mut self) {
        self.0.push("<clear>".to_string());
    }
}

// ============================================================================
// Search flow
// ============================================================================

#[test]
fn test_search_then_detail() {
    let fake = service();
    let config = AppConfig::default();
    let client = DictionaryClient::new(&fake, &config);
    let mut home = HomeModel::new(client, RecentSearches::default(), LoadingOverlay::new());

    let entry = home.search("bank").unwrap();
    let mut detail = WordDetail::new(entry, config.max_synonyms);
    detail.load_synonyms(home.client()).unwrap();

    assert_eq!(detail.title(), "Bank");
    assert_eq!(detail.filters().labels(), ["Noun", "Verb"]);
    assert_eq!(detail.rows().len(), 3);
    assert_eq!(
        detail.synonyms(),
        ["depository", "deposit", "shore", "coast", "trust"]
    );
    assert_eq!(fake.requests.borrow().len(), 2);
}

#[test]
fn test_unknown_word_not_remembered() {
    let fake = service();
    let client = DictionaryClient::new(&fake, &AppConfig::default());
    let mut home = HomeModel::new(client, RecentSearches::default(), LoadingOverlay::new());

    assert_eq!(home.search("zzzz"), Err(SearchError::InvalidWord));
    assert_eq!(home.search(""), Err(SearchError::EmptyQuery));
    assert!(home.recent().is_empty());
    // empty queries never reach the network
    assert_eq!(fake.requests.borrow().len(), 1);
}

#[test]
fn test_recent_searches_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent.json");
    let fake = service();
    let config = AppConfig {
        storage_path: Some(path.clone()),
        ..AppConfig::default()
    };

    {
        let recent = RecentSearches::open(&path, config.recent_capacity).unwrap();
        let client = DictionaryClient::new(&fake, &config);
        let mut home = HomeModel::new(client, recent, LoadingOverlay::new());
        home.search("bank").unwrap();
        home.search("BANK").unwrap_err();
    }

    let recent = RecentSearches::open(&path, config.recent_capacity).unwrap();
    assert_eq!(recent.iter().collect::<Vec<_>>(), ["bank"]);
}

// ============================================================================
// Detail screen
// ============================================================================

#[test]
fn test_filter_selection_drives_rows_and_grid() {
    let fake = service();
    let client = DictionaryClient::new(&fake, &AppConfig::default());
    let entry = client.lookup("bank").unwrap().remove(0);
    let mut detail = WordDetail::new(entry, 5);
    let style = FilterStyle::default();
    let mut events = Events(Vec::new());

    detail.toggle_filter(1, &mut events);
    let rows = detail.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].number_label(), "1 - ");
    assert_eq!(rows[0].part_of_speech, "Verb");

    let mut surface = Surface::new(detail.build_grid(&style).unwrap());
    surface.resize(Rect::new(0.0, 0.0, 375.0, 812.0));
    let chips = surface.root().nested(2).unwrap();
    assert!(!chips.state(0).unwrap().collapsed);

    detail.toggle_filter(1, &mut events);
    assert_eq!(events.0, ["Verb", "<clear>", "Verb"]);
    assert_eq!(detail.rows().len(), 3);

    let grid = surface.root_mut();
    detail.filters().sync_grid(grid.nested_mut(2).unwrap());
    surface.layout_if_needed();
    let chips = surface.root().nested(2).unwrap();
    assert!(chips.state(0).unwrap().collapsed);
}

// ============================================================================
// Host resizing
// ============================================================================

#[test]
fn test_keyboard_shrinks_home_screen() {
    let fake = service();
    let client = DictionaryClient::new(&fake, &AppConfig::default());
    let mut home = HomeModel::new(client, RecentSearches::default(), LoadingOverlay::new());
    home.search("bank").unwrap();

    let mut host = Rect::new(0.0, 0.0, 375.0, 667.0);
    let mut surface = Surface::new(home.build_grid().unwrap());
    surface.resize(host);
    let filler = surface.root().len() - 2;
    let tall = surface.root().frame(filler).unwrap();

    let mut keyboard = KeyboardObserver::new();
    assert!(keyboard.will_show(&mut host, 300.0, 667.0));
    assert!(surface.resize(host));
    let short = surface.root().frame(filler).unwrap();
    assert!((tall.height - short.height - 300.0).abs() < 1e-3);
    assert_eq!(short.y, tall.y);

    assert!(keyboard.will_hide(&mut host, 667.0));
    surface.resize(host);
    assert_eq!(surface.root().frame(filler), Some(tall));
    assert_eq!(surface.passes(), 3);
}

#[test]
fn test_overlay_visible_only_during_request() {
    struct Watching<'a> {
        inner: &'a FakeService,
        overlay: LoadingOverlay,
        seen: RefCell<Vec<bool>>,
    }

    impl Transport for Watching<'_> {
        fn get(&self, url: &str) -> Result<Response, TransportError> {
            self.seen.borrow_mut().push(self.overlay.is_visible());
            self.inner.get(url)
        }
    }

    let fake = service();
    let overlay = LoadingOverlay::new();
    let watching = Watching {
        inner: &fake,
        overlay: overlay.clone(),
        seen: RefCell::new(Vec::new()),
    };
    let client = DictionaryClient::new(&watching, &AppConfig::default());
    let mut home = HomeModel::new(client, RecentSearches::default(), overlay.clone());

    home.search("bank").unwrap();
    home.search("nothing").unwrap_err();
    assert_eq!(*watching.seen.borrow(), [true, true]);
    assert!(!overlay.is_visible());
}
