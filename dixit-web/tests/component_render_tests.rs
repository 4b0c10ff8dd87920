use dixit_score::{MemoryStore, Player, ScoreBoard, ScoringRules};
use dixit_web::app::SharedBackend;
use dixit_web::components::score_board::{Props, ScoreBoardView, WinNotice};
use dixit_web::pages::dashboard::{self, DashboardPage};
use dixit_web::pages::not_found::NotFound;
use futures::executor::block_on;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

fn sample_board() -> ScoreBoard {
    ScoreBoard {
        winning_score: 10,
        players: vec![
            Player {
                id: 1,
                name: "Player 1".into(),
                scores: vec![5, 6],
            },
            Player {
                id: 2,
                name: "Player 2".into(),
                scores: vec![3, 4],
            },
        ],
        scoring_rules: ScoringRules::default(),
    }
}

fn render_view(props: Props) -> String {
    block_on(
        LocalServerRenderer::<ScoreBoardView>::with_props(props)
            .hydratable(false)
            .render(),
    )
}

fn view_props(board: ScoreBoard) -> Props {
    Props {
        notice: WinNotice::from_board(&board),
        board,
        status: None,
        on_add_score: Callback::noop(),
        on_award: Callback::noop(),
        on_rename: Callback::noop(),
        on_reset: Callback::noop(),
        on_rules: Callback::noop(),
        on_winning_score: Callback::noop(),
        on_dismiss_notice: Callback::noop(),
    }
}

#[test]
fn board_view_renders_players_and_totals() {
    let html = render_view(view_props(sample_board()));
    assert!(html.contains("Player 1"));
    assert!(html.contains("Player 2"));
    assert!(html.contains(">11<"));
    assert!(html.contains(">7<"));
    assert!(html.contains("reset-scores-btn"));
}

#[test]
fn board_view_shows_win_notice_for_winner_only() {
    let html = render_view(view_props(sample_board()));
    assert!(html.contains("modal-backdrop"));
    assert!(html.contains("Player 1 reached the winning score of 10 and won!"));
    assert!(!html.contains("Player 2 reached"));
    assert!(html.contains("totals__row--winner"));
}

#[test]
fn board_view_without_winner_skips_modal() {
    let html = render_view(view_props(ScoreBoard::default()));
    assert!(!html.contains("modal-backdrop"));
    assert!(html.contains("Player 4"));
}

#[test]
fn board_view_renders_status_line() {
    let mut props = view_props(ScoreBoard::default());
    props.status = Some(AttrValue::from("Scoring rules updated!"));
    let html = render_view(props);
    assert!(html.contains("Scoring rules updated!"));
}

#[test]
fn dashboard_waits_for_hydration() {
    let props = dashboard::Props {
        backend: SharedBackend::new(MemoryStore::new()),
    };
    let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render());
    assert!(html.contains("loading..."));
    assert!(!html.contains("reset-scores-btn"));
}

#[function_component(NotFoundHarness)]
fn not_found_harness() -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router {history}>
            <NotFound />
        </Router>
    }
}

#[test]
fn not_found_links_back_to_board() {
    let html = block_on(LocalServerRenderer::<NotFoundHarness>::new().render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("/dashboard"));
}

#[test]
fn shared_backend_equality_is_identity() {
    let a = SharedBackend::new(MemoryStore::new());
    let b = SharedBackend::new(MemoryStore::new());
    assert!(a == a.clone());
    assert!(a != b);
}
