//! Fraction Duel
//!
//! Scripted console demo of the quiz engine: browses the catalog,
//! plays one seeded session end to end, then replays the seed to show
//! the question series is reproducible.

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fraction_duel::{
    COUNTDOWN_TICK_HZ, VERSION,
    catalog::{ActivityFilter, Catalog, Favorites, SearchQuery},
    core::rng::derive_session_seed,
    game::{
        round::Round,
        session::{GameConfig, GameSession},
        strategy::{Choice, Difficulty, Team},
        timer::CountdownTick,
    },
};

/// Activity the demo session plays.
const DEMO_ACTIVITY: &str = "math-fractions-compare-2";

/// Per-round countdown used by the demo session, in seconds.
const DEMO_TIMER_SECONDS: u32 = 20;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Fraction Duel v{}", VERSION);
    info!("Countdown Rate: {} Hz", COUNTDOWN_TICK_HZ);

    demo_catalog()?;
    demo_session()?;

    Ok(())
}

/// Browse the catalog the way the activity list view does.
fn demo_catalog() -> anyhow::Result<()> {
    info!("=== Catalog Demo ===");

    let catalog = Catalog::builtin();
    info!("Catalog: {} activities", catalog.len());

    let game = catalog
        .lookup(DEMO_ACTIVITY)
        .context("demo activity missing from catalog")?;
    info!("Activity: {} ({} min, {})", game.title, game.duration_min, game.group.label());
    info!("Objective: {}", game.objective);

    let mut favorites = Favorites::new();
    favorites.toggle(game.id);
    info!("Starred: {}", favorites.is_favorite(game.id));

    let filter = ActivityFilter {
        query: SearchQuery::from_text("fractions"),
        ..ActivityFilter::new()
    };
    let hits = filter.apply(catalog.all());
    info!("Search \"fractions\": {} activities", hits.len());
    for activity in &hits {
        info!("  {} [{}]", activity.title, activity.subject.label());
    }

    Ok(())
}

/// Play one seeded session with a fixed answer script, then replay the
/// seed and confirm the same questions come back.
fn demo_session() -> anyhow::Result<()> {
    info!("=== Starting Demo Session ===");

    let session_nonce = 7u64;
    let seed = derive_session_seed(DEMO_ACTIVITY, session_nonce);
    info!("Activity: {}", DEMO_ACTIVITY);

    let mut session = GameSession::new(demo_config(), seed)?;
    info!("Seed: {:#018x}", session.seed());
    session.start();

    let mut played: Vec<Round> = Vec::new();

    while !session.is_finished() {
        let index = session.round_index();
        let round = session
            .current_round()
            .context("active session must expose a round")?;
        played.push(round.clone());

        info!(
            "Round {}: {} vs {} [{}]",
            index + 1,
            round.a,
            round.b,
            round.strategy.label()
        );
        info!("  hint: {}", round.hint);

        let correct = round.correct;
        let team = if index % 2 == 0 { Team::A } else { Team::B };
        session.set_active_team(team);

        if index == 2 {
            // Let the countdown expire once, then show that a late
            // answer is ignored.
            info!("  (no answer from {})", team.label());
            for _ in 0..=DEMO_TIMER_SECONDS {
                if matches!(session.tick_second(), CountdownTick::Expired) {
                    break;
                }
            }
            if session.answer(Choice::A).is_none() {
                info!("  late answer ignored");
            }
        } else {
            // Answer wrong on round 4, right everywhere else.
            let choice = if index == 3 { wrong_choice(correct) } else { correct };
            session.answer(choice);
        }

        if let Some(feedback) = session.feedback() {
            info!(
                "  -> {} (score {}, streak {})",
                feedback.label(),
                session.score(),
                session.current_streak()
            );
        }
        if let Some(round) = session.current_round() {
            info!("  {}", round.explanation);
        }

        session.advance();
    }

    info!("=== Session Results ===");
    info!(
        "Score: {}/{} ({}%)",
        session.score(),
        session.total_answered(),
        session.accuracy()
    );
    info!("Best streak: {}", session.best_streak());
    match session.best_team() {
        Some((team, score)) => info!("Best team: {} with {}", team.label(), score),
        None => info!("Best team: tie"),
    }

    let summary = session.summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // Replay the same seed and compare the question series.
    info!("=== Verifying Determinism ===");
    let mut replay = GameSession::new(demo_config(), seed)?;
    replay.start();

    let mut replayed: Vec<Round> = Vec::new();
    while !replay.is_finished() {
        if let Some(round) = replay.current_round() {
            replayed.push(round.clone());
        }
        replay.answer(Choice::A);
        replay.advance();
    }

    if played == replayed {
        info!("DETERMINISM VERIFIED: same question series");
    } else {
        info!("DETERMINISM FAILURE: question series differ");
    }

    Ok(())
}

/// Demo configuration: a short timed team duel on hard difficulty.
fn demo_config() -> GameConfig {
    GameConfig {
        activity_id: DEMO_ACTIVITY.to_owned(),
        difficulty: Difficulty::Hard,
        round_count: 5,
        timer_seconds: DEMO_TIMER_SECONDS,
        teams_enabled: true,
    }
}

/// A choice guaranteed to miss.
fn wrong_choice(correct: Choice) -> Choice {
    if correct == Choice::A {
        Choice::B
    } else {
        Choice::A
    }
}
