//! Integration tests for event fan-out to game observers.
//!
//! Observers join a game's room on the `RoomManager`, and the application
//! handlers publish through it exactly as the server wires them.

use std::sync::Arc;

use tokio::sync::mpsc;

use code_breaker::adapters::websocket::{ClientId, RoomManager, ServerMessage};
use code_breaker::adapters::InMemorySessionRegistry;
use code_breaker::application::{
    CreateGameHandler, RequestHintCommand, RequestHintHandler, ResetGameCommand,
    ResetGameHandler, SetSecretCodeCommand, SetSecretCodeHandler, StartGuessingCommand,
    StartGuessingHandler, SubmitGuessCommand, SubmitGuessHandler,
};
use code_breaker::domain::foundation::GameCode;
use code_breaker::domain::game::{GameEvent, GamePhase, GameSettings};
use code_breaker::ports::{GameBroadcaster, SessionRegistry};

struct Fixture {
    rooms: Arc<RoomManager>,
    registry: Arc<dyn SessionRegistry>,
    broadcaster: Arc<dyn GameBroadcaster>,
}

impl Fixture {
    fn new() -> Self {
        Self::with_capacity(128)
    }

    fn with_capacity(observer_queue_capacity: usize) -> Self {
        let rooms = Arc::new(RoomManager::new(observer_queue_capacity));
        Self {
            broadcaster: rooms.clone(),
            rooms,
            registry: Arc::new(InMemorySessionRegistry::with_seed(5)),
        }
    }

    /// A game already in GUESSING with the given secret.
    async fn guessing_game(&self, secret: &[i64]) -> GameCode {
        let code = CreateGameHandler::new(self.registry.clone(), GameSettings::default())
            .handle()
            .await
            .code;
        SetSecretCodeHandler::new(self.registry.clone(), self.broadcaster.clone())
            .handle(SetSecretCodeCommand {
                code,
                secret_code: secret.to_vec(),
            })
            .await
            .unwrap();
        StartGuessingHandler::new(self.registry.clone(), self.broadcaster.clone())
            .handle(StartGuessingCommand { code })
            .await
            .unwrap();
        code
    }

    fn guesses(&self) -> SubmitGuessHandler {
        SubmitGuessHandler::new(self.registry.clone(), self.broadcaster.clone())
    }
}

fn drain(rx: &mut mpsc::Receiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn every_observer_receives_each_guess_exactly_once() {
    let fixture = Fixture::new();
    let code = fixture.guessing_game(&[1, 2, 3, 4]).await;

    let mut observers = Vec::new();
    for _ in 0..4 {
        observers.push(fixture.rooms.join(&code, ClientId::new()).await);
    }

    fixture
        .guesses()
        .handle(SubmitGuessCommand {
            code,
            guess: vec![1, 2, 4, 3],
        })
        .await
        .unwrap();

    for rx in observers.iter_mut() {
        let events = drain(rx);
        assert_eq!(events.len(), 1);
        match &events[0] {
            GameEvent::GuessSubmitted { guess, phase, .. } => {
                assert_eq!(guess.id, 1);
                assert_eq!(guess.well_placed, 2);
                assert_eq!(guess.misplaced, 2);
                assert_eq!(*phase, GamePhase::Guessing);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}

#[tokio::test]
async fn unsubscribed_observer_receives_nothing() {
    let fixture = Fixture::new();
    let code = fixture.guessing_game(&[1, 2, 3, 4]).await;

    let mut staying = fixture.rooms.join(&code, ClientId::new()).await;
    let leaving_id = ClientId::new();
    let mut leaving = fixture.rooms.join(&code, leaving_id.clone()).await;
    fixture.rooms.leave(&code, &leaving_id).await;

    fixture
        .guesses()
        .handle(SubmitGuessCommand {
            code,
            guess: vec![0, 0, 0, 0],
        })
        .await
        .unwrap();

    assert_eq!(drain(&mut staying).len(), 1);
    assert_eq!(leaving.recv().await, None);
}

#[tokio::test]
async fn lagging_observer_is_disconnected_instead_of_skipping_events() {
    let fixture = Fixture::with_capacity(2);
    let code = fixture.guessing_game(&[1, 2, 3, 4]).await;

    let mut lagging = fixture.rooms.join(&code, ClientId::new()).await;
    let mut keeping_up = fixture.rooms.join(&code, ClientId::new()).await;

    let mut received = Vec::new();
    for _ in 0..3 {
        fixture
            .guesses()
            .handle(SubmitGuessCommand {
                code,
                guess: vec![0, 0, 0, 0],
            })
            .await
            .unwrap();
        received.extend(drain(&mut keeping_up));
    }

    assert_eq!(received.len(), 3);
    assert_eq!(fixture.rooms.client_count(&code).await, 1);

    // Everything the lagging observer did get is a gap-free prefix, then the
    // queue closes so its connection ends.
    let mut prefix = Vec::new();
    while let Some(event) = lagging.recv().await {
        prefix.push(event);
    }
    assert_eq!(prefix, received[..2].to_vec());
}

#[tokio::test]
async fn observers_of_other_games_are_not_notified() {
    let fixture = Fixture::new();
    let watched = fixture.guessing_game(&[1, 2, 3, 4]).await;
    let other = fixture.guessing_game(&[5, 6, 7, 8]).await;

    let mut rx = fixture.rooms.join(&watched, ClientId::new()).await;

    fixture
        .guesses()
        .handle(SubmitGuessCommand {
            code: other,
            guess: vec![5, 6, 7, 8],
        })
        .await
        .unwrap();

    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn events_arrive_in_mutation_order() {
    let fixture = Fixture::new();
    let code = fixture.guessing_game(&[2, 2, 2, 2]).await;
    let mut rx = fixture.rooms.join(&code, ClientId::new()).await;

    let guesses = fixture.guesses();
    guesses
        .handle(SubmitGuessCommand {
            code,
            guess: vec![1, 1, 1, 1],
        })
        .await
        .unwrap();
    RequestHintHandler::new(fixture.registry.clone(), fixture.broadcaster.clone())
        .handle(RequestHintCommand { code })
        .await
        .unwrap();
    guesses
        .handle(SubmitGuessCommand {
            code,
            guess: vec![2, 2, 2, 2],
        })
        .await
        .unwrap();
    ResetGameHandler::new(fixture.registry.clone(), fixture.broadcaster.clone())
        .handle(ResetGameCommand { code })
        .await
        .unwrap();

    let types: Vec<&str> = drain(&mut rx).iter().map(GameEvent::event_type).collect();
    assert_eq!(
        types,
        vec!["guess_submitted", "hint_used", "guess_submitted", "game_reset"]
    );
}

#[tokio::test]
async fn rejected_commands_publish_nothing() {
    let fixture = Fixture::new();
    let code = fixture.guessing_game(&[1, 2, 3, 4]).await;
    let mut rx = fixture.rooms.join(&code, ClientId::new()).await;

    let invalid = fixture
        .guesses()
        .handle(SubmitGuessCommand {
            code,
            guess: vec![1, 2, 3],
        })
        .await;
    let wrong_phase = SetSecretCodeHandler::new(fixture.registry.clone(), fixture.broadcaster.clone())
        .handle(SetSecretCodeCommand {
            code,
            secret_code: vec![1, 2, 3, 4],
        })
        .await;

    assert!(invalid.is_err());
    assert!(wrong_phase.is_err());
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn concurrent_guesses_reach_observer_in_id_order() {
    let fixture = Fixture::new();
    let code = fixture.guessing_game(&[9, 8, 7, 6]).await;
    let mut rx = fixture.rooms.join(&code, ClientId::new()).await;
    let guesses = Arc::new(fixture.guesses());

    let mut tasks = Vec::new();
    for _ in 0..6 {
        let guesses = guesses.clone();
        tasks.push(tokio::spawn(async move {
            guesses
                .handle(SubmitGuessCommand {
                    code,
                    guess: vec![0, 1, 2, 3],
                })
                .await
                .unwrap()
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let ids: Vec<u32> = drain(&mut rx)
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::GuessSubmitted { guess, .. } => Some(guess.id),
            _ => None,
        })
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn guess_event_wire_format_has_no_secret() {
    let message = ServerMessage::from(GameEvent::GuessingStarted {
        phase: GamePhase::Guessing,
    });
    let json = serde_json::to_value(message).unwrap();

    assert_eq!(json["type"], "guessing_started");
    assert_eq!(json["phase"], "GUESSING");
    assert!(json.get("secretCode").is_none());
}
