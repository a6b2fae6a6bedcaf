use super::*;

const FIVE_WORDS: &str = "a b c d e";

fn engine_30x2(text: &'static str) -> PlayerEngine<'static> {
    let mut engine = PlayerEngine::new(PlayerConfig {
        samples_per_minute: 30,
        words_per_sample: 2,
    });
    engine.load(text);
    engine
}

#[test]
fn plays_through_document_and_finishes() {
    let mut engine = engine_30x2(FIVE_WORDS);
    assert_eq!(engine.word_total(), 5);

    engine.play(0).unwrap();
    assert_eq!(engine.status(), PlayerStatus::Playing);

    // interval = 60000 / (30 * 2) = 1000 ms
    assert_eq!(engine.tick(999), TickResult::NoChunk);

    assert_eq!(engine.tick(1_000), TickResult::ChunkEmitted);
    assert_eq!(engine.chunk(), "a b");
    assert_eq!(engine.current_index(), 2);

    assert_eq!(engine.tick(2_000), TickResult::ChunkEmitted);
    assert_eq!(engine.chunk(), "c d");
    assert_eq!(engine.current_index(), 4);

    // Final chunk is clipped and the player returns to idle.
    assert_eq!(engine.tick(3_000), TickResult::Finished);
    assert_eq!(engine.chunk(), "e");
    assert_eq!(engine.current_index(), 5);
    assert_eq!(engine.status(), PlayerStatus::Idle);

    assert_eq!(engine.tick(4_000), TickResult::NoChunk);
}

#[test]
fn play_requires_a_playable_document() {
    let mut engine = PlayerEngine::default();
    assert_eq!(engine.play(0), Err(PlayerError::NoDocumentLoaded));

    engine.load("   \n\t ");
    assert_eq!(engine.play(0), Err(PlayerError::NoDocumentLoaded));
    assert_eq!(engine.word_total(), 0);
}

#[test]
fn pause_retains_position_and_resume_continues() {
    let mut engine = engine_30x2(FIVE_WORDS);
    engine.play(0).unwrap();
    assert_eq!(engine.tick(1_000), TickResult::ChunkEmitted);

    engine.pause();
    assert_eq!(engine.status(), PlayerStatus::Paused);
    assert_eq!(engine.current_index(), 2);
    assert_eq!(engine.tick(10_000), TickResult::NoChunk);

    engine.play(10_000).unwrap();
    assert_eq!(engine.tick(11_000), TickResult::ChunkEmitted);
    assert_eq!(engine.chunk(), "c d");
}

#[test]
fn stop_resets_to_idle_from_any_state() {
    let mut engine = engine_30x2(FIVE_WORDS);

    engine.play(0).unwrap();
    engine.tick(1_000);
    engine.stop();
    assert_eq!(engine.status(), PlayerStatus::Idle);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.chunk(), "");

    engine.play(0).unwrap();
    engine.pause();
    engine.stop();
    assert_eq!(engine.status(), PlayerStatus::Idle);
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn seek_emits_a_peek_chunk_without_changing_status() {
    let mut engine = engine_30x2(FIVE_WORDS);

    engine.seek(4).unwrap();
    assert_eq!(engine.current_index(), 4);
    assert_eq!(engine.chunk(), "e");
    assert_eq!(engine.status(), PlayerStatus::Idle);

    engine.play(0).unwrap();
    engine.pause();
    engine.seek(1).unwrap();
    assert_eq!(engine.chunk(), "b c");
    assert_eq!(engine.status(), PlayerStatus::Paused);
}

#[test]
fn seek_rejects_targets_outside_the_document() {
    let mut engine = engine_30x2(FIVE_WORDS);
    engine.seek(2).unwrap();

    assert_eq!(engine.seek(5), Err(PlayerError::InvalidSeekTarget));
    assert_eq!(engine.current_index(), 2);
    assert_eq!(engine.chunk(), "c d");

    let mut empty = PlayerEngine::default();
    assert_eq!(empty.seek(0), Err(PlayerError::InvalidSeekTarget));
}

#[test]
fn seek_is_rejected_while_playing() {
    let mut engine = engine_30x2(FIVE_WORDS);
    engine.play(0).unwrap();
    engine.tick(1_000);

    assert_eq!(engine.seek(0), Err(PlayerError::InvalidSeekTarget));
    assert_eq!(engine.current_index(), 2);
    assert_eq!(engine.status(), PlayerStatus::Playing);
}

#[test]
fn rate_change_while_playing_rearms_without_losing_position() {
    let mut engine = PlayerEngine::new(PlayerConfig {
        samples_per_minute: 60,
        words_per_sample: 1,
    });
    engine.load("uno dos tres");

    engine.play(0).unwrap();
    assert_eq!(engine.tick(1_000), TickResult::ChunkEmitted);
    assert_eq!(engine.chunk(), "uno");

    // 600 spm -> 100 ms interval; the deadline restarts from the change.
    engine.set_samples_per_minute(600, 1_100);
    assert_eq!(engine.current_index(), 1);
    assert_eq!(engine.tick(1_199), TickResult::NoChunk);
    assert_eq!(engine.tick(1_200), TickResult::ChunkEmitted);
    assert_eq!(engine.chunk(), "dos");
}

#[test]
fn out_of_range_rates_are_clamped_not_rejected() {
    let mut engine = PlayerEngine::new(PlayerConfig {
        samples_per_minute: 0,
        words_per_sample: 0,
    });
    assert_eq!(engine.samples_per_minute(), 1);
    assert_eq!(engine.words_per_sample(), 1);

    engine.set_samples_per_minute(5_000, 0);
    engine.set_words_per_sample(99, 0);
    assert_eq!(engine.samples_per_minute(), 1_000);
    assert_eq!(engine.words_per_sample(), 30);
}

#[test]
fn play_after_finish_restarts_from_the_first_word() {
    let mut engine = engine_30x2("a b c");
    engine.play(0).unwrap();
    engine.tick(1_000);
    assert_eq!(engine.tick(2_000), TickResult::Finished);

    engine.play(2_000).unwrap();
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.tick(3_000), TickResult::ChunkEmitted);
    assert_eq!(engine.chunk(), "a b");
}

#[test]
fn load_replaces_the_document_in_any_state() {
    let mut engine = engine_30x2(FIVE_WORDS);
    engine.play(0).unwrap();
    engine.tick(1_000);

    engine.load("nuevo texto cargado");
    assert_eq!(engine.status(), PlayerStatus::Idle);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.word_total(), 3);
    assert_eq!(engine.chunk(), "");
}
