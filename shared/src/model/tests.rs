use super::*;

fn sample_record_json() -> &'static str {
    r#"{
        "id": "g-42",
        "name": "Werewolf",
        "description": "Social deduction in the dark",
        "age_rating": "12+",
        "game_type": "party",
        "player_count": { "min_players": 6, "max_players": 20 },
        "duration": "30-60 min",
        "equipment": [
            { "equipment_name": "Standard deck of cards" },
            { "equipment_name": "Timer" }
        ],
        "themes": [
            { "theme_name": "Social" },
            { "theme_name": "Bluffing" }
        ],
        "rules": "Villagers sleep. Werewolves wake.",
        "upvotes": 17,
        "downvotes": 2,
        "contributor": { "username": "nightowl" },
        "image_url": "🐺",
        "created_at": "2026-08-01T12:00:00Z"
    }"#
}

#[test]
fn record_deserializes_and_normalizes() {
    let record: GameRecord = serde_json::from_str(sample_record_json()).unwrap();
    let game = Game::from_record(record);

    assert_eq!(game.id, "g-42");
    assert_eq!(game.emoji, "🐺");
    assert_eq!(game.game_type, GameType::Party);
    assert_eq!(game.player_count, PlayerRange { min: 6, max: 20 });
    assert_eq!(game.equipment, vec!["Standard deck of cards", "Timer"]);
    assert_eq!(game.themes, vec!["Social", "Bluffing"]);
    assert_eq!(game.contributor_name, "nightowl");
    assert_eq!(game.upvotes, 17);
    assert!(game.is_public);
    assert!(game.created_at.is_some());
}

#[test]
fn missing_image_falls_back_to_placeholder() {
    let json = sample_record_json().replace(r#""image_url": "🐺","#, "");
    let record: GameRecord = serde_json::from_str(&json).unwrap();
    let game = Game::from_record(record);
    assert_eq!(game.emoji, FALLBACK_EMOJI);
}

#[test]
fn empty_image_falls_back_to_placeholder() {
    let json = sample_record_json().replace("🐺", "");
    let record: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(Game::from_record(record).emoji, FALLBACK_EMOJI);
}

#[test]
fn game_type_wire_format_is_lowercase() {
    assert_eq!(serde_json::to_string(&GameType::Drinking).unwrap(), r#""drinking""#);
    let parsed: GameType = serde_json::from_str(r#""strategy""#).unwrap();
    assert_eq!(parsed, GameType::Strategy);
}

#[test]
fn game_type_parse_matches_metadata_strings() {
    for t in GameType::ALL {
        assert_eq!(GameType::parse(t.as_str()), Some(t));
    }
    assert_eq!(GameType::parse("karaoke"), None);
}

#[test]
fn create_request_uses_wire_field_names() {
    let req = CreateGameRequest {
        name: "Spoons".into(),
        description: "Grab a spoon before everyone else".into(),
        age_rating: "7+".into(),
        game_type: GameType::Card,
        player_count: PlayerCount { min_players: 3, max_players: 8 },
        duration: "Varies".into(),
        equipment: vec![EquipmentEntry { equipment_name: "Standard deck of cards".into() }],
        themes: vec![ThemeEntry { theme_name: "Speed".into() }],
        rules: "Collect four of a kind".into(),
        image_url: "🥄".into(),
        is_public: true,
    };

    let value: serde_json::Value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["game_type"], "card");
    assert_eq!(value["age_rating"], "7+");
    assert_eq!(value["player_count"]["min_players"], 3);
    assert_eq!(value["player_count"]["max_players"], 8);
    assert_eq!(value["equipment"][0]["equipment_name"], "Standard deck of cards");
    assert_eq!(value["themes"][0]["theme_name"], "Speed");
    assert_eq!(value["is_public"], true);
}

#[test]
fn player_range_fits_is_inclusive() {
    let range = PlayerRange { min: 2, max: 6 };
    assert!(range.fits(2));
    assert!(range.fits(6));
    assert!(!range.fits(1));
    assert!(!range.fits(7));
}

#[test]
fn metadata_fallback_covers_every_game_type() {
    let meta = GameMetadata::fallback();
    for t in GameType::ALL {
        assert!(meta.game_types.contains(&t.as_str().to_string()));
    }
    assert!(!meta.equipment.is_empty());
    assert!(!meta.themes.is_empty());
}
