use super::*;

fn filled_form() -> GameFormState {
    let form = GameFormState::new();
    form.name.set("Werewolf".to_string());
    form.description.set("Social deduction in a village".to_string());
    form.rules.set("Villagers sleep, wolves wake.".to_string());
    form.age_rating.set("12+".to_string());
    form.game_type.set("party".to_string());
    form.min_players.set(5);
    form.max_players.set(12);
    form.toggle_equipment("Standard deck of cards");
    form.toggle_theme("Bluffing");
    form
}

#[test]
fn empty_form_is_incomplete() {
    assert!(!GameFormState::new().is_complete());
}

#[test]
fn filled_form_is_complete_without_emoji_or_duration() {
    assert!(filled_form().is_complete());
}

#[test]
fn inverted_player_range_is_incomplete() {
    let form = filled_form();
    form.min_players.set(8);
    form.max_players.set(4);
    assert!(!form.is_complete());
}

#[test]
fn equipment_and_themes_are_both_required() {
    let form = filled_form();
    form.toggle_equipment("Standard deck of cards");
    assert!(!form.is_complete());

    let form = filled_form();
    form.toggle_theme("Bluffing");
    assert!(!form.is_complete());
}

#[test]
fn toggle_twice_removes_the_selection() {
    let form = GameFormState::new();
    form.toggle_theme("Luck");
    form.toggle_theme("Speed");
    form.toggle_theme("Luck");
    assert_eq!(form.themes.get_untracked(), vec!["Speed".to_string()]);
}

#[test]
fn to_request_applies_fallbacks() {
    let form = filled_form();
    let request = form.to_request();
    assert_eq!(request.image_url, FALLBACK_EMOJI);
    assert_eq!(request.duration, "Varies");
    assert_eq!(request.game_type, GameType::Party);
    assert!(request.is_public);
}

#[test]
fn to_request_keeps_provided_values() {
    let form = filled_form();
    form.emoji.set("🐺".to_string());
    form.duration.set("45 min".to_string());
    form.game_type.set("card".to_string());
    form.is_public.set(false);

    let request = form.to_request();
    assert_eq!(request.image_url, "🐺");
    assert_eq!(request.duration, "45 min");
    assert_eq!(request.game_type, GameType::Card);
    assert_eq!(request.player_count.min_players, 5);
    assert_eq!(request.player_count.max_players, 12);
    assert_eq!(request.equipment.len(), 1);
    assert_eq!(request.equipment[0].equipment_name, "Standard deck of cards");
    assert_eq!(request.themes[0].theme_name, "Bluffing");
    assert!(!request.is_public);
}

#[test]
fn unknown_game_type_falls_back_to_party() {
    let form = filled_form();
    form.game_type.set("mahjong".to_string());
    assert_eq!(form.to_request().game_type, GameType::Party);
}

#[test]
fn reset_restores_defaults() {
    let form = filled_form();
    form.emoji.set("🐺".to_string());
    form.reset();
    assert!(form.name.get_untracked().is_empty());
    assert!(form.equipment.get_untracked().is_empty());
    assert_eq!(form.min_players.get_untracked(), 2);
    assert_eq!(form.max_players.get_untracked(), 6);
    assert!(form.is_public.get_untracked());
    assert!(!form.is_complete());
}
