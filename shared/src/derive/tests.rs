use super::*;
use crate::model::{GameType, PlayerRange};

fn game(id: &str, upvotes: u32, game_type: GameType, themes: &[&str]) -> Game {
    Game {
        id: id.to_string(),
        name: format!("Game {id}"),
        emoji: "🎲".to_string(),
        description: String::new(),
        age_rating: "12+".to_string(),
        game_type,
        player_count: PlayerRange { min: 2, max: 8 },
        duration: "Varies".to_string(),
        equipment: Vec::new(),
        themes: themes.iter().map(|t| t.to_string()).collect(),
        rules: String::new(),
        upvotes,
        downvotes: 0,
        contributor_name: "tester".to_string(),
        created_at: None,
        is_public: true,
    }
}

#[test]
fn upvote_index_never_diverges_from_list() {
    let games = vec![
        game("a", 5, GameType::Card, &[]),
        game("b", 0, GameType::Dice, &[]),
        game("c", 123, GameType::Party, &[]),
    ];
    let index = upvote_index(&games);
    assert_eq!(index.len(), games.len());
    for g in &games {
        assert_eq!(index[&g.id], g.upvotes);
    }
}

#[test]
fn game_of_the_week_is_none_only_when_empty() {
    assert!(game_of_the_week(&[]).is_none());
    let games = vec![game("a", 0, GameType::Card, &[])];
    assert_eq!(game_of_the_week(&games).unwrap().id, "a");
}

#[test]
fn game_of_the_week_takes_maximum() {
    let games = vec![
        game("a", 5, GameType::Card, &[]),
        game("b", 12, GameType::Dice, &[]),
        game("c", 7, GameType::Party, &[]),
    ];
    assert_eq!(game_of_the_week(&games).unwrap().id, "b");
}

#[test]
fn game_of_the_week_tie_keeps_earliest() {
    // 规范场景：A(5) B(9) C(9) -> 并列最高中靠前的 B
    let games = vec![
        game("a", 5, GameType::Card, &[]),
        game("b", 9, GameType::Card, &[]),
        game("c", 9, GameType::Party, &[]),
    ];
    assert_eq!(game_of_the_week(&games).unwrap().id, "b");
}

#[test]
fn saved_games_follow_list_order_not_saved_order() {
    let games = vec![
        game("a", 0, GameType::Card, &[]),
        game("b", 0, GameType::Dice, &[]),
        game("c", 0, GameType::Party, &[]),
    ];
    // 收藏顺序与列表顺序相反
    let saved_ids = vec!["c".to_string(), "a".to_string()];
    let saved: Vec<&str> = saved_games(&games, &saved_ids).iter().map(|g| g.id.as_str()).collect();
    assert_eq!(saved, vec!["a", "c"]);
}

#[test]
fn double_toggle_restores_prior_content_and_order() {
    let mut ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let before = ids.clone();

    assert!(toggle_id(&mut ids, "x"));
    assert_eq!(ids, vec!["a", "b", "c", "x"]);
    assert!(!toggle_id(&mut ids, "x"));
    assert_eq!(ids, before);
}

#[test]
fn toggle_on_empty_list_round_trips() {
    let mut ids = Vec::new();
    assert!(toggle_id(&mut ids, "g1"));
    assert_eq!(ids, vec!["g1"]);
    assert!(!toggle_id(&mut ids, "g1"));
    assert!(ids.is_empty());
}

#[test]
fn last_upvoted_game_handles_missing_ids() {
    let games = vec![game("a", 0, GameType::Card, &[])];
    assert!(last_upvoted_game(&games, None).is_none());
    assert!(last_upvoted_game(&games, Some("gone")).is_none());
    assert_eq!(last_upvoted_game(&games, Some("a")).unwrap().id, "a");
}

#[test]
fn suggestion_requires_a_seed() {
    let games = vec![
        game("a", 1, GameType::Card, &[]),
        game("b", 2, GameType::Card, &[]),
    ];
    assert!(suggested_game(&games, None).is_none());
}

#[test]
fn suggestion_excludes_seed_and_game_of_the_week() {
    // 规范场景：A(5,card) B(9,card) C(9,party)，seed=A。
    // 唯一的同类候选 B 是本周游戏，因此无推荐。
    let games = vec![
        game("a", 5, GameType::Card, &[]),
        game("b", 9, GameType::Card, &[]),
        game("c", 9, GameType::Party, &[]),
    ];
    assert!(suggested_game(&games, Some("a")).is_none());

    // 追加另一个 card 游戏后即出现推荐
    let mut games = games;
    games.push(game("d", 0, GameType::Card, &[]));
    assert_eq!(suggested_game(&games, Some("a")).unwrap().id, "d");
}

#[test]
fn suggestion_matches_on_shared_theme() {
    let games = vec![
        game("a", 5, GameType::Card, &["Bluffing", "Social"]),
        game("b", 9, GameType::Dice, &[]),
        game("c", 1, GameType::Party, &["Social"]),
    ];
    assert_eq!(suggested_game(&games, Some("a")).unwrap().id, "c");
}

#[test]
fn suggestion_takes_first_match_in_list_order() {
    let games = vec![
        game("a", 0, GameType::Card, &[]),
        game("b", 9, GameType::Dice, &[]),
        game("c", 1, GameType::Card, &[]),
        game("d", 2, GameType::Card, &[]),
    ];
    assert_eq!(suggested_game(&games, Some("a")).unwrap().id, "c");
}

#[test]
fn suggestion_never_equals_seed_or_week_winner() {
    let games = vec![
        game("a", 5, GameType::Party, &["Social"]),
        game("b", 9, GameType::Party, &["Social"]),
        game("c", 1, GameType::Party, &["Social"]),
    ];
    let seed = last_upvoted_game(&games, Some("a")).unwrap();
    let week = game_of_the_week(&games).unwrap();
    let suggested = suggested_game(&games, Some("a")).unwrap();
    assert_ne!(suggested.id, seed.id);
    assert_ne!(suggested.id, week.id);
    assert_eq!(suggested.id, "c");
}

#[test]
fn vote_direction_defaults_to_added() {
    let mut upvotes = HashMap::new();
    assert_eq!(next_vote_direction(&upvotes, "g1"), VoteDirection::Added);

    upvotes.insert("g1".to_string(), true);
    assert_eq!(next_vote_direction(&upvotes, "g1"), VoteDirection::Removed);

    // 显式为 false 等同未记录
    upvotes.insert("g1".to_string(), false);
    assert_eq!(next_vote_direction(&upvotes, "g1"), VoteDirection::Added);
}

#[test]
fn added_outcome_overwrites_count_and_records_seed() {
    let mut games = vec![game("a", 5, GameType::Card, &[]), game("b", 2, GameType::Dice, &[])];
    let mut upvotes = HashMap::new();
    let mut seed = None;

    // 服务端返回 7 而非本地的 5+1=6：以返回值整体覆盖
    let outcome = VoteOutcome {
        counts: VoteCounts { upvotes: 7, downvotes: 1 },
        direction: VoteDirection::Added,
    };
    let seed_changed = apply_vote_outcome(&mut games, &mut upvotes, &mut seed, "a", outcome);

    assert!(seed_changed);
    assert_eq!(games[0].upvotes, 7);
    assert_eq!(games[0].downvotes, 1);
    assert_eq!(games[1].upvotes, 2);
    assert_eq!(upvotes.get("a"), Some(&true));
    assert_eq!(seed.as_deref(), Some("a"));
}

#[test]
fn removed_outcome_leaves_seed_unchanged() {
    let mut games = vec![game("a", 5, GameType::Card, &[])];
    let mut upvotes = HashMap::from([("a".to_string(), true)]);
    let mut seed = Some("a".to_string());

    let outcome = VoteOutcome {
        counts: VoteCounts { upvotes: 4, downvotes: 0 },
        direction: VoteDirection::Removed,
    };
    let seed_changed = apply_vote_outcome(&mut games, &mut upvotes, &mut seed, "a", outcome);

    assert!(!seed_changed);
    assert_eq!(games[0].upvotes, 4);
    assert_eq!(upvotes.get("a"), Some(&false));
    // 撤回不清除推荐种子
    assert_eq!(seed.as_deref(), Some("a"));
}

#[test]
fn outcome_for_unknown_id_touches_no_listed_count() {
    let mut games = vec![game("a", 5, GameType::Card, &[])];
    let mut upvotes = HashMap::new();
    let mut seed = None;

    let outcome = VoteOutcome {
        counts: VoteCounts { upvotes: 9, downvotes: 0 },
        direction: VoteDirection::Added,
    };
    apply_vote_outcome(&mut games, &mut upvotes, &mut seed, "gone", outcome);

    assert_eq!(games[0].upvotes, 5);
    assert_eq!(upvotes.get("gone"), Some(&true));
    assert_eq!(seed.as_deref(), Some("gone"));
}

#[test]
fn toggle_round_trip_restores_direction_map() {
    let mut games = vec![game("a", 5, GameType::Card, &[])];
    let mut upvotes = HashMap::new();
    let mut seed = None;

    // 第一次切换：Added
    let first = next_vote_direction(&upvotes, "a");
    assert_eq!(first, VoteDirection::Added);
    apply_vote_outcome(
        &mut games,
        &mut upvotes,
        &mut seed,
        "a",
        VoteOutcome {
            counts: VoteCounts { upvotes: 6, downvotes: 0 },
            direction: first,
        },
    );

    // 第二次切换：Removed，方向映射回到未点赞
    let second = next_vote_direction(&upvotes, "a");
    assert_eq!(second, VoteDirection::Removed);
    apply_vote_outcome(
        &mut games,
        &mut upvotes,
        &mut seed,
        "a",
        VoteOutcome {
            counts: VoteCounts { upvotes: 5, downvotes: 0 },
            direction: second,
        },
    );

    assert_eq!(games[0].upvotes, 5);
    assert_eq!(next_vote_direction(&upvotes, "a"), VoteDirection::Added);
}

#[test]
fn remove_flag_mirrors_direction() {
    assert!(!VoteDirection::Added.remove_flag());
    assert!(VoteDirection::Removed.remove_flag());
    assert!(VoteDirection::Added.is_added());
    assert!(!VoteDirection::Removed.is_added());
}
