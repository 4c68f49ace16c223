//! Tests for the box-score and standings request builders.

use pretty_assertions::assert_eq;
use statboard::tables::{
    box_score_request, game_box_request, paginate, standings_request, Conference, GameBox,
    PlayerLine, Side, TeamBox, TeamStanding, BOX_SCORE_MIN_WIDTH, PLAYER_HEADER,
    STANDINGS_MIN_WIDTH,
};
use statboard::RenderRequest;

fn player(first: &str, last: &str, minutes: u32, seconds: u32) -> PlayerLine {
    PlayerLine {
        first_name: first.into(),
        last_name: last.into(),
        position: "G".into(),
        minutes,
        seconds,
        points: 12,
        rebounds: 3,
        assists: 4,
    }
}

fn game(home_players: Vec<PlayerLine>, away_players: Vec<PlayerLine>) -> GameBox {
    GameBox {
        tip_off: "03 月15 日 10:00".into(),
        home: TeamBox {
            name: "塞爾提克".into(),
            players: home_players,
        },
        away: TeamBox {
            name: "公鹿".into(),
            players: away_players,
        },
    }
}

fn team(name: &str, conference: &str, rank: u32, wins: u32, losses: u32, gb: f64) -> TeamStanding {
    TeamStanding {
        name: name.into(),
        conference: conference.into(),
        conf_rank: rank,
        wins,
        losses,
        games_behind: gb,
    }
}

#[test]
fn box_score_lists_players_who_played() {
    let game = game(
        vec![player("傑森", "塔圖姆", 38, 5), player("板凳", "球員", 0, 0)],
        vec![],
    );
    let request = box_score_request(&game, Side::Home);

    assert_eq!(request.title.as_deref(), Some("03 月15 日 10:00  塞爾提克 VS 公鹿"));
    assert_eq!(request.min_width, Some(BOX_SCORE_MIN_WIDTH));
    let section = &request.sections[0];
    assert_eq!(section.subtitle.as_deref(), Some("主 - 塞爾提克"));
    assert_eq!(section.rows.len(), 2);
    assert_eq!(section.rows[0], PLAYER_HEADER.map(String::from).to_vec());
    assert_eq!(
        section.rows[1],
        vec!["傑森-塔圖姆", "G", "38:05", "12", "3", "4"]
    );
}

#[test]
fn box_score_before_tip_off_is_marked_not_started() {
    let game = game(vec![player("傑森", "塔圖姆", 38, 5)], vec![player("字母", "哥", 0, 0)]);
    let request = box_score_request(&game, Side::Away);

    let section = &request.sections[0];
    assert_eq!(section.subtitle.as_deref(), Some("未開賽"));
    assert!(section.rows.is_empty());
    assert!(!request.is_blank(), "title still renders");
}

#[test]
fn game_box_has_home_then_away() {
    let game = game(vec![player("傑森", "塔圖姆", 38, 5)], vec![player("字母", "哥", 35, 0)]);
    let request = game_box_request(&game);

    let subtitles: Vec<_> = request.sections.iter().map(|s| s.subtitle.as_deref()).collect();
    assert_eq!(subtitles, vec![Some("主 - 塞爾提克"), Some("客 - 公鹿")]);
}

#[test]
fn standings_filter_and_sort_by_rank() {
    let teams = vec![
        team("尼克", "Eastern", 2, 50, 32, 14.0),
        team("金塊", "Western", 1, 57, 25, 0.0),
        team("塞爾提克", "eastern", 1, 64, 18, 0.0),
        team("公鹿", "EASTERN", 3, 49, 33, 15.0),
    ];
    let request = standings_request(&teams, Conference::Eastern);

    assert_eq!(request.title.as_deref(), Some("東區戰績"));
    assert_eq!(request.min_width, Some(STANDINGS_MIN_WIDTH));
    let rows = &request.sections[0].rows;
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1], vec!["01", "塞爾提克", "64 - 18", "0.0"]);
    assert_eq!(rows[2], vec!["02", "尼克", "50 - 32", "14.0"]);
    assert_eq!(rows[3][1], "公鹿");
}

#[test]
fn standings_pad_single_digit_records() {
    let teams = vec![team("馬刺", "Western", 15, 7, 30, 29.5)];
    let request = standings_request(&teams, Conference::Western);
    assert_eq!(request.title.as_deref(), Some("西區戰績"));
    assert_eq!(request.sections[0].rows[1], vec!["15", "馬刺", " 7 - 30", "29.5"]);
}

#[test]
fn builders_round_trip_through_json() {
    let request = standings_request(&[team("熱火", "Eastern", 8, 46, 36, 18.0)], Conference::Eastern);
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(RenderRequest::from_json(&json).unwrap(), request);
}

#[test]
fn paging_a_game_list() {
    let games: Vec<String> = (1..=12).map(|i| format!("#{i}")).collect();
    let first = paginate(&games, 1, 10);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_pages, 2);

    let second = paginate(&games, 2, 10);
    assert_eq!(second.items, &games[10..]);

    let fallback = paginate(&games, 7, 10);
    assert_eq!(fallback.page, 1);
    assert_eq!(fallback.items, first.items);
}
