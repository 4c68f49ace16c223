//! Request builders for the tables the bot sends: per-team box scores and
//! conference standings, plus paging for long lists.
//!
//! Records here are already fetched and decoded by the caller; these
//! functions only reshape them into [`RenderRequest`]s.

use serde::{Deserialize, Serialize};

use crate::model::{RenderRequest, TableSection};

/// Box-score images are at least this wide.
pub const BOX_SCORE_MIN_WIDTH: u32 = 720;
/// Standings images are at least this wide.
pub const STANDINGS_MIN_WIDTH: u32 = 370;

pub const PLAYER_HEADER: [&str; 6] = ["球員", "位置", "上場時間", "得分", "籃板", "助攻"];
pub const STANDINGS_HEADER: [&str; 4] = ["排名", "球隊", "勝負", "勝差"];

const NOT_STARTED: &str = "未開賽";

// ═══════════════════════════════════════════════════════════════════════
// Box scores
// ═══════════════════════════════════════════════════════════════════════

/// One player's line in a box score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub minutes: u32,
    pub seconds: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
}

impl PlayerLine {
    /// Players with no minutes did not appear in the game.
    pub fn played(&self) -> bool {
        self.minutes > 0
    }

    fn row(&self) -> Vec<String> {
        vec![
            format!("{}-{}", self.first_name, self.last_name),
            self.position.clone(),
            format!("{:02}:{:02}", self.minutes, self.seconds),
            self.points.to_string(),
            self.rebounds.to_string(),
            self.assists.to_string(),
        ]
    }
}

/// A team's side of a box score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBox {
    pub name: String,
    pub players: Vec<PlayerLine>,
}

/// Both teams of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBox {
    /// Tip-off time, already formatted in the viewer's zone
    pub tip_off: String,
    pub home: TeamBox,
    pub away: TeamBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl GameBox {
    fn title(&self) -> String {
        format!("{}  {} VS {}", self.tip_off, self.home.name, self.away.name)
    }

    fn team(&self, side: Side) -> &TeamBox {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn section(&self, side: Side) -> TableSection {
        let team = self.team(side);
        let mut rows: Vec<Vec<String>> = team
            .players
            .iter()
            .filter(|p| p.played())
            .map(PlayerLine::row)
            .collect();
        if rows.is_empty() {
            return TableSection::default().with_subtitle(NOT_STARTED);
        }
        rows.insert(0, PLAYER_HEADER.iter().map(|h| h.to_string()).collect());
        let label = match side {
            Side::Home => "主",
            Side::Away => "客",
        };
        TableSection::new(rows).with_subtitle(format!("{label} - {}", team.name))
    }
}

/// One team's box score under the game title.
pub fn box_score_request(game: &GameBox, side: Side) -> RenderRequest {
    RenderRequest::new(game.title())
        .with_section(game.section(side))
        .with_min_width(BOX_SCORE_MIN_WIDTH)
}

/// Both teams' box scores in one image, home first.
pub fn game_box_request(game: &GameBox) -> RenderRequest {
    RenderRequest::new(game.title())
        .with_section(game.section(Side::Home))
        .with_section(game.section(Side::Away))
        .with_min_width(BOX_SCORE_MIN_WIDTH)
}

// ═══════════════════════════════════════════════════════════════════════
// Standings
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    pub fn name(self) -> &'static str {
        match self {
            Conference::Eastern => "Eastern",
            Conference::Western => "Western",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Conference::Eastern => "東區戰績",
            Conference::Western => "西區戰績",
        }
    }

    fn matches(self, conference: &str) -> bool {
        self.name().eq_ignore_ascii_case(conference)
    }
}

/// A team's row in the conference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub name: String,
    pub conference: String,
    pub conf_rank: u32,
    pub wins: u32,
    pub losses: u32,
    pub games_behind: f64,
}

/// Conference standings sorted by conference rank.
pub fn standings_request(teams: &[TeamStanding], conference: Conference) -> RenderRequest {
    let mut members: Vec<&TeamStanding> = teams
        .iter()
        .filter(|t| conference.matches(&t.conference))
        .collect();
    members.sort_by_key(|t| t.conf_rank);

    let mut rows = vec![STANDINGS_HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>()];
    rows.extend(members.into_iter().map(|t| {
        vec![
            format!("{:02}", t.conf_rank),
            t.name.clone(),
            format!("{:2} - {:2}", t.wins, t.losses),
            format!("{:.1}", t.games_behind),
        ]
    }));

    RenderRequest::new(conference.title())
        .with_section(TableSection::new(rows))
        .with_min_width(STANDINGS_MIN_WIDTH)
}

// ═══════════════════════════════════════════════════════════════════════
// Paging
// ═══════════════════════════════════════════════════════════════════════

/// A window of rows. `page` is 1-based and always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
}

/// Select page `page` (1-based) of `page_size` rows.
///
/// Pages outside `1..=total_pages` fall back to page 1. A `page_size` of 0
/// puts everything on one page. An empty input is one empty page.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    if page_size == 0 || rows.is_empty() {
        return Page {
            items: rows,
            page: 1,
            total_pages: 1,
        };
    }

    let total_pages = rows.len().div_ceil(page_size);
    let page = if (1..=total_pages).contains(&page) { page } else { 1 };
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    Page {
        items: &rows[start..end],
        page,
        total_pages,
    }
}
