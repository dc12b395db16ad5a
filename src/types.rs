//! Protobuf messages exchanged with the football data service.
//!
//! Optional scalars correspond to `google.protobuf.*Value` wrappers on the
//! wire, which prost maps to `Option<T>`.

use serde::Serialize;

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct Competition {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(bool, tag = "3")]
    pub is_cup: bool,
    #[prost(uint64, tag = "4")]
    pub country_id: u64,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CompetitionRequest {
    #[prost(uint64, repeated, tag = "1")]
    pub country_ids: Vec<u64>,
    #[prost(message, optional, tag = "2")]
    pub sort: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub is_cup: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct Season {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub competition: Option<Competition>,
    #[prost(bool, tag = "4")]
    pub is_current: bool,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct TeamSeasonsRequest {
    #[prost(uint64, tag = "1")]
    pub team_id: u64,
    #[prost(message, optional, tag = "2")]
    pub sort: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct TeamSeasonsResponse {
    #[prost(message, repeated, tag = "1")]
    pub seasons: Vec<Season>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct SeasonCompetitionRequest {
    #[prost(uint64, tag = "1")]
    pub competition_id: u64,
    #[prost(message, optional, tag = "2")]
    pub sort: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct Venue {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct Team {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub short_code: Option<String>,
    #[prost(uint64, tag = "4")]
    pub country_id: u64,
    #[prost(message, optional, tag = "5")]
    pub venue: Option<Venue>,
    #[prost(bool, tag = "6")]
    pub is_national_team: bool,
    #[prost(message, optional, tag = "7")]
    pub founded: Option<u64>,
    #[prost(message, optional, tag = "8")]
    pub logo: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct TeamRequest {
    #[prost(uint64, tag = "1")]
    pub team_id: u64,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct SeasonTeamsRequest {
    #[prost(uint64, tag = "1")]
    pub season_id: u64,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct Fixture {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(message, optional, tag = "2")]
    pub competition: Option<Competition>,
    #[prost(message, optional, tag = "3")]
    pub season: Option<Season>,
    #[prost(message, optional, tag = "4")]
    pub home_team: Option<Team>,
    #[prost(message, optional, tag = "5")]
    pub away_team: Option<Team>,
    #[prost(message, optional, tag = "6")]
    pub venue: Option<Venue>,
    #[prost(message, optional, tag = "7")]
    pub referee_id: Option<u64>,
    /// Kick-off as a unix timestamp.
    #[prost(int64, tag = "8")]
    pub date_time: i64,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct FixtureRequest {
    #[prost(uint64, tag = "1")]
    pub fixture_id: u64,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct FixtureSearchRequest {
    #[prost(uint64, repeated, tag = "1")]
    pub season_ids: Vec<u64>,
    /// RFC 3339 lower bound on kick-off.
    #[prost(message, optional, tag = "2")]
    pub date_after: Option<String>,
    /// RFC 3339 upper bound on kick-off.
    #[prost(message, optional, tag = "3")]
    pub date_before: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub limit: Option<u64>,
    #[prost(message, optional, tag = "5")]
    pub sort: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct MatchStats {
    #[prost(message, optional, tag = "1")]
    pub home_score: Option<u32>,
    #[prost(message, optional, tag = "2")]
    pub away_score: Option<u32>,
    #[prost(message, optional, tag = "3")]
    pub home_pen_score: Option<u32>,
    #[prost(message, optional, tag = "4")]
    pub away_pen_score: Option<u32>,
    #[prost(message, optional, tag = "5")]
    pub winning_team: Option<u64>,
}

/// Outcome of a played fixture.
#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct MatchResult {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(message, optional, tag = "2")]
    pub home_team: Option<Team>,
    #[prost(message, optional, tag = "3")]
    pub away_team: Option<Team>,
    #[prost(message, optional, tag = "4")]
    pub season: Option<Season>,
    #[prost(int64, tag = "5")]
    pub date_time: i64,
    #[prost(message, optional, tag = "6")]
    pub stats: Option<MatchStats>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct ResultRequest {
    #[prost(uint64, tag = "1")]
    pub fixture_id: u64,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct TeamResultRequest {
    #[prost(uint64, tag = "1")]
    pub team_id: u64,
    #[prost(message, optional, tag = "2")]
    pub limit: Option<u64>,
    /// RFC 3339 upper bound on kick-off.
    #[prost(message, optional, tag = "3")]
    pub date_before: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub date_after: Option<String>,
    #[prost(message, optional, tag = "5")]
    pub venue: Option<String>,
    #[prost(message, optional, tag = "6")]
    pub sort: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct Player {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    pub country_id: u64,
    #[prost(string, tag = "3")]
    pub common_name: String,
    #[prost(string, tag = "4")]
    pub display_name: String,
    #[prost(string, tag = "5")]
    pub first_name: String,
    #[prost(string, tag = "6")]
    pub last_name: String,
    #[prost(string, tag = "7")]
    pub name: String,
    #[prost(string, tag = "8")]
    pub nationality: String,
    #[prost(string, tag = "9")]
    pub image_path: String,
    #[prost(string, tag = "10")]
    pub gender: String,
    #[prost(string, tag = "11")]
    pub date_of_birth: String,
    #[prost(uint32, tag = "12")]
    pub position_id: u32,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct PlayerRequest {
    #[prost(uint64, tag = "1")]
    pub player_id: u64,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct PlayerStats {
    #[prost(uint64, tag = "1")]
    pub player_id: u64,
    #[prost(string, tag = "2")]
    pub position: String,
    #[prost(message, optional, tag = "3")]
    pub formation_position: Option<u32>,
    #[prost(bool, tag = "4")]
    pub is_substitute: bool,
    #[prost(message, optional, tag = "5")]
    pub shots_total: Option<u32>,
    #[prost(message, optional, tag = "6")]
    pub shots_on_goal: Option<u32>,
    #[prost(message, optional, tag = "7")]
    pub goals_scored: Option<u32>,
    #[prost(message, optional, tag = "8")]
    pub goals_conceded: Option<u32>,
    #[prost(message, optional, tag = "9")]
    pub assists: Option<u32>,
    #[prost(message, optional, tag = "10")]
    pub minutes_played: Option<u32>,
    #[prost(message, optional, tag = "11")]
    pub yellow_cards: Option<u32>,
    #[prost(message, optional, tag = "12")]
    pub red_cards: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct PlayerStatsResponse {
    #[prost(message, repeated, tag = "1")]
    pub home_team: Vec<PlayerStats>,
    #[prost(message, repeated, tag = "2")]
    pub away_team: Vec<PlayerStats>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct TeamStat {
    #[prost(uint64, tag = "1")]
    pub fixture_id: u64,
    #[prost(string, tag = "2")]
    pub stat: String,
    #[prost(message, optional, tag = "3")]
    pub value: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct TeamStatRequest {
    #[prost(string, tag = "1")]
    pub stat: String,
    #[prost(uint64, tag = "2")]
    pub team_id: u64,
    #[prost(message, optional, tag = "3")]
    pub limit: Option<u64>,
    #[prost(message, optional, tag = "4")]
    pub date_before: Option<String>,
    #[prost(message, optional, tag = "5")]
    pub date_after: Option<String>,
    /// Return the opponent's value for each fixture instead of the team's.
    #[prost(message, optional, tag = "6")]
    pub opponent: Option<bool>,
    #[prost(message, optional, tag = "7")]
    pub venue: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct GoalEvent {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    pub team_id: u64,
    #[prost(uint64, tag = "3")]
    pub player_id: u64,
    #[prost(message, optional, tag = "4")]
    pub player_assist_id: Option<u64>,
    #[prost(uint32, tag = "5")]
    pub minute: u32,
    #[prost(string, tag = "6")]
    pub score: String,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct CardEvent {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    pub team_id: u64,
    #[prost(string, tag = "3")]
    pub r#type: String,
    #[prost(uint64, tag = "4")]
    pub player_id: u64,
    #[prost(uint32, tag = "5")]
    pub minute: u32,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct SubstitutionEvent {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    pub team_id: u64,
    #[prost(uint64, tag = "3")]
    pub player_in_id: u64,
    #[prost(uint64, tag = "4")]
    pub player_out_id: u64,
    #[prost(uint32, tag = "5")]
    pub minute: u32,
    #[prost(message, optional, tag = "6")]
    pub injured: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, prost::Message)]
pub struct FixtureEventsResponse {
    #[prost(uint64, tag = "1")]
    pub fixture_id: u64,
    #[prost(message, repeated, tag = "2")]
    pub goal_events: Vec<GoalEvent>,
    #[prost(message, repeated, tag = "3")]
    pub card_events: Vec<CardEvent>,
    #[prost(message, repeated, tag = "4")]
    pub substitution_events: Vec<SubstitutionEvent>,
}
