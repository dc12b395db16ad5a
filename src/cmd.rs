use anyhow::bail;
use clap::{ArgGroup, Parser};
use serde::Serialize;

use matchday::types::{
    CompetitionRequest, FixtureRequest, FixtureSearchRequest, TeamResultRequest, TeamStatRequest,
};
use matchday::{Config, DataClients, Incomplete};

#[derive(Parser, Debug)]
#[command(name = "matchday", about = "Query the football data service")]
pub enum Cmd {
    /// Look up a team
    Team { id: u64 },
    /// Every team in a season
    SeasonTeams { season_id: u64 },
    /// Look up a fixture
    Fixture { id: u64 },
    /// Search fixtures across seasons
    FixtureSearch {
        #[arg(long = "season", required = true)]
        season_ids: Vec<u64>,
        /// RFC 3339 timestamp
        #[arg(long)]
        date_after: Option<String>,
        /// RFC 3339 timestamp
        #[arg(long)]
        date_before: Option<String>,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        sort: Option<String>,
    },
    /// Goals, cards and substitutions of a fixture
    FixtureEvents { fixture_id: u64 },
    /// Result of a single fixture
    Result { fixture_id: u64 },
    /// Results of a team, most recent first
    Results {
        team_id: u64,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        date_before: Option<String>,
        #[arg(long)]
        venue: Option<String>,
        /// Print results as they arrive instead of collecting them first
        #[arg(long)]
        follow: bool,
    },
    /// Competitions held in a country
    Competitions { country_id: u64 },
    /// Seasons of a team or a competition
    #[command(group(ArgGroup::new("owner").required(true)))]
    Seasons {
        #[arg(long, group = "owner")]
        team: Option<u64>,
        #[arg(long, group = "owner")]
        competition: Option<u64>,
        #[arg(long, default_value = "name_asc")]
        sort: String,
    },
    /// Look up a player
    Player { id: u64 },
    /// Player statistics for a fixture
    PlayerStats { fixture_id: u64 },
    /// A single statistic of a team across its recent fixtures
    TeamStats {
        team_id: u64,
        stat: String,
        #[arg(long)]
        limit: Option<u64>,
        /// Report the opponent's value instead
        #[arg(long)]
        opponent: bool,
    },
}

fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_all<T: Serialize>(outcome: Result<Vec<T>, Incomplete<T>>) -> anyhow::Result<()> {
    match outcome {
        Ok(items) => print(&items),
        Err(partial) => {
            if !partial.items.is_empty() {
                print(&partial.items)?;
                eprintln!("stream ended early after {} item(s)", partial.items.len());
            }
            Err(partial.into_error().into())
        }
    }
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let clients = DataClients::connect(&config).await?;

        match self {
            Cmd::Team { id } => print(&clients.teams.by_id(id).await?),
            Cmd::SeasonTeams { season_id } => {
                print_all(clients.teams.by_season_id(season_id).await)
            }
            Cmd::Fixture { id } => print(&clients.fixtures.by_id(id).await?),
            Cmd::FixtureSearch {
                season_ids,
                date_after,
                date_before,
                limit,
                sort,
            } => {
                let req = FixtureSearchRequest {
                    season_ids,
                    date_after,
                    date_before,
                    limit,
                    sort,
                };
                print_all(clients.fixtures.search(req).await)
            }
            Cmd::FixtureEvents { fixture_id } => {
                print(&clients.events.fixture_events(fixture_id).await?)
            }
            Cmd::Result { fixture_id } => print(&clients.results.by_id(fixture_id).await?),
            Cmd::Results {
                team_id,
                limit,
                date_before,
                venue,
                follow,
            } => {
                let req = TeamResultRequest {
                    team_id,
                    limit,
                    date_before,
                    venue,
                    ..Default::default()
                };
                if !follow {
                    return print_all(clients.results.by_team(req).await);
                }

                let mut rx = clients.results.by_team_channel(req, 16);
                while let Some(next) = rx.recv().await {
                    println!("{}", serde_json::to_string(&next?)?);
                }
                Ok(())
            }
            Cmd::Competitions { country_id } => {
                let req = CompetitionRequest {
                    country_ids: vec![country_id],
                    ..Default::default()
                };
                print_all(clients.competitions.list(req).await)
            }
            Cmd::Seasons {
                team,
                competition,
                sort,
            } => match (team, competition) {
                (Some(team_id), _) => print(&clients.seasons.by_team_id(team_id, &sort).await?),
                (None, Some(competition_id)) => {
                    print_all(clients.seasons.by_competition_id(competition_id, &sort).await)
                }
                (None, None) => bail!("one of --team or --competition is required"),
            },
            Cmd::Player { id } => print(&clients.players.by_id(id).await?),
            Cmd::PlayerStats { fixture_id } => {
                let req = FixtureRequest { fixture_id };
                print(&clients.player_stats.fixture_stats(req).await?)
            }
            Cmd::TeamStats {
                team_id,
                stat,
                limit,
                opponent,
            } => {
                let req = TeamStatRequest {
                    stat,
                    team_id,
                    limit,
                    opponent: Some(opponent),
                    ..Default::default()
                };
                print_all(clients.team_stats.stats(req).await)
            }
        }
    }
}
