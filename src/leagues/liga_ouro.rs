// src/leagues/liga_ouro.rs
//! Liga Ouro, the access division. Single-year seasons.

use super::{FetchPolicy, LeagueConfig};
use crate::params::Phase;

pub static CONFIG: LeagueConfig = LeagueConfig {
    key: "liga-ouro",
    name: "Liga Ouro",
    classification_path: "liga-ouro/liga-ouro-{season}",
    scores_path: "liga-ouro/tabela-de-jogos/",
    stats_path: "liga-ouro/estatisticas/{category}/",
    season_codes: &[
        ("2014", "19"),
        ("2015", "24"),
        ("2016", "32"),
        ("2017", "39"),
        ("2018", "44"),
        ("2019", "51"),
    ],
    // Standings page exists before the season id is published.
    extra_classification_seasons: &["2025"],
    classification_live: None,
    classification_advisory: "",
    phases: &[
        (Phase::Regular, "phase%5B%5D=1"),
        (Phase::Playoffs, "phase%5B%5D=2"),
        (Phase::Total, "phase=on&phase%5B%5D=1&phase%5B%5D=2"),
    ],
    categories: &[
        "cestinhas",
        "rebotes",
        "assistencias",
        "arremessos",
        "bolas-recuperadas",
        "tocos",
        "erros",
        "eficiencia",
        "duplos-duplos",
        "enterradas",
    ],
    venue: None,
    legacy_score_seasons: &[],
    fetch_policy: FetchPolicy::Degrade,
    unavailable_advisory: "Could not load Liga Ouro data. Check that the season is available or try again later.",
};
