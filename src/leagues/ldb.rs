// src/leagues/ldb.rs
//! Liga de Desenvolvimento de Basquete (under-22 league).

use super::{FetchPolicy, LeagueConfig};
use crate::params::Phase;

pub static CONFIG: LeagueConfig = LeagueConfig {
    key: "ldb",
    name: "LDB",
    classification_path: "ldb/temporada-{season}",
    scores_path: "ldb/tabela-de-jogos/",
    stats_path: "ldb/estatisticas/{category}/",
    season_codes: &[
        ("2011", "5"),
        ("2012", "10"),
        ("2013", "14"),
        ("2014", "21"),
        ("2015", "29"),
        ("2016", "36"),
        ("2017", "42"),
        ("2018", "48"),
        ("2019", "53"),
        ("2021", "64"),
        ("2022", "69"),
        ("2023", "78"),
    ],
    extra_classification_seasons: &[],
    // 2024 is listed so the page works once the season is added to the domain.
    classification_live: Some(&["2023", "2024"]),
    classification_advisory: "The LNB site has problems with LDB standings for this season; try another league or the 2023 season.",
    phases: &[
        (Phase::Regular, "phase%5B%5D=1"),
        (Phase::Total, "phase%5B%5D=1&phase%5B%5D=2&phase%5B%5D=3&phase%5B%5D=4"),
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
    unavailable_advisory: "Could not load LDB data from the LNB site. Try again later or use another league.",
};
