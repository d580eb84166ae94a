// src/leagues/nbb.rs
//! Novo Basquete Brasil, the top division. Seasons span two years (`2023-24`).

use super::{FetchPolicy, LeagueConfig, VenueParam};
use crate::params::{Phase, Venue};

pub static CONFIG: LeagueConfig = LeagueConfig {
    key: "nbb",
    name: "NBB",
    classification_path: "nbb/{season}",
    scores_path: "nbb/tabela-de-jogos/",
    stats_path: "nbb/estatisticas/{category}/",
    season_codes: &[
        ("2008-09", "1"),
        ("2009-10", "2"),
        ("2010-11", "3"),
        ("2011-12", "4"),
        ("2012-13", "8"),
        ("2013-14", "15"),
        ("2014-15", "20"),
        ("2015-16", "27"),
        ("2016-17", "34"),
        ("2017-18", "41"),
        ("2018-19", "47"),
        ("2019-20", "54"),
        ("2020-21", "59"),
        ("2021-22", "63"),
        ("2022-23", "71"),
        ("2023-24", "80"),
    ],
    extra_classification_seasons: &[],
    classification_live: None,
    classification_advisory: "",
    phases: &[
        (Phase::Regular, "phase%5B%5D=1"),
        (Phase::Playoffs, "phase%5B%5D=2"),
        (Phase::Total, "phase=on&phase%5B%5D=1&phase%5B%5D=2"),
    ],
    categories: &[
        "pontos",
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
    venue: Some(VenueParam {
        name: "wherePlaying",
        codes: &[(Venue::Both, "-1"), (Venue::Home, "1"), (Venue::Away, "2")],
    }),
    legacy_score_seasons: &["2008-09"],
    fetch_policy: FetchPolicy::Propagate,
    unavailable_advisory: "",
};
