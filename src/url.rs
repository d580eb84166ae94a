// src/url.rs
//! Query URL construction. Pure: same config + query, same string.

use crate::leagues::LeagueConfig;
use crate::params::{Phase, Query};

const SEASON_PARAM: &str = "season%5B%5D=";

/// Build the page URL for a validated query.
///
/// Only `LeagueConfig::*_query` produces a `Query`, so season codes and
/// phase fragments are always present; a missing entry yields an empty value.
pub fn build_url(base: &str, config: &LeagueConfig, query: &Query) -> String {
    let base = base.trim_end_matches('/');
    match query {
        Query::Classification { season } => {
            join!(base, "/", &config.classification_path.replace("{season}", season))
        }
        Query::Scores { season, phase } => {
            let code = config.season_code(season).unwrap_or_default();
            let mut url = join!(base, "/", config.scores_path, "?", SEASON_PARAM, code);
            // Total means "no phase filter" on the games page.
            if *phase != Phase::Total {
                url.push('&');
                url.push_str(config.phase_fragment(*phase).unwrap_or_default());
            }
            url
        }
        Query::Stats(q) => {
            let path = config.stats_path.replace("{category}", &q.category);
            let mut url = join!(
                base,
                "/",
                &path,
                "?aggr=",
                q.aggregation.key(),
                "&type=",
                q.subject.key(),
                "&suffered_rule=",
                if q.conceded { "1" } else { "0" },
                "&",
                SEASON_PARAM,
                config.season_code(&q.season).unwrap_or_default(),
                "&",
                config.phase_fragment(q.phase).unwrap_or_default()
            );
            if let Some((name, code)) = config.venue_code(q.venue) {
                url.push_str(&format!("&{name}={code}"));
            }
            url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leagues::LeagueKind;

    const BASE: &str = "https://lnb.com.br";

    #[test]
    fn classification_uses_season_label() {
        let cfg = LeagueKind::Ldb.config();
        let q = cfg.classification_query("2023").unwrap();
        assert_eq!(build_url(BASE, cfg, &q), "https://lnb.com.br/ldb/temporada-2023");

        let cfg = LeagueKind::Nbb.config();
        let q = cfg.classification_query("2022-23").unwrap();
        assert_eq!(build_url("https://lnb.com.br/", cfg, &q), "https://lnb.com.br/nbb/2022-23");
    }

    #[test]
    fn total_scores_omit_phase_filter() {
        let cfg = LeagueKind::LigaOuro.config();
        let q = cfg.scores_query("2019", "total").unwrap();
        assert_eq!(
            build_url(BASE, cfg, &q),
            "https://lnb.com.br/liga-ouro/tabela-de-jogos/?season%5B%5D=51"
        );
        let q = cfg.scores_query("2019", "playoffs").unwrap();
        assert_eq!(
            build_url(BASE, cfg, &q),
            "https://lnb.com.br/liga-ouro/tabela-de-jogos/?season%5B%5D=51&phase%5B%5D=2"
        );
    }
}
