// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::Operation;
use crate::leagues::LeagueKind;
use crate::params::{Aggregation, StatsRequest, Subject, Venue};

/// Parameter form. Every choice comes from the current league's domains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub league: LeagueKind,
    pub operation: Operation,
    pub season: String,
    pub phase: String,
    pub category: String,
    pub aggregation: String,
    pub subject: String,
    pub venue: String,
    pub conceded: bool,
}

impl Default for FormState {
    fn default() -> Self {
        let mut f = Self {
            league: LeagueKind::default(),
            operation: Operation::Classification,
            season: s!(),
            phase: s!(),
            category: s!(),
            aggregation: s!(Aggregation::default().key()),
            subject: s!(Subject::default().key()),
            venue: s!(Venue::default().key()),
            conceded: false,
        };
        f.reset_choices();
        f
    }
}

impl FormState {
    pub fn seasons(&self) -> Vec<&'static str> {
        self.league.config().seasons(self.operation)
    }

    /// League change: every league-specific choice goes back to its default.
    pub fn set_league(&mut self, league: LeagueKind) {
        if league == self.league { return; }
        self.league = league;
        self.reset_choices();
    }

    /// Operation change keeps the season when it is still legal.
    pub fn set_operation(&mut self, op: Operation) {
        self.operation = op;
        if !self.seasons().contains(&self.season.as_str()) {
            self.season = self.latest_season();
        }
    }

    fn latest_season(&self) -> String {
        self.seasons().last().map(|s| s!(*s)).unwrap_or_default()
    }

    fn reset_choices(&mut self) {
        let cfg = self.league.config();
        self.season = self.latest_season();
        self.phase = cfg.phase_keys().first().map(|p| s!(*p)).unwrap_or_default();
        self.category = cfg.categories().first().map(|c| s!(*c)).unwrap_or_default();
        self.venue = s!(Venue::default().key());
    }

    pub fn stats_request(&self) -> StatsRequest {
        StatsRequest::new(&self.season, &self.phase, &self.category)
            .aggregation(&self.aggregation)
            .subject(&self.subject)
            .venue(&self.venue)
            .conceded(self.conceded)
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,
    /// Copy button includes the header line.
    pub copy_headers: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self { window_w: WINDOW_W, window_h: WINDOW_H, copy_headers: true }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub form: FormState,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_league_domains() {
        let f = FormState::default();
        assert_eq!(f.league, LeagueKind::Nbb);
        assert_eq!(f.season, "2023-24");
        assert_eq!(f.phase, "regular");
        assert_eq!(f.category, "pontos");
    }

    #[test]
    fn league_switch_resets_choices() {
        let mut f = FormState::default();
        f.set_league(LeagueKind::Ldb);
        assert_eq!(f.season, "2023");
        assert_eq!(f.category, "cestinhas");

        f.set_league(LeagueKind::LigaOuro);
        assert_eq!(f.season, "2025");
        f.set_operation(Operation::Scores);
        assert_eq!(f.season, "2019");
    }

    #[test]
    fn form_builds_stats_request() {
        let mut f = FormState::default();
        f.set_operation(Operation::Stats);
        f.conceded = true;
        f.subject = s!("teams");
        let r = f.stats_request();
        assert_eq!(r.season, "2023-24");
        assert_eq!(r.conceded, "true");
        assert_eq!(r.subject, "teams");
        assert!(LeagueKind::Nbb.config().stats_query(&r).is_ok());
    }
}
