use serde::Serialize;
use twitter_client::Follower;

/// The Twitter side of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterIdentity {
    pub handle: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// The Lens side of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LensIdentity {
    pub handle: String,
}

/// A followed account matched to a Lens handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfile {
    pub twitter: TwitterIdentity,
    pub lens: LensIdentity,
    /// ENS name seen in the profile text, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ens_name: Option<String>,
}

impl ResolvedProfile {
    /// Returns `None` for an empty Lens handle.
    pub fn new(follower: &Follower, lens_handle: String, ens_name: Option<String>) -> Option<Self> {
        if lens_handle.is_empty() {
            return None;
        }
        Some(Self {
            twitter: TwitterIdentity {
                handle: follower.handle.clone(),
                display_name: follower.display_name.clone(),
                description: follower.description.clone(),
                avatar_url: follower.avatar_url.clone(),
            },
            lens: LensIdentity {
                handle: lens_handle,
            },
            ens_name,
        })
    }
}

/// What happened to one follower
#[derive(Debug, Clone)]
pub enum ResolutionOutcome {
    NoMatch,
    Matched(ResolvedProfile),
    Failed(String),
}

/// Per-run tally of unit outcomes.
///
/// `matched` always equals the number of returned profiles, and the four
/// counts add up to the number of followers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    pub matched: usize,
    pub no_match: usize,
    pub failed: usize,
    /// Units that finished without a result being collected before the deadline
    pub abandoned: usize,
}

impl ResolutionReport {
    /// Count a joined unit. Matches are taken from the sealed results instead.
    pub(crate) fn record(&mut self, outcome: &ResolutionOutcome) {
        match outcome {
            ResolutionOutcome::NoMatch => self.no_match += 1,
            ResolutionOutcome::Matched(_) => {}
            ResolutionOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub(crate) fn close(&mut self, units: usize, collected: usize) {
        self.matched = collected;
        self.abandoned = units.saturating_sub(self.matched + self.no_match + self.failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follower() -> Follower {
        Follower {
            handle: "alice".to_string(),
            display_name: "alice.lens fan".to_string(),
            description: None,
            avatar_url: Some("https://pbs.twimg.com/a.jpg".to_string()),
        }
    }

    #[test]
    fn test_empty_lens_handle_is_rejected() {
        assert!(ResolvedProfile::new(&follower(), String::new(), None).is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let profile = ResolvedProfile::new(
            &follower(),
            "alice.lens".to_string(),
            Some("alice.eth".to_string()),
        )
        .unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["twitter"]["handle"], "alice");
        assert_eq!(json["twitter"]["displayName"], "alice.lens fan");
        assert_eq!(json["twitter"]["avatarUrl"], "https://pbs.twimg.com/a.jpg");
        assert!(json["twitter"].get("description").is_none());
        assert_eq!(json["lens"]["handle"], "alice.lens");
        assert_eq!(json["ensName"], "alice.eth");
    }

    #[test]
    fn test_report_tallies_outcomes() {
        let mut report = ResolutionReport::default();
        report.record(&ResolutionOutcome::NoMatch);
        report.record(&ResolutionOutcome::Failed("boom".to_string()));
        report.record(&ResolutionOutcome::NoMatch);
        assert_eq!(report.no_match, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.matched, 0);
    }

    #[test]
    fn test_close_takes_matches_from_collected_results() {
        let mut report = ResolutionReport::default();
        let profile =
            ResolvedProfile::new(&follower(), "alice.lens".to_string(), None).unwrap();
        report.record(&ResolutionOutcome::Matched(profile));
        report.record(&ResolutionOutcome::NoMatch);

        // Five units: one no-match joined, two matches collected (one of
        // them joined, one not), two never finished.
        report.close(5, 2);

        assert_eq!(
            report,
            ResolutionReport {
                matched: 2,
                no_match: 1,
                failed: 0,
                abandoned: 2,
            }
        );
    }
}
