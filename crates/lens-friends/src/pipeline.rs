//! Per-follower Lens handle resolution
//!
//! Every follower is resolved in its own task. Text fields are checked for a
//! `.lens` handle first; only when none is found does an `.eth` name go
//! through ENS and the Lens registry. All tasks share one deadline measured
//! from the start of the run. When it passes, the results collected so far
//! are sealed and returned, and any task still running is left to finish on
//! its own without touching them.

use std::sync::Arc;
use std::time::Duration;

use handle_parser::{first_in, HandleSuffix};
use lens_chain_resolver::{resolve_alias_to_lens_handle, NameServiceProvider, RegistryProvider};
use tokio::task::JoinSet;
use tokio::time::{sleep_until, timeout_at, Instant};
use tracing::{debug, info, warn};
use twitter_client::Follower;

use crate::aggregator::ResultAggregator;
use crate::types::{ResolutionOutcome, ResolutionReport, ResolvedProfile};

/// Resolve every follower to a Lens handle where possible.
///
/// Order of the returned profiles is unspecified.
pub async fn resolve_followers(
    followers: Vec<Follower>,
    name_service: Arc<dyn NameServiceProvider>,
    registry: Arc<dyn RegistryProvider>,
    deadline: Duration,
) -> Vec<ResolvedProfile> {
    resolve_followers_with_report(followers, name_service, registry, deadline)
        .await
        .0
}

/// Same as [`resolve_followers`], also returning a tally of unit outcomes
pub async fn resolve_followers_with_report(
    followers: Vec<Follower>,
    name_service: Arc<dyn NameServiceProvider>,
    registry: Arc<dyn RegistryProvider>,
    deadline: Duration,
) -> (Vec<ResolvedProfile>, ResolutionReport) {
    let deadline = Instant::now() + deadline;
    let total = followers.len();
    let aggregator = Arc::new(ResultAggregator::new());
    let mut report = ResolutionReport::default();

    let mut units = JoinSet::new();
    for follower in followers {
        let name_service = name_service.clone();
        let registry = registry.clone();
        let aggregator = aggregator.clone();

        units.spawn(async move {
            let unit = resolve_follower(&follower, name_service.as_ref(), registry.as_ref());
            // Elapsed: abandoned at the deadline
            let outcome = timeout_at(deadline, unit).await.ok()?;

            if let ResolutionOutcome::Matched(profile) = &outcome {
                if aggregator.append(profile.clone()) {
                    info!(
                        twitter = %follower.handle,
                        lens = %profile.lens.handle,
                        "Found @{} => {}",
                        follower.handle,
                        profile.lens.handle
                    );
                }
            }

            Some((follower.handle, outcome))
        });
    }

    let timer = sleep_until(deadline);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            joined = units.join_next() => match joined {
                None => break,
                Some(Ok(Some((handle, outcome)))) => {
                    if let ResolutionOutcome::Failed(reason) = &outcome {
                        warn!(twitter = %handle, error = %reason, "Follower resolution failed");
                    }
                    report.record(&outcome);
                }
                // Timed out inside the unit; counted as abandoned on close
                Some(Ok(None)) => {}
                Some(Err(e)) => {
                    warn!(error = %e, "Follower resolution task did not complete");
                    report.failed += 1;
                }
            },
            _ = &mut timer => {
                debug!(pending = units.len(), "Resolution deadline reached");
                break;
            }
        }
    }

    let profiles = aggregator.seal();
    report.close(total, profiles.len());
    units.detach_all();

    info!(
        matched = report.matched,
        no_match = report.no_match,
        failed = report.failed,
        abandoned = report.abandoned,
        "Follower resolution finished"
    );

    (profiles, report)
}

/// Resolve a single follower.
///
/// A `.lens` handle in the display name or bio wins outright. Otherwise an
/// `.eth` name, if present, is looked up on chain.
pub async fn resolve_follower(
    follower: &Follower,
    name_service: &dyn NameServiceProvider,
    registry: &dyn RegistryProvider,
) -> ResolutionOutcome {
    let fields = [
        Some(follower.display_name.as_str()),
        follower.description.as_deref(),
    ];

    let direct = first_in(fields, HandleSuffix::Lens);
    let ens_name = first_in(fields, HandleSuffix::Ens);

    let lens_handle = match (direct, ens_name.as_deref()) {
        (Some(handle), _) => Some(handle),
        (None, Some(alias)) => {
            match resolve_alias_to_lens_handle(alias, name_service, registry).await {
                Ok(handle) => handle,
                Err(e) => return ResolutionOutcome::Failed(format!("{alias}: {e}")),
            }
        }
        (None, None) => None,
    };

    match lens_handle.and_then(|handle| ResolvedProfile::new(follower, handle, ens_name)) {
        Some(profile) => ResolutionOutcome::Matched(profile),
        None => ResolutionOutcome::NoMatch,
    }
}
