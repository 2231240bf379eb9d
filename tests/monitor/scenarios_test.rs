use chrono::{DateTime, TimeDelta, Utc};

use site_watch::services::monitor::{AlertKind, Availability, MonitorEngine, TickReport};
use site_watch::services::probe::ProbeResult;

use crate::common::{
    at_minute, at_secs, down, engine_with, RecordingNotifier, ScriptedProber,
};

// =============================================================================
// END-TO-END SCENARIOS ON SIMULATED TIME
// =============================================================================

/// Step the engine every tick and keep the reports with their timestamps
async fn collect(
    engine: &mut MonitorEngine,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<(DateTime<Utc>, TickReport)> {
    let tick = TimeDelta::from_std(engine.intervals().tick).unwrap();
    let mut reports = Vec::new();
    let mut now = from;
    while now < to {
        reports.push((now, engine.step(now).await));
        now += tick;
    }
    reports
}

fn attempts_of(
    reports: &[(DateTime<Utc>, TickReport)],
    kind: AlertKind,
) -> Vec<(DateTime<Utc>, bool)> {
    reports
        .iter()
        .flat_map(|(at, report)| {
            report
                .notifications
                .iter()
                .filter(move |n| n.kind == kind)
                .map(move |n| (*at, n.sent))
        })
        .collect()
}

#[tokio::test]
async fn scenario_outage_between_two_healthy_periods() {
    let prober = ScriptedProber::new(vec![
        ProbeResult::Up,
        ProbeResult::Up,
        down(),
        down(),
        ProbeResult::Up,
    ]);
    let notifier = RecordingNotifier::new();
    let mut engine = engine_with(prober.clone(), notifier.clone());

    let reports = collect(&mut engine, at_minute(0), at_minute(20) + TimeDelta::seconds(10)).await;

    let probe_times: Vec<_> = reports
        .iter()
        .filter(|(_, r)| r.probe.is_some())
        .map(|(at, _)| *at)
        .collect();
    assert_eq!(
        probe_times,
        vec![at_minute(0), at_minute(5), at_minute(10), at_minute(15), at_minute(20)]
    );

    // One burst: every minute from 10 through 19.
    let alerts = attempts_of(&reports, AlertKind::DownAlert);
    let expected: Vec<_> = (10..20).map(|m| (at_minute(m), true)).collect();
    assert_eq!(alerts, expected);

    let recoveries = attempts_of(&reports, AlertKind::Recovery);
    assert_eq!(recoveries, vec![(at_minute(20), true)]);

    assert_eq!(engine.state().availability(), Availability::Up);
    assert_eq!(notifier.attempts().len(), 11);
}

#[tokio::test]
async fn scenario_first_probe_down_alerts_on_first_tick() {
    let prober = ScriptedProber::always(down());
    let notifier = RecordingNotifier::new();
    let mut engine = engine_with(prober, notifier.clone());

    let report = engine.step(at_secs(0)).await;

    assert!(report.probe.is_some());
    assert_eq!(report.notifications.len(), 1);
    assert_eq!(report.notifications[0].kind, AlertKind::DownAlert);
    assert!(report.notifications[0].sent);
    assert_eq!(notifier.delivered().len(), 1);
}

#[tokio::test]
async fn scenario_three_minute_outage_sends_three_alerts() {
    let prober = ScriptedProber::always(down());
    let notifier = RecordingNotifier::new();
    let mut engine = engine_with(prober, notifier.clone());

    let reports = collect(&mut engine, at_minute(0), at_minute(3)).await;

    let alerts = attempts_of(&reports, AlertKind::DownAlert);
    assert_eq!(
        alerts,
        vec![(at_minute(0), true), (at_minute(1), true), (at_minute(2), true)]
    );
    assert_eq!(engine.state().alerts_sent, 3);
}

#[tokio::test]
async fn scenario_failed_alert_retried_on_next_tick() {
    let prober = ScriptedProber::always(down());
    let notifier = RecordingNotifier::failing_once();
    let mut engine = engine_with(prober, notifier.clone());

    let reports = collect(&mut engine, at_secs(0), at_secs(60)).await;

    let alerts = attempts_of(&reports, AlertKind::DownAlert);
    assert_eq!(alerts, vec![(at_secs(0), false), (at_secs(10), true)]);
    assert_eq!(notifier.delivered().len(), 1);
    assert_eq!(engine.state().last_email_at, Some(at_secs(10)));

    // The cadence now runs from the successful send.
    let next = engine.step(at_secs(70)).await;
    assert_eq!(next.notifications.len(), 1);
}
