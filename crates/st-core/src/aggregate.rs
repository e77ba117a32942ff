//! Session reconstruction and per-user totals.

use std::collections::{BTreeMap, HashMap};

use crate::event::{Action, Event};

/// Totals for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    /// Completed sessions, including ones synthesized for unmatched events.
    pub sessions: u64,
    /// Sum of session durations in seconds. Negative only for out-of-order input.
    pub total_seconds: i64,
}

impl UserStats {
    fn record(&mut self, duration: i64) {
        self.sessions += 1;
        self.total_seconds += duration;
    }
}

/// Timestamps of the first and last parsed events.
///
/// These follow input order, not numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub earliest: i64,
    pub latest: i64,
}

/// Aggregated session totals keyed by username.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    span: Option<Span>,
    users: BTreeMap<String, UserStats>,
}

impl SessionReport {
    /// Users in byte-lexicographic username order.
    pub fn users(&self) -> impl Iterator<Item = (&str, &UserStats)> {
        self.users.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn get(&self, username: &str) -> Option<&UserStats> {
        self.users.get(username)
    }

    pub const fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Pairs starts and ends into sessions for every user.
///
/// An `End` closes the most recent pending `Start` for the same user. An `End`
/// with nothing pending is treated as starting at the first event's timestamp,
/// and any `Start` still pending at the end is closed at the last event's
/// timestamp.
pub fn aggregate(events: &[Event]) -> SessionReport {
    let (Some(first), Some(last)) = (events.first(), events.last()) else {
        return SessionReport::default();
    };
    let span = Span {
        earliest: first.seconds,
        latest: last.seconds,
    };

    let mut users: BTreeMap<String, UserStats> = BTreeMap::new();
    let mut pending: HashMap<&str, Vec<i64>> = HashMap::new();

    for event in events {
        let username = event.username.as_str();
        match event.action {
            Action::Start => pending.entry(username).or_default().push(event.seconds),
            Action::End => {
                let start = pending
                    .get_mut(username)
                    .and_then(Vec::pop)
                    .unwrap_or_else(|| {
                        tracing::debug!(
                            user = username,
                            at = event.seconds,
                            "end without pending start, using earliest timestamp"
                        );
                        span.earliest
                    });
                users
                    .entry(username.to_string())
                    .or_default()
                    .record(event.seconds - start);
            }
        }
    }

    for (username, starts) in pending {
        if starts.is_empty() {
            continue;
        }
        tracing::debug!(
            user = username,
            count = starts.len(),
            "closing pending starts at latest timestamp"
        );
        let stats = users.entry(username.to_string()).or_default();
        for start in starts {
            stats.record(span.latest - start);
        }
    }

    tracing::debug!(users = users.len(), "aggregated sessions");
    SessionReport {
        span: Some(span),
        users,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::read_events;

    fn events(log: &str) -> Vec<Event> {
        read_events(log.as_bytes()).unwrap()
    }

    fn stats(sessions: u64, total_seconds: i64) -> UserStats {
        UserStats {
            sessions,
            total_seconds,
        }
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = aggregate(&[]);
        assert!(report.is_empty());
        assert_eq!(report.span(), None);
    }

    #[test]
    fn simple_pairs_per_user() {
        let report = aggregate(&events(
            "08:00:00 alice Start\n\
             08:30:00 alice End\n\
             09:00:00 bob Start\n\
             09:05:00 bob End\n",
        ));

        assert_eq!(report.len(), 2);
        assert_eq!(report.get("alice"), Some(&stats(1, 1800)));
        assert_eq!(report.get("bob"), Some(&stats(1, 300)));
    }

    #[test]
    fn unmatched_end_starts_at_earliest_timestamp() {
        let report = aggregate(&events(
            "08:00:00 alice End\n\
             08:10:00 alice Start\n\
             08:20:00 alice End\n",
        ));

        assert_eq!(report.get("alice"), Some(&stats(2, 600)));
    }

    #[test]
    fn unmatched_end_uses_earliest_of_whole_file() {
        let report = aggregate(&events(
            "07:00:00 bob Start\n\
             07:50:00 alice End\n\
             08:00:00 bob End\n",
        ));

        assert_eq!(report.get("alice"), Some(&stats(1, 3000)));
        assert_eq!(report.get("bob"), Some(&stats(1, 3600)));
    }

    #[test]
    fn trailing_start_closes_at_latest_timestamp() {
        let report = aggregate(&events(
            "10:00:00 carol Start\n\
             10:00:05 carol End\n\
             10:00:10 carol Start\n",
        ));

        assert_eq!(report.get("carol"), Some(&stats(2, 5)));
        assert_eq!(
            report.span(),
            Some(Span {
                earliest: 36000,
                latest: 36010
            })
        );
    }

    #[test]
    fn user_with_only_starts_is_reported() {
        let report = aggregate(&events(
            "09:00:00 dave Start\n\
             09:10:00 dave Start\n\
             09:20:00 erin Start\n\
             09:30:00 erin End\n",
        ));

        // Both of dave's starts close at 09:30:00.
        assert_eq!(report.get("dave"), Some(&stats(2, 1800 + 1200)));
        assert_eq!(report.get("erin"), Some(&stats(1, 600)));
    }

    #[test]
    fn nested_starts_pair_most_recent_first() {
        let report = aggregate(&events(
            "08:00:00 alice Start\n\
             08:10:00 alice Start\n\
             08:15:00 alice End\n\
             09:00:00 zed Start\n",
        ));

        // 08:10 pairs with 08:15 (300s); 08:00 closes at 09:00 (3600s).
        assert_eq!(report.get("alice"), Some(&stats(2, 3900)));
    }

    #[test]
    fn each_unmatched_end_counts_from_earliest() {
        let report = aggregate(&events(
            "08:00:00 bob Start\n\
             08:20:00 alice End\n\
             08:30:00 alice End\n\
             08:40:00 bob End\n",
        ));

        assert_eq!(report.get("alice"), Some(&stats(2, 1200 + 1800)));
        assert_eq!(report.get("bob"), Some(&stats(1, 2400)));
    }

    #[test]
    fn span_follows_input_order_not_value() {
        let report = aggregate(&events(
            "12:00:00 alice Start\n\
             08:00:00 bob End\n\
             10:00:00 carol Start\n",
        ));

        assert_eq!(
            report.span(),
            Some(Span {
                earliest: 43200,
                latest: 36000
            })
        );
        // alice's start closes at the last event, which is earlier in the day.
        assert_eq!(report.get("alice"), Some(&stats(1, -7200)));
        assert_eq!(report.get("bob"), Some(&stats(1, -14400)));
        assert_eq!(report.get("carol"), Some(&stats(1, 0)));
    }

    #[test]
    fn end_before_start_yields_negative_duration() {
        let report = aggregate(&events(
            "10:00:00 alice Start\n\
             09:00:00 alice End\n",
        ));

        assert_eq!(report.get("alice"), Some(&stats(1, -3600)));
    }

    #[test]
    fn users_iterate_in_byte_order() {
        let report = aggregate(&events(
            "08:00:00 bob End\n\
             08:00:00 Zoe End\n\
             08:00:00 alice End\n\
             08:00:00 _x End\n\
             08:00:00 Alice End\n",
        ));

        let names: Vec<&str> = report.users().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Alice", "Zoe", "_x", "alice", "bob"]);
    }

    #[test]
    fn every_user_with_an_event_is_reported() {
        let report = aggregate(&events(
            "01:00:00 a Start\n\
             02:00:00 b End\n\
             03:00:00 c Start\n\
             04:00:00 c End\n\
             05:00:00 a Start\n",
        ));

        assert_eq!(report.len(), 3);
        assert_eq!(report.get("a"), Some(&stats(2, 4 * 3600)));
        assert_eq!(report.get("b"), Some(&stats(1, 3600)));
        assert_eq!(report.get("c"), Some(&stats(1, 3600)));
    }
}
