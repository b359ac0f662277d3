//! Fetch lifecycle of the trending page.

use crate::model::VideoSummary;

/// Lifecycle stage of the fetch-and-render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing requested yet
    #[default]
    Initial,
    /// A request is on its way
    InProgress,
    /// The last applied response carried videos
    Success,
    /// The last applied response failed, whatever the cause
    Failure,
}

/// Identifies one fetch. Tokens grow with every fetch started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// What to do with a response that belongs to an older fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Apply every response as it arrives; the last one to land wins
    #[default]
    LastWriteWins,
    /// Only the most recently started fetch may change the state
    DiscardStale,
}

/// What the page body shows for the current state
#[derive(Debug, PartialEq, Eq)]
pub enum Body<'a> {
    Empty,
    Loading,
    List(&'a [VideoSummary]),
    Failure,
}

#[derive(Debug, Default)]
pub struct ViewState {
    status: Status,
    videos: Vec<VideoSummary>,
    last_issued: u64,
    policy: ResponsePolicy,
}

impl ViewState {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn videos(&self) -> &[VideoSummary] {
        &self.videos
    }

    /// Enters `InProgress` and hands out the token of the new fetch
    pub fn start_fetch(&mut self) -> RequestToken {
        self.last_issued += 1;
        self.status = Status::InProgress;
        RequestToken(self.last_issued)
    }

    /// Applies the outcome of a fetch. Returns false when the policy dropped it.
    pub fn resolve<E>(&mut self, token: RequestToken, outcome: Result<Vec<VideoSummary>, E>) -> bool {
        if self.is_stale(token) && self.policy == ResponsePolicy::DiscardStale {
            return false;
        }
        match outcome {
            Ok(videos) => {
                self.videos = videos;
                self.status = Status::Success;
            }
            Err(_) => {
                self.videos.clear();
                self.status = Status::Failure;
            }
        }
        true
    }

    /// True when a newer fetch was started after the one owning `token`
    pub fn is_stale(&self, token: RequestToken) -> bool {
        token.0 != self.last_issued
    }

    pub fn body(&self) -> Body<'_> {
        match self.status {
            Status::Initial => Body::Empty,
            Status::InProgress => Body::Loading,
            Status::Success => Body::List(&self.videos),
            Status::Failure => Body::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewCount;

    fn video(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: String::new(),
            thumbnail_url: String::new(),
            view_count: ViewCount::Number(0),
            published_at: String::new(),
            channel_name: String::new(),
            channel_profile_image_url: String::new(),
        }
    }

    fn ok(ids: &[&str]) -> Result<Vec<VideoSummary>, ()> {
        Ok(ids.iter().map(|id| video(id)).collect())
    }

    #[test]
    fn starts_empty() {
        let state = ViewState::default();
        assert_eq!(state.status(), Status::Initial);
        assert_eq!(state.body(), Body::Empty);
    }

    #[test]
    fn start_fetch_shows_loader() {
        let mut state = ViewState::default();
        state.start_fetch();
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.body(), Body::Loading);
    }

    #[test]
    fn success_lists_videos_in_order() {
        let mut state = ViewState::default();
        let token = state.start_fetch();
        assert!(state.resolve(token, ok(&["b", "a", "c"])));

        assert_eq!(state.status(), Status::Success);
        match state.body() {
            Body::List(videos) => {
                let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
                assert_eq!(ids, ["b", "a", "c"]);
            }
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn failure_drops_previous_videos() {
        let mut state = ViewState::default();
        let first = state.start_fetch();
        state.resolve(first, ok(&["a"]));

        let second = state.start_fetch();
        state.resolve(second, Err::<Vec<VideoSummary>, _>("boom"));

        assert_eq!(state.status(), Status::Failure);
        assert!(state.videos().is_empty());
        assert_eq!(state.body(), Body::Failure);
    }

    #[test]
    fn tokens_increase() {
        let mut state = ViewState::default();
        let a = state.start_fetch();
        let b = state.start_fetch();
        assert!(b > a);
        assert!(state.is_stale(a));
        assert!(!state.is_stale(b));
    }

    #[test]
    fn last_write_wins_applies_late_stale_response() {
        let mut state = ViewState::new(ResponsePolicy::LastWriteWins);
        let old = state.start_fetch();
        let new = state.start_fetch();

        state.resolve(new, ok(&["fresh"]));
        assert!(state.resolve(old, Err::<Vec<VideoSummary>, _>(())));

        assert_eq!(state.status(), Status::Failure);
    }

    #[test]
    fn discard_stale_ignores_older_fetches() {
        let mut state = ViewState::new(ResponsePolicy::DiscardStale);
        let old = state.start_fetch();
        let new = state.start_fetch();

        assert!(!state.resolve(old, ok(&["stale"])));
        assert_eq!(state.status(), Status::InProgress);

        assert!(state.resolve(new, ok(&["fresh"])));
        assert_eq!(state.videos()[0].id, "fresh");
    }
}
